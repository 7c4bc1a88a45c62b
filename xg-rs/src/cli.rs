//! Command-line front end.
//!
//! Usage:
//!   xg [-i <input>] [--seed <n>] [-v...] [--log-level <filter>] <program>
//!   xg --list
//!
//! Without `-i` the input is read from standard input, with trailing CR/LF
//! characters removed.  The result is printed on standard output.  A program
//! that fails to parse exits with 64, one that calls an unknown builtin
//! exits with 65.

use std::ffi::{OsStr, OsString};
use std::io::{self, Read, Write};

use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::error::XgError;
use crate::registry::BUILTINS;
use crate::tokenizer::decode_lossy;

// ── Public types ──────────────────────────────────────────────────────────────

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "xg", version, about = "Robust(?) string manipulation language")]
pub struct CliArgs {
    /// Input string; read from standard input when absent or empty.
    #[arg(short, long, value_parser = clap::value_parser!(OsString))]
    pub input: Option<OsString>,

    /// Seed for the random builtins (shuffle, juggle, interject, ransomize).
    #[arg(long, env = "XG_SEED")]
    pub seed: Option<u64>,

    /// More log output on stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log filter directive, e.g. `debug` or `xenoglossia::interp=trace`.
    #[arg(long, env = "XG_LOG")]
    pub log_level: Option<String>,

    /// Print the available builtins and exit.
    #[arg(long)]
    pub list: bool,

    /// The program to run, e.g. `burst ',' collapse '-'`.
    #[arg(
        required_unless_present = "list",
        value_parser = clap::value_parser!(OsString)
    )]
    pub program: Option<OsString>,
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args_os()`, exiting with a usage message on error.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Parse an argument list whose first element is the binary name (exposed
/// for testing).
pub fn parse_argv<I, T>(argv: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(argv)
}

// ── Running ───────────────────────────────────────────────────────────────────

/// Obtain the input text: the `-i` value if non-empty, otherwise all of
/// `stdin` minus trailing line terminators.  Invalid UTF-8 is dropped.
pub fn read_input(args: &CliArgs, mut stdin: impl Read) -> io::Result<String> {
    if let Some(input) = args.input.as_deref().filter(|s| !s.is_empty()) {
        return Ok(decode_lossy(input.as_encoded_bytes()));
    }
    let mut raw = Vec::new();
    stdin.read_to_end(&mut raw)?;
    let text = decode_lossy(&raw);
    Ok(text.trim_end_matches(['\r', '\n']).to_owned())
}

/// Write the builtin catalogue, one `name<TAB>coercion<TAB>summary` line each.
pub fn list_builtins(mut out: impl Write) -> io::Result<()> {
    for spec in BUILTINS {
        writeln!(out, "{}\t{}\t{}", spec.name, spec.coercion_kind(), spec.summary)?;
    }
    Ok(())
}

/// Run the CLI against the given streams and return the exit status.
pub fn run_cli(
    args: &CliArgs,
    config: &Config,
    stdin: impl Read,
    mut stdout: impl Write,
    mut stderr: impl Write,
) -> u8 {
    // Writes to stderr are best effort: there is nowhere left to report to.
    if args.list {
        return match list_builtins(&mut stdout) {
            Ok(()) => 0,
            Err(e) => {
                let _ = writeln!(stderr, "xg: {e}");
                1
            }
        };
    }

    let program = args.program.as_deref().unwrap_or(OsStr::new(""));
    let input = match read_input(args, stdin) {
        Ok(input) => input,
        Err(e) => {
            let _ = writeln!(stderr, "xg: cannot read input: {e}");
            return 1;
        }
    };

    let mut interp = config.interpreter();
    match interp.run_bytes(&input, program.as_encoded_bytes()) {
        Ok(result) => match writeln!(stdout, "{result}") {
            Ok(()) => 0,
            Err(e) => {
                let _ = writeln!(stderr, "xg: {e}");
                1
            }
        },
        Err(err) => {
            let _ = match &err {
                XgError::Parse(e) if e.snippet.is_empty() => {
                    writeln!(stderr, "Unable to parse provided program: {e}")
                }
                XgError::Parse(e) => writeln!(
                    stderr,
                    "Unable to parse provided program: {e}, near {:?}",
                    e.snippet
                ),
                XgError::Name(e) => writeln!(stderr, "Unknown function called: {e}"),
            };
            err.exit_code()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
