//! Runtime configuration.
//!
//! Resolved once from the parsed command line, which already folds in the
//! environment:
//!
//! | Setting | Flag | Environment | Default |
//! |---------|------|-------------|---------|
//! | RNG seed | `--seed` | `XG_SEED` | thread-local generator |
//! | Log filter | `--log-level` | `XG_LOG` | from `-v` count |

use crate::cli::CliArgs;
use crate::interp::Interpreter;

/// Settings for one `xg` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl Config {
    pub fn from_args(args: &CliArgs) -> Self {
        let log_filter = match args.log_level.as_deref().map(str::trim) {
            Some(filter) if !filter.is_empty() => filter.to_owned(),
            _ => verbosity_filter(args.verbose).to_owned(),
        };
        Self {
            seed: args.seed,
            log_filter,
        }
    }

    /// A fresh interpreter honoring the configured seed.
    pub fn interpreter(&self) -> Interpreter {
        match self.seed {
            Some(seed) => Interpreter::with_seed(seed),
            None => Interpreter::new(),
        }
    }
}

/// Log level for a given number of `-v` flags.
fn verbosity_filter(count: u8) -> &'static str {
    match count {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
