//! Program execution.
//!
//! An [`Execution`] threads one [`Value`] through a program, one call at a
//! time:
//!
//! ```text
//! Ready(input) ──▶ Running { value, next } ──▶ Done(text)
//!                          │
//!                          └──▶ Failed(NameError)
//! ```
//!
//! Each step resolves the next call against the registry, applies the
//! builtin's coercion adapter, and replaces the current value with the
//! result.  The first unknown name aborts the run.  When the calls run out
//! the value is flattened to text, whatever its shape.
//!
//! The [`Interpreter`] owns the random source that `shuffle`, `juggle`,
//! `interject` and `ransomize` draw from; tests inject a seeded one.

use std::fmt;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::builtins::Args;
use crate::error::{NameError, XgError};
use crate::registry;
use crate::tokenizer::{tokenize, tokenize_bytes, Call};
use crate::value::Value;

// ── Execution state machine ───────────────────────────────────────────────────

/// Where an [`Execution`] currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Not started; holds the input.
    Ready(Value),
    /// `next` is the index of the call to apply to `value`.
    Running { value: Value, next: usize },
    /// All calls applied; holds the flattened output.
    Done(String),
    /// A call named an unknown builtin.
    Failed(NameError),
}

impl Default for State {
    fn default() -> Self {
        State::Ready(Value::default())
    }
}

impl State {
    pub fn is_finished(&self) -> bool {
        matches!(self, State::Done(_) | State::Failed(_))
    }
}

/// One pass of a program over one input.
#[derive(Debug)]
pub struct Execution<'p> {
    program: &'p [Call],
    state: State,
}

impl<'p> Execution<'p> {
    pub fn new(input: impl Into<Value>, program: &'p [Call]) -> Self {
        Self {
            program,
            state: State::Ready(input.into()),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Make one state transition.  Finished executions stay where they are.
    pub fn step(&mut self, rng: &mut dyn RngCore) {
        if self.state.is_finished() {
            return;
        }
        let state = std::mem::take(&mut self.state);
        self.state = transition(state, self.program, rng);
    }

    /// Run to completion.
    pub fn finish(self, rng: &mut dyn RngCore) -> Result<String, NameError> {
        let mut state = self.state;
        loop {
            state = match state {
                State::Done(out) => return Ok(out),
                State::Failed(err) => return Err(err),
                active => transition(active, self.program, rng),
            };
        }
    }
}

fn transition(state: State, program: &[Call], rng: &mut dyn RngCore) -> State {
    match state {
        State::Ready(value) => State::Running { value, next: 0 },
        State::Running { value, next } => match program.get(next) {
            None => State::Done(value.into_text()),
            Some(call) => match apply_call(call, value, rng) {
                Ok(value) => State::Running { value, next: next + 1 },
                Err(err) => State::Failed(err),
            },
        },
        finished => finished,
    }
}

fn apply_call(call: &Call, value: Value, rng: &mut dyn RngCore) -> Result<Value, NameError> {
    let Some(spec) = registry::lookup(&call.name) else {
        debug!(name = %call.name, "unknown builtin");
        return Err(NameError {
            name: call.name.clone(),
        });
    };
    let from = value.shape_name();
    let out = spec.adapter.apply(value, &Args::new(&call.arguments), rng);
    debug!(
        call = spec.name,
        args = call.arguments.len(),
        coercion = %spec.coercion_kind(),
        from,
        to = out.shape_name(),
        "applied builtin"
    );
    Ok(out)
}

// ── Interpreter ───────────────────────────────────────────────────────────────

/// Runs programs, owning the random source used by the random builtins.
pub struct Interpreter {
    rng: Box<dyn RngCore>,
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter").finish_non_exhaustive()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// An interpreter drawing from the thread-local generator.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }

    /// An interpreter whose random builtins are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: impl RngCore + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// Apply an already-tokenized program to `input`.
    ///
    /// An empty program returns the input unchanged.
    pub fn execute(&mut self, input: impl Into<Value>, program: &[Call]) -> Result<String, NameError> {
        Execution::new(input, program).finish(self.rng.as_mut())
    }

    /// Tokenize `program` and apply it to `input`.
    pub fn run(&mut self, input: &str, program: &str) -> Result<String, XgError> {
        let calls = tokenize(program)?;
        Ok(self.execute(input, &calls)?)
    }

    /// As [`run`](Self::run), for program text that may not be valid UTF-8.
    pub fn run_bytes(&mut self, input: &str, program: &[u8]) -> Result<String, XgError> {
        let calls = tokenize_bytes(program)?;
        Ok(self.execute(input, &calls)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
