//! Greeter library - interactive greeting and a fixed-sequence sum
//!
//! This crate backs the `greeter` binary. The interesting parts live here so
//! they can be exercised with in-memory buffers instead of a live terminal:
//!
//! - [`Greeter::greeting`] builds the greeting line for a name. It is a pure
//!   function of its input.
//! - [`Greeter::sum_report`] formats the fixed sequence `[1, 2, 3, 4, 5]`
//!   together with its arithmetic sum.
//! - [`Greeter::run`] is the entry routine: it reads one line of input,
//!   writes the greeting, then writes the sum report. It is generic over
//!   `BufRead`/`Write`, so the binary hands it locked stdin/stdout while
//!   tests hand it cursors and byte vectors.
//!
//! The binary keeps stdout reserved for the two output lines; the prompt and
//! all log output go to stderr. See `main.rs` and the [`logging`] module.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub mod config;
pub mod logging;

// Re-export the main types for easy access
pub use config::Config;
pub use logging::init_logging;

/// The fixed sequence summed on every invocation.
pub const NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// Interactive greeter: prompts for a name, greets, and reports a sum.
///
/// Holds the loaded [`Config`]; all methods borrow `self` immutably and the
/// whole flow is strictly sequential with a single blocking read.
#[derive(Debug, Clone)]
pub struct Greeter {
    config: Config,
}

impl Greeter {
    /// Create a greeter with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a greeter with a previously loaded configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Build the greeting line for `name`.
    ///
    /// Pure: fixed prefix, the name verbatim (the empty string is fine),
    /// fixed suffix. No side effects.
    pub fn greeting(&self, name: &str) -> String {
        format!("Hello, {}!", name)
    }

    /// Format the fixed sequence and its sum, e.g.
    /// `Sum of [1, 2, 3, 4, 5] = 15`.
    pub fn sum_report(&self) -> String {
        let total: i64 = NUMBERS.iter().sum();
        format!("Sum of {:?} = {}", NUMBERS, total)
    }

    /// Write the configured prompt to `out` and flush it.
    ///
    /// The binary points this at stderr so stdout stays exactly the two
    /// output lines. Does nothing when the prompt is disabled in config.
    pub fn write_prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if !self.config.prompt.enabled {
            return Ok(());
        }
        write!(out, "{}", self.config.prompt.text)?;
        out.flush()?;
        Ok(())
    }

    /// Entry routine: read one line from `input`, then write the greeting
    /// and the sum report to `output`.
    ///
    /// This is the program's only blocking point. If `input` reaches
    /// end-of-stream before delivering a line, an error is returned and
    /// nothing is written.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let name = read_name(&mut input)?;
        debug!("Read name ({} bytes)", name.len());

        writeln!(output, "{}", self.greeting(&name))?;
        writeln!(output, "{}", self.sum_report())?;
        output.flush()?;

        info!("Greeted one user");
        Ok(())
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a single line and strip the trailing `\n` or `\r\n`.
///
/// Everything else is kept verbatim, so an empty line yields an empty name.
fn read_name<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        anyhow::bail!("input stream closed before a name was entered");
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
