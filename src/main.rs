//! Greeter CLI - prompt for a name, greet, and sum a fixed sequence
//!
//! This is the entry point for the `greeter` command-line interface. One
//! invocation performs a single sequential pass:
//!
//! 1. Prompt for a name (prompt goes to stderr).
//! 2. Read one line from stdin — the program's only blocking point.
//! 3. Print the greeting to stdout.
//! 4. Print the sum of the fixed sequence `[1, 2, 3, 4, 5]` to stdout.
//!
//! stdout carries exactly those two lines, so the output is pipe-friendly.
//!
//! ## Configuration
//!
//! The prompt can be customized via a `config.yaml` file in the current
//! directory, or an alternate file passed with `--config`.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Control logging verbosity (e.g., `info`, `debug`, `trace`)
//!
//! ## Examples
//!
//! ```bash
//! # Interactive use
//! greeter
//!
//! # Piped input
//! echo "Ada" | greeter
//!
//! # With an alternate config file
//! greeter --config /etc/greeter.yaml
//! ```

use anyhow::Result;
use clap::Parser;
use greeter::{init_logging, Config, Greeter};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(version, about = "Prompt for a name, print a greeting, and sum a fixed sequence", long_about = None)]
struct Cli {
    /// Path to an alternate config file (defaults to ./config.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging(Some("warn"));

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    info!("Greeter starting");

    let greeter = Greeter::with_config(config);

    let stderr = std::io::stderr();
    greeter.write_prompt(&mut stderr.lock())?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    greeter.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
