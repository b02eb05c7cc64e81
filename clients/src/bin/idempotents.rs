//! `idempotents` — Prints every idempotent 2x2 matrix over Z/12Z.
//!
//! **Output** (stdout):
//! ```text
//! (i, j, k, q)  satisfies the condition e=e^2.
//! ...
//! Solutions: <count>
//! # of incorrects: <count>
//! ```
//!
//! **Usage:**
//! ```
//! idempotents [--quiet] [-v...]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use idempotents::{search, Mode, TextReporter};

/// Enumerate the idempotent matrices of M₂(Z/12Z).
#[derive(Parser)]
#[command(
    name = "idempotents",
    about = "Enumerate the idempotent 2x2 matrices over Z/12Z"
)]
struct Args {
    /// Print only the two summary lines.
    #[arg(long, short)]
    quiet: bool,

    /// Increase diagnostic output on stderr (-v debug, -vv trace).
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    idempotents_clients::init_logging(args.verbose);

    let mode = if args.quiet { Mode::Quiet } else { Mode::Full };
    let mut reporter = TextReporter::with_mode(BufWriter::new(io::stdout().lock()), mode);

    let tally = search(&mut reporter).context("Failed to write the report to stdout")?;
    tracing::debug!(total = tally.total(), "done");
    Ok(())
}
