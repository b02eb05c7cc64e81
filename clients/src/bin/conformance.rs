//! `idempotents-conformance` — Checks a full search against its known properties.
//!
//! Prints the search tally beside the expected counts, then one row per
//! check with its expected and observed values.
//!
//! **Usage:**
//! ```
//! idempotents-conformance [-v...]
//! ```
//!
//! Exits non-zero if any check's observed value differs from the expected one.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use idempotents::conformance::{run_all, EXPECTED_SOLUTIONS};
use idempotents::SEARCH_SPACE;

/// Run the idempotent search conformance suite.
#[derive(Parser)]
#[command(
    name = "idempotents-conformance",
    about = "Check the idempotent search against its known properties"
)]
struct Args {
    /// Increase diagnostic output on stderr (-v debug, -vv trace).
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    idempotents_clients::init_logging(args.verbose);

    let conformance = run_all().context("Failed to run the conformance suite")?;
    let tally = conformance.tally;

    println!("{:<16}{:>10}{:>10}", "", "expected", "observed");
    println!("{:<16}{:>10}{:>10}", "solutions", EXPECTED_SOLUTIONS, tally.satisfying);
    println!(
        "{:<16}{:>10}{:>10}",
        "non-solutions",
        SEARCH_SPACE - EXPECTED_SOLUTIONS,
        tally.non_satisfying
    );
    println!("{:<16}{:>10}{:>10}", "tuples", SEARCH_SPACE, tally.total());
    println!();

    for check in &conformance.checks {
        let status = if check.passed() { "ok" } else { "FAIL" };
        println!(
            "{:<26}{:>30}{:>30}  {}",
            check.name, check.expected, check.observed, status
        );
        for example in &check.counterexamples {
            println!("    {example}");
        }
    }

    let total = conformance.checks.len();
    let failed = conformance.failures().count();
    println!();
    println!("{}/{total} checks passed.", total - failed);

    if failed > 0 {
        eprintln!("Conformance failed: {failed} check(s) did not match.");
        process::exit(1);
    }
    Ok(())
}
