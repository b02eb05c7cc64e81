//! Self-check of a full search against what is known about M₂(Z/12Z).
//!
//! Every [`Check`] pairs an expected value with the value a fresh run
//! actually produced. A check passes when the two render identically.
//!
//! | Check | Expected |
//! |-------|----------|
//! | `tally/total` | 20736 tuples evaluated |
//! | `tally/solutions` | 364 idempotents |
//! | `tally/reported` | one reported match per counted solution |
//! | `fixtures/known` | no misclassified fixture |
//! | `checker/matrix-agreement` | congruences agree with `square() == self` |
//! | `checker/complement` | `I - M` idempotent for every solution |
//! | `output/determinism` | two renders byte-identical |
//! | `output/format` | no malformed line |
//!
//! ```
//! use idempotents::conformance::run_all;
//!
//! let conformance = run_all()?;
//! assert!(conformance.passed());
//! assert_eq!(conformance.tally.satisfying, 364);
//! # Ok::<(), idempotents::Error>(())
//! ```

use core::fmt::Display;

use crate::check::{self, Verdict};
use crate::enumerate::{Tuples, SEARCH_SPACE};
use crate::error::Result;
use crate::matrix::Matrix2;
use crate::report::{CollectReporter, Mode, MATCH_SUFFIX};
use crate::search::{render, search};
use crate::tally::Tally;

/// Number of idempotent matrices in M₂(Z/12Z).
///
/// Z/12 ≅ Z/4 × Z/3, and the count is multiplicative: 26 over Z/4 times 14
/// over Z/3.
pub const EXPECTED_SOLUTIONS: usize = 364;

/// One property of a run: what it should be against what it was.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Check {
    /// Stable `area/property` name.
    pub name: &'static str,
    /// Rendered expected value.
    pub expected: String,
    /// Rendered observed value.
    pub observed: String,
    /// Offending tuples or lines, empty when the check passes.
    pub counterexamples: Vec<String>,
}

impl Check {
    fn compare(name: &'static str, expected: impl Display, observed: impl Display) -> Self {
        Self {
            name,
            expected: expected.to_string(),
            observed: observed.to_string(),
            counterexamples: Vec::new(),
        }
    }

    /// Expects no counterexamples; observes how many were found.
    fn none_of(name: &'static str, what: &str, counterexamples: Vec<String>) -> Self {
        Self {
            name,
            expected: format!("0 {what}"),
            observed: format!("{} {what}", counterexamples.len()),
            counterexamples,
        }
    }

    /// True when the observed value is the expected one.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.expected == self.observed
    }
}

/// A full run's tally plus every check made against it.
#[derive(Clone, Debug)]
pub struct Conformance {
    /// Counts from the search the checks ran against.
    pub tally: Tally,
    /// Checks in the order they ran.
    pub checks: Vec<Check>,
}

impl Conformance {
    /// Checks whose observed value differs from the expected one.
    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed())
    }

    /// True when no check failed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Runs a fresh search and checks it.
///
/// # Errors
///
/// Returns an error only if rendering the text report fails.
pub fn run_all() -> Result<Conformance> {
    let mut collected = CollectReporter::default();
    let tally = search(&mut collected)?;
    let first = render(Mode::Full)?;
    let second = render(Mode::Full)?;

    let checks = vec![
        Check::compare("tally/total", SEARCH_SPACE, tally.total()),
        Check::compare("tally/solutions", EXPECTED_SOLUTIONS, tally.satisfying),
        Check::compare("tally/reported", tally.satisfying, collected.matches.len()),
        Check::none_of("fixtures/known", "misclassified", misclassified_fixtures()),
        Check::none_of("checker/matrix-agreement", "disagreements", square_disagreements()),
        Check::none_of(
            "checker/complement",
            "non-idempotent complements",
            broken_complements(&collected.matches),
        ),
        Check::compare("output/determinism", "identical", same_bytes(&first, &second)),
        Check::none_of("output/format", "malformed lines", format_problems(&first, &tally)),
    ];
    Ok(Conformance { tally, checks })
}

fn misclassified_fixtures() -> Vec<String> {
    [
        (Matrix2::IDENTITY, Verdict::Satisfies),
        (Matrix2::ZERO, Verdict::Satisfies),
        (Matrix2::reduced(1, 1, 1, 1), Verdict::Fails),
        (Matrix2::reduced(4, 0, 0, 9), Verdict::Satisfies),
    ]
    .into_iter()
    .filter(|&(m, want)| check::verdict(m) != want)
    .map(|(m, want)| format!("{m}: expected {want:?}"))
    .collect()
}

fn square_disagreements() -> Vec<String> {
    Tuples::new()
        .filter(|&m| check::is_idempotent(m) != (m.square() == m))
        .map(|m| m.to_string())
        .collect()
}

fn broken_complements(solutions: &[Matrix2]) -> Vec<String> {
    solutions
        .iter()
        .filter(|m| !check::is_idempotent(m.complement()))
        .map(|m| format!("{m} -> {}", m.complement()))
        .collect()
}

fn same_bytes(first: &[u8], second: &[u8]) -> &'static str {
    if first == second {
        "identical"
    } else {
        "different"
    }
}

fn format_problems(output: &[u8], tally: &Tally) -> Vec<String> {
    let text = String::from_utf8_lossy(output);
    let lines: Vec<&str> = text.lines().collect();
    let Some((body, summary)) = lines.split_last_chunk::<2>() else {
        return vec![format!("{} lines, no summary", lines.len())];
    };

    let mut problems: Vec<String> = body
        .iter()
        .filter(|line| !(line.starts_with('(') && line.ends_with(MATCH_SUFFIX)))
        .map(|line| format!("{line:?}"))
        .collect();
    if body.len() != tally.satisfying {
        problems.push(format!("{} match lines for {} solutions", body.len(), tally.satisfying));
    }
    let want = [
        format!("Solutions: {}", tally.satisfying),
        format!("# of incorrects: {}", tally.non_satisfying),
    ];
    for (got, want) in summary.iter().zip(&want) {
        if got != want {
            problems.push(format!("{got:?}, expected {want:?}"));
        }
    }
    problems
}
