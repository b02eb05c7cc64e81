//! The exhaustive search.

use tracing::{debug, trace};

use crate::check::{self, Verdict};
use crate::enumerate::{Tuples, SEARCH_SPACE};
use crate::error::Result;
use crate::matrix::Matrix2;
use crate::report::{Mode, Reporter, TextReporter};
use crate::tally::Tally;

/// Checks every matrix in M₂(Z/12Z) once and reports the matches.
///
/// The tally is returned by value after `reporter.finish` has seen it.
///
/// # Errors
///
/// Propagates any write failure from `reporter`.
///
/// # Example
///
/// ```
/// use idempotents::{search, CollectReporter, SEARCH_SPACE};
///
/// let mut collected = CollectReporter::default();
/// let tally = search(&mut collected)?;
/// assert_eq!(tally.total(), SEARCH_SPACE);
/// assert_eq!(collected.matches.len(), tally.satisfying);
/// # Ok::<(), idempotents::Error>(())
/// ```
pub fn search<R: Reporter + ?Sized>(reporter: &mut R) -> Result<Tally> {
    debug!(tuples = SEARCH_SPACE, "searching for idempotents");
    let mut tally = Tally::new();
    for m in Tuples::new() {
        let verdict = check::verdict(m);
        tally.record(verdict);
        match verdict {
            Verdict::Satisfies => reporter.on_match(m)?,
            Verdict::Fails => {
                trace!(matrix = %m, entry = ?check::first_violation(m), "not idempotent");
            }
        }
    }
    debug!(
        satisfying = tally.satisfying,
        non_satisfying = tally.non_satisfying,
        "search complete"
    );
    reporter.finish(&tally)?;
    Ok(tally)
}

/// Runs the search and renders the text report into a byte buffer.
///
/// # Errors
///
/// Only fails if writing to the buffer fails, which `Vec<u8>` never does.
pub fn render(mode: Mode) -> Result<Vec<u8>> {
    let mut reporter = TextReporter::with_mode(Vec::new(), mode);
    search(&mut reporter)?;
    Ok(reporter.into_inner())
}

/// Every idempotent in enumeration order.
#[must_use]
pub fn idempotents() -> Vec<Matrix2> {
    Tuples::new().filter(|&m| check::is_idempotent(m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CollectReporter;

    #[test]
    fn full_search_counts() -> Result<()> {
        let tally = search(&mut CollectReporter::default())?;
        assert_eq!(tally.total(), 20736);
        assert_eq!(tally.satisfying, 364);
        assert_eq!(tally.non_satisfying, 20372);
        Ok(())
    }

    #[test]
    fn known_fixtures_are_classified() {
        let found = idempotents();
        assert!(found.contains(&Matrix2::IDENTITY));
        assert!(found.contains(&Matrix2::ZERO));
        assert!(found.contains(&Matrix2::reduced(4, 0, 0, 9)));
        assert!(!found.contains(&Matrix2::reduced(1, 1, 1, 1)));
    }

    #[test]
    fn matches_are_in_enumeration_order() {
        let found = idempotents();
        assert!(found.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(found.first(), Some(&Matrix2::ZERO));
        assert_eq!(found.last(), Some(&Matrix2::reduced(11, 11, 2, 2)));
    }

    #[test]
    fn trait_object_reporter() -> Result<()> {
        let mut collected = CollectReporter::default();
        let reporter: &mut dyn Reporter = &mut collected;
        let tally = search(reporter)?;
        assert_eq!(collected.tally, Some(tally));
        assert_eq!(collected.matches, idempotents());
        Ok(())
    }

    #[test]
    fn render_modes() -> Result<()> {
        let full = render(Mode::Full)?;
        let quiet = render(Mode::Quiet)?;
        assert!(full.ends_with(&quiet));
        assert_eq!(quiet, b"Solutions: 364\n# of incorrects: 20372\n");
        Ok(())
    }
}
