//! Running counts of satisfying and non-satisfying tuples.

use crate::check::Verdict;

/// Counters for one search.
///
/// Every evaluated tuple increments exactly one of the two fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Tally {
    /// Tuples for which `M * M ≡ M`.
    pub satisfying: usize,
    /// Tuples for which it does not.
    pub non_satisfying: usize,
}

impl Tally {
    /// Both counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            satisfying: 0,
            non_satisfying: 0,
        }
    }

    /// Counts one verdict.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Satisfies => self.satisfying += 1,
            Verdict::Fails => self.non_satisfying += 1,
        }
    }

    /// Number of tuples evaluated.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.satisfying + self.non_satisfying
    }
}

impl FromIterator<Verdict> for Tally {
    fn from_iter<I: IntoIterator<Item = Verdict>>(iter: I) -> Self {
        let mut tally = Self::new();
        for verdict in iter {
            tally.record(verdict);
        }
        tally
    }
}
