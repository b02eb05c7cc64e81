//! Lazy enumeration of every matrix in M₂(Z/12Z).
//!
//! Tuples come out in nested order with `i` outermost and `q` innermost, so
//! `q` varies fastest:
//!
//! ```text
//! (0, 0, 0, 0), (0, 0, 0, 1), ..., (0, 0, 0, 11), (0, 0, 1, 0), ..., (11, 11, 11, 11)
//! ```

use core::iter::FusedIterator;

use crate::matrix::Matrix2;
use crate::residue::{Residue, MODULUS};

/// Number of tuples in the search space, `12^4`.
pub const SEARCH_SPACE: usize = (MODULUS as usize).pow(4);

/// Iterator over all [`SEARCH_SPACE`] matrices.
///
/// ```
/// use idempotents::{Matrix2, Tuples, SEARCH_SPACE};
///
/// let mut tuples = Tuples::new();
/// assert_eq!(tuples.len(), SEARCH_SPACE);
/// assert_eq!(tuples.next(), Some(Matrix2::ZERO));
/// assert_eq!(tuples.next(), Some(Matrix2::reduced(0, 0, 0, 1)));
/// ```
#[derive(Clone, Debug)]
pub struct Tuples {
    /// Mixed-radix index of the next tuple, `i·12³ + j·12² + k·12 + q`.
    next: usize,
}

impl Tuples {
    /// Starts at `(0, 0, 0, 0)`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    const fn decode(index: usize) -> Matrix2 {
        let m = MODULUS as usize;
        Matrix2::new(
            Residue::reduce((index / (m * m * m)) as u32),
            Residue::reduce((index / (m * m)) as u32),
            Residue::reduce((index / m) as u32),
            Residue::reduce(index as u32),
        )
    }
}

impl Default for Tuples {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Tuples {
    type Item = Matrix2;

    fn next(&mut self) -> Option<Matrix2> {
        if self.next >= SEARCH_SPACE {
            return None;
        }
        let m = Self::decode(self.next);
        self.next += 1;
        Some(m)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SEARCH_SPACE - self.next;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Matrix2> {
        self.next = self.next.saturating_add(n).min(SEARCH_SPACE);
        self.next()
    }
}

impl ExactSizeIterator for Tuples {}

impl FusedIterator for Tuples {}
