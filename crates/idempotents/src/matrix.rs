//! 2x2 matrices over Z/12Z.
//!
//! A [`Matrix2`] stores its entries row-major as the tuple `(i, j, k, q)`:
//!
//! ```text
//! [ i  j ]
//! [ k  q ]
//! ```

use core::fmt;

use crate::residue::Residue;

/// A 2x2 matrix with entries in Z/12Z.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Debug)]
pub struct Matrix2 {
    /// Top-left entry.
    pub i: Residue,
    /// Top-right entry.
    pub j: Residue,
    /// Bottom-left entry.
    pub k: Residue,
    /// Bottom-right entry.
    pub q: Residue,
}

impl Matrix2 {
    /// The zero matrix.
    pub const ZERO: Self = Self::new(Residue::ZERO, Residue::ZERO, Residue::ZERO, Residue::ZERO);

    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(Residue::ONE, Residue::ZERO, Residue::ZERO, Residue::ONE);

    /// Builds a matrix from its row-major entries.
    #[inline]
    #[must_use]
    pub const fn new(i: Residue, j: Residue, k: Residue, q: Residue) -> Self {
        Self { i, j, k, q }
    }

    /// Builds a matrix from raw integers, reducing each modulo 12.
    ///
    /// ```
    /// use idempotents::Matrix2;
    ///
    /// assert_eq!(Matrix2::reduced(13, 0, 0, 1), Matrix2::IDENTITY);
    /// ```
    #[inline]
    #[must_use]
    pub const fn reduced(i: u32, j: u32, k: u32, q: u32) -> Self {
        Self::new(
            Residue::reduce(i),
            Residue::reduce(j),
            Residue::reduce(k),
            Residue::reduce(q),
        )
    }

    /// Returns the entries as a `(i, j, k, q)` tuple of raw values.
    #[inline]
    #[must_use]
    pub const fn to_tuple(self) -> (u8, u8, u8, u8) {
        (self.i.value(), self.j.value(), self.k.value(), self.q.value())
    }

    /// Matrix product `self * rhs` in M₂(Z/12Z).
    #[must_use]
    pub const fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.i.mul(rhs.i).add(self.j.mul(rhs.k)),
            self.i.mul(rhs.j).add(self.j.mul(rhs.q)),
            self.k.mul(rhs.i).add(self.q.mul(rhs.k)),
            self.k.mul(rhs.j).add(self.q.mul(rhs.q)),
        )
    }

    /// `self * self`.
    #[inline]
    #[must_use]
    pub const fn square(self) -> Self {
        self.mul(self)
    }

    /// `I - self`. The complement of an idempotent is again idempotent.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self::new(
            Residue::ONE.sub(self.i),
            self.j.neg(),
            self.k.neg(),
            Residue::ONE.sub(self.q),
        )
    }
}

/// Renders as `(i, j, k, q)`.
impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.i, self.j, self.k, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_neutral() {
        let m = Matrix2::reduced(3, 7, 11, 5);
        assert_eq!(Matrix2::IDENTITY.mul(m), m);
        assert_eq!(m.mul(Matrix2::IDENTITY), m);
    }

    #[test]
    fn zero_absorbs() {
        let m = Matrix2::reduced(3, 7, 11, 5);
        assert_eq!(Matrix2::ZERO.mul(m), Matrix2::ZERO);
        assert_eq!(m.mul(Matrix2::ZERO), Matrix2::ZERO);
    }

    #[test]
    fn square_of_all_ones() {
        // [[1,1],[1,1]]² = [[2,2],[2,2]]
        assert_eq!(Matrix2::reduced(1, 1, 1, 1).square(), Matrix2::reduced(2, 2, 2, 2));
    }

    #[test]
    fn square_reduces_mod_12() {
        // [[4,0],[0,9]]² = [[16,0],[0,81]] ≡ [[4,0],[0,9]]
        let m = Matrix2::reduced(4, 0, 0, 9);
        assert_eq!(m.square(), m);
    }

    #[test]
    fn complement_swaps_identity_and_zero() {
        assert_eq!(Matrix2::IDENTITY.complement(), Matrix2::ZERO);
        assert_eq!(Matrix2::ZERO.complement(), Matrix2::IDENTITY);
        assert_eq!(Matrix2::reduced(4, 0, 0, 9).complement(), Matrix2::reduced(9, 0, 0, 4));
    }

    #[test]
    fn display_format() {
        assert_eq!(Matrix2::reduced(4, 0, 0, 9).to_string(), "(4, 0, 0, 9)");
        assert_eq!(Matrix2::reduced(11, 10, 1, 2).to_string(), "(11, 10, 1, 2)");
    }

    #[test]
    fn to_tuple_round_trips_entries() {
        assert_eq!(Matrix2::reduced(1, 2, 3, 4).to_tuple(), (1, 2, 3, 4));
    }
}
