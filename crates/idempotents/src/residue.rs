//! Residues of the ring Z/12Z.
//!
//! A [`Residue`] is a transparent wrapper around a `u8` in `[0, 12)`. All
//! ring operations widen to `u32` before reducing, so no intermediate value
//! can overflow: the largest product is `11 * 11 = 121` and the largest sum of
//! two products is `242`.
//!
//! # Example
//!
//! ```
//! use idempotents::Residue;
//!
//! let four = Residue::reduce(4);
//! assert_eq!(four.mul(four), four); // 16 mod 12 = 4
//! assert_eq!(Residue::reduce(23).value(), 11);
//! ```

use core::fmt;

/// The modulus of the ring.
pub const MODULUS: u8 = 12;

/// An element of Z/12Z.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Residue(u8);

impl Residue {
    /// The additive identity.
    pub const ZERO: Self = Self(0);

    /// The multiplicative identity.
    pub const ONE: Self = Self(1);

    /// Every residue in ascending order.
    pub const ALL: [Self; MODULUS as usize] = {
        let mut all = [Self(0); MODULUS as usize];
        let mut v = 0;
        while v < MODULUS {
            all[v as usize] = Self(v);
            v += 1;
        }
        all
    };

    /// Reduces an arbitrary non-negative integer modulo 12.
    #[inline]
    #[must_use]
    pub const fn reduce(value: u32) -> Self {
        Self((value % MODULUS as u32) as u8)
    }

    /// Returns the representative in `[0, 12)`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Addition mod 12.
    #[inline]
    #[must_use]
    pub const fn add(self, rhs: Self) -> Self {
        Self::reduce(self.0 as u32 + rhs.0 as u32)
    }

    /// Multiplication mod 12.
    ///
    /// ```
    /// use idempotents::Residue;
    ///
    /// assert_eq!(Residue::reduce(3).mul(Residue::reduce(4)), Residue::ZERO);
    /// assert_eq!(Residue::reduce(9).mul(Residue::reduce(9)), Residue::reduce(9));
    /// ```
    #[inline]
    #[must_use]
    pub const fn mul(self, rhs: Self) -> Self {
        Self::reduce(self.0 as u32 * rhs.0 as u32)
    }

    /// Additive inverse mod 12.
    #[inline]
    #[must_use]
    pub const fn neg(self) -> Self {
        Self::reduce((MODULUS - self.0) as u32)
    }

    /// Subtraction mod 12.
    #[inline]
    #[must_use]
    pub const fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    /// True if `self * self == self`.
    #[inline]
    #[must_use]
    pub const fn is_idempotent(self) -> bool {
        self.mul(self).0 == self.0
    }
}

impl fmt::Debug for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Residue({})", self.0)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
