//! The idempotency checker.
//!
//! A matrix `[[i, j], [k, q]]` is idempotent modulo 12 iff all four entries of
//! its square agree with the original entries:
//!
//! ```text
//! i ≡ i*i + j*k   (mod 12)
//! j ≡ i*j + j*q   (mod 12)
//! k ≡ k*i + q*k   (mod 12)
//! q ≡ j*k + q*q   (mod 12)
//! ```
//!
//! The checker only decides. Counting and printing are left to the caller.
//!
//! # Example
//!
//! ```
//! use idempotents::{check, Matrix2, Verdict};
//!
//! assert_eq!(check::verdict(Matrix2::reduced(4, 0, 0, 9)), Verdict::Satisfies);
//! assert_eq!(check::verdict(Matrix2::reduced(1, 1, 1, 1)), Verdict::Fails);
//! ```

use core::fmt;

use crate::matrix::Matrix2;
use crate::residue::MODULUS;

/// Outcome of checking one tuple.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Verdict {
    /// `M * M ≡ M`.
    Satisfies,
    /// At least one congruence fails.
    Fails,
}

impl Verdict {
    /// True for [`Verdict::Satisfies`].
    #[inline]
    #[must_use]
    pub const fn is_satisfied(self) -> bool {
        matches!(self, Self::Satisfies)
    }
}

impl From<bool> for Verdict {
    #[inline]
    fn from(holds: bool) -> Self {
        if holds {
            Self::Satisfies
        } else {
            Self::Fails
        }
    }
}

/// A matrix entry, named by its position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Entry {
    /// `i`
    TopLeft,
    /// `j`
    TopRight,
    /// `k`
    BottomLeft,
    /// `q`
    BottomRight,
}

impl Entry {
    /// Entries in the order the congruences are checked.
    pub const ALL: [Self; 4] = [Self::TopLeft, Self::TopRight, Self::BottomLeft, Self::BottomRight];
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TopLeft => "i",
            Self::TopRight => "j",
            Self::BottomLeft => "k",
            Self::BottomRight => "q",
        };
        f.write_str(name)
    }
}

/// Evaluates the congruence for one entry.
#[must_use]
pub const fn holds(m: Matrix2, entry: Entry) -> bool {
    let (i, j, k, q) = m.to_tuple();
    let (i, j, k, q) = (i as u32, j as u32, k as u32, q as u32);
    let n = MODULUS as u32;
    match entry {
        Entry::TopLeft => i == (i * i + j * k) % n,
        Entry::TopRight => j == (i * j + j * q) % n,
        Entry::BottomLeft => k == (k * i + q * k) % n,
        Entry::BottomRight => q == (j * k + q * q) % n,
    }
}

/// Returns the first entry whose congruence fails, or `None` for an idempotent.
#[must_use]
pub fn first_violation(m: Matrix2) -> Option<Entry> {
    Entry::ALL.into_iter().find(|&entry| !holds(m, entry))
}

/// Decides whether `m` is idempotent modulo 12.
#[must_use]
pub const fn is_idempotent(m: Matrix2) -> bool {
    holds(m, Entry::TopLeft)
        && holds(m, Entry::TopRight)
        && holds(m, Entry::BottomLeft)
        && holds(m, Entry::BottomRight)
}

/// [`is_idempotent`] as a [`Verdict`].
#[inline]
#[must_use]
pub const fn verdict(m: Matrix2) -> Verdict {
    if is_idempotent(m) {
        Verdict::Satisfies
    } else {
        Verdict::Fails
    }
}
