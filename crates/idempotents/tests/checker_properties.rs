//! Property-based tests for the idempotency checker.
//!
//! Uses proptest to check the congruences against independent recomputation
//! for arbitrary tuples in `[0, 12)^4`.

use idempotents::check::{first_violation, is_idempotent, verdict};
use idempotents::{Matrix2, Residue, Verdict};
use proptest::prelude::*;

fn matrix() -> impl Strategy<Value = Matrix2> {
    (0u32..12, 0u32..12, 0u32..12, 0u32..12).prop_map(|(i, j, k, q)| Matrix2::reduced(i, j, k, q))
}

fn idempotent() -> impl Strategy<Value = Matrix2> {
    prop::sample::select(idempotents::idempotents())
}

// =============================================================================
// Agreement with direct recomputation
// =============================================================================

proptest! {
    /// The checker matches the four congruences written out inline.
    #[test]
    fn prop_matches_inline_congruences(i in 0u32..12, j in 0u32..12, k in 0u32..12, q in 0u32..12) {
        let direct = i == (i * i + j * k) % 12
            && j == (i * j + j * q) % 12
            && k == (k * i + q * k) % 12
            && q == (j * k + q * q) % 12;
        prop_assert_eq!(is_idempotent(Matrix2::reduced(i, j, k, q)), direct);
    }

    /// The checker matches matrix squaring.
    #[test]
    fn prop_matches_square(m in matrix()) {
        prop_assert_eq!(is_idempotent(m), m.square() == m);
    }

    /// Repeated evaluation gives the same verdict.
    #[test]
    fn prop_deterministic(m in matrix()) {
        prop_assert_eq!(verdict(m), verdict(m));
    }

    /// A violation is reported exactly when the verdict is `Fails`.
    #[test]
    fn prop_violation_iff_fails(m in matrix()) {
        prop_assert_eq!(first_violation(m).is_some(), verdict(m) == Verdict::Fails);
    }
}

// =============================================================================
// Algebraic structure
// =============================================================================

proptest! {
    /// If M is idempotent, so is I - M.
    #[test]
    fn prop_complement_preserves_idempotence(m in idempotent()) {
        prop_assert!(is_idempotent(m));
        prop_assert!(is_idempotent(m.complement()));
    }

    /// The complement is an involution.
    #[test]
    fn prop_complement_involution(m in matrix()) {
        prop_assert_eq!(m.complement().complement(), m);
    }

    /// Scalar matrices eI are idempotent exactly when e is.
    #[test]
    fn prop_scalar_matrices(e in 0u8..12) {
        let r = Residue::ALL[e as usize];
        let m = Matrix2::new(r, Residue::ZERO, Residue::ZERO, r);
        prop_assert_eq!(is_idempotent(m), r.is_idempotent());
    }

    /// Multiplication is associative.
    #[test]
    fn prop_mul_associative(a in matrix(), b in matrix(), c in matrix()) {
        prop_assert_eq!(a.mul(b).mul(c), a.mul(b.mul(c)));
    }
}
