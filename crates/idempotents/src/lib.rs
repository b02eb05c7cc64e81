//! Idempotent 2x2 matrices over Z/12Z.
//!
//! A matrix `M = [[i, j], [k, q]]` with entries in the integers modulo 12 is
//! idempotent when `M * M ≡ M`. This crate finds every such matrix by
//! checking all `12^4 = 20736` candidates.
//!
//! # Layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`residue`] | `Residue`, an element of Z/12Z |
//! | [`matrix`] | `Matrix2` and its ring operations |
//! | [`check`] | the four congruences, as a `Verdict` |
//! | [`enumerate`] | `Tuples`, the ordered search space |
//! | [`tally`] | satisfying / non-satisfying counters |
//! | [`report`] | `Reporter` sinks for matches and the summary |
//! | [`search`] | the exhaustive search itself |
//! | [`conformance`] | self-check suite over a full run |
//!
//! # Example
//!
//! ```
//! use idempotents::{search, TextReporter};
//!
//! let mut reporter = TextReporter::new(Vec::new());
//! let tally = search(&mut reporter)?;
//! assert_eq!((tally.satisfying, tally.non_satisfying), (364, 20372));
//!
//! let text = String::from_utf8(reporter.into_inner()).unwrap_or_default();
//! assert!(text.starts_with("(0, 0, 0, 0)  satisfies the condition e=e^2.\n"));
//! assert!(text.ends_with("Solutions: 364\n# of incorrects: 20372\n"));
//! # Ok::<(), idempotents::Error>(())
//! ```

pub mod check;
pub mod conformance;
pub mod enumerate;
pub mod error;
pub mod matrix;
pub mod report;
pub mod residue;
pub mod search;
pub mod tally;

pub use check::{Entry, Verdict};
pub use enumerate::{Tuples, SEARCH_SPACE};
pub use error::{Error, Result};
pub use matrix::Matrix2;
pub use report::{CollectReporter, Mode, Reporter, TextReporter, MATCH_SUFFIX};
pub use residue::{Residue, MODULUS};
pub use search::{idempotents, render, search};
pub use tally::Tally;
