//! Reporting: what happens to a match once the checker has decided.
//!
//! A [`Reporter`] receives every satisfying matrix and then the final
//! [`Tally`]. [`TextReporter`] writes the human-readable form:
//!
//! ```text
//! (0, 0, 0, 0)  satisfies the condition e=e^2.
//! ...
//! Solutions: 364
//! # of incorrects: 20372
//! ```

use std::io::Write;

use crate::error::Result;
use crate::matrix::Matrix2;
use crate::tally::Tally;

/// Fixed text that follows each matching tuple.
pub const MATCH_SUFFIX: &str = "  satisfies the condition e=e^2.";

/// Sink for search results.
pub trait Reporter {
    /// Called once per satisfying matrix, in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink cannot be written.
    fn on_match(&mut self, m: Matrix2) -> Result<()>;

    /// Called once after the last tuple.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink cannot be written.
    fn finish(&mut self, tally: &Tally) -> Result<()>;
}

/// How much of the text report to write.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Mode {
    /// One line per match, then the summary.
    #[default]
    Full,
    /// The two summary lines only.
    Quiet,
}

/// Writes the match lines and the two summary lines to any [`Write`].
#[derive(Debug)]
pub struct TextReporter<W> {
    out: W,
    mode: Mode,
}

impl<W: Write> TextReporter<W> {
    /// Writes `out` in the given mode.
    pub fn with_mode(out: W, mode: Mode) -> Self {
        Self { out, mode }
    }

    /// Reports every match and the summary.
    pub fn new(out: W) -> Self {
        Self::with_mode(out, Mode::Full)
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn on_match(&mut self, m: Matrix2) -> Result<()> {
        if self.mode == Mode::Full {
            writeln!(self.out, "{m}{MATCH_SUFFIX}")?;
        }
        Ok(())
    }

    fn finish(&mut self, tally: &Tally) -> Result<()> {
        writeln!(self.out, "Solutions: {}", tally.satisfying)?;
        writeln!(self.out, "# of incorrects: {}", tally.non_satisfying)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Collects matches in memory and keeps the final tally.
#[derive(Debug, Default)]
pub struct CollectReporter {
    /// Every match, in enumeration order.
    pub matches: Vec<Matrix2>,
    /// Set by [`Reporter::finish`].
    pub tally: Option<Tally>,
}

impl Reporter for CollectReporter {
    fn on_match(&mut self, m: Matrix2) -> Result<()> {
        self.matches.push(m);
        Ok(())
    }

    fn finish(&mut self, tally: &Tally) -> Result<()> {
        self.tally = Some(*tally);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io;

    fn render(reporter: &mut TextReporter<Vec<u8>>) -> Result<()> {
        reporter.on_match(Matrix2::reduced(4, 0, 0, 9))?;
        reporter.finish(&Tally {
            satisfying: 1,
            non_satisfying: 2,
        })
    }

    #[test]
    fn text_lines() -> Result<()> {
        let mut reporter = TextReporter::new(Vec::new());
        render(&mut reporter)?;
        let text = String::from_utf8_lossy(&reporter.into_inner()).into_owned();
        assert_eq!(
            text,
            "(4, 0, 0, 9)  satisfies the condition e=e^2.\nSolutions: 1\n# of incorrects: 2\n"
        );
        Ok(())
    }

    #[test]
    fn quiet_prints_summary_only() -> Result<()> {
        let mut reporter = TextReporter::with_mode(Vec::new(), Mode::Quiet);
        render(&mut reporter)?;
        let text = String::from_utf8_lossy(&reporter.into_inner()).into_owned();
        assert_eq!(text, "Solutions: 1\n# of incorrects: 2\n");
        Ok(())
    }

    #[test]
    fn default_mode_is_full() -> Result<()> {
        let mut default = TextReporter::with_mode(Vec::new(), Mode::default());
        let mut full = TextReporter::new(Vec::new());
        render(&mut default)?;
        render(&mut full)?;
        assert_eq!(default.into_inner(), full.into_inner());
        Ok(())
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_surfaces_as_output_error() {
        let mut reporter = TextReporter::new(Broken);
        let err = reporter.on_match(Matrix2::ZERO);
        assert!(matches!(err, Err(Error::Output(_))));
    }

    #[test]
    fn collect_keeps_order_and_tally() -> Result<()> {
        let mut reporter = CollectReporter::default();
        reporter.on_match(Matrix2::ZERO)?;
        reporter.on_match(Matrix2::IDENTITY)?;
        reporter.finish(&Tally::new())?;
        assert_eq!(reporter.matches, vec![Matrix2::ZERO, Matrix2::IDENTITY]);
        assert_eq!(reporter.tally, Some(Tally::new()));
        Ok(())
    }
}
