//! Error type shared by the library.

use thiserror::Error;

/// Errors produced while writing a report.
#[derive(Debug, Error)]
pub enum Error {
    /// A reporter failed to write to its sink.
    #[error("failed to write report output")]
    Output(#[from] std::io::Error),
}

/// Result alias over [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
