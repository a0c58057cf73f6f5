//! Error handling for the rainbar library.
//!
//! Most failure modes of a progress line are silent degradations: an unknown
//! total renders as 0%, overshoot is clamped, stopping an idle bar does
//! nothing. The variants below cover the few cases a caller can act on.

use std::io;
use thiserror::Error;

/// Errors that can happen when using rainbar.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O Error.
    ///
    /// Returned when the line writer fails to write a frame or a line
    /// terminator to its output.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// The refresh timer was started outside of a Tokio runtime.
    #[error("No Tokio runtime available to drive the refresh timer")]
    NoRuntime,

    /// The refresh timer was started with a zero period.
    #[error("Invalid refresh interval: the period must be greater than zero")]
    InvalidInterval,

    /// A palette was created without any color.
    #[error("A trail palette needs at least one color")]
    EmptyPalette,
}

/// Result type alias for operations that can fail with a rainbar error.
pub type Result<T> = std::result::Result<T, Error>;
