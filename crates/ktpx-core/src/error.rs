//! Error types for the ktpx-core library.
//!
//! Field extraction itself has no failure mode: a pattern that does not
//! match simply leaves its field unset on the record. Errors here cover the
//! ambient surfaces around the extractor, i.e. configuration files.

use thiserror::Error;

/// Main error type for the ktpx library.
#[derive(Error, Debug)]
pub enum KtpxError {
    /// Configuration error (unreadable or malformed config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the ktpx library.
pub type Result<T> = std::result::Result<T, KtpxError>;
