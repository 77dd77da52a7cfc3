//! I/O error types
//!
//! Provides a unified error type for raster I/O. The PNG backend maps its
//! decoder and encoder errors into `IoError` variants so that callers only
//! need to handle one error type.

use thiserror::Error;

/// Error type for raster I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The encoded layout is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] salseg_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
