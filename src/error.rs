//! Error types for parbench

use thiserror::Error;

/// Benchmark library errors
///
/// Per-request network failures never surface here; they are folded into
/// [`crate::fetch::FetchResult`] sentinels instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument passed to a driver or partitioner
    ///
    /// **Triggered by:** Zero workers, zero minimum chunk size
    /// **Example:** `partition(Range::new(0, 10), 0, 1000)`
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Argument name
        name: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Worker pool could not be constructed
    #[error("Failed to create thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Socket or runtime failure in the slow API server
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Slow API server thread stopped before reporting its address
    #[error("Server error: {message}")]
    Server {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a server error with a message
    pub fn server(msg: impl Into<String>) -> Self {
        Error::Server {
            message: msg.into(),
        }
    }
}

/// Result type for parbench operations
pub type Result<T> = std::result::Result<T, Error>;
