//! Error types for the counter API.

use thiserror::Error;

/// Errors that can occur while mirroring the count to the server.
///
/// The reducer collapses all of these into one user-facing message; the variants exist for
/// logs and tests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (connect, timeout, body encoding).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Server returned {status}")]
    Status { status: u16 },
}
