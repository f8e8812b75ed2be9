//! Crate-level error types for backend calls and client-side export.

/// Error returned when a backend REST call fails.
///
/// Transport failures (connect, timeout, body decode) wrap the underlying
/// `reqwest` error. Non-success HTTP responses become [`ApiError::Status`],
/// carrying the server's own message when the error body had one, so the
/// notification surface can show it verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: connection, timeout, or body decoding.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("backend returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `message` (or `detail`) field of the JSON error body, if present.
        message: Option<String>,
    },
}

impl ApiError {
    /// The server-provided error message, if the backend sent one.
    ///
    /// Callers fall back to a generic per-operation message when this is
    /// `None` (network failures, empty or non-JSON error bodies).
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) => None,
        }
    }

    /// Whether this is an HTTP response with the given status code.
    pub fn is_status(&self, code: u16) -> bool {
        matches!(self, Self::Status { status, .. } if *status == code)
    }
}

/// Error returned when rendering a resource list to CSV fails.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// CSV serialization failure.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure flushing the underlying writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rendered CSV buffer was not valid UTF-8.
    #[error("exported CSV was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
