//! Error types for PubMed retrieval and result output.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Nothing here is retried; every error is fatal to the run that produced it.

/// Errors from the E-utilities client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// XML parsing error in an efetch response
    #[error("Failed to parse XML response: {0}")]
    Xml(#[from] quick_xml::Error),

    /// JSON parsing error in an esearch response
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response parsed but a required container is missing
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// What was missing or unexpected
        message: String,
    },

    /// Invalid request parameters (400 response or esearch ERROR)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a malformed response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse { message: message.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::BadRequest { .. } => Some(400),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Errors from writing or reading result files.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// CSV encoding or decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV row that does not describe a filtered paper
    #[error("Malformed row {row}: {message}")]
    MalformedRow {
        /// 1-based data row number (header excluded)
        row: usize,
        /// What was wrong with it
        message: String,
    },
}

impl OutputError {
    /// Create a malformed row error.
    #[must_use]
    pub fn malformed_row(row: usize, message: impl Into<String>) -> Self {
        Self::MalformedRow { row, message: message.into() }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_status() {
        assert_eq!(ClientError::server(503, "unavailable").status(), Some(503));
        assert_eq!(ClientError::bad_request("bad term").status(), Some(400));
        assert_eq!(ClientError::malformed("no PubmedArticleSet").status(), None);
    }

    #[test]
    fn test_client_error_messages() {
        let err = ClientError::malformed("missing MedlineCitation");
        assert!(err.to_string().contains("missing MedlineCitation"));

        let err = ClientError::server(500, "boom");
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_output_error_row() {
        let err = OutputError::malformed_row(3, "author and affiliation counts differ");
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("counts differ"));
    }
}
