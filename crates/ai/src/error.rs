/// Errors from artifact generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The completion endpoint returned a non-2xx status code.
    #[error("Completion API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The reply carried no message content.
    #[error("Completion API returned no content")]
    EmptyResponse,

    /// The reply content was not the JSON shape we asked for.
    #[error("Completion reply could not be parsed: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    /// Upstream status code, if the endpoint answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GenerationError::Api { status, .. } => Some(*status),
            GenerationError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
