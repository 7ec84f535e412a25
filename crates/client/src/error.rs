/// Errors from the API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    Status {
        status: u16,
        /// Canonical reason phrase, empty for unregistered codes.
        status_text: String,
    },

    /// The body parsed as JSON but not into the expected shape.
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}
