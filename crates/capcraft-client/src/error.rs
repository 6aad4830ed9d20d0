use thiserror::Error;

/// Errors surfaced by the API client.
///
/// Everything the UI needs is the `Display` string; no structured codes
/// cross the presentation boundary. No variant is ever retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport itself failed (DNS, refused connection, aborted fetch).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the server's `detail`/`error` field
    /// when present, otherwise a per-call fallback.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 401 from an authenticated call; the stored token has already been
    /// cleared by the time this is returned.
    #[error("Authentication required. Please login again.")]
    Unauthorized,

    /// Client-side quota guard tripped before the upload was issued.
    #[error("You have reached your caption generation limit for this period")]
    QuotaExceeded,

    /// A 2xx response carried a body we could not decode.
    #[error("Invalid response from server: {0}")]
    Decode(String),
}
