use thiserror::Error;

/// Errors raised while producing or delivering a report.
///
/// Summarization errors are consumed internally by the fallback path;
/// notification errors are logged and dropped. Nothing here reaches the
/// top-level caller during a normal run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The summarization service answered with a non-success status.
    #[error("summarization API error: HTTP {status}")]
    Api { status: u16 },

    /// The summarization service answered 2xx but carried no text.
    #[error("summarization response contained no text")]
    EmptyResponse,

    /// The prompt payload could not be serialized.
    #[error("prompt serialization error: {0}")]
    Prompt(#[from] serde_json::Error),

    /// A client was constructed with an unusable base URL.
    #[error("invalid base URL: {0}")]
    BaseUrl(String),
}
