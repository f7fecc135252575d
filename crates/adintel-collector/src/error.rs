use thiserror::Error;

use crate::types::JobStatus;

/// Errors raised by the ad collector.
///
/// None of these escape [`crate::collect_brand`]; they are carried inside
/// [`crate::CollectionOutcome::Failed`] so the boundary never throws.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// No usable lookup target, or an invalid client configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The service rejected the job submission (anything but HTTP 201).
    #[error("job submission rejected: HTTP {status}")]
    Submission { status: u16 },

    /// The scrape job reached a terminal failure status.
    #[error("scrape job ended as {0}")]
    JobFailed(JobStatus),

    /// The result dataset could not be retrieved.
    #[error("dataset fetch failed: {0}")]
    Fetch(String),

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
