//! Fire-and-forget webhook delivery of the finished report.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::Serialize;

use crate::error::ReportError;

const SOURCE_TAG: &str = "adintel";

/// Posts the finished report to a configured webhook URL.
///
/// Delivery is best-effort: a failed POST is logged and reported as `false`,
/// never raised.
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

#[derive(Serialize)]
struct NotificationPayload<'a> {
    report: &'a str,
    timestamp: String,
    source: &'static str,
}

impl WebhookNotifier {
    /// # Errors
    ///
    /// Returns [`ReportError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self, ReportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            url: url.to_owned(),
        })
    }

    /// Deliver the report. Returns whether the webhook accepted it.
    pub async fn send(&self, report: &str) -> bool {
        let payload = NotificationPayload {
            report,
            timestamp: Utc::now().to_rfc3339(),
            source: SOURCE_TAG,
        };

        match self.client.post(&self.url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!("notification delivered");
                true
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "notification rejected");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "notification failed");
                false
            }
        }
    }
}
