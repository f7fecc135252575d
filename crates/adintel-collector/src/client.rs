//! HTTP client for the scraping service's run and dataset endpoints.
//!
//! Wraps `reqwest` with bearer-token auth, per-request timeouts, and typed
//! response deserialization. Submission expects HTTP 201; everything else is
//! surfaced as [`CollectorError::Submission`] without retry.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::CollectorError;
use crate::types::{AdRecord, JobHandle, JobRequest, JobStatus, RunData, RunEnvelope};

const DEFAULT_BASE_URL: &str = "https://api.apify.com/";

/// Client for the scraping service's REST API.
///
/// Holds the HTTP client, bearer token, actor id, and base URL. Use
/// [`ActorClient::new`] for production or [`ActorClient::with_base_url`] to
/// point at a mock server in tests. The client is stateless beyond its
/// connection pool and safe to share across concurrent per-brand runs.
pub struct ActorClient {
    client: Client,
    token: String,
    actor_id: String,
    base_url: String,
    status_timeout: Duration,
}

impl ActorClient {
    /// Creates a new client pointed at the production service.
    ///
    /// `request_timeout_secs` bounds submission and dataset fetches;
    /// `status_timeout_secs` bounds the lighter status polls.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        token: &str,
        actor_id: &str,
        request_timeout_secs: u64,
        status_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CollectorError> {
        Self::with_base_url(
            token,
            actor_id,
            request_timeout_secs,
            status_timeout_secs,
            user_agent,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CollectorError::Configuration`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        token: &str,
        actor_id: &str,
        request_timeout_secs: u64,
        status_timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, CollectorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: exactly one trailing slash so endpoint paths append
        // cleanly below.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        Url::parse(&normalised)
            .map_err(|e| CollectorError::Configuration(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            token: token.to_owned(),
            actor_id: actor_id.to_owned(),
            base_url: normalised,
            status_timeout: Duration::from_secs(status_timeout_secs),
        })
    }

    /// Submits a scrape job for the given request.
    ///
    /// # Errors
    ///
    /// - [`CollectorError::Submission`] if the service answers anything but 201.
    /// - [`CollectorError::Http`] on network failure.
    /// - [`CollectorError::Deserialize`] if the response envelope does not
    ///   match the expected shape.
    pub async fn submit_run(&self, request: &JobRequest) -> Result<JobHandle, CollectorError> {
        let url = format!("{}v2/acts/{}/runs", self.base_url, self.actor_id);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request.actor_input())
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(CollectorError::Submission {
                status: response.status().as_u16(),
            });
        }

        let data = Self::parse_run_envelope(response, &url).await?;
        Ok(JobHandle {
            run_id: data.id,
            dataset_id: data.default_dataset_id,
        })
    }

    /// Fetches the current run metadata for a submitted job.
    ///
    /// Returns the status plus the dataset id, which the service fills in
    /// once the run is underway.
    ///
    /// # Errors
    ///
    /// - [`CollectorError::Http`] on network failure or a non-2xx status.
    /// - [`CollectorError::Deserialize`] if the response envelope does not
    ///   match the expected shape.
    pub async fn run_status(&self, run_id: &str) -> Result<(JobStatus, String), CollectorError> {
        let url = format!("{}v2/acts/{}/runs/{}", self.base_url, self.actor_id, run_id);
        let response = self
            .client
            .get(&url)
            .timeout(self.status_timeout)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        let data = Self::parse_run_envelope(response, &url).await?;
        Ok((data.status, data.default_dataset_id))
    }

    /// Fetches all items currently in a result dataset.
    ///
    /// Works for completed and still-running jobs alike; a running job
    /// simply yields whatever records exist so far.
    ///
    /// # Errors
    ///
    /// - [`CollectorError::Fetch`] on a non-2xx status.
    /// - [`CollectorError::Http`] on network failure.
    /// - [`CollectorError::Deserialize`] if the body is not a JSON array of
    ///   ad records.
    pub async fn fetch_dataset_items(
        &self,
        dataset_id: &str,
    ) -> Result<Vec<AdRecord>, CollectorError> {
        let url = format!("{}v2/datasets/{dataset_id}/items", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollectorError::Fetch(format!("HTTP {status} from {url}")));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CollectorError::Deserialize {
            context: url,
            source: e,
        })
    }

    async fn parse_run_envelope(
        response: reqwest::Response,
        url: &str,
    ) -> Result<RunData, CollectorError> {
        let body = response.text().await?;
        let envelope: RunEnvelope =
            serde_json::from_str(&body).map_err(|e| CollectorError::Deserialize {
                context: url.to_owned(),
                source: e,
            })?;
        Ok(envelope.data)
    }
}
