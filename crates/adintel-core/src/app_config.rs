use std::path::PathBuf;

/// Immutable application configuration, built once from the environment.
#[derive(Clone)]
pub struct AppConfig {
    /// Bearer token for the scraping service.
    pub apify_api_token: String,
    /// Actor identifier for the Facebook Ad Library scraper.
    pub actor_id: String,
    /// API key for the summarization service. Absent means the locally
    /// computed analysis is used for every brand.
    pub anthropic_api_key: Option<String>,
    /// Model name passed to the summarization service.
    pub summary_model: String,
    /// Webhook URL for report delivery. Absent disables notifications.
    pub webhook_url: Option<String>,
    pub log_level: String,
    pub brands_path: PathBuf,
    /// Hard cap on records kept per brand after a dataset fetch.
    pub max_ads_per_brand: u32,
    /// Accepted for forward compatibility with the scraping service; not
    /// currently applied as a collection filter.
    pub lookback_days: u32,
    /// Per-request timeout for job submission and dataset fetches.
    pub request_timeout_secs: u64,
    /// Per-request timeout for status polls.
    pub status_timeout_secs: u64,
    /// Sleep between status polls.
    pub poll_interval_secs: u64,
    /// Total wall-clock budget for waiting on a scrape job.
    pub poll_budget_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("apify_api_token", &"[redacted]")
            .field("actor_id", &self.actor_id)
            .field(
                "anthropic_api_key",
                &self.anthropic_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("summary_model", &self.summary_model)
            .field("webhook_url", &self.webhook_url)
            .field("log_level", &self.log_level)
            .field("brands_path", &self.brands_path)
            .field("max_ads_per_brand", &self.max_ads_per_brand)
            .field("lookback_days", &self.lookback_days)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("status_timeout_secs", &self.status_timeout_secs)
            .field("poll_interval_secs", &self.poll_interval_secs)
            .field("poll_budget_secs", &self.poll_budget_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
