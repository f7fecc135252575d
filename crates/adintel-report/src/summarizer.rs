//! Chat-completion summarization with a local fallback.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use adintel_insights::{InsightSummary, NormalizedAd};

use crate::error::ReportError;
use crate::render::render_brand_section;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/";
const API_VERSION: &str = "2023-06-01";
/// At most this many ads are serialized into the prompt.
const PROMPT_AD_LIMIT: usize = 5;

/// Client for the chat-completion summarization service.
///
/// Every public entry point degrades to the locally rendered analysis on
/// failure; a brand section is never empty just because this service is.
pub struct SummaryClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl SummaryClient {
    /// Creates a client pointed at the production service.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, ReportError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ReportError::BaseUrl`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ReportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        reqwest::Url::parse(&normalised)
            .map_err(|e| ReportError::BaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url: normalised,
        })
    }

    /// Produce the analysis section for one brand, preferring the
    /// summarization service and falling back to the local rendering on any
    /// failure. The fallback path is part of the contract, not an
    /// exception: the report must never be empty because the service is
    /// unavailable.
    pub async fn analyze_or_fallback(
        &self,
        brand: &str,
        summary: &InsightSummary,
        ads: &[NormalizedAd],
    ) -> String {
        if ads.is_empty() {
            // Nothing to summarize; the local empty-market section is the answer.
            return render_brand_section(brand, summary, ads);
        }

        match self.request_analysis(brand, ads).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    brand,
                    error = %e,
                    "summarization unavailable; using local analysis"
                );
                render_brand_section(brand, summary, ads)
            }
        }
    }

    /// One request/response round against the messages endpoint.
    ///
    /// # Errors
    ///
    /// - [`ReportError::Api`] on a non-2xx status.
    /// - [`ReportError::EmptyResponse`] when the reply carries no text blocks.
    /// - [`ReportError::Http`] on network failure or an unreadable body.
    async fn request_analysis(
        &self,
        brand: &str,
        ads: &[NormalizedAd],
    ) -> Result<String, ReportError> {
        let prompt = build_prompt(brand, ads)?;
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: 1000,
            temperature: 0.3,
            messages: vec![Message {
                role: "user",
                content: &prompt,
            }],
        };

        let url = format!("{}v1/messages", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Api {
                status: status.as_u16(),
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        let text = parsed
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        if text.is_empty() {
            return Err(ReportError::EmptyResponse);
        }
        Ok(text)
    }
}

fn build_prompt(brand: &str, ads: &[NormalizedAd]) -> Result<String, ReportError> {
    let sample: Vec<&NormalizedAd> = ads.iter().take(PROMPT_AD_LIMIT).collect();
    let sample_json = serde_json::to_string_pretty(&sample)?;

    Ok(format!(
        "Analyze these {count} competitor ads from {brand} for strategic \
         competitive intelligence:\n\n{sample_json}\n\n\
         Provide a brief competitive analysis with:\n\n\
         ## MESSAGING STRATEGY\n\
         - Key value propositions and themes\n\
         - Competitive positioning\n\n\
         ## CREATIVE INSIGHTS\n\
         - Media format strategy\n\
         - CTA patterns and platform distribution\n\n\
         ## TACTICAL RECOMMENDATIONS\n\
         - 3 specific counter-messaging strategies\n\
         - 1 unique positioning angle\n\n\
         Keep the analysis concise and actionable.",
        count = ads.len(),
    ))
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}
