//! Wire types for the scraping service and the ad records it returns.
//!
//! The service wraps run metadata in a `{"data": {...}}` envelope; ad records
//! arrive as loosely shaped JSON that is never trusted: every field is
//! optional on the wire and defaulted on read.

use serde::{Deserialize, Serialize};

/// Input for one scrape job. Immutable once submitted.
#[derive(Debug, Clone)]
pub struct JobRequest {
    /// Ad Library page URL the actor starts from.
    pub lookup_url: String,
    /// Maximum records the actor should produce.
    pub result_limit: u32,
    /// Service-side status filter; empty string collects all ads.
    pub status_filter: String,
}

impl JobRequest {
    #[must_use]
    pub fn new(lookup_url: String, result_limit: u32) -> Self {
        Self {
            lookup_url,
            result_limit,
            status_filter: String::new(),
        }
    }

    pub(crate) fn actor_input(&self) -> ActorInput<'_> {
        ActorInput {
            start_urls: [StartUrl {
                url: &self.lookup_url,
            }],
            results_limit: self.result_limit,
            active_status: &self.status_filter,
        }
    }
}

/// The actor-input JSON shape the service expects on submission.
#[derive(Debug, Serialize)]
pub(crate) struct ActorInput<'a> {
    #[serde(rename = "startUrls")]
    pub start_urls: [StartUrl<'a>; 1],
    #[serde(rename = "resultsLimit")]
    pub results_limit: u32,
    #[serde(rename = "activeStatus")]
    pub active_status: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct StartUrl<'a> {
    pub url: &'a str,
}

/// Handle for a submitted run. The dataset id may be empty at submission
/// time; it is filled in from a later status poll once the job is running.
#[derive(Debug, Clone)]
pub struct JobHandle {
    pub run_id: String,
    pub dataset_id: String,
}

/// Envelope wrapping run metadata: `{"data": {"id": ..., "status": ...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct RunEnvelope {
    pub data: RunData,
}

/// Run metadata returned by both submission and status endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct RunData {
    pub id: String,
    #[serde(default, rename = "defaultDatasetId")]
    pub default_dataset_id: String,
    pub status: JobStatus,
}

/// Lifecycle status of a scrape job as reported by the service.
///
/// `Succeeded`, `Failed`, `Aborted`, and `TimedOut` are terminal; the last
/// three are terminal failures. The service's transitional `ABORTING` and
/// `TIMING-OUT` strings map onto their terminal counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "READY", alias = "QUEUED")]
    Queued,
    #[serde(rename = "RUNNING")]
    Running,
    #[serde(rename = "SUCCEEDED")]
    Succeeded,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "ABORTED", alias = "ABORTING")]
    Aborted,
    #[serde(rename = "TIMED-OUT", alias = "TIMING-OUT")]
    TimedOut,
}

impl JobStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            JobStatus::Succeeded | JobStatus::Failed | JobStatus::Aborted | JobStatus::TimedOut
        )
    }

    /// True for the terminal statuses that mean the job produced no usable run.
    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            JobStatus::Failed | JobStatus::Aborted | JobStatus::TimedOut
        )
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobStatus::Queued => "QUEUED",
            JobStatus::Running => "RUNNING",
            JobStatus::Succeeded => "SUCCEEDED",
            JobStatus::Failed => "FAILED",
            JobStatus::Aborted => "ABORTED",
            JobStatus::TimedOut => "TIMED-OUT",
        };
        write!(f, "{s}")
    }
}

/// One ad record from the result dataset. Externally owned and loosely
/// typed; unknown fields are ignored and known fields are all optional.
#[derive(Debug, Clone, Deserialize)]
pub struct AdRecord {
    #[serde(default)]
    pub snapshot: Option<AdSnapshot>,
    #[serde(default, rename = "publisherPlatform")]
    pub publisher_platform: Vec<String>,
    #[serde(default, rename = "isActive")]
    pub is_active: bool,
    /// Epoch seconds when the ad started delivering.
    #[serde(default, rename = "startDate")]
    pub start_date: Option<i64>,
    /// Epoch seconds when the ad stopped (or the scrape time for live ads).
    #[serde(default, rename = "endDate")]
    pub end_date: Option<i64>,
    #[serde(default, rename = "pageName")]
    pub page_name: Option<String>,
}

/// The creative container inside an [`AdRecord`].
///
/// Two shapes exist in the wild: the current scraper emits a `cards` array
/// with one entry per creative variant, while older records carry the
/// creative fields directly on the snapshot. A non-empty `cards` array is
/// the discriminator between the two.
#[derive(Debug, Clone, Deserialize)]
pub struct AdSnapshot {
    #[serde(default)]
    pub cards: Vec<AdCard>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "linkTitle")]
    pub link_title: Option<String>,
    #[serde(default)]
    pub body: Option<BodyField>,
    #[serde(default, rename = "adCreativeBody")]
    pub ad_creative_body: Option<String>,
    #[serde(default, rename = "linkUrl")]
    pub link_url: Option<String>,
    #[serde(default, rename = "ctaText")]
    pub cta_text: Option<String>,
    #[serde(default, rename = "videoHdUrl")]
    pub video_hd_url: Option<String>,
    #[serde(default, rename = "videoSdUrl")]
    pub video_sd_url: Option<String>,
    #[serde(default, rename = "originalImageUrl")]
    pub original_image_url: Option<String>,
}

/// One creative variant within a creative-card snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct AdCard {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<BodyField>,
    #[serde(default, rename = "linkUrl")]
    pub link_url: Option<String>,
    #[serde(default, rename = "ctaText")]
    pub cta_text: Option<String>,
    #[serde(default, rename = "videoHdUrl")]
    pub video_hd_url: Option<String>,
    #[serde(default, rename = "videoSdUrl")]
    pub video_sd_url: Option<String>,
    #[serde(default, rename = "originalImageUrl")]
    pub original_image_url: Option<String>,
}

/// Body text arrives either as a bare string or as `{"text": "..."}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BodyField {
    Text(String),
    Markup {
        #[serde(default)]
        text: String,
    },
}

impl BodyField {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            BodyField::Text(s) => s,
            BodyField::Markup { text } => text,
        }
    }
}
