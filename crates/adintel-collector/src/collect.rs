//! The submit/poll/fetch protocol for one brand's ad collection.

use std::time::Duration;

use adintel_core::BrandConfig;

use crate::client::ActorClient;
use crate::error::CollectorError;
use crate::types::{AdRecord, JobRequest, JobStatus};

/// Local waiting policy for a scrape job.
///
/// The budget is soft: exhausting it does not fail the run, it only stops
/// the waiting and fetches whatever records exist at that point.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    pub interval: Duration,
    pub budget: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            budget: Duration::from_secs(120),
        }
    }
}

/// Result of one brand's collection attempt.
///
/// `collect_brand` never panics and never returns a `Result`: every path
/// lands in one of these variants, so callers can distinguish a brand with
/// no ads from a collection that broke.
#[derive(Debug)]
pub enum CollectionOutcome {
    /// At least one record was retrieved (already truncated to the cap).
    Collected(Vec<AdRecord>),
    /// The job completed and the dataset was readable, but held no records.
    Empty,
    /// Collection did not complete; the records for this brand are unknown,
    /// not necessarily absent.
    Failed(CollectorError),
}

impl CollectionOutcome {
    /// The retrieved records; empty for `Empty` and `Failed`.
    #[must_use]
    pub fn records(&self) -> &[AdRecord] {
        match self {
            CollectionOutcome::Collected(records) => records,
            CollectionOutcome::Empty | CollectionOutcome::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, CollectionOutcome::Failed(_))
    }
}

/// Collect up to `max_ads` records for one brand.
///
/// Protocol:
/// 1. Resolve the brand's lookup URL; a brand with neither page id nor
///    usable domain fails soft with a configuration error.
/// 2. Submit the scrape job. A non-201 answer fails without retry.
/// 3. Poll the run status on `policy.interval` until the job succeeds, a
///    terminal failure status appears, or `policy.budget` of wall-clock
///    waiting is spent. Budget exhaustion is not an error.
/// 4. Fetch the dataset items and truncate to `max_ads`.
///
/// Any network error along the way abandons the attempt; nothing is retried
/// and nothing escapes as an `Err`.
pub async fn collect_brand(
    client: &ActorClient,
    brand: &BrandConfig,
    policy: &PollPolicy,
    max_ads: usize,
) -> CollectionOutcome {
    let slug = brand.slug();

    let Some(lookup_url) = brand.lookup_url() else {
        tracing::warn!(brand = %slug, "no page id or usable domain configured");
        return CollectionOutcome::Failed(CollectorError::Configuration(format!(
            "brand '{}' has no usable lookup target",
            brand.name
        )));
    };

    let request = JobRequest::new(lookup_url, u32::try_from(max_ads).unwrap_or(u32::MAX));

    let mut handle = match client.submit_run(&request).await {
        Ok(handle) => handle,
        Err(e) => {
            tracing::warn!(brand = %slug, error = %e, "job submission failed");
            return CollectionOutcome::Failed(e);
        }
    };
    tracing::info!(brand = %slug, run_id = %handle.run_id, "scrape job submitted");

    let mut waited = Duration::ZERO;
    loop {
        match client.run_status(&handle.run_id).await {
            Ok((status, dataset_id)) => {
                if handle.dataset_id.is_empty() && !dataset_id.is_empty() {
                    handle.dataset_id = dataset_id;
                }
                if status == JobStatus::Succeeded {
                    tracing::debug!(brand = %slug, run_id = %handle.run_id, "scrape job succeeded");
                    break;
                }
                if status.is_failure() {
                    tracing::warn!(brand = %slug, %status, "scrape job failed");
                    return CollectionOutcome::Failed(CollectorError::JobFailed(status));
                }
            }
            Err(e) => {
                tracing::warn!(brand = %slug, error = %e, "status poll failed; abandoning run");
                return CollectionOutcome::Failed(e);
            }
        }

        if waited >= policy.budget {
            // Soft timeout: the job keeps running server-side, but we fetch
            // whatever records already landed in the dataset.
            tracing::info!(
                brand = %slug,
                waited_secs = waited.as_secs(),
                "wait budget exhausted; fetching partial results"
            );
            break;
        }
        tokio::time::sleep(policy.interval).await;
        waited += policy.interval;
    }

    if handle.dataset_id.is_empty() {
        return CollectionOutcome::Failed(CollectorError::Fetch(format!(
            "run {} reported no dataset id",
            handle.run_id
        )));
    }

    let mut records = match client.fetch_dataset_items(&handle.dataset_id).await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(brand = %slug, error = %e, "dataset fetch failed");
            return CollectionOutcome::Failed(e);
        }
    };
    records.truncate(max_ads);

    if records.is_empty() {
        tracing::info!(brand = %slug, "collection complete: no ads");
        CollectionOutcome::Empty
    } else {
        tracing::info!(brand = %slug, count = records.len(), "collection complete");
        CollectionOutcome::Collected(records)
    }
}
