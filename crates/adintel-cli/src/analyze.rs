//! Per-run orchestration: collect, extract, summarize, assemble, deliver.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};

use adintel_collector::{collect_brand, ActorClient, CollectionOutcome, PollPolicy};
use adintel_core::{load_brands, AppConfig, BrandConfig};
use adintel_insights::{normalize, summarize, NormalizedAd};
use adintel_report::{
    render_brand_section, render_failure_section, render_report, SummaryClient, WebhookNotifier,
};

/// Run the full analysis for the active roster (or one brand of it).
///
/// Brands are processed sequentially; each gets its own collection attempt,
/// and a failed attempt costs that brand a failure section, never the run.
/// The finished report is saved under `reports/` and, when enabled and
/// configured, delivered to the webhook.
///
/// # Errors
///
/// Fails only on operator problems: unreadable roster, no matching active
/// brands, client construction, or an unwritable reports directory.
pub async fn run_analysis(
    config: &AppConfig,
    brand_filter: Option<&str>,
    notify: bool,
) -> anyhow::Result<String> {
    let roster = load_brands(&config.brands_path)?;
    let brands: Vec<&BrandConfig> = roster
        .brands
        .iter()
        .filter(|b| b.active)
        .filter(|b| brand_filter.is_none_or(|f| b.name.eq_ignore_ascii_case(f)))
        .collect();

    if brands.is_empty() {
        anyhow::bail!(
            "no active brands matched{}",
            brand_filter.map(|f| format!(" '{f}'")).unwrap_or_default()
        );
    }
    tracing::info!(count = brands.len(), "starting analysis run");

    let actor = ActorClient::new(
        &config.apify_api_token,
        &config.actor_id,
        config.request_timeout_secs,
        config.status_timeout_secs,
        &config.user_agent,
    )?;
    let summarizer = match config.anthropic_api_key.as_deref() {
        Some(key) => Some(SummaryClient::new(
            key,
            &config.summary_model,
            config.request_timeout_secs,
        )?),
        None => None,
    };
    let policy = PollPolicy {
        interval: Duration::from_secs(config.poll_interval_secs),
        budget: Duration::from_secs(config.poll_budget_secs),
    };

    let mut sections = Vec::with_capacity(brands.len());
    let mut total_ads = 0usize;

    let max_ads = usize::try_from(config.max_ads_per_brand).unwrap_or(usize::MAX);
    for &brand in &brands {
        let outcome = collect_brand(&actor, brand, &policy, max_ads).await;

        let section = match &outcome {
            CollectionOutcome::Failed(e) => {
                tracing::error!(brand = %brand.slug(), error = %e, "brand collection failed");
                render_failure_section(&brand.name, &e.to_string())
            }
            CollectionOutcome::Collected(_) | CollectionOutcome::Empty => {
                let records = outcome.records();
                total_ads += records.len();

                let ads: Vec<NormalizedAd> = records.iter().filter_map(normalize).collect();
                let summary = summarize(&ads);

                match &summarizer {
                    Some(client) => client.analyze_or_fallback(&brand.name, &summary, &ads).await,
                    None => render_brand_section(&brand.name, &summary, &ads),
                }
            }
        };
        sections.push(section);
    }

    let generated_at = Utc::now();
    let report = render_report(generated_at, &sections, brands.len(), total_ads);

    let path = save_report(&report, brand_filter.unwrap_or("all"), generated_at)?;
    tracing::info!(path = %path.display(), "report saved");

    if notify {
        if let Some(url) = config.webhook_url.as_deref() {
            WebhookNotifier::new(url, 10)?.send(&report).await;
        } else {
            tracing::debug!("no webhook URL configured; skipping notification");
        }
    }

    Ok(report)
}

/// Write the report to `reports/<scope>_<timestamp>.md` and return the path.
fn save_report(
    report: &str,
    scope: &str,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<PathBuf> {
    let dir = PathBuf::from("reports");
    std::fs::create_dir_all(&dir).context("failed to create reports directory")?;

    let filename = format!(
        "{}_{}.md",
        file_stem(scope),
        generated_at.format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(filename);
    std::fs::write(&path, report)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(path)
}

/// Reduce a brand filter to a filesystem-safe stem.
fn file_stem(scope: &str) -> String {
    let stem: String = scope
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();
    let trimmed = stem.trim_matches('-');
    if trimmed.is_empty() {
        "all".to_string()
    } else {
        trimmed.to_string()
    }
}
