//! Locally computed report text.
//!
//! This is both the default analysis (when no summarization key is
//! configured) and the fallback whenever the summarization service is
//! unavailable. Output is plain markdown and fully deterministic.

use chrono::{DateTime, Utc};

use adintel_insights::{InsightSummary, NormalizedAd, THEMES};

/// Render the analysis section for one brand.
///
/// An empty ad set produces the market-opportunity section rather than an
/// error: absence of competitor ads is itself a finding.
#[must_use]
pub fn render_brand_section(brand: &str, summary: &InsightSummary, ads: &[NormalizedAd]) -> String {
    if ads.is_empty() {
        return format!(
            "## {brand} Market Status\n\n\
             No active ads detected. Market opportunity window identified.\n"
        );
    }

    let mut out = format!("## {brand} Competitive Analysis\n\n");

    out.push_str(&format!(
        "{total} ads collected ({active} active). \
         {headlines} distinct headlines across {pages} landing pages; \
         average run time {days} days.\n\n",
        total = summary.total_ads,
        active = summary.active_count,
        headlines = summary.unique_headlines,
        pages = summary.unique_landing_pages,
        days = summary.avg_days_running,
    ));

    out.push_str("### Top headlines\n\n");
    for headline in ads
        .iter()
        .map(|ad| ad.headline.as_str())
        .filter(|h| !h.is_empty())
        .take(3)
    {
        out.push_str(&format!("- \"{headline}\"\n"));
    }
    out.push('\n');

    out.push_str(&format!(
        "### Media mix\n\nvideo {video}, image {image}, text-only {text_only}\n\n",
        video = summary.media.video,
        image = summary.media.image,
        text_only = summary.media.text_only,
    ));

    if !summary.platform_counts.is_empty() {
        let platforms = summary
            .platform_counts
            .iter()
            .map(|(platform, count)| format!("{platform} {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("### Platforms\n\n{platforms}\n\n"));
    }

    out.push_str("### Messaging themes\n\n");
    // THEMES order, not map order, so the section reads the same run to run.
    for (name, _) in THEMES {
        let count = summary.theme_counts.get(*name).copied().unwrap_or(0);
        let verdict = if count > 0 {
            format!("present in {count} of {} ads", summary.total_ads)
        } else {
            "not detected".to_string()
        };
        out.push_str(&format!("- {name}: {verdict}\n"));
    }
    out.push('\n');

    out.push_str(&format!(
        "### Tactical recommendations\n\n\
         1. A/B test variations of the strongest competitor headlines.\n\
         2. Review the {pages} distinct landing pages for conversion patterns.\n\
         3. Position against the dominant messaging themes above.\n",
        pages = summary.unique_landing_pages,
    ));

    out
}

/// Render the section for a brand whose collection attempt failed.
///
/// Kept distinct from the empty-market section: a failure means the
/// competitor's ads are unknown, not absent.
#[must_use]
pub fn render_failure_section(brand: &str, reason: &str) -> String {
    format!(
        "## {brand} Collection Failed\n\n\
         Ad collection did not complete: {reason}. \
         Results for this brand are unavailable, not necessarily absent.\n"
    )
}

/// Assemble the full multi-brand report.
#[must_use]
pub fn render_report(
    generated_at: DateTime<Utc>,
    sections: &[String],
    brand_count: usize,
    total_ads: usize,
) -> String {
    let mut out = format!(
        "# Competitive Intelligence Report - {date}\n\nGenerated: {timestamp}\n\n",
        date = generated_at.format("%A, %B %d, %Y"),
        timestamp = generated_at.format("%Y-%m-%d %H:%M:%S"),
    );

    for section in sections {
        out.push_str(section);
        out.push_str("\n---\n\n");
    }

    out.push_str(&format!(
        "## Analysis Summary\n\n\
         - Brands analyzed: {brand_count}\n\
         - Total ads collected: {total_ads}\n"
    ));

    out
}
