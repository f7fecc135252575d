//! Aggregate statistics over a collection of normalized ads.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::normalize::{MediaType, NormalizedAd};
use crate::themes::THEMES;

/// Counts of ads by dominant media type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MediaMix {
    pub video: usize,
    pub image: usize,
    pub text_only: usize,
}

impl MediaMix {
    #[must_use]
    pub fn total(&self) -> usize {
        self.video + self.image + self.text_only
    }
}

/// Aggregate view of one brand's collected ads.
///
/// Created fresh per analysis run; all maps are ordered so that the same
/// input always renders and serializes identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightSummary {
    pub media: MediaMix,
    /// Ads per publisher platform. One ad can appear under several platforms.
    pub platform_counts: BTreeMap<String, usize>,
    /// Frequency of non-empty CTA labels, exact string match.
    pub cta_counts: BTreeMap<String, usize>,
    /// Ads flagged per messaging theme; every theme key is always present.
    pub theme_counts: BTreeMap<String, usize>,
    pub total_ads: usize,
    pub active_count: usize,
    /// Distinct non-empty headlines, case-sensitive.
    pub unique_headlines: usize,
    /// Distinct non-empty landing pages, case-sensitive.
    pub unique_landing_pages: usize,
    /// Mean active duration over the FULL ad set, floor division.
    pub avg_days_running: u32,
}

/// Derive the [`InsightSummary`] for a set of normalized ads.
///
/// An empty input produces an all-zero summary; no division happens when
/// there is nothing to divide.
#[must_use]
pub fn summarize(ads: &[NormalizedAd]) -> InsightSummary {
    let mut media = MediaMix::default();
    let mut platform_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut cta_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut theme_counts: BTreeMap<String, usize> = THEMES
        .iter()
        .map(|(name, _)| ((*name).to_string(), 0))
        .collect();

    let mut headlines: HashSet<&str> = HashSet::new();
    let mut landing_pages: HashSet<&str> = HashSet::new();
    let mut active_count = 0usize;
    let mut total_days = 0u64;

    for ad in ads {
        match ad.media_type {
            MediaType::Video => media.video += 1,
            MediaType::Image => media.image += 1,
            MediaType::TextOnly => media.text_only += 1,
        }

        for platform in &ad.platforms {
            *platform_counts.entry(platform.clone()).or_insert(0) += 1;
        }

        if !ad.cta_text.is_empty() {
            *cta_counts.entry(ad.cta_text.clone()).or_insert(0) += 1;
        }

        let text = format!("{} {}", ad.headline, ad.body_text).to_lowercase();
        for (name, keywords) in THEMES {
            if keywords.iter().any(|kw| text.contains(kw)) {
                *theme_counts.entry((*name).to_string()).or_insert(0) += 1;
            }
        }

        if !ad.headline.is_empty() {
            headlines.insert(ad.headline.as_str());
        }
        if !ad.landing_page.is_empty() {
            landing_pages.insert(ad.landing_page.as_str());
        }
        if ad.is_active {
            active_count += 1;
        }
        total_days += u64::from(ad.active_duration_days);
    }

    let avg_days_running = if ads.is_empty() {
        0
    } else {
        u32::try_from(total_days / ads.len() as u64).unwrap_or(u32::MAX)
    };

    InsightSummary {
        media,
        platform_counts,
        cta_counts,
        theme_counts,
        total_ads: ads.len(),
        active_count,
        unique_headlines: headlines.len(),
        unique_landing_pages: landing_pages.len(),
        avg_days_running,
    }
}
