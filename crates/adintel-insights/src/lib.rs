//! Insight extraction over collected ad records.
//!
//! Normalizes the scraper's heterogeneous record shapes into one internal
//! [`NormalizedAd`] shape, then aggregates a collection of normalized ads
//! into an [`InsightSummary`]: media mix, platform mix, CTA frequency,
//! keyword-driven messaging themes, and performance indicators. Everything
//! here is pure and deterministic; identical input always yields identical
//! counts.

mod normalize;
mod summary;
mod themes;

pub use normalize::{normalize, MediaType, NormalizedAd};
pub use summary::{summarize, InsightSummary, MediaMix};
pub use themes::THEMES;
