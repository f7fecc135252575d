//! Normalization of raw ad records into the internal shape.

use std::collections::BTreeSet;

use adintel_collector::{AdCard, AdRecord, AdSnapshot};
use serde::Serialize;

const SECONDS_PER_DAY: i64 = 86_400;

/// Dominant media type of an ad's representative creative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Video,
    Image,
    TextOnly,
}

/// One ad, reduced to the fields the insight pass works with.
///
/// Missing source fields become empty strings, an empty set, or zero, so
/// downstream aggregation never has to special-case absence. Derived once
/// per record and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedAd {
    pub headline: String,
    pub body_text: String,
    pub landing_page: String,
    pub cta_text: String,
    pub media_type: MediaType,
    pub platforms: BTreeSet<String>,
    pub is_active: bool,
    pub active_duration_days: u32,
    pub page_name: String,
}

/// The two known creative shapes, told apart by the `cards` array.
enum Creative<'a> {
    /// Current scraper shape: the first card stands in for the ad.
    Card(&'a AdCard, &'a AdSnapshot),
    /// Legacy flat shape: creative fields live on the snapshot itself.
    Flat(&'a AdSnapshot),
}

fn creative(snapshot: &AdSnapshot) -> Creative<'_> {
    match snapshot.cards.first() {
        Some(card) => Creative::Card(card, snapshot),
        None => Creative::Flat(snapshot),
    }
}

/// Picks the first non-empty candidate, else the empty string.
fn pick(primary: Option<&str>, fallback: Option<&str>) -> String {
    primary
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.filter(|s| !s.is_empty()))
        .unwrap_or_default()
        .to_string()
}

/// Video wins over image when both assets are present; no asset at all
/// means a text-only ad.
fn media_type(video_hd: Option<&str>, video_sd: Option<&str>, image: Option<&str>) -> MediaType {
    let has = |v: Option<&str>| v.is_some_and(|s| !s.is_empty());
    if has(video_hd) || has(video_sd) {
        MediaType::Video
    } else if has(image) {
        MediaType::Image
    } else {
        MediaType::TextOnly
    }
}

fn active_duration_days(start: Option<i64>, end: Option<i64>) -> u32 {
    match (start, end) {
        (Some(start), Some(end)) if end > start => {
            u32::try_from((end - start) / SECONDS_PER_DAY).unwrap_or(u32::MAX)
        }
        _ => 0,
    }
}

/// Reduce one raw record to a [`NormalizedAd`].
///
/// Returns `None` when the record carries no snapshot at all; without a
/// creative container there is nothing to extract. Both known shapes are
/// handled; in the card shape the snapshot-level fields serve as fallbacks
/// for blanks on the card, matching what the scraper emits.
#[must_use]
pub fn normalize(record: &AdRecord) -> Option<NormalizedAd> {
    let snapshot = record.snapshot.as_ref()?;

    let (headline, body_text, landing_page, cta_text, media) = match creative(snapshot) {
        Creative::Card(card, snapshot) => (
            pick(card.title.as_deref(), snapshot.title.as_deref()),
            pick(
                card.body.as_ref().map(|b| b.text()),
                snapshot.body.as_ref().map(|b| b.text()),
            ),
            pick(card.link_url.as_deref(), snapshot.link_url.as_deref()),
            pick(card.cta_text.as_deref(), snapshot.cta_text.as_deref()),
            media_type(
                card.video_hd_url.as_deref(),
                card.video_sd_url.as_deref(),
                card.original_image_url.as_deref(),
            ),
        ),
        Creative::Flat(snapshot) => (
            pick(snapshot.link_title.as_deref(), snapshot.title.as_deref()),
            pick(
                snapshot.body.as_ref().map(|b| b.text()),
                snapshot.ad_creative_body.as_deref(),
            ),
            pick(snapshot.link_url.as_deref(), None),
            pick(snapshot.cta_text.as_deref(), None),
            media_type(
                snapshot.video_hd_url.as_deref(),
                snapshot.video_sd_url.as_deref(),
                snapshot.original_image_url.as_deref(),
            ),
        ),
    };

    Some(NormalizedAd {
        headline,
        body_text,
        landing_page,
        cta_text,
        media_type: media,
        platforms: record.publisher_platform.iter().cloned().collect(),
        is_active: record.is_active,
        active_duration_days: active_duration_days(record.start_date, record.end_date),
        page_name: record.page_name.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: serde_json::Value) -> AdRecord {
        serde_json::from_value(value).expect("test record should deserialize")
    }

    #[test]
    fn no_snapshot_yields_none() {
        let r = record(serde_json::json!({"isActive": true}));
        assert!(normalize(&r).is_none());
    }

    #[test]
    fn card_shape_takes_first_card() {
        let r = record(serde_json::json!({
            "snapshot": {
                "cards": [
                    {
                        "title": "Card headline",
                        "body": {"text": "card body"},
                        "linkUrl": "https://example.com/a",
                        "ctaText": "Shop Now"
                    },
                    {"title": "Second card"}
                ]
            },
            "publisherPlatform": ["facebook", "instagram"],
            "isActive": true,
            "pageName": "AG1"
        }));
        let ad = normalize(&r).expect("card shape should normalize");
        assert_eq!(ad.headline, "Card headline");
        assert_eq!(ad.body_text, "card body");
        assert_eq!(ad.landing_page, "https://example.com/a");
        assert_eq!(ad.cta_text, "Shop Now");
        assert_eq!(ad.page_name, "AG1");
        assert!(ad.platforms.contains("facebook"));
        assert!(ad.platforms.contains("instagram"));
    }

    #[test]
    fn card_shape_falls_back_to_snapshot_fields() {
        let r = record(serde_json::json!({
            "snapshot": {
                "cards": [{}],
                "title": "Snapshot headline",
                "body": {"text": "snapshot body"},
                "linkUrl": "https://example.com/s"
            }
        }));
        let ad = normalize(&r).expect("should normalize");
        assert_eq!(ad.headline, "Snapshot headline");
        assert_eq!(ad.body_text, "snapshot body");
        assert_eq!(ad.landing_page, "https://example.com/s");
    }

    #[test]
    fn flat_shape_prefers_link_title_and_string_body() {
        let r = record(serde_json::json!({
            "snapshot": {
                "linkTitle": "Legacy headline",
                "title": "ignored",
                "body": "legacy body text",
                "linkUrl": "https://example.com/legacy"
            }
        }));
        let ad = normalize(&r).expect("should normalize");
        assert_eq!(ad.headline, "Legacy headline");
        assert_eq!(ad.body_text, "legacy body text");
        assert_eq!(ad.landing_page, "https://example.com/legacy");
        assert_eq!(ad.media_type, MediaType::TextOnly);
    }

    #[test]
    fn flat_shape_falls_back_to_ad_creative_body() {
        let r = record(serde_json::json!({
            "snapshot": {"adCreativeBody": "old creative body"}
        }));
        let ad = normalize(&r).expect("should normalize");
        assert_eq!(ad.body_text, "old creative body");
    }

    #[test]
    fn video_takes_precedence_over_image() {
        let r = record(serde_json::json!({
            "snapshot": {
                "cards": [{
                    "videoHdUrl": "https://cdn.example.com/ad.mp4",
                    "originalImageUrl": "https://cdn.example.com/ad.jpg"
                }]
            }
        }));
        let ad = normalize(&r).expect("should normalize");
        assert_eq!(ad.media_type, MediaType::Video);
    }

    #[test]
    fn sd_video_alone_counts_as_video() {
        let r = record(serde_json::json!({
            "snapshot": {"cards": [{"videoSdUrl": "https://cdn.example.com/sd.mp4"}]}
        }));
        let ad = normalize(&r).expect("should normalize");
        assert_eq!(ad.media_type, MediaType::Video);
    }

    #[test]
    fn image_without_video_is_image() {
        let r = record(serde_json::json!({
            "snapshot": {"cards": [{"originalImageUrl": "https://cdn.example.com/ad.jpg"}]}
        }));
        let ad = normalize(&r).expect("should normalize");
        assert_eq!(ad.media_type, MediaType::Image);
    }

    #[test]
    fn missing_media_assets_default_to_text_only() {
        let r = record(serde_json::json!({
            "snapshot": {"cards": [{"title": "words only"}]}
        }));
        let ad = normalize(&r).expect("should normalize");
        assert_eq!(ad.media_type, MediaType::TextOnly);
    }

    #[test]
    fn empty_string_assets_do_not_count() {
        let r = record(serde_json::json!({
            "snapshot": {"cards": [{"videoHdUrl": "", "originalImageUrl": ""}]}
        }));
        let ad = normalize(&r).expect("should normalize");
        assert_eq!(ad.media_type, MediaType::TextOnly);
    }

    #[test]
    fn missing_fields_default_to_empty_not_null() {
        let r = record(serde_json::json!({"snapshot": {}}));
        let ad = normalize(&r).expect("should normalize");
        assert_eq!(ad.headline, "");
        assert_eq!(ad.body_text, "");
        assert_eq!(ad.landing_page, "");
        assert_eq!(ad.cta_text, "");
        assert_eq!(ad.page_name, "");
        assert!(ad.platforms.is_empty());
        assert!(!ad.is_active);
        assert_eq!(ad.active_duration_days, 0);
    }

    #[test]
    fn duration_is_floor_of_whole_days() {
        let r = record(serde_json::json!({
            "snapshot": {},
            "startDate": 0,
            "endDate": 2 * 86_400 + 86_399
        }));
        let ad = normalize(&r).expect("should normalize");
        assert_eq!(ad.active_duration_days, 2);
    }

    #[test]
    fn inverted_date_range_clamps_to_zero() {
        let r = record(serde_json::json!({
            "snapshot": {},
            "startDate": 1_000_000,
            "endDate": 900_000
        }));
        let ad = normalize(&r).expect("should normalize");
        assert_eq!(ad.active_duration_days, 0);
    }

    #[test]
    fn normalize_is_idempotent() {
        let r = record(serde_json::json!({
            "snapshot": {
                "cards": [{
                    "title": "Stable",
                    "body": {"text": "same in, same out"},
                    "originalImageUrl": "https://cdn.example.com/x.jpg"
                }]
            },
            "publisherPlatform": ["facebook"],
            "isActive": true,
            "startDate": 0,
            "endDate": 86_400
        }));
        let first = normalize(&r).expect("should normalize");
        let second = normalize(&r).expect("should normalize");
        assert_eq!(first, second);
    }
}
