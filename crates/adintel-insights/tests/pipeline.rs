//! End-to-end extraction tests: raw dataset records through normalize and
//! summarize, using record shapes captured from real scraper output.

use adintel_collector::AdRecord;
use adintel_insights::{normalize, summarize, MediaType};

fn records(value: serde_json::Value) -> Vec<AdRecord> {
    serde_json::from_value(value).expect("test records should deserialize")
}

const DAY: i64 = 86_400;

#[test]
fn creative_card_scenario_produces_expected_indicators() {
    // Three creative-card records, two active, running 2, 4, and 6 days.
    let raw = records(serde_json::json!([
        {
            "snapshot": {
                "cards": [{
                    "title": "Your daily greens, one scoop",
                    "body": {"text": "Clinically studied foundational nutrition"},
                    "linkUrl": "https://drinkag1.com/start",
                    "ctaText": "Shop Now",
                    "videoHdUrl": "https://cdn.example.com/a.mp4"
                }]
            },
            "publisherPlatform": ["facebook", "instagram"],
            "isActive": true,
            "startDate": 0,
            "endDate": 2 * DAY,
            "pageName": "AG1"
        },
        {
            "snapshot": {
                "cards": [{
                    "title": "Feel the difference in 30 days",
                    "body": {"text": "Energy and focus from 75 vitamins and minerals"},
                    "linkUrl": "https://drinkag1.com/trial",
                    "ctaText": "Learn More",
                    "originalImageUrl": "https://cdn.example.com/b.jpg"
                }]
            },
            "publisherPlatform": ["facebook"],
            "isActive": true,
            "startDate": 0,
            "endDate": 4 * DAY,
            "pageName": "AG1"
        },
        {
            "snapshot": {
                "cards": [{
                    "title": "Trusted by athletes",
                    "body": {"text": "Rated by thousands of customers"}
                }]
            },
            "publisherPlatform": ["audience_network"],
            "isActive": false,
            "startDate": 0,
            "endDate": 6 * DAY,
            "pageName": "AG1"
        }
    ]));

    let ads: Vec<_> = raw.iter().filter_map(normalize).collect();
    assert_eq!(ads.len(), 3);

    let summary = summarize(&ads);
    assert_eq!(summary.total_ads, 3);
    assert_eq!(summary.active_count, 2);
    assert_eq!(summary.avg_days_running, 4);
    assert_eq!(summary.unique_headlines, 3);
    assert_eq!(summary.unique_landing_pages, 2);
    assert_eq!(summary.media.video, 1);
    assert_eq!(summary.media.image, 1);
    assert_eq!(summary.media.text_only, 1);
    assert_eq!(summary.platform_counts["facebook"], 2);
    assert_eq!(summary.cta_counts["Shop Now"], 1);
    assert_eq!(summary.theme_counts["science"], 1);
    assert_eq!(summary.theme_counts["convenience"], 1);
    assert_eq!(summary.theme_counts["energy"], 1);
    assert_eq!(summary.theme_counts["social_proof"], 1);
}

#[test]
fn media_counts_sum_to_recognized_creative_shapes() {
    // Mixed batch: two card records, one legacy flat record, one record
    // with no snapshot at all. Only the first three normalize.
    let raw = records(serde_json::json!([
        {"snapshot": {"cards": [{"videoHdUrl": "https://cdn.example.com/v.mp4"}]}},
        {"snapshot": {"cards": [{"originalImageUrl": "https://cdn.example.com/i.jpg"}]}},
        {"snapshot": {"linkTitle": "Legacy", "body": "flat shape"}},
        {"isActive": true}
    ]));

    let ads: Vec<_> = raw.iter().filter_map(normalize).collect();
    assert_eq!(ads.len(), 3, "snapshot-less record must not normalize");

    let summary = summarize(&ads);
    assert_eq!(summary.media.total(), ads.len());
    assert_eq!(summary.media.video, 1);
    assert_eq!(summary.media.image, 1);
    assert_eq!(summary.media.text_only, 1);
}

#[test]
fn mixed_shapes_normalize_consistently() {
    let raw = records(serde_json::json!([
        {
            "snapshot": {
                "cards": [{"title": "Card ad", "ctaText": "Shop Now"}],
                "title": "unused fallback"
            },
            "isActive": true
        },
        {
            "snapshot": {
                "linkTitle": "Flat ad",
                "adCreativeBody": "classic creative text",
                "linkUrl": "https://example.com/old"
            }
        }
    ]));

    let ads: Vec<_> = raw.iter().filter_map(normalize).collect();
    assert_eq!(ads[0].headline, "Card ad");
    assert_eq!(ads[0].media_type, MediaType::TextOnly);
    assert_eq!(ads[1].headline, "Flat ad");
    assert_eq!(ads[1].body_text, "classic creative text");
    assert_eq!(ads[1].landing_page, "https://example.com/old");
}
