//! Fixed keyword lists for messaging-theme classification.

/// The seven messaging themes and their trigger keywords.
///
/// A theme fires for an ad when ANY of its keywords appears as a substring
/// of the ad's lowercased headline + body text. Themes are not exclusive;
/// one ad can fire several.
pub const THEMES: &[(&str, &[&str])] = &[
    (
        "science",
        &["clinical", "research", "study", "proven", "science"],
    ),
    ("convenience", &["simple", "easy", "daily", "one scoop"]),
    ("energy", &["energy", "boost", "performance", "vitality"]),
    ("health", &["health", "wellness", "nutrition", "vitamin"]),
    ("premium", &["premium", "luxury", "finest", "quality"]),
    (
        "social_proof",
        &["trusted", "reviews", "customers", "rated", "recommended"],
    ),
    (
        "urgency",
        &["limited", "today only", "act now", "last chance", "don't miss"],
    ),
];
