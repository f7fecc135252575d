use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let apify_api_token = require("APIFY_API_TOKEN")?;
    let actor_id = or_default("ADINTEL_ACTOR_ID", "JJghSZmShuco4j9gJ");
    let anthropic_api_key = lookup("ANTHROPIC_API_KEY").ok();
    let summary_model = or_default("ADINTEL_SUMMARY_MODEL", "claude-3-5-sonnet-20241022");
    let webhook_url = lookup("ADINTEL_WEBHOOK_URL").ok();

    let log_level = or_default("ADINTEL_LOG_LEVEL", "info");
    let brands_path = PathBuf::from(or_default("ADINTEL_BRANDS_PATH", "./config/brands.yaml"));

    let max_ads_per_brand = parse_u32("ADINTEL_MAX_ADS_PER_BRAND", "10")?;
    if max_ads_per_brand == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ADINTEL_MAX_ADS_PER_BRAND".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let lookback_days = parse_u32("ADINTEL_LOOKBACK_DAYS", "7")?;

    let request_timeout_secs = parse_u64("ADINTEL_REQUEST_TIMEOUT_SECS", "30")?;
    let status_timeout_secs = parse_u64("ADINTEL_STATUS_TIMEOUT_SECS", "10")?;
    let poll_interval_secs = parse_u64("ADINTEL_POLL_INTERVAL_SECS", "10")?;
    let poll_budget_secs = parse_u64("ADINTEL_POLL_BUDGET_SECS", "120")?;
    let user_agent = or_default("ADINTEL_USER_AGENT", "adintel/0.1 (ad-intelligence)");

    Ok(AppConfig {
        apify_api_token,
        actor_id,
        anthropic_api_key,
        summary_model,
        webhook_url,
        log_level,
        brands_path,
        max_ads_per_brand,
        lookback_days,
        request_timeout_secs,
        status_timeout_secs,
        poll_interval_secs,
        poll_budget_secs,
        user_agent,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("APIFY_API_TOKEN", "test-token");
        m
    }

    #[test]
    fn build_app_config_fails_without_apify_token() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "APIFY_API_TOKEN"),
            "expected MissingEnvVar(APIFY_API_TOKEN), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_all_required_vars() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.apify_api_token, "test-token");
        assert_eq!(cfg.actor_id, "JJghSZmShuco4j9gJ");
        assert!(cfg.anthropic_api_key.is_none());
        assert!(cfg.webhook_url.is_none());
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.max_ads_per_brand, 10);
        assert_eq!(cfg.lookback_days, 7);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.status_timeout_secs, 10);
        assert_eq!(cfg.poll_interval_secs, 10);
        assert_eq!(cfg.poll_budget_secs, 120);
        assert_eq!(cfg.user_agent, "adintel/0.1 (ad-intelligence)");
    }

    #[test]
    fn build_app_config_reads_optional_keys() {
        let mut map = full_env();
        map.insert("ANTHROPIC_API_KEY", "sk-test");
        map.insert("ADINTEL_WEBHOOK_URL", "https://hooks.example.com/x");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.anthropic_api_key.as_deref(), Some("sk-test"));
        assert_eq!(
            cfg.webhook_url.as_deref(),
            Some("https://hooks.example.com/x")
        );
    }

    #[test]
    fn build_app_config_max_ads_override() {
        let mut map = full_env();
        map.insert("ADINTEL_MAX_ADS_PER_BRAND", "25");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.max_ads_per_brand, 25);
    }

    #[test]
    fn build_app_config_rejects_zero_max_ads() {
        let mut map = full_env();
        map.insert("ADINTEL_MAX_ADS_PER_BRAND", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADINTEL_MAX_ADS_PER_BRAND"),
            "expected InvalidEnvVar(ADINTEL_MAX_ADS_PER_BRAND), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_non_numeric_poll_budget() {
        let mut map = full_env();
        map.insert("ADINTEL_POLL_BUDGET_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADINTEL_POLL_BUDGET_SECS"),
            "expected InvalidEnvVar(ADINTEL_POLL_BUDGET_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_poll_overrides() {
        let mut map = full_env();
        map.insert("ADINTEL_POLL_INTERVAL_SECS", "5");
        map.insert("ADINTEL_POLL_BUDGET_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.poll_interval_secs, 5);
        assert_eq!(cfg.poll_budget_secs, 60);
    }

    #[test]
    fn debug_redacts_secrets() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("test-token"), "token leaked: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }
}
