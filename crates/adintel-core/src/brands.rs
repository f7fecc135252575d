use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One tracked competitor brand from the YAML roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    /// Facebook page identifier, e.g. `"183869772601"`. Preferred lookup target.
    pub page_id: Option<String>,
    /// Company domain, e.g. `"drinkag1.com"`. Fallback lookup target.
    pub domain: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

impl BrandConfig {
    /// Generate a URL-safe slug from the brand name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Resolve the Ad Library lookup URL for this brand.
    ///
    /// A configured page identifier wins. Otherwise the domain is reduced to
    /// a page-name guess by stripping the trailing TLD segment and any
    /// remaining punctuation (`drinkag1.com` becomes `drinkag1`). The domain
    /// path is best-effort only; there is no guarantee the guessed page
    /// exists. Returns `None` when neither field yields a usable target.
    #[must_use]
    pub fn lookup_url(&self) -> Option<String> {
        if let Some(id) = self.page_id.as_deref() {
            let id = id.trim();
            if !id.is_empty() {
                return Some(format!("https://www.facebook.com/{id}"));
            }
        }

        let domain = self.domain.as_deref()?.trim();
        if domain.is_empty() {
            return None;
        }
        let stem = domain.rsplit_once('.').map_or(domain, |(head, _tld)| head);
        let stem: String = stem.chars().filter(char::is_ascii_alphanumeric).collect();
        if stem.is_empty() {
            None
        } else {
            Some(format!("https://www.facebook.com/{stem}"))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BrandsFile {
    pub brands: Vec<BrandConfig>,
}

/// Load and validate the brands configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brands(path: &Path) -> Result<BrandsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let brands_file: BrandsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::BrandsFileParse)?;

    validate_brands(&brands_file)?;

    Ok(brands_file)
}

fn validate_brands(brands_file: &BrandsFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();
    let mut seen_slugs = HashSet::new();

    for brand in &brands_file.brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }

        let lower_name = brand.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.name
            )));
        }

        let slug = brand.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand slug: '{}' (from brand '{}')",
                slug, brand.name
            )));
        }
    }

    Ok(())
}
