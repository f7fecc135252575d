//! Shared configuration layer for the adintel workspace.
//!
//! Holds the env-derived [`AppConfig`], the YAML brand roster, and the
//! configuration error type. Configuration values are immutable once built
//! and passed explicitly into each operation; nothing in this crate mutates
//! ambient state after load.

mod app_config;
mod brands;
mod config;
mod error;

pub use app_config::AppConfig;
pub use brands::{load_brands, BrandConfig, BrandsFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
