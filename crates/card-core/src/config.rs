//! Card configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::money::Currency;
use crate::theme::Theme;
use crate::variant::{Classifier, RecencyWindow, DEFAULT_RECENCY_DAYS};

/// Configuration file for catalog cards.
///
/// ```toml
/// [catalog]
/// recency_days = 30
/// link_prefix = "/shoe"
/// currency = "USD"
///
/// [theme.colors]
/// primary = "hsl(340deg 65% 47%)"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Classification and linking.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Colours and weights.
    #[serde(default)]
    pub theme: Theme,
}

/// Catalog-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Days after release an item is shown as new.
    #[serde(default = "default_recency_days")]
    pub recency_days: u32,

    /// Path prefix for card links; the slug is appended.
    #[serde(default = "default_link_prefix")]
    pub link_prefix: String,

    /// Currency catalog amounts are quoted in, as an ISO code ("EUR").
    #[serde(default, deserialize_with = "deserialize_currency")]
    pub currency: Currency,
}

fn deserialize_currency<'de, D>(deserializer: D) -> Result<Currency, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    Currency::from_code(&code)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown currency code: {}", code)))
}

fn default_recency_days() -> u32 {
    DEFAULT_RECENCY_DAYS
}

fn default_link_prefix() -> String {
    "/shoe".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            recency_days: default_recency_days(),
            link_prefix: default_link_prefix(),
            currency: Currency::default(),
        }
    }
}

impl CardConfig {
    /// Load config from a file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let config = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            recency_days = config.catalog.recency_days,
            "loaded card config"
        );
        Ok(config)
    }

    /// Parse and validate TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, CardError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON.
    pub fn from_json_str(s: &str) -> Result<Self, CardError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), CardError> {
        RecencyWindow::days(self.catalog.recency_days)?;
        if !self.catalog.link_prefix.starts_with('/') {
            return Err(CardError::Config(format!(
                "link_prefix must start with '/': {:?}",
                self.catalog.link_prefix
            )));
        }
        Ok(())
    }

    /// Classifier using the configured window.
    ///
    /// An out-of-range window falls back to the default; [`CardConfig::validate`]
    /// reports it.
    pub fn classifier(&self) -> Classifier {
        Classifier::new(RecencyWindow::days(self.catalog.recency_days).unwrap_or_default())
    }

    /// Link target for an item slug.
    pub fn item_href(&self, slug: &str) -> String {
        format!("{}/{}", self.catalog.link_prefix.trim_end_matches('/'), slug)
    }
}
