//! UI configuration file
//!
//! ```json
//! {
//!   "platform": "android",
//!   "classRules": [{ "prefix": "tint-", "category": "tint" }]
//! }
//! ```
//!
//! Both fields are optional. Extra class rules take priority over the
//! built-in taxonomy.

use crate::components::StyleContext;
use crate::elevation::ElevationResolver;
use crate::style::{CategoryRule, ClassMerger, ClassTaxonomy, StyleError};
use app_platform::PlatformKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid configuration JSON
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A class rule is invalid
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// UI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Platform override; the process-wide platform is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformKind>,

    /// Additional class categories
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_rules: Vec<CategoryRule>,
}

impl UiConfig {
    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            rules = config.class_rules.len(),
            "Loaded UI config"
        );
        Ok(config)
    }

    /// Build the style context this configuration describes
    pub fn into_context(self) -> Result<StyleContext> {
        let taxonomy = ClassTaxonomy::default().with_rules(self.class_rules)?;
        let platform = self.platform.unwrap_or_else(app_platform::current);
        Ok(StyleContext::new(
            ClassMerger::new(taxonomy),
            ElevationResolver::new(platform),
        ))
    }
}
