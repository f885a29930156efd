use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// User-configurable app preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// UI language tag.
    pub language: String,
    /// Portfolio-wide default currency code; individual properties may
    /// override it.
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for the record collections.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "fr".into(),
            currency: "EUR".into(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("rentfolio")
    }
}
