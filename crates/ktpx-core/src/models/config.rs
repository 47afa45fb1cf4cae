//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{KtpxError, Result};

/// Main configuration for the ktpx pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KtpxConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of lines scanned for the name when no birth-date anchor
    /// bounds the window.
    pub name_window_span: usize,

    /// Additional ignore-vocabulary entries for the name window, matched
    /// case-insensitively as substrings like the built-in set.
    pub extra_ignore_words: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_window_span: crate::ktp::rules::name::DEFAULT_NAME_WINDOW_SPAN,
            extra_ignore_words: Vec::new(),
        }
    }
}

impl KtpxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| KtpxError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| KtpxError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_span() {
        let config = KtpxConfig::default();
        assert_eq!(config.extraction.name_window_span, 3);
        assert!(config.extraction.extra_ignore_words.is_empty());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: KtpxConfig =
            serde_json::from_str(r#"{"extraction":{"name_window_span":5}}"#).unwrap();
        assert_eq!(config.extraction.name_window_span, 5);
        assert!(config.extraction.extra_ignore_words.is_empty());
    }

    #[test]
    fn test_config_json_round_trip() {
        let mut config = KtpxConfig::default();
        config.extraction.extra_ignore_words.push("WNI".to_string());

        let json = serde_json::to_string(&config).unwrap();
        let back: KtpxConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.extraction.name_window_span, 3);
        assert_eq!(back.extraction.extra_ignore_words, vec!["WNI".to_string()]);
    }
}
