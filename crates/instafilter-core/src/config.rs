//! Pipeline configuration.
//!
//! ```toml
//! default_filter = "CIVignetteEffect"
//! default_intensity = 0.4
//! jpeg_quality = 85
//! ```
//!
//! Every key is optional; missing keys take the built-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encode::DEFAULT_JPEG_QUALITY;
use crate::filter::{find_filter, DEFAULT_FILTER, DEFAULT_INTENSITY, FILTERS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown default filter: {0}")]
    UnknownFilter(String),

    #[error("Default intensity {0} is outside 0.0..=1.0")]
    IntensityOutOfRange(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Filter selected at startup.
    pub default_filter: String,
    /// Slider position at startup (0.0 to 1.0).
    pub default_intensity: f32,
    /// JPEG quality used when saving (1 to 100).
    pub jpeg_quality: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_filter: DEFAULT_FILTER.name.to_string(),
            default_intensity: DEFAULT_INTENSITY,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if find_filter(FILTERS, &self.default_filter).is_none() {
            return Err(ConfigError::UnknownFilter(self.default_filter.clone()));
        }
        if !(0.0..=1.0).contains(&self.default_intensity) {
            return Err(ConfigError::IntensityOutOfRange(self.default_intensity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert_eq!(config.default_filter, "CISepiaTone");
        assert_eq!(config.default_intensity, 0.5);
        assert_eq!(config.jpeg_quality, 90);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = PipelineConfig::from_toml_str("default_filter = \"CIBloom\"").unwrap();
        assert_eq!(config.default_filter, "CIBloom");
        assert_eq!(config.default_intensity, 0.5);
    }

    #[test]
    fn test_unknown_filter_rejected() {
        let err = PipelineConfig::from_toml_str("default_filter = \"CIGlitter\"").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFilter(ref name) if name == "CIGlitter"));
    }

    #[test]
    fn test_intensity_out_of_range_rejected() {
        let err = PipelineConfig::from_toml_str("default_intensity = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::IntensityOutOfRange(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = PipelineConfig::from_toml_str("default_intensity = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_filter = \"CITwirlDistortion\"").unwrap();
        writeln!(file, "jpeg_quality = 70").unwrap();

        let config = PipelineConfig::load(file.path()).unwrap();
        assert_eq!(config.default_filter, "CITwirlDistortion");
        assert_eq!(config.jpeg_quality, 70);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PipelineConfig::load("/nonexistent/instafilter.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
