use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::ScanError;

/// Tesseract whitelist for Indian ID cards: Latin letters, digits, common
/// punctuation and the Devanagari letters printed on the cards.
pub const DEFAULT_CHAR_WHITELIST: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 /:,-.()आअइईउऊएऐओऔकखगघङचछजझञटठडढणतथदधनपफबभमयरलवशषसहळक्षज्ञ";

/// Settings for the scan pipeline. Every key is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Tesseract language string
    pub languages: String,
    /// Page segmentation mode tried first (sparse text)
    pub page_seg_mode: String,
    /// Used when the first mode is rejected (uniform block)
    pub fallback_page_seg_mode: String,
    pub char_whitelist: String,
    /// Apply contrast/grayscale enhancement before recognition
    pub preprocess: bool,
    pub contrast_factor: f32,
    /// Tab the rows are appended to
    pub sheet_name: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            languages: "eng+hin".to_string(),
            page_seg_mode: "11".to_string(),
            fallback_page_seg_mode: "6".to_string(),
            char_whitelist: DEFAULT_CHAR_WHITELIST.to_string(),
            preprocess: true,
            contrast_factor: 1.5,
            sheet_name: "Documents".to_string(),
        }
    }
}

impl ScanConfig {
    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        let config: ScanConfig = serde_json::from_str(json)
            .map_err(|e| ScanError::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScanError> {
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            ScanError::ConfigError(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json(&contents)
    }

    fn validate(&self) -> Result<(), ScanError> {
        if self.languages.trim().is_empty() {
            return Err(ScanError::ConfigError("languages must not be empty".to_string()));
        }
        if !self.contrast_factor.is_finite() || self.contrast_factor <= 0.0 {
            return Err(ScanError::ConfigError(format!(
                "contrast_factor must be positive, got {}",
                self.contrast_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ScanConfig::from_json(r#"{"preprocess": false}"#).unwrap();
        assert!(!config.preprocess);
        assert_eq!(config.languages, "eng+hin");
        assert_eq!(config.page_seg_mode, "11");
        assert_eq!(config.sheet_name, "Documents");
    }

    #[test]
    fn test_rejects_non_positive_contrast() {
        let err = ScanConfig::from_json(r#"{"contrast_factor": 0.0}"#).unwrap_err();
        assert!(matches!(err, ScanError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(ScanConfig::from_json("{languages").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"languages": "eng", "contrast_factor": 2.0}}"#).unwrap();
        let config = ScanConfig::from_file(file.path()).unwrap();
        assert_eq!(config.languages, "eng");
        assert_eq!(config.contrast_factor, 2.0);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ScanConfig::from_file("/nonexistent/idscan.json").unwrap_err();
        assert!(matches!(err, ScanError::ConfigError(_)));
    }
}
