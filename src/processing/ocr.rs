// Text recognition backends. The extraction core only ever sees the text
// and confidence a `TextRecognizer` produces.

use log::{info, warn};

use crate::models::Recognition;
use crate::utils::ScanError;

pub trait TextRecognizer {
    fn name(&self) -> &str;

    fn recognize(&self, image_data: &[u8]) -> Result<Recognition, ScanError>;
}

impl<R: TextRecognizer + ?Sized> TextRecognizer for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn recognize(&self, image_data: &[u8]) -> Result<Recognition, ScanError> {
        (**self).recognize(image_data)
    }
}

/// Tries each recognizer in order and returns the first non-empty text.
pub struct FallbackRecognizer {
    recognizers: Vec<Box<dyn TextRecognizer>>,
}

impl FallbackRecognizer {
    pub fn new(recognizers: Vec<Box<dyn TextRecognizer>>) -> Self {
        Self { recognizers }
    }
}

impl TextRecognizer for FallbackRecognizer {
    fn name(&self) -> &str {
        "fallback"
    }

    fn recognize(&self, image_data: &[u8]) -> Result<Recognition, ScanError> {
        for recognizer in &self.recognizers {
            match recognizer.recognize(image_data) {
                Ok(recognition) if !recognition.text.trim().is_empty() => {
                    info!(
                        "{} recognized {} chars (confidence {:.1})",
                        recognizer.name(),
                        recognition.text.len(),
                        recognition.confidence
                    );
                    return Ok(recognition);
                }
                Ok(_) => warn!("{} returned no text", recognizer.name()),
                Err(e) => warn!("{} failed: {}", recognizer.name(), e),
            }
        }
        Err(ScanError::RecognitionError("All OCR methods failed".to_string()))
    }
}

#[cfg(feature = "tesseract")]
pub use self::tesseract_backend::TesseractRecognizer;

#[cfg(feature = "tesseract")]
mod tesseract_backend {
    use std::io::Write;

    use log::{debug, warn};
    use tempfile::NamedTempFile;
    use tesseract::Tesseract;

    use super::TextRecognizer;
    use crate::models::Recognition;
    use crate::utils::{ScanConfig, ScanError};

    /// Local Tesseract with English + Hindi models.
    pub struct TesseractRecognizer {
        config: ScanConfig,
    }

    impl TesseractRecognizer {
        pub fn new(config: ScanConfig) -> Self {
            Self { config }
        }

        fn engine(&self, image_path: &str) -> Result<Tesseract, ScanError> {
            let tess = Tesseract::new(None, Some(self.config.languages.as_str()))
                .map_err(|e| ScanError::RecognitionError(format!("Tesseract init error: {}", e)))?;
            let tess = self.with_page_seg_mode(tess)?;
            let tess = tess
                .set_variable("tessedit_char_whitelist", &self.config.char_whitelist)
                .map_err(|e| ScanError::RecognitionError(format!("Tesseract set variable error: {}", e)))?;
            tess.set_image(image_path)
                .map_err(|e| ScanError::RecognitionError(format!("Tesseract set image error: {}", e)))
        }

        // Sparse-text mode first, then the fallback mode, then the
        // engine defaults. A rejected variable consumes the engine, so
        // each attempt starts from a fresh one.
        fn with_page_seg_mode(&self, tess: Tesseract) -> Result<Tesseract, ScanError> {
            match tess.set_variable("tessedit_pageseg_mode", &self.config.page_seg_mode) {
                Ok(tess) => return Ok(tess),
                Err(e) => warn!("page segmentation mode {} rejected: {}", self.config.page_seg_mode, e),
            }
            let fresh = || {
                Tesseract::new(None, Some(self.config.languages.as_str()))
                    .map_err(|e| ScanError::RecognitionError(format!("Tesseract init error: {}", e)))
            };
            match fresh()?.set_variable("tessedit_pageseg_mode", &self.config.fallback_page_seg_mode) {
                Ok(tess) => Ok(tess),
                Err(e) => {
                    warn!(
                        "page segmentation mode {} rejected: {}, using defaults",
                        self.config.fallback_page_seg_mode, e
                    );
                    fresh()
                }
            }
        }
    }

    impl TextRecognizer for TesseractRecognizer {
        fn name(&self) -> &str {
            "tesseract"
        }

        fn recognize(&self, image_data: &[u8]) -> Result<Recognition, ScanError> {
            let mut temp_file = NamedTempFile::new()
                .map_err(|e| ScanError::RecognitionError(format!("Failed to create temp file: {}", e)))?;
            temp_file
                .write_all(image_data)
                .map_err(|e| ScanError::RecognitionError(format!("Failed to write to temp file: {}", e)))?;
            let image_path = temp_file
                .path()
                .to_str()
                .ok_or_else(|| ScanError::RecognitionError("Failed to convert path to string".to_string()))?;

            let mut tess = self.engine(image_path)?;
            let text = tess
                .get_text()
                .map_err(|e| ScanError::RecognitionError(format!("Tesseract error: {}", e)))?;
            let confidence = tess.mean_text_conf() as f32;
            debug!("tesseract text ({} chars, confidence {})", text.len(), confidence);

            Ok(Recognition { text, confidence })
        }
    }
}
