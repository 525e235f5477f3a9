use chrono::Utc;
use log::{info, warn};

use crate::models::ScanRecord;
use crate::processing::text::detect_script;
use crate::processing::{classify_and_extract, ImageProcessor, TextRecognizer};
use crate::sheets::{sheet_row, SheetWriter};
use crate::utils::{ScanConfig, ScanError};

/// Runs one capture through the whole pipeline: enhance, recognize,
/// classify, extract and optionally record.
pub struct DocumentScanner<R: TextRecognizer> {
    recognizer: R,
    config: ScanConfig,
}

impl<R: TextRecognizer> DocumentScanner<R> {
    pub fn new(recognizer: R, config: ScanConfig) -> Self {
        Self { recognizer, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn scan(&self, image_data: &[u8]) -> Result<ScanRecord, ScanError> {
        let image = self.prepare(image_data);
        let recognition = self.recognizer.recognize(&image)?;
        if recognition.text.trim().is_empty() {
            return Err(ScanError::RecognitionError(format!(
                "{} returned no text",
                self.recognizer.name()
            )));
        }

        let result = classify_and_extract(&recognition.text);
        let script = detect_script(&recognition.text);
        info!(
            "scanned {} via {} (confidence {:.1}, script {})",
            result.document_type,
            self.recognizer.name(),
            recognition.confidence,
            script.as_deref().unwrap_or("unknown")
        );

        Ok(ScanRecord {
            document_type: result.document_type,
            raw_text: recognition.text,
            extracted_data: result.extracted_data,
            confidence: recognition.confidence,
            script,
        })
    }

    /// Scans and appends the record's row to `sheet_id`.
    pub fn scan_and_record<W: SheetWriter>(
        &self,
        image_data: &[u8],
        writer: &mut W,
        sheet_id: &str,
    ) -> Result<ScanRecord, ScanError> {
        let record = self.scan(image_data)?;
        let row = sheet_row(&record, Utc::now());
        writer.append_row(sheet_id, &row)?;
        info!("recorded {} in sheet {}", record.document_type, sheet_id);
        Ok(record)
    }

    // Enhancement is best effort: undecodable input goes to the recognizer
    // untouched.
    fn prepare(&self, image_data: &[u8]) -> Vec<u8> {
        if !self.config.preprocess {
            return image_data.to_vec();
        }
        match ImageProcessor::enhance(image_data, self.config.contrast_factor) {
            Ok(enhanced) => enhanced,
            Err(e) => {
                warn!("preprocessing failed, using original image: {}", e);
                image_data.to_vec()
            }
        }
    }
}
