use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Image processing error: {0}")]
    ImageProcessingError(String),
    #[error("Text recognition error: {0}")]
    RecognitionError(String),
    #[error("Sheet write error: {0}")]
    SheetError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::IoError(err.to_string())
    }
}
