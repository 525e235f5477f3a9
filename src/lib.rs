pub mod document_scanner;
pub mod models;
pub mod processing;
pub mod sheets;
pub mod utils;
pub mod validation;

pub use document_scanner::DocumentScanner;
pub use models::{DocumentType, ExtractedFields, Field, ScanRecord, ScanResult};
pub use processing::{classify, classify_and_extract, extract, normalize};
pub use utils::{ScanConfig, ScanError};
