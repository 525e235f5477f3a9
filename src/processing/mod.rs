pub mod classifier;
pub mod extractors;
pub mod image;
pub mod ocr;
pub mod patterns;
pub mod text;

pub use classifier::classify;
pub use extractors::{classify_and_extract, extract};
pub use image::ImageProcessor;
pub use ocr::{FallbackRecognizer, TextRecognizer};
#[cfg(feature = "tesseract")]
pub use ocr::TesseractRecognizer;
pub use text::normalize;
