use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use log::debug;

use crate::utils::ScanError;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Contrast stretch around mid-grey followed by luma grayscale, encoded
    /// as PNG. Alpha is kept.
    pub fn enhance(image_data: &[u8], contrast_factor: f32) -> Result<Vec<u8>, ScanError> {
        let img = image::load_from_memory(image_data)
            .map_err(|e| ScanError::ImageProcessingError(format!("Failed to decode image: {}", e)))?;
        debug!("enhancing {}x{} image", img.width(), img.height());

        let mut rgba = img.to_rgba8();
        Self::stretch_and_gray(&mut rgba, contrast_factor);

        let mut encoded = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(rgba)
            .write_to(&mut encoded, ImageOutputFormat::Png)
            .map_err(|e| ScanError::ImageProcessingError(format!("Failed to encode image: {}", e)))?;
        Ok(encoded.into_inner())
    }

    fn stretch_and_gray(img: &mut RgbaImage, contrast_factor: f32) {
        for pixel in img.pixels_mut() {
            let Rgba([r, g, b, a]) = *pixel;
            let r = Self::stretch(r, contrast_factor);
            let g = Self::stretch(g, contrast_factor);
            let b = Self::stretch(b, contrast_factor);
            let luma = (0.299 * r + 0.587 * g + 0.114 * b).round().clamp(0.0, 255.0) as u8;
            *pixel = Rgba([luma, luma, luma, a]);
        }
    }

    fn stretch(value: u8, factor: f32) -> f32 {
        ((f32::from(value) - 128.0) * factor + 128.0).clamp(0.0, 255.0)
    }

    /// Decodes a `data:image/...;base64,...` capture into raw image bytes.
    pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>, ScanError> {
        let rest = data_url
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| ScanError::InvalidDataUrl("missing data: prefix".to_string()))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| ScanError::InvalidDataUrl("missing payload".to_string()))?;
        if !meta.ends_with(";base64") {
            return Err(ScanError::InvalidDataUrl(format!(
                "unsupported encoding: {}",
                meta
            )));
        }
        STANDARD
            .decode(payload.trim())
            .map_err(|e| ScanError::InvalidDataUrl(format!("invalid base64 payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(img: RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageOutputFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_enhance_grays_and_stretches() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([200, 200, 200, 255]));
        img.put_pixel(1, 0, Rgba([255, 0, 0, 100]));

        let enhanced = ImageProcessor::enhance(&png(img), 1.5).unwrap();
        let out = image::load_from_memory(&enhanced).unwrap().to_rgba8();

        // (200 - 128) * 1.5 + 128 = 236
        assert_eq!(*out.get_pixel(0, 0), Rgba([236, 236, 236, 255]));
        // red: 255 * 0.299 = 76.2, alpha untouched
        assert_eq!(*out.get_pixel(1, 0), Rgba([76, 76, 76, 100]));
    }

    #[test]
    fn test_enhance_rejects_garbage() {
        let err = ImageProcessor::enhance(b"not an image", 1.5).unwrap_err();
        assert!(matches!(err, ScanError::ImageProcessingError(_)));
    }

    #[test]
    fn test_decode_data_url() {
        let bytes = ImageProcessor::decode_data_url("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_data_url_errors() {
        for input in [
            "image/jpeg;base64,aGVsbG8=",
            "data:image/jpeg;base64",
            "data:text/plain,hello",
            "data:image/png;base64,***",
        ] {
            let err = ImageProcessor::decode_data_url(input).unwrap_err();
            assert!(matches!(err, ScanError::InvalidDataUrl(_)), "{}", input);
        }
    }
}
