//! Vision/OCR Layer
//!
//! Loads each exam photo, reduces it to grayscale and hands it to an OCR
//! engine. Supported backends:
//! - Tesseract command-line binary

pub mod preprocess;
pub mod tesseract;

pub use preprocess::load_grayscale;
pub use tesseract::TesseractEngine;

use image::GrayImage;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use crate::error::{ExamOcrError, Result};

/// An OCR capability: grayscale bitmap plus language code in, raw text out
pub trait OcrEngine {
    /// Recognize text in `image`. The text is returned verbatim, without
    /// trimming or case normalization.
    fn recognize(&self, image: &GrayImage, language: &str) -> Result<String>;
}

/// Extracts raw text from image files with a fixed language
pub struct TextExtractor<E> {
    engine: E,
    language: String,
}

impl<E: OcrEngine> TextExtractor<E> {
    pub fn new(engine: E, language: impl Into<String>) -> Self {
        Self {
            engine,
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Run OCR on one image file
    pub fn extract(&self, path: &Path) -> Result<String> {
        let start = Instant::now();
        let image = load_grayscale(path)?;

        let text = self
            .engine
            .recognize(&image, &self.language)
            .map_err(|e| match e {
                ExamOcrError::Ocr { message, .. } => ExamOcrError::Ocr {
                    path: path.to_path_buf(),
                    message,
                },
                other => other,
            })?;

        debug!(
            "OCR of {:?} produced {} chars in {:?}",
            path,
            text.len(),
            start.elapsed()
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::cell::RefCell;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Records what it was asked to recognize
    struct RecordingEngine {
        calls: RefCell<Vec<(u32, u32, String)>>,
        reply: String,
    }

    impl OcrEngine for RecordingEngine {
        fn recognize(&self, image: &GrayImage, language: &str) -> Result<String> {
            self.calls
                .borrow_mut()
                .push((image.width(), image.height(), language.to_string()));
            Ok(self.reply.clone())
        }
    }

    struct FailingEngine;

    impl OcrEngine for FailingEngine {
        fn recognize(&self, _image: &GrayImage, _language: &str) -> Result<String> {
            Err(ExamOcrError::Ocr {
                path: PathBuf::from("/tmp/scratch.png"),
                message: "boom".to_string(),
            })
        }
    }

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(5, 3, Rgb([10, 200, 30])).save(&path).unwrap();
        path
    }

    #[test]
    fn test_extract_passes_grayscale_and_language() {
        let dir = TempDir::new().unwrap();
        let path = write_png(dir.path(), "page.png");
        let engine = RecordingEngine {
            calls: RefCell::new(Vec::new()),
            reply: " Raw\nText \n".to_string(),
        };

        let extractor = TextExtractor::new(engine, "fra");
        let text = extractor.extract(&path).unwrap();

        assert_eq!(text, " Raw\nText \n");
        assert_eq!(extractor.language(), "fra");
        assert_eq!(*extractor.engine.calls.borrow(), vec![(5, 3, "fra".to_string())]);
    }

    #[test]
    fn test_ocr_failure_names_source_image() {
        let dir = TempDir::new().unwrap();
        let path = write_png(dir.path(), "page.png");

        let err = TextExtractor::new(FailingEngine, "eng").extract(&path).unwrap_err();
        match err {
            ExamOcrError::Ocr { path: failed, message } => {
                assert_eq!(failed, path);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let extractor = TextExtractor::new(FailingEngine, "eng");
        let err = extractor.extract(Path::new("/nonexistent/page.png")).unwrap_err();
        assert!(matches!(err, ExamOcrError::Image { .. }));
    }
}
