//! Tesseract OCR backend
//!
//! Runs the `tesseract` command-line binary. The binary is resolved once,
//! before any image is touched, so a missing install fails the whole run up front.

use image::{GrayImage, ImageFormat};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use super::OcrEngine;
use crate::error::{ExamOcrError, Result};

/// Binary name looked up on `PATH` when no explicit path is configured
pub const DEFAULT_BINARY: &str = "tesseract";

/// OCR engine backed by the tesseract CLI
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: PathBuf,
}

impl TesseractEngine {
    /// Resolve the tesseract binary, either the explicit `binary` or
    /// `tesseract` on `PATH`.
    pub fn locate(binary: Option<&Path>) -> Result<Self> {
        let requested = binary.unwrap_or_else(|| Path::new(DEFAULT_BINARY));

        let resolved = which::which(requested).map_err(|e| ExamOcrError::EngineUnavailable {
            detail: format!("{}: {}", requested.display(), e),
        })?;

        info!("Using tesseract at {:?}", resolved);
        Ok(Self { binary: resolved })
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &GrayImage, language: &str) -> Result<String> {
        // Scratch copy of the grayscale bitmap, removed when dropped
        let scratch = tempfile::Builder::new()
            .prefix("exam-ocr-")
            .suffix(".png")
            .tempfile()?;
        image
            .save_with_format(scratch.path(), ImageFormat::Png)
            .map_err(|source| ExamOcrError::Image {
                path: scratch.path().to_path_buf(),
                source,
            })?;

        debug!(
            "Running {:?} on {}x{} bitmap (lang={})",
            self.binary,
            image.width(),
            image.height(),
            language
        );

        let output = Command::new(&self.binary)
            .arg(scratch.path())
            .arg("stdout")
            .arg("-l")
            .arg(language)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    ExamOcrError::EngineUnavailable {
                        detail: format!("{}: {}", self.binary.display(), e),
                    }
                }
                _ => ExamOcrError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExamOcrError::Ocr {
                path: scratch.path().to_path_buf(),
                message: format!("tesseract exited with {}: {}", output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
