//! Error types for the OCR pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Install instructions shown whenever tesseract cannot be run at all
pub const TESSERACT_INSTALL_URL: &str = "https://tesseract-ocr.github.io/tessdoc/Installation.html";

/// Failures that abort a run
#[derive(Debug, Error)]
pub enum ExamOcrError {
    /// The OCR engine binary could not be located or started
    #[error(
        "Tesseract OCR binary not found ({detail}). Install it and try again. \
         See {url} for instructions.",
        url = TESSERACT_INSTALL_URL
    )]
    EngineUnavailable { detail: String },

    /// None of the inputs resolved to a recognized image file
    #[error("No matching image files found.")]
    NoImagesFound,

    /// The engine ran but failed on a specific image
    #[error("OCR failed for {}: {message}", path.display())]
    Ocr { path: PathBuf, message: String },

    /// The image could not be opened or decoded
    #[error("Failed to load image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExamOcrError>;
