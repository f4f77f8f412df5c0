//! Application Coordinator
//!
//! Runs the straight-line pipeline: collect inputs, OCR each image in order,
//! split the text into question/answer records, then emit one JSON document.
//! Nothing is written unless every image succeeds.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::collect::collect_image_paths;
use crate::error::ExamOcrError;
use crate::qa::{split_question_answer, QuestionDocument};
use crate::vision::{OcrEngine, TextExtractor};

/// Effective settings for one run, after merging CLI flags and config
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    /// OCR language code
    pub language: String,
    /// JSON indentation width
    pub indent: usize,
    /// Output file; stdout when `None`
    pub output: Option<PathBuf>,
}

/// Main application coordinator
pub struct ExamOcrApp<E> {
    extractor: TextExtractor<E>,
    settings: RunSettings,
}

impl<E: OcrEngine> ExamOcrApp<E> {
    /// Create a coordinator around an already-located OCR engine
    pub fn new(engine: E, settings: RunSettings) -> Self {
        let extractor = TextExtractor::new(engine, settings.language.clone());
        Self { extractor, settings }
    }

    /// Build the question document for `inputs`. Aborts on the first failure.
    pub fn process<S: AsRef<str>>(&self, inputs: &[S]) -> crate::error::Result<QuestionDocument> {
        let image_paths = collect_image_paths(inputs);
        if image_paths.is_empty() {
            return Err(ExamOcrError::NoImagesFound);
        }

        info!(
            "Processing {} image(s) with language '{}'",
            image_paths.len(),
            self.extractor.language()
        );

        let mut questions = Vec::with_capacity(image_paths.len());
        for (i, path) in image_paths.iter().enumerate() {
            info!("[{}/{}] {}", i + 1, image_paths.len(), path.display());
            let text = self.extractor.extract(path)?;
            questions.push(split_question_answer(&text));
        }

        Ok(QuestionDocument { questions })
    }

    /// Process `inputs` and write the resulting document
    pub fn run<S: AsRef<str>>(&self, inputs: &[S]) -> Result<()> {
        let document = self.process(inputs)?;
        emit(&document, self.settings.indent, self.settings.output.as_deref())
    }
}

/// Write the document to `output`, or print it to stdout
pub fn emit(document: &QuestionDocument, indent: usize, output: Option<&Path>) -> Result<()> {
    let serialized = document.to_json(indent)?;

    match output {
        Some(path) => {
            std::fs::write(path, serialized)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            info!("Wrote {} question(s) to {}", document.questions.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", serialized)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
