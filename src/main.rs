//! exam-ocr - Digitize exam photos into question/answer JSON
//!
//! Runs every image through Tesseract OCR and heuristically splits the
//! recognized text into a question and an answer.

mod app;
mod collect;
mod config;
mod error;
mod qa;
mod vision;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::app::{ExamOcrApp, RunSettings};
use crate::config::AppConfig;
use crate::vision::TesseractEngine;

/// exam-ocr - Extract OCR text from images into JSON questions/answers
#[derive(Parser, Debug)]
#[command(name = "exam-ocr", version)]
#[command(about = "Extract OCR text from images into JSON questions/answers")]
struct Args {
    /// Image files, directories, or glob patterns to process (e.g. '*.jpeg')
    #[arg(required = true, num_args = 1..)]
    inputs: Vec<String>,

    /// Language code for Tesseract OCR [default: eng]
    #[arg(long)]
    lang: Option<String>,

    /// Output JSON file (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indentation level for JSON output; negative values mean none [default: 2]
    #[arg(long, allow_negative_numbers = true)]
    indent: Option<i64>,

    /// Path to the tesseract binary (searched on PATH when omitted)
    #[arg(long, value_name = "PATH")]
    tesseract: Option<PathBuf>,

    /// Config file to load instead of the per-user default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout only ever carries the JSON document
    let default_level = if args.verbose { "debug" } else { "info" };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_or_default_config(args.config.as_deref())?;

    let tesseract_path = args.tesseract.clone().or(config.ocr.tesseract_path.clone());
    let settings = RunSettings {
        language: args.lang.clone().unwrap_or(config.ocr.language),
        indent: args
            .indent
            .map(|indent| usize::try_from(indent).unwrap_or(0))
            .unwrap_or(config.output.indent),
        output: args.output.clone(),
    };
    debug!("Effective settings: {:?}", settings);

    // Fail before touching any image if the engine is missing
    let engine = TesseractEngine::locate(tesseract_path.as_deref())?;

    ExamOcrApp::new(engine, settings).run(args.inputs.as_slice())
}

/// Load the explicit config file, else the per-user one if present, else defaults
fn load_or_default_config(explicit: Option<&std::path::Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        let config = config::load_config(path)?;
        info!("Loaded configuration from {:?}", path);
        return Ok(config);
    }

    if let Some(path) = config::default_config_path() {
        if path.exists() {
            let config = config::load_config(&path)?;
            info!("Loaded configuration from {:?}", path);
            return Ok(config);
        }
    }

    debug!("Using default configuration");
    Ok(AppConfig::default())
}
