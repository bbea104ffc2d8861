use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a cookbook indexing run
#[derive(Error, Debug)]
pub enum IndexError {
    /// No page images were found under the configured directory
    #[error("No page image found under {} - nothing to index, it was a pleasure :)", .0.display())]
    NoPages(PathBuf),

    /// Every page was read but no recipe line survived parsing
    #[error("No recipe found after reading {0} pages...")]
    NoRecipes(usize),

    /// The tesseract invocation failed for a page image
    #[error("OCR failed for {path}: {message}")]
    Ocr { path: String, message: String },

    /// No MeiliSearch instance answered the health check
    #[error("No instance of MeiliSearch is running on {0}")]
    SinkUnavailable(String),

    /// The MeiliSearch API rejected a request
    #[error("MeiliSearch request failed ({status}): {body}")]
    SinkRejected { status: u16, body: String },

    /// HTTP transport error while talking to MeiliSearch
    #[error("MeiliSearch request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Filesystem error while walking or reading page images
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
