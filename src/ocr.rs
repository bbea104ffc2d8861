use std::path::Path;

use async_trait::async_trait;
use log::debug;
use tokio::process::Command;

use crate::error::IndexError;

/// The two plain-text extractions of one page image. The book layout needs
/// two tesseract passes: a column-level one that keeps heading blocks intact
/// (the category pass) and a line-level one for the recipe lines themselves
/// (the content pass).
#[derive(Debug, Clone, Default)]
pub struct PageScan {
    /// Category-pass text (block/heading layout)
    pub categories: String,
    /// Content-pass text (line-level)
    pub content: String,
}

/// OCR collaborator: turns a page image into its two text extractions
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn scan_page(&self, image: &Path) -> Result<PageScan, IndexError>;
}

/// Shells out to the `tesseract` CLI, once per pass.
///
/// The book is in French, so the default language is `fra`; page
/// segmentation modes 4 (single column of variable-size text) and 6 (single
/// uniform block) match the category and content passes respectively.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    lang: String,
    category_psm: u8,
    content_psm: u8,
}

impl TesseractEngine {
    pub fn new(lang: impl Into<String>, category_psm: u8, content_psm: u8) -> Self {
        TesseractEngine {
            lang: lang.into(),
            category_psm,
            content_psm,
        }
    }

    async fn run_pass(&self, image: &Path, psm: u8) -> Result<String, IndexError> {
        let output = Command::new("tesseract")
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.lang)
            .arg("--psm")
            .arg(psm.to_string())
            .output()
            .await
            .map_err(|e| IndexError::Ocr {
                path: image.display().to_string(),
                message: format!("failed to execute tesseract: {e}"),
            })?;

        if !output.status.success() {
            return Err(IndexError::Ocr {
                path: image.display().to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        TesseractEngine::new("fra", 4, 6)
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn scan_page(&self, image: &Path) -> Result<PageScan, IndexError> {
        debug!("scanning {} (psm {} / {})", image.display(), self.category_psm, self.content_psm);

        let categories = self.run_pass(image, self.category_psm).await?;
        let content = self.run_pass(image, self.content_psm).await?;

        debug!(
            "{}: {} category-pass chars, {} content-pass chars",
            image.display(),
            categories.len(),
            content.len()
        );

        Ok(PageScan { categories, content })
    }
}
