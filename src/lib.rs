//! Indexer for the scanned index pages of "La Cuillère d'Argent".
//!
//! Each page is read twice by tesseract - once tuned to heading blocks, once
//! to individual lines - and the two noisy text streams are reconciled into
//! ordered `{recipe_id, page, name, category}` records pushed into a
//! MeiliSearch index. The reconciliation core lives in [`parser`]; OCR, page
//! walking and the search sink are thin collaborators around it.

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod ocr;
pub mod pages;
pub mod parser;
pub mod pipeline;
pub mod sink;

pub use config::IndexerConfig;
pub use error::IndexError;
pub use model::{CategoryLabel, RecipeRecord};
pub use ocr::{OcrEngine, PageScan, TesseractEngine};
pub use pipeline::{run, RunSummary};
pub use sink::{MeiliSink, RecipeSink};
