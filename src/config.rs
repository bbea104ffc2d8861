use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::parser::{default_corrections, CorrectionTable};

/// Main indexer configuration
#[derive(Debug, Deserialize, Clone)]
pub struct IndexerConfig {
    /// MeiliSearch API base url
    #[serde(default = "default_meilisearch_url")]
    pub meilisearch_url: String,
    /// Uid of the MeiliSearch index receiving the records
    #[serde(default = "default_index_uid")]
    pub index_uid: String,
    /// Human-readable index name, used for display only
    #[serde(default = "default_index_name")]
    pub index_name: String,
    /// Directory walked for scanned page images
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    /// OCR engine settings
    #[serde(default)]
    pub ocr: OcrConfig,
    /// Literal substring repairs applied to content-pass lines
    #[serde(default = "default_corrections")]
    pub corrections: CorrectionTable,
}

/// Tesseract settings for the two extraction passes
#[derive(Debug, Deserialize, Clone)]
pub struct OcrConfig {
    /// Tesseract language pack (the book is in French)
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Page segmentation mode for the category pass
    #[serde(default = "default_category_psm")]
    pub category_psm: u8,
    /// Page segmentation mode for the content pass
    #[serde(default = "default_content_psm")]
    pub content_psm: u8,
}

impl Default for OcrConfig {
    fn default() -> Self {
        OcrConfig {
            lang: default_lang(),
            category_psm: default_category_psm(),
            content_psm: default_content_psm(),
        }
    }
}

impl Default for IndexerConfig {
    fn default() -> Self {
        IndexerConfig {
            meilisearch_url: default_meilisearch_url(),
            index_uid: default_index_uid(),
            index_name: default_index_name(),
            images_dir: default_images_dir(),
            ocr: OcrConfig::default(),
            corrections: default_corrections(),
        }
    }
}

// Default value functions
fn default_meilisearch_url() -> String {
    "http://127.0.0.1:7700".to_string()
}

fn default_index_uid() -> String {
    "cuillere-argent".to_string()
}

fn default_index_name() -> String {
    "La Cuillère d'Argent".to_string()
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_lang() -> String {
    "fra".to_string()
}

fn default_category_psm() -> u8 {
    4
}

fn default_content_psm() -> u8 {
    6
}

impl IndexerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with CUILLERE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: CUILLERE__OCR__LANG
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: CUILLERE__OCR__CATEGORY_PSM
            .add_source(
                Environment::with_prefix("CUILLERE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
