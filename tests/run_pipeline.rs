use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use cuillere_indexer::{
    pipeline, IndexError, IndexerConfig, OcrEngine, PageScan, RecipeRecord, RecipeSink,
};

/// Serves canned scans keyed by file name, in place of tesseract
struct FakeEngine {
    scans: HashMap<String, PageScan>,
}

#[async_trait]
impl OcrEngine for FakeEngine {
    async fn scan_page(&self, image: &Path) -> Result<PageScan, IndexError> {
        let name = image
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(self.scans.get(&name).cloned().unwrap_or_default())
    }
}

/// Records every submission in memory
#[derive(Default)]
struct CollectingSink {
    prepared: AtomicBool,
    records: Mutex<Vec<RecipeRecord>>,
}

#[async_trait]
impl RecipeSink for CollectingSink {
    async fn prepare(&self) -> Result<(), IndexError> {
        self.prepared.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn submit(&self, record: &RecipeRecord) -> Result<(), IndexError> {
        assert!(
            self.prepared.load(Ordering::SeqCst),
            "submit before prepare"
        );
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

fn page_dir(name: &str, files: &[&str]) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    for file in files {
        fs::write(dir.join(file), b"").unwrap();
    }
    dir
}

fn config_for(dir: PathBuf) -> IndexerConfig {
    IndexerConfig {
        images_dir: dir,
        ..IndexerConfig::default()
    }
}

#[tokio::test]
async fn full_run_threads_category_across_pages() {
    let dir = page_dir("cuillere-run-full", &["page-01.jpg", "page-02.jpg"]);

    let mut scans = HashMap::new();
    scans.insert(
        "page-01.jpg".to_string(),
        PageScan {
            categories: "SAUCES CHAUDES".to_string(),
            content: "SAUCES CHAUDES\n45 Beurre blanc".to_string(),
        },
    );
    scans.insert(
        "page-02.jpg".to_string(),
        PageScan {
            categories: String::new(),
            content: "46 Sauce\nhollandaise".to_string(),
        },
    );
    let engine = FakeEngine { scans };
    let sink = CollectingSink::default();

    let summary = pipeline::run(&config_for(dir.clone()), &engine, &sink)
        .await
        .unwrap();

    assert_eq!(summary.pages, 2);
    assert_eq!(summary.records, 2);

    let records = sink.records.lock().unwrap();
    assert_eq!(records[0].recipe_id, 1);
    assert_eq!(records[0].name, "Beurre blanc");
    assert_eq!(records[0].category.as_str(), "Sauces chaudes");
    // Second page announced nothing: the category carried over
    assert_eq!(records[1].recipe_id, 2);
    assert_eq!(records[1].name, "Sauce hollandaise");
    assert_eq!(records[1].category.as_str(), "Sauces chaudes");
    drop(records);

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn run_without_pages_is_fatal() {
    let dir = page_dir("cuillere-run-nopages", &[]);
    let engine = FakeEngine {
        scans: HashMap::new(),
    };
    let sink = CollectingSink::default();

    let result = pipeline::run(&config_for(dir.clone()), &engine, &sink).await;
    assert!(matches!(result, Err(IndexError::NoPages(_))));
    assert!(!sink.prepared.load(Ordering::SeqCst));

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn run_without_records_is_fatal_and_leaves_sink_untouched() {
    let dir = page_dir("cuillere-run-norecipes", &["page-01.jpg"]);
    let engine = FakeEngine {
        scans: HashMap::new(), // scan comes back empty
    };
    let sink = CollectingSink::default();

    let result = pipeline::run(&config_for(dir.clone()), &engine, &sink).await;
    assert!(matches!(result, Err(IndexError::NoRecipes(1))));
    assert!(!sink.prepared.load(Ordering::SeqCst));

    let _ = fs::remove_dir_all(&dir);
}
