use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::config::IndexerConfig;
use crate::error::IndexError;
use crate::model::RecipeRecord;
use crate::ocr::OcrEngine;
use crate::pages::collect_page_images;
use crate::parser::{CrossPageState, PageProcessor, SequenceCounter};
use crate::sink::RecipeSink;

/// Counts reported at the end of a successful run
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub pages: usize,
    pub records: usize,
}

fn progress_bar(len: usize, verb: &str) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} {verb} [{{bar:40.cyan/blue}}] {{pos}}/{{len}}"
            ))
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

/// Runs the whole indexing pipeline: walk the page images in scan order,
/// OCR and parse each one while threading the active category from page to
/// page, then clear the sink and submit every record in emission order.
///
/// Assembly is strictly sequential - the cross-page category state makes
/// page order part of the output's meaning.
///
/// # Errors
/// Fatal and not retried: no page images found, no records produced, an OCR
/// invocation failing, or the sink refusing a request.
pub async fn run(
    config: &IndexerConfig,
    engine: &dyn OcrEngine,
    sink: &dyn RecipeSink,
) -> Result<RunSummary, IndexError> {
    let pages = collect_page_images(&config.images_dir)?;
    info!("reading {} page image(s)", pages.len());

    let processor = PageProcessor::new(config.corrections.clone());
    let mut state = CrossPageState::new();
    let mut counter = SequenceCounter::new();
    let mut records: Vec<RecipeRecord> = Vec::new();

    let pb = progress_bar(pages.len(), "Reading");
    for page in &pages {
        let scan = engine.scan_page(page).await?;
        let (page_records, next_state) = processor.process_page(&scan, state, &mut counter);
        debug!("{}: {} record(s)", page.display(), page_records.len());
        records.extend(page_records);
        state = next_state;
        pb.inc(1);
    }
    pb.finish_and_clear();
    info!("finished reading all images");

    if records.is_empty() {
        return Err(IndexError::NoRecipes(pages.len()));
    }

    sink.prepare().await?;

    let pb = progress_bar(records.len(), "Indexing");
    for record in &records {
        sink.submit(record).await?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(RunSummary {
        pages: pages.len(),
        records: records.len(),
    })
}
