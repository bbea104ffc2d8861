//! Reconciliation of the two OCR passes into structured recipe records.
//!
//! The content pass gives recipe lines (possibly wrapped over several
//! printed lines), the category pass gives the block layout needed to tell
//! real category headings from decorative section headers. Everything here
//! is pure: the only state is [`CrossPageState`] and the sequence counter,
//! both threaded explicitly by the caller.

pub mod assemble;
pub mod classify;
pub mod headers;
pub mod merge;

use log::debug;

pub use assemble::{CrossPageState, SequenceCounter};
pub use classify::LineClass;
pub use merge::{default_corrections, CorrectionTable};

use crate::model::RecipeRecord;
use crate::ocr::PageScan;

/// Parses one page's pair of OCR text blocks into recipe records
#[derive(Debug)]
pub struct PageProcessor {
    corrections: CorrectionTable,
}

impl PageProcessor {
    pub fn new(corrections: CorrectionTable) -> Self {
        PageProcessor { corrections }
    }

    /// Processes one page: merges the content pass, extracts headers from
    /// the category pass, and assembles records under the category carried
    /// in from the previous page. Returns the records together with the
    /// state to thread into the next page.
    pub fn process_page(
        &self,
        scan: &PageScan,
        state: CrossPageState,
        counter: &mut SequenceCounter,
    ) -> (Vec<RecipeRecord>, CrossPageState) {
        let candidates = merge::merge_recipe_lines(scan.content.lines(), &self.corrections);
        let header_set = headers::extract_headers(scan.categories.lines());

        debug!(
            "page merged into {} candidates, {} header line(s)",
            candidates.len(),
            header_set.len()
        );

        assemble::assemble_records(&candidates, &header_set, state, counter)
    }
}

impl Default for PageProcessor {
    fn default() -> Self {
        PageProcessor::new(default_corrections())
    }
}
