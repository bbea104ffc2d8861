use log::debug;

use super::classify::{classify, LineClass};
use super::headers::HeaderSet;
use crate::model::{CategoryLabel, RecipeRecord};
use crate::normalize::capitalize_first;

/// The one value threaded from page to page: the category currently in
/// force. A category announced near the bottom of a page stays active at the
/// top of the next one until a new announcement supersedes it, which is why
/// pages must be assembled in scan order.
#[derive(Debug, Clone, Default)]
pub struct CrossPageState {
    category: CategoryLabel,
}

impl CrossPageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> &CategoryLabel {
        &self.category
    }
}

/// Run-wide recipe id allocator, starting at 1
#[derive(Debug)]
pub struct SequenceCounter {
    next: u64,
}

impl SequenceCounter {
    pub fn new() -> Self {
        SequenceCounter { next: 1 }
    }

    fn take(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for SequenceCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns one page's merged candidates into recipe records.
///
/// Consecutive uppercase candidates accumulate into a pending category name
/// (categories can span several printed lines); the first recipe line after
/// them commits the accumulated text, capitalized, as the new active
/// category. Uppercase candidates matching a detected header are dropped
/// instead of accumulated; header removal never touches recipe lines, even
/// on a slug collision. Every other candidate must lead with a page number
/// or it is unparsed noise and is silently skipped.
pub fn assemble_records(
    candidates: &[String],
    headers: &HeaderSet,
    mut state: CrossPageState,
    counter: &mut SequenceCounter,
) -> (Vec<RecipeRecord>, CrossPageState) {
    let mut records = Vec::new();
    let mut pending_category = String::new();

    for candidate in candidates {
        if classify(candidate) == LineClass::AllCaps {
            if headers.contains(candidate) {
                debug!("dropping header block: {:?}", candidate);
                continue;
            }
            pending_category.push(' ');
            pending_category.push_str(candidate);
            continue;
        }

        if !pending_category.is_empty() {
            state.category = CategoryLabel::new(capitalize_first(pending_category.trim()));
            pending_category.clear();
        }

        let trimmed = candidate.trim();
        let Some((token, rest)) = trimmed.split_once(char::is_whitespace) else {
            debug!("candidate without a name part, skipping: {:?}", candidate);
            continue;
        };

        if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
            debug!("candidate without a page number, skipping: {:?}", candidate);
            continue;
        }
        let Ok(page) = token.parse::<u32>() else {
            debug!("page number out of range, skipping: {:?}", candidate);
            continue;
        };

        let name = rest.trim();
        if name.is_empty() {
            debug!("candidate with an empty name, skipping: {:?}", candidate);
            continue;
        }

        records.push(RecipeRecord {
            recipe_id: counter.take(),
            category: state.category.clone(),
            name: name.to_string(),
            page,
        });
    }

    (records, state)
}
