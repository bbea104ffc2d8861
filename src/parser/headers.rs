use std::collections::HashSet;

use super::classify::{classify, LineClass};
use crate::normalize::slugify;

/// Slugs of the decorative header blocks detected on one page. Headers look
/// like categories (full uppercase) but span a whole book section, e.g.
/// "SAUCES, MARINADES ET BEURRES AROMATISÉS" above the real category
/// "SAUCES CHAUDES", and must never be attributed to a recipe.
#[derive(Debug, Default)]
pub struct HeaderSet {
    slugs: HashSet<String>,
}

impl HeaderSet {
    pub fn contains(&self, text: &str) -> bool {
        self.slugs.contains(&slugify(text))
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }
}

enum ScanState {
    /// Accumulating an uppercase run, no blank break seen since
    Seeking,
    /// A blank line interrupted the current uppercase run
    AfterBreak,
}

/// Walks the category-pass lines of one page and extracts the header blocks.
///
/// The discriminant is blank-line adjacency: an uppercase run is a header
/// only when another uppercase line follows it across a blank break with no
/// body text in between. The first run on a page is therefore never a header
/// on its own. The heuristic is inherited from the book's layout and can
/// misfire on unusual blank-line noise; no stronger guarantee is intended.
pub fn extract_headers<'a, I>(lines: I) -> HeaderSet
where
    I: IntoIterator<Item = &'a str>,
{
    let mut headers = HeaderSet::default();
    let mut current_run: Vec<&str> = Vec::new();
    let mut state = ScanState::Seeking;

    for line in lines {
        match (classify(line), &state) {
            (LineClass::AllCaps, ScanState::Seeking) => {
                current_run.push(line);
            }
            (LineClass::AllCaps, ScanState::AfterBreak) => {
                // A second uppercase run across a blank break: whatever was
                // accumulated before the break was a header, not a category.
                headers
                    .slugs
                    .extend(current_run.drain(..).map(slugify));
                current_run.push(line);
                state = ScanState::Seeking;
            }
            (LineClass::Blank, _) => {
                state = ScanState::AfterBreak;
            }
            (LineClass::Mixed, _) => {
                current_run.clear();
                state = ScanState::Seeking;
            }
        }
    }

    headers
}
