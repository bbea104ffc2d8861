use std::collections::BTreeMap;

use log::debug;

use super::classify::{classify, starts_with_page_number, LineClass};

/// Literal substring replacements applied to every surviving line, repairing
/// recurring tesseract misreads. Data, not logic: the table ships with
/// defaults but is overridable from the configuration file.
pub type CorrectionTable = BTreeMap<String, String>;

/// The default repairs observed on the scanned book: stray pipes, and the
/// word "pâtes" systematically losing its accents.
pub fn default_corrections() -> CorrectionTable {
    CorrectionTable::from([
        ("|".to_string(), String::new()),
        ("pates".to_string(), "pâtes".to_string()),
        ("PATES".to_string(), "PÂTES".to_string()),
    ])
}

/// Punctuation tolerated by the noise filter besides letters and digits.
/// Apostrophes are everywhere in French recipe names ("à l'oignon") and
/// must not count as noise.
const ALLOWED_PUNCTUATION: [char; 8] = [' ', ',', '(', ')', '-', '|', '\'', '\u{2019}'];

/// True when the line still reads as text once the tolerated punctuation is
/// removed. Lines made mostly of symbols are OCR garbage and are dropped.
fn is_legible(line: &str) -> bool {
    let mut saw_any = false;
    for ch in line.chars() {
        if ALLOWED_PUNCTUATION.contains(&ch) {
            continue;
        }
        if !ch.is_alphanumeric() {
            return false;
        }
        saw_any = true;
    }
    saw_any
}

fn apply_corrections(line: &str, corrections: &CorrectionTable) -> String {
    let mut repaired = line.to_string();
    for (misread, fix) in corrections {
        repaired = repaired.replace(misread, fix);
    }
    repaired
}

/// Folds the content-pass lines of one page into whole recipe candidates.
///
/// A line opens a new entry when it is fully uppercase (a category heading)
/// or starts with a page number; any other line is the continuation of the
/// recipe name above it and is appended space-joined. A continuation that
/// arrives before any entry is open is malformed input and is skipped.
///
/// Running the merger on its own output is a no-op: every merged candidate
/// already opens an entry on its own.
pub fn merge_recipe_lines<'a, I>(lines: I, corrections: &CorrectionTable) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries: Vec<String> = Vec::new();

    for raw in lines {
        if raw.trim().is_empty() {
            continue;
        }
        if !is_legible(raw) {
            debug!("dropping illegible line: {:?}", raw);
            continue;
        }

        let line = apply_corrections(raw, corrections);
        if line.trim().is_empty() {
            continue;
        }

        if classify(&line) == LineClass::AllCaps || starts_with_page_number(&line) {
            entries.push(line);
        } else if let Some(open) = entries.last_mut() {
            open.push(' ');
            open.push_str(&line);
        } else {
            debug!("continuation with no open entry, skipping: {:?}", line);
        }
    }

    entries
}
