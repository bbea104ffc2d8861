/// Surface role of one OCR output line. The whole pipeline is driven by
/// these three cases: category headings are printed in full uppercase,
/// recipe lines carry lowercase letters, and blank lines separate blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// At least one uppercase letter and no lowercase letter
    AllCaps,
    /// Empty or whitespace-only
    Blank,
    /// Anything else, including digit-only lines
    Mixed,
}

/// Classifies a single line. Pure and total; Unicode case rules apply, so
/// accented French capitals ("PÂTES") still count as uppercase.
pub fn classify(line: &str) -> LineClass {
    if line.trim().is_empty() {
        return LineClass::Blank;
    }

    let mut saw_uppercase = false;
    for ch in line.chars() {
        if ch.is_lowercase() {
            return LineClass::Mixed;
        }
        if ch.is_uppercase() {
            saw_uppercase = true;
        }
    }

    if saw_uppercase {
        LineClass::AllCaps
    } else {
        LineClass::Mixed
    }
}

/// True when the first whitespace-delimited token is purely a number,
/// i.e. the line starts with a page number.
pub fn starts_with_page_number(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
}
