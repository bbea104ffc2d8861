use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Reduces a string to a lowercase ASCII-ish slug: accents stripped via NFD
/// decomposition, runs of non-alphanumeric characters collapsed to a single
/// hyphen. Used for all fuzzy equality between OCR'd headings.
///
/// # Example
/// ```
/// use cuillere_indexer::normalize::slugify;
///
/// assert_eq!(slugify("PÂTES FRAÎCHES"), "pates-fraiches");
/// assert_eq!(slugify(" Sauces   chaudes "), "sauces-chaudes");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.nfd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// First letter uppercased, everything after it lowercased, matching how the
/// book prints committed category names ("SAUCES CHAUDES" -> "Sauces chaudes").
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
