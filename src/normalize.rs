use finl_unicode::categories::{CharacterCategories, MinorCategory};
use unicode_normalization::UnicodeNormalization;

/// Lowercases `text` and collapses every run of identical consecutive characters into a single
/// occurrence, so that elongated spellings like `"annjjinnng"` read as `"anjing"`.
///
/// Newlines are never collapsed.
///
/// ```
/// use lelana_censor::normalize;
///
/// assert_eq!(normalize("annjjinnng"), "anjing");
/// assert_eq!(normalize("BaaaBi!!"), "babi!");
/// ```
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut ret = String::with_capacity(lower.len());
    let mut last = None;
    for c in lower.chars() {
        if last == Some(c) && c != '\n' {
            continue;
        }
        ret.push(c);
        last = Some(c);
    }
    ret
}

/// Removes diacritical marks (accents), such that `"ánjing"` is matched as `"anjing"`.
///
/// Only used to build matching keys. Text returned to callers is never folded.
pub(crate) fn fold(text: &str) -> String {
    fn keep(c: &char) -> bool {
        !matches!(c.get_minor_category(), MinorCategory::Mn)
    }

    text.nfd().filter(keep).nfc().collect()
}
