use finl_unicode::categories::{CharacterCategories, MinorCategory};
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[\s.,!?-]+").unwrap();
}

/// Splits `text` into tokens, keeping the separators (runs of whitespace, `.`, `,`, `!`, `?` and
/// `-`) as tokens of their own.
///
/// Words and separators alternate, starting and ending with a word, which is empty if `text`
/// starts or ends with a separator. Concatenating the tokens gives back `text`.
///
/// ```
/// use lelana_censor::split_tokens;
///
/// assert_eq!(split_tokens("Hey, you!"), ["Hey", ", ", "you", "!", ""]);
/// ```
pub fn split_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for separator in SEPARATORS.find_iter(text) {
        tokens.push(&text[last..separator.start()]);
        tokens.push(separator.as_str());
        last = separator.end();
    }
    tokens.push(&text[last..]);
    tokens
}

/// Characters that may appear within a word checked for profanity. Besides alphanumerics, these
/// include combining accents and the symbols commonly used to disguise letters.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
        || matches!(c, '@' | '$' | '*')
        || matches!(c.get_minor_category(), MinorCategory::Mn)
}

/// Byte ranges of the maximal runs of word characters in `text`.
pub(crate) fn word_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (is_word_char(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                ranges.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push(s..text.len());
    }
    ranges
}
