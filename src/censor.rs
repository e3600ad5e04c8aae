use crate::config::FilterConfig;
use crate::error::Result;
use crate::normalize::normalize;
use crate::token::{split_tokens, word_ranges};
use crate::words::WordSet;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info};

/// Replaces every censored word, regardless of its length.
pub const MASK: &str = "****";

/// Builds a [`Censor`] from configuration: the built-in word list (unless disabled), plus the
/// configured prohibited and allowed words.
///
/// Call once at startup and share the result (it is cheap to clone). Calling again with the same
/// configuration gives an equivalent `Censor`.
pub fn init_filter(config: &FilterConfig) -> Result<Censor> {
    let mut words = if config.load_default_words {
        WordSet::default()
    } else {
        WordSet::new()
    };
    words.extend(&config.bad_words)?;
    for word in &config.allowed_words {
        words.allow(word)?;
    }

    info!(
        prohibited = words.len(),
        allowed = words.allowed_len(),
        "profanity filter initialized"
    );

    Ok(Censor::new(words))
}

/// What happened to a piece of text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Returned unchanged (blank, or nothing prohibited).
    Clean,
    /// Prohibited words were masked, everything else kept as written.
    Censored,
    /// Prohibited words were masked, but the text could not be lined up with the original, so
    /// the result is the normalized (lowercase, de-duplicated) text.
    Fallback,
}

/// A value that may or may not be text. Only text is ever censored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content<T> {
    Text(String),
    Other(T),
}

impl<T> Content<T> {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Other(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Other(_) => None,
        }
    }
}

impl<T> From<String> for Content<T> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T> From<&str> for Content<T> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Censor masks prohibited words in text, keeping the casing and punctuation of everything else.
///
/// The word set is immutable and shared, so a `Censor` may be cloned into every request handler.
#[derive(Clone, Debug)]
pub struct Censor {
    words: Arc<WordSet>,
}

impl Default for Censor {
    /// Only the built-in word list.
    fn default() -> Self {
        Self::new(WordSet::default())
    }
}

impl From<WordSet> for Censor {
    fn from(words: WordSet) -> Self {
        Self::new(words)
    }
}

impl Censor {
    pub fn new(words: WordSet) -> Self {
        Self {
            words: Arc::new(words),
        }
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    /// Returns `true` if `text`, once normalized, contains a prohibited word.
    pub fn contains_prohibited(&self, text: &str) -> bool {
        let normalized = normalize(text);
        word_ranges(&normalized)
            .into_iter()
            .any(|range| self.words.matches(&normalized[range]))
    }

    /// Produces the censored text. Text without prohibited words is returned as is.
    pub fn censor<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.censor_and_analyze(text).0
    }

    /// See [`Censor::censor`]. Also reports how the text was treated.
    pub fn censor_and_analyze<'a>(&self, text: &'a str) -> (Cow<'a, str>, Outcome) {
        if text.trim().is_empty() {
            return (Cow::Borrowed(text), Outcome::Clean);
        }

        let normalized = normalize(text);
        match self.mask_normalized(&normalized) {
            None => (Cow::Borrowed(text), Outcome::Clean),
            Some(censored) => {
                let (restored, outcome) = restore(text, censored);
                (Cow::Owned(restored), outcome)
            }
        }
    }

    /// Censors text, and passes anything else through untouched.
    pub fn censor_content<T>(&self, content: Content<T>) -> Content<T> {
        match content {
            Content::Text(text) => {
                let censored = match self.censor(&text) {
                    Cow::Borrowed(_) => None,
                    Cow::Owned(censored) => Some(censored),
                };
                Content::Text(censored.unwrap_or(text))
            }
            other => other,
        }
    }

    /// Replaces each prohibited word of normalized text with [`MASK`], or returns `None` if there
    /// are none.
    fn mask_normalized(&self, normalized: &str) -> Option<String> {
        let mut ret = String::new();
        let mut last = 0;
        let mut masked = 0usize;
        for range in word_ranges(normalized) {
            if self.words.matches(&normalized[range.clone()]) {
                ret.push_str(&normalized[last..range.start]);
                ret.push_str(MASK);
                last = range.end;
                masked += 1;
            }
        }
        if masked == 0 {
            return None;
        }
        ret.push_str(&normalized[last..]);
        debug!(masked, "censored prohibited words");
        Some(ret)
    }
}

/// Lines up the original text with the censored, normalized text token by token. Tokens that
/// were masked are taken from `censored`, all others from `original`.
///
/// If the two don't split into the same number of tokens, gives up and returns `censored`.
pub(crate) fn restore(original: &str, censored: String) -> (String, Outcome) {
    let original_tokens = split_tokens(original);
    let censored_tokens = split_tokens(&censored);

    if original_tokens.len() != censored_tokens.len() {
        debug!(
            original = original_tokens.len(),
            censored = censored_tokens.len(),
            "token mismatch, returning normalized text"
        );
        return (censored, Outcome::Fallback);
    }

    let restored = original_tokens
        .iter()
        .zip(censored_tokens.iter())
        .map(|(&kept, &masked)| if masked.contains(MASK) { masked } else { kept })
        .collect();

    (restored, Outcome::Censored)
}

#[cfg(test)]
mod tests {
    use super::{init_filter, restore, Censor, Content, Outcome, MASK};
    use crate::{FilterConfig, WordSet};
    use proptest::prelude::*;
    use rand::prelude::ThreadRng;
    use rand::{thread_rng, Rng};
    use std::borrow::Cow;

    fn indonesian() -> Censor {
        init_filter(&FilterConfig::default().with_bad_words(["anjing", "babi"])).unwrap()
    }

    #[test]
    fn with_profanity() {
        assert_eq!(indonesian().censor("Dasar kau anjing"), "Dasar kau ****");
    }

    #[test]
    fn without_profanity() {
        let censor = indonesian();
        let text = "Ini adalah kalimat yang bersih.";
        let (censored, outcome) = censor.censor_and_analyze(text);
        assert_eq!(censored, text);
        assert!(matches!(censored, Cow::Borrowed(_)));
        assert_eq!(outcome, Outcome::Clean);
    }

    #[test]
    fn repeated_letters() {
        assert_eq!(
            indonesian().censor("Dasar anjiiing tidak berguna"),
            "Dasar **** tidak berguna"
        );
    }

    #[test]
    fn mixed_case() {
        assert_eq!(indonesian().censor("Kamu seperti BaBi!"), "Kamu seperti ****!");
    }

    #[test]
    fn preserves_punctuation() {
        let (censored, outcome) = indonesian().censor_and_analyze("Hey, anjing!");
        assert_eq!(censored, "Hey, ****!");
        assert_eq!(outcome, Outcome::Censored);
    }

    #[test]
    fn blank() {
        let censor = indonesian();
        assert_eq!(censor.censor(""), "");
        assert_eq!(censor.censor("   "), "   ");
        assert_eq!(censor.censor_and_analyze("\n\t").1, Outcome::Clean);
    }

    #[test]
    fn passthrough() {
        let censor = indonesian();
        assert_eq!(censor.censor_content(Content::Other(123)), Content::Other(123));
        assert_eq!(
            censor.censor_content(Content::<i32>::from("   ")),
            Content::Text(String::from("   "))
        );
        assert_eq!(
            censor
                .censor_content(Content::<()>::from("Dasar kau anjing"))
                .into_text()
                .as_deref(),
            Some("Dasar kau ****")
        );
        assert_eq!(Content::<u8>::Other(1).as_text(), None);
    }

    #[test]
    fn mask_length_is_fixed() {
        let censor = init_filter(
            &FilterConfig::default()
                .with_bad_words(["ba", "kampret"])
                .without_default_words(),
        )
        .unwrap();
        assert_eq!(censor.censor("ba kampret"), "**** ****");
    }

    #[test]
    fn only_masked_tokens_change() {
        let censor = indonesian();
        let text = "Pantai INDAH, tapi babi... Mahal-mahal!";
        let censored = censor.censor(text);
        assert_eq!(censored, "Pantai INDAH, tapi ****... Mahal-mahal!");
    }

    #[test]
    fn leetspeak() {
        let censor = indonesian();
        assert_eq!(censor.censor("dasar @nj1ng"), "dasar ****");
        assert_eq!(censor.censor("B4B1 sekali"), "**** sekali");
    }

    #[test]
    fn accents() {
        assert_eq!(indonesian().censor("Dasar \u{e1}njing"), "Dasar ****");
    }

    #[test]
    fn whole_words_only() {
        let censor = indonesian();
        assert_eq!(censor.censor("anjingku lucu"), "anjingku lucu");
        assert!(!censor.contains_prohibited("kebabian"));
    }

    #[test]
    fn masked_token_is_normalized() {
        // The token containing the mask comes from the normalized text.
        assert_eq!(indonesian().censor("Dasar (ANJING)"), "Dasar (****)");
    }

    #[test]
    fn allowed_words() {
        let censor = init_filter(
            &FilterConfig::default()
                .with_bad_words(["anjing"])
                .with_allowed_words(["crap"]),
        )
        .unwrap();
        assert_eq!(censor.censor("crap anjing"), "crap ****");
        assert!(censor.words().contains("crap"));
    }

    #[test]
    fn default_words() {
        let censor = Censor::default();
        assert!(censor.contains_prohibited("what the FUUUCK"));
        assert_eq!(censor.censor("Oh sh1t, mahal!"), "Oh ****, mahal!");
        assert!(!censor.contains_prohibited("anjing"));

        let censor = init_filter(&FilterConfig::default().without_default_words()).unwrap();
        assert!(!censor.contains_prohibited("shit"));
        assert!(censor.words().is_empty());
    }

    #[test]
    fn invalid_config() {
        assert!(init_filter(&FilterConfig::default().with_bad_words(["kata kasar"])).is_err());
        assert!(init_filter(&FilterConfig::default().with_allowed_words([""])).is_err());
    }

    #[test]
    fn init_is_repeatable() {
        let config = FilterConfig::default().with_bad_words(["anjing"]);
        let first = init_filter(&config).unwrap();
        let second = init_filter(&config).unwrap();
        assert_eq!(first.words().len(), second.words().len());
        let text = "Anjing!!";
        assert_eq!(first.censor(text), second.censor(text));
    }

    #[test]
    fn clones_share_words() {
        let censor = indonesian();
        let clone = censor.clone();
        assert!(std::ptr::eq(censor.words(), clone.words()));
    }

    #[test]
    fn fallback() {
        let (restored, outcome) = restore("Dasarkau anjing", String::from("dasar kau ****"));
        assert_eq!(restored, "dasar kau ****");
        assert_eq!(outcome, Outcome::Fallback);

        let (restored, outcome) = restore("Dasar kau ANJING!", format!("dasar kau {}!", MASK));
        assert_eq!(restored, "Dasar kau ****!");
        assert_eq!(outcome, Outcome::Censored);
    }

    #[test]
    fn from_word_set() {
        let mut words = WordSet::new();
        words.insert("babi").unwrap();
        let censor = Censor::from(words);
        assert_eq!(censor.censor("babi"), "****");
    }

    #[test]
    fn unicode_abuse() {
        let mut rng = thread_rng();

        fn random_string(rng: &mut ThreadRng, len: usize) -> String {
            rng.sample_iter::<char, _>(rand::distributions::Standard)
                .take(len)
                .collect()
        }

        let censor = indonesian();
        for _ in 0..100 {
            let input = random_string(&mut rng, 100);
            // Must not panic.
            let _ = censor.censor_and_analyze(&input);
        }
    }

    proptest! {
        #[test]
        fn clean_text_is_untouched(
            words in prop::collection::vec(
                prop::sample::select(vec!["Ini", "adalah", "pantai", "INDAH", "sekali", "Bali", "mahal"]),
                0..12,
            ),
            separators in prop::collection::vec(
                prop::sample::select(vec![" ", ", ", "! ", "...", "-", "\n"]),
                12,
            ),
        ) {
            let text = words
                .iter()
                .zip(separators.iter())
                .map(|(word, separator)| format!("{}{}", word, separator))
                .collect::<String>();
            let (censored, outcome) = indonesian().censor_and_analyze(&text);
            prop_assert_eq!(&*censored, text.as_str());
            prop_assert_eq!(outcome, Outcome::Clean);
        }

        #[test]
        fn never_fails(text in "\\PC*") {
            let censor = indonesian();
            let (censored, outcome) = censor.censor_and_analyze(&text);
            if outcome == Outcome::Clean {
                prop_assert_eq!(&*censored, text.as_str());
            } else {
                prop_assert!(censored.contains(MASK));
            }
        }
    }
}
