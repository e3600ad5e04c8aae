use crate::error::{Error, Result};
use crate::normalize::{fold, normalize};
use crate::replacements::Replacements;
use crate::token::is_word_char;
use crate::trie::Trie;
use crate::Set;
use lazy_static::lazy_static;
use tracing::warn;

lazy_static! {
    static ref DEFAULT_WORDS: Trie = include_str!("default_words.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
}

/// The set of prohibited words, plus the words that are allowed regardless.
///
/// Words are stored lowercase without accents. A word of input matches if it spells a prohibited
/// word exactly, with each character read as itself or as one of its [`Replacements`]. Words are
/// only matched whole, so prohibiting `"anjing"` leaves `"anjingku"` alone.
///
/// Input is normalized before matching, which collapses repeated characters. An entry with
/// repeated characters (e.g. `"goblokk"`) can therefore never match.
#[derive(Clone, Debug)]
pub struct WordSet {
    prohibited: Trie,
    allowed: Set<String>,
    replacements: Replacements,
    len: usize,
}

impl Default for WordSet {
    /// The built-in word list.
    fn default() -> Self {
        let prohibited = DEFAULT_WORDS.clone();
        let len = count_words(&prohibited);
        Self {
            prohibited,
            allowed: Set::default(),
            replacements: Replacements::default(),
            len,
        }
    }
}

fn count_words(trie: &Trie) -> usize {
    fn visit(node: &crate::trie::Node) -> usize {
        node.word as usize + node.children.values().map(visit).sum::<usize>()
    }
    visit(&trie.root)
}

impl WordSet {
    /// Empty, with the default replacements.
    pub fn new() -> Self {
        Self {
            prohibited: Trie::default(),
            allowed: Set::default(),
            replacements: Replacements::default(),
            len: 0,
        }
    }

    /// Replaces the set of leetspeak replacements used while matching.
    pub fn with_replacements(mut self, replacements: Replacements) -> Self {
        self.replacements = replacements;
        self
    }

    /// Adds a prohibited word. Returns `true` if it was not already present.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let key = key(word)?;
        if normalize(&key) != key {
            warn!(word = %key, "prohibited word has repeated characters and will never match");
        }
        let added = self.prohibited.add(&key);
        self.len += added as usize;
        Ok(added)
    }

    /// Adds every word, stopping at the first invalid one.
    pub fn extend<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref())?;
        }
        Ok(())
    }

    /// Removes a prohibited word. Returns `true` if it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        let Ok(key) = key(word) else {
            return false;
        };
        let removed = self.prohibited.remove(&key);
        self.len -= removed as usize;
        removed
    }

    /// Adds a word that is never censored. Returns `true` if it was not already allowed.
    pub fn allow(&mut self, word: &str) -> Result<bool> {
        Ok(self.allowed.insert(key(word)?))
    }

    /// Whether `word` was added as a prohibited word (no replacements are considered).
    pub fn contains(&self, word: &str) -> bool {
        key(word)
            .map(|key| self.prohibited.contains(&key))
            .unwrap_or(false)
    }

    pub fn is_allowed(&self, word: &str) -> bool {
        key(word)
            .map(|key| self.allowed.contains(&key))
            .unwrap_or(false)
    }

    /// Number of prohibited words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allowed words.
    pub fn allowed_len(&self) -> usize {
        self.allowed.len()
    }

    /// Returns `true` if a single word of (normalized) text should be censored.
    pub fn matches(&self, word: &str) -> bool {
        let folded = fold(word);
        !self.allowed.contains(&folded) && self.prohibited.matches(&folded, &self.replacements)
    }
}

/// Lowercase, accent-free form of a word, or an error if it isn't a single word.
fn key(word: &str) -> Result<String> {
    let word = word.trim();
    if word.is_empty() {
        return Err(Error::InvalidWord {
            word: word.to_owned(),
            reason: "empty",
        });
    }
    if !word.chars().all(is_word_char) {
        return Err(Error::InvalidWord {
            word: word.to_owned(),
            reason: "must be a single word without separators or punctuation",
        });
    }
    Ok(fold(&word.to_lowercase()))
}
