//! Configuration for the censor.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable holding extra prohibited words, separated by commas.
pub const BAD_WORDS_ENV: &str = "BAD_WORDS_ID";

/// Which words the censor should look for.
///
/// ```toml
/// BAD_WORDS_ID = ["anjing", "babi"]
/// allowed_words = ["crap"]
/// load_default_words = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Additional prohibited words, usually locale-specific.
    #[serde(alias = "BAD_WORDS_ID")]
    pub bad_words: Vec<String>,
    /// Words that are never censored.
    pub allowed_words: Vec<String>,
    /// Whether to start from the built-in word list.
    pub load_default_words: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            bad_words: Vec::new(),
            allowed_words: Vec::new(),
            load_default_words: true,
        }
    }
}

impl FilterConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Appends the words listed in [`BAD_WORDS_ENV`], if set.
    pub fn apply_env(mut self) -> Self {
        if let Ok(value) = env::var(BAD_WORDS_ENV) {
            self.bad_words.extend(parse_word_list(&value));
        }
        self
    }

    pub fn with_bad_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bad_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_allowed_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Only the configured words are prohibited.
    pub fn without_default_words(mut self) -> Self {
        self.load_default_words = false;
        self
    }
}

fn parse_word_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
}
