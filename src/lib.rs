//! Profanity censor for user-submitted text, such as review comments.
//!
//! Text is normalized (lowercased, with repeated characters collapsed) so that elongated,
//! mixed-case, accented and leetspeak spellings are caught. Prohibited words are replaced by
//! [`MASK`], while every other word keeps its original casing and punctuation.
//!
//! ```
//! use lelana_censor::{init_filter, FilterConfig};
//!
//! let config = FilterConfig::default().with_bad_words(["anjing", "babi"]);
//! let censor = init_filter(&config).unwrap();
//!
//! assert_eq!(censor.censor("Dasar anjiiing tidak berguna"), "Dasar **** tidak berguna");
//! assert_eq!(censor.censor("Kamu seperti BaBi!"), "Kamu seperti ****!");
//! assert_eq!(censor.censor("Pantainya indah."), "Pantainya indah.");
//! ```

use rustc_hash::{FxHashMap, FxHashSet};

mod censor;
mod config;
mod error;
mod normalize;
mod replacements;
mod token;
mod trie;
mod words;

pub use censor::{init_filter, Censor, Content, Outcome, MASK};
pub use config::{FilterConfig, BAD_WORDS_ENV};
pub use error::{Error, Result};
pub use normalize::normalize;
pub use replacements::Replacements;
pub use token::split_tokens;
pub use words::WordSet;

pub(crate) type Map<K, V> = FxHashMap<K, V>;
pub(crate) type Set<V> = FxHashSet<V>;


use doc_comment::doctest;
doctest!("../README.md");
