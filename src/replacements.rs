use crate::Map;
use arrayvec::ArrayString;
use lazy_static::lazy_static;
use std::collections::hash_map::Entry;
use std::iter;

lazy_static! {
    pub(crate) static ref REPLACEMENTS: Replacements = Replacements(
        include_str!("replacements.csv")
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                let comma = line.find(',').unwrap();
                (
                    line[..comma].chars().next().unwrap(),
                    ArrayString::from(&line[comma + 1..]).unwrap(),
                )
            })
            .collect()
    );
}

/// Set of possible interpretations for an input character, used to see through leetspeak.
///
/// For example, `@` can be read as `a` so the word `@njing` matches `anjing`. A character always
/// stands for itself, in addition to whatever is listed here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replacements(Map<char, ArrayString<12>>);

impl Default for Replacements {
    fn default() -> Self {
        REPLACEMENTS.clone()
    }
}

impl Replacements {
    /// Empty, meaning every character only stands for itself.
    pub fn new() -> Self {
        Self(Default::default())
    }

    /// Every letter `src` may be read as, starting with `src` itself.
    pub(crate) fn candidates(&self, src: char) -> impl Iterator<Item = char> + '_ {
        iter::once(src).chain(self.0.get(&src).into_iter().flat_map(|dst| dst.chars()))
    }

    /// Adds a new replacement character.
    ///
    /// # Panics
    ///
    /// Panics if the total replacement characters exceed 12 bytes.
    pub fn insert(&mut self, src: char, dst: char) {
        let replacements = self.0.entry(src).or_default();
        if !replacements.contains(dst) {
            replacements.push(dst);
        }
    }

    /// Removes a replacement character.
    pub fn remove(&mut self, src: char, dst: char) {
        if let Entry::Occupied(mut occupied) = self.0.entry(src) {
            let mut filtered = ArrayString::default();
            for c in occupied.get().chars() {
                if c != dst {
                    filtered.push(c);
                }
            }
            if filtered.is_empty() {
                occupied.remove();
            } else {
                occupied.insert(filtered);
            }
        }
    }
}
