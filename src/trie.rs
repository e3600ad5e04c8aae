use crate::replacements::Replacements;
use crate::Map;
use std::iter::FromIterator;
use std::mem;
use std::ptr;

#[derive(Debug, Clone, Default)]
pub(crate) struct Trie {
    pub(crate) root: Node,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub children: Map<char, Node>,
    pub word: bool,
    pub depth: u8,
}

impl Trie {
    /// Returns `true` if the word was not present before.
    pub fn add(&mut self, word: &str) -> bool {
        let mut current = &mut self.root;
        for (i, c) in word.chars().enumerate() {
            current = current.children.entry(c).or_insert_with(|| Node {
                children: Map::default(),
                word: false,
                depth: (i + 1).min(u8::MAX as usize) as u8,
            });
        }
        !mem::replace(&mut current.word, true)
    }

    /// Unmarks the word. Nodes are left in place. Returns `true` if the word was present.
    pub fn remove(&mut self, word: &str) -> bool {
        let mut current = &mut self.root;
        for c in word.chars() {
            match current.children.get_mut(&c) {
                Some(next) => current = next,
                None => return false,
            }
        }
        mem::replace(&mut current.word, false)
    }

    /// Exact lookup, without replacements.
    pub fn contains(&self, word: &str) -> bool {
        let mut current = &self.root;
        for c in word.chars() {
            match current.children.get(&c) {
                Some(next) => current = next,
                None => return false,
            }
        }
        current.word
    }

    /// Returns `true` if `word` spells an entry when each of its characters is read as itself or
    /// as one of its replacements.
    pub fn matches(&self, word: &str, replacements: &Replacements) -> bool {
        let mut frontier: Vec<&Node> = vec![&self.root];
        let mut next: Vec<&Node> = Vec::new();

        for raw_c in word.chars() {
            for node in frontier.drain(..) {
                for c in replacements.candidates(raw_c) {
                    if let Some(child) = node.children.get(&c) {
                        if !next.iter().any(|&n| ptr::eq(n, child)) {
                            next.push(child);
                        }
                    }
                }
            }
            if next.is_empty() {
                return false;
            }
            mem::swap(&mut frontier, &mut next);
        }

        frontier.iter().any(|node| node.word && node.depth > 0)
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut ret = Self::default();
        for word in iter.into_iter() {
            ret.add(word);
        }
        ret
    }
}
