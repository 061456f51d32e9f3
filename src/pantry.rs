//! The user's list of on-hand ingredients.

use serde::{Deserialize, Serialize};

/// Ordered, de-duplicated ingredient tokens entered by the user.
///
/// Entries are stored lowercased and trimmed. Plural folding is left to the
/// matcher, so `"Eggs"` and `"egg"` are kept as two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pantry {
    items: Vec<String>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient. Returns `false` for blank input or an existing entry.
    pub fn add(&mut self, raw: &str) -> bool {
        let item = raw.trim().to_lowercase();
        if item.is_empty() || self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove an ingredient by its stored form. Returns whether it was present.
    pub fn remove(&mut self, item: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|existing| existing != item);
        self.items.len() != before
    }

    /// Remove and return the most recently added ingredient.
    pub fn pop(&mut self) -> Option<String> {
        self.items.pop()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Pantry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pantry = Self::new();
        for raw in iter {
            pantry.add(raw.as_ref());
        }
        pantry
    }
}
