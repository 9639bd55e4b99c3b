//! Controlled vocabulary - a deduplicated, sorted list of names

use serde::{Deserialize, Serialize};

/// Names that applications may reference softly (capabilities, domains).
///
/// Removing a name never touches the applications that use it; they simply
/// resolve to the "Unassigned" sentinel afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Blank names and names already present are ignored;
    /// returns `true` only when the list changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.entries.binary_search_by(|e| e.as_str().cmp(name)) {
            Ok(_) => false,
            Err(pos) => {
                self.entries.insert(pos, name.to_string());
                true
            }
        }
    }

    /// Remove a name; returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.entries.len();
        self.entries.retain(|e| e != name);
        self.entries.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .binary_search_by(|e| e.as_str().cmp(name))
            .is_ok()
    }

    /// First entry in sort order
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(names: Vec<String>) -> Self {
        let mut vocabulary = Self::new();
        for name in &names {
            vocabulary.add(name);
        }
        vocabulary
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.entries
    }
}

impl<'a> FromIterator<&'a str> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut vocabulary = Self::new();
        for name in iter {
            vocabulary.add(name);
        }
        vocabulary
    }
}
