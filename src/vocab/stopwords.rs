// Stopword list loaded from a comma-separated resource file.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Words dropped from every token stream before n-grams are formed.
///
/// Entries are stored trimmed and lowercased, matching the lowercased
/// documents they are compared against.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load a comma-separated stopword file. An empty file is an empty set.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopwords {}", path.display()))?;
        let set = Self::parse(&contents);
        debug!(path = %path.display(), words = set.len(), "Loaded stopwords");
        Ok(set)
    }

    /// Split on commas, trimming and lowercasing each entry.
    pub fn parse(contents: &str) -> Self {
        Self::from_words(contents.split(','))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
