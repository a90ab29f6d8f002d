// Vocabularies and stopwords — the curated term lists each counting pass
// searches for, and the words every pass ignores.

pub mod literal;
pub mod stopwords;

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::debug;

/// An ordered mapping from canonical skill name to alternate surface forms.
///
/// Order is the order of first appearance in the source file, and that order
/// carries through to the output table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: IndexMap<String, Vec<String>>,
}

impl Vocabulary {
    /// Load and parse a vocabulary resource file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary {}", path.display()))?;
        let vocabulary = Self::parse(&contents)
            .with_context(|| format!("Malformed vocabulary {}", path.display()))?;

        if vocabulary.is_empty() {
            anyhow::bail!("Vocabulary {} defines no terms", path.display());
        }

        debug!(path = %path.display(), terms = vocabulary.len(), "Loaded vocabulary");
        Ok(vocabulary)
    }

    /// Parse the literal text of a vocabulary.
    pub fn parse(contents: &str) -> Result<Self> {
        let terms = literal::parse_term_literal(contents)?;
        Ok(Self { terms })
    }

    /// Build a vocabulary from `(term, variants)` pairs, keeping their order.
    pub fn from_entries<I, T, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, V)>,
        T: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let mut terms = IndexMap::new();
        for (term, variants) in entries {
            terms.insert(
                term.into(),
                variants.into_iter().map(Into::into).collect(),
            );
        }
        Self { terms }
    }

    /// Build a vocabulary of bare terms with no variants.
    pub fn from_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::from_entries(terms.into_iter().map(|t| (t, Vec::<String>::new())))
    }

    /// Iterate `(canonical term, variants)` in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.terms
            .iter()
            .map(|(term, variants)| (term.as_str(), variants.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn variants(&self, term: &str) -> Option<&[String]> {
        self.terms.get(term).map(Vec::as_slice)
    }
}
