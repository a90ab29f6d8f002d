// Noun lemmatizer backed by the WordNet noun index.
//
// Follows WordNet's morphy procedure for nouns: irregular forms come from the
// exception list, regular forms from a fixed set of suffix substitutions, and
// a candidate only counts if the lemma index knows it. When several
// candidates survive, the shortest one wins.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::lexicon::{EXCEPTIONS_FILE, INDEX_FILE};

/// Suffix rewrites tried for regular noun inflections.
const NOUN_SUBSTITUTIONS: [(&str, &str); 9] = [
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    /// Known noun lemmas (multi-word lemmas use underscores)
    lemmas: HashSet<String>,
    /// Irregular inflection -> candidate base forms
    exceptions: HashMap<String, Vec<String>>,
}

impl Lemmatizer {
    /// Load the lexicon files from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let index_path = dir.join(INDEX_FILE);
        let index = std::fs::read_to_string(&index_path)
            .with_context(|| format!("Failed to read lemma index {}", index_path.display()))?;

        let exceptions_path = dir.join(EXCEPTIONS_FILE);
        let exceptions = std::fs::read_to_string(&exceptions_path).with_context(|| {
            format!("Failed to read exception list {}", exceptions_path.display())
        })?;

        let lemmatizer = Self::from_lexicon(&index, &exceptions);
        info!(
            lemmas = lemmatizer.lemmas.len(),
            exceptions = lemmatizer.exceptions.len(),
            "Loaded noun lexicon"
        );
        Ok(lemmatizer)
    }

    /// Build from the text of `index.noun` and `noun.exc`.
    ///
    /// Index lines that start with a space are the license header and are
    /// skipped.
    pub fn from_lexicon(index: &str, exceptions: &str) -> Self {
        let lemmas = index
            .lines()
            .filter(|line| !line.starts_with(' '))
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_string)
            .collect();

        let exceptions = exceptions
            .lines()
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                let inflected = fields.next()?;
                let bases: Vec<String> = fields.map(str::to_string).collect();
                if bases.is_empty() {
                    None
                } else {
                    Some((inflected.to_string(), bases))
                }
            })
            .collect();

        Self { lemmas, exceptions }
    }

    /// Build from in-memory lemmas and `(inflected, base)` exception pairs.
    pub fn from_parts<I, S>(lemmas: I, exceptions: &[(&str, &str)]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut exception_map: HashMap<String, Vec<String>> = HashMap::new();
        for (inflected, base) in exceptions {
            exception_map
                .entry(inflected.to_string())
                .or_default()
                .push(base.to_string());
        }

        Self {
            lemmas: lemmas.into_iter().map(Into::into).collect(),
            exceptions: exception_map,
        }
    }

    /// Reduce `word` to its noun base form, or return it unchanged when the
    /// lexicon has no candidate.
    pub fn lemmatize(&self, word: &str) -> String {
        let candidates: Vec<String> = match self.exceptions.get(word) {
            Some(bases) => std::iter::once(word.to_string())
                .chain(bases.iter().cloned())
                .collect(),
            None => std::iter::once(word.to_string())
                .chain(
                    NOUN_SUBSTITUTIONS
                        .iter()
                        .filter_map(|&(suffix, replacement)| {
                            word.strip_suffix(suffix)
                                .map(|stem| format!("{stem}{replacement}"))
                        }),
                )
                .collect(),
        };

        candidates
            .into_iter()
            .filter(|candidate| self.lemmas.contains(candidate))
            .min_by_key(|candidate| candidate.chars().count())
            .unwrap_or_else(|| word.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> Lemmatizer {
        Lemmatizer::from_parts(
            [
                "degree", "master", "masters", "class", "company", "box", "wolf", "woman",
                "analysis", "child", "datum",
            ],
            &[("children", "child"), ("data", "datum")],
        )
    }

    #[test]
    fn test_regular_plurals() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("degrees"), "degree");
        assert_eq!(lem.lemmatize("classes"), "class");
        assert_eq!(lem.lemmatize("companies"), "company");
        assert_eq!(lem.lemmatize("boxes"), "box");
        assert_eq!(lem.lemmatize("wolves"), "wolf");
        assert_eq!(lem.lemmatize("women"), "woman");
    }

    #[test]
    fn test_shortest_candidate_wins() {
        // Both "masters" and "master" are lemmas
        assert_eq!(lemmatizer().lemmatize("masters"), "master");
    }

    #[test]
    fn test_exceptions_take_precedence() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("children"), "child");
        assert_eq!(lem.lemmatize("data"), "datum");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("required"), "required");
        assert_eq!(lem.lemmatize("aws"), "aws");
        assert_eq!(lem.lemmatize("analysis"), "analysis");
        assert_eq!(lem.lemmatize("3"), "3");
    }

    #[test]
    fn test_from_lexicon_skips_header_lines() {
        let index = "  1 This software and database is being provided\n\
                     degree n 7 4 @ ~ #p %p 7 2 05093890\n\
                     master n 8 0 1 00000000\n";
        let exceptions = "children child\nbroken\n";
        let lem = Lemmatizer::from_lexicon(index, exceptions);

        assert!(!lem.is_empty());
        assert_eq!(lem.lemmatize("degrees"), "degree");
        assert_eq!(lem.lemmatize("1"), "1");
        // Exception lines without a base are ignored
        assert!(!lem.exceptions.contains_key("broken"));
    }
}
