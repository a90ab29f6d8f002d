// Vocabulary-driven document frequency counter.
//
// Each document is lowercased, tokenized according to the counting mode,
// stripped of stopwords, and expanded into every n-gram in the configured
// range. A vocabulary term is present in a document when its canonical name
// or one of its variants equals one of those n-grams. Counts are per
// document: a term mentioned five times in one posting counts once.
//
// Documents are tokenized whole, without sentence splitting. In lemmatizing
// mode the Treebank tokenizer only separates a period at the very end of the
// text, so "python." in mid-document stays one token and does not match
// "python". Lemmatized text has already had its punctuation removed.

use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, warn};

use super::result::{CountResult, SkillCount};
use crate::text::tokenize::{TreebankTokenizer, WordPatternTokenizer};
use crate::text::traits::Tokenizer;
use crate::vocab::stopwords::StopwordSet;
use crate::vocab::Vocabulary;

/// How documents are split into tokens before n-grams are formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    /// Word-character runs of two or more characters. Single-character
    /// words and punctuation never form tokens.
    NonLemmatizing,
    /// Treebank tokens, which keep numbers and single characters such as
    /// "3" or "r".
    Lemmatizing,
}

impl CountMode {
    pub fn tokenizer(self) -> &'static dyn Tokenizer {
        match self {
            CountMode::NonLemmatizing => &WordPatternTokenizer,
            CountMode::Lemmatizing => &TreebankTokenizer,
        }
    }
}

/// Inclusive bounds on n-gram length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramRange {
    pub min: usize,
    pub max: usize,
}

impl NgramRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min == 0 || self.min > self.max {
            anyhow::bail!(
                "Invalid n-gram range {}-{}: need 1 <= min <= max",
                self.min,
                self.max
            );
        }
        Ok(())
    }
}

/// Counts vocabulary terms across a list of documents.
pub struct TermCounter<'a> {
    vocabulary: &'a Vocabulary,
    stopwords: &'a StopwordSet,
    ngram: NgramRange,
    mode: CountMode,
    /// Lowercased surface form -> indices of the terms it stands for
    surfaces: HashMap<String, Vec<usize>>,
    /// Surface forms whose word count falls outside the n-gram range
    unreachable: Vec<String>,
}

impl<'a> TermCounter<'a> {
    pub fn new(
        vocabulary: &'a Vocabulary,
        ngram: NgramRange,
        stopwords: &'a StopwordSet,
        mode: CountMode,
    ) -> Result<Self> {
        ngram.validate()?;

        let mut surfaces: HashMap<String, Vec<usize>> = HashMap::new();
        let mut unreachable = Vec::new();
        for (index, (term, variants)) in vocabulary.iter().enumerate() {
            let forms = std::iter::once(term).chain(variants.iter().map(String::as_str));
            for form in forms {
                let key = normalize_surface(form);
                if key.is_empty() {
                    continue;
                }
                let words = key.split(' ').count();
                if words < ngram.min || words > ngram.max {
                    warn!(
                        term,
                        form = %key,
                        words,
                        min = ngram.min,
                        max = ngram.max,
                        "Vocabulary form can never match: word count outside n-gram range"
                    );
                    if !unreachable.contains(&key) {
                        unreachable.push(key.clone());
                    }
                }
                let indices = surfaces.entry(key).or_default();
                if !indices.contains(&index) {
                    indices.push(index);
                }
            }
        }

        Ok(Self {
            vocabulary,
            stopwords,
            ngram,
            mode,
            surfaces,
            unreachable,
        })
    }

    /// Vocabulary forms that no n-gram in range can equal.
    pub fn unreachable_forms(&self) -> &[String] {
        &self.unreachable
    }

    /// Count the documents containing each vocabulary term.
    ///
    /// An empty document list is rejected rather than producing undefined
    /// frequencies.
    pub fn count<S: AsRef<str>>(&self, documents: &[S]) -> Result<CountResult> {
        if documents.is_empty() {
            anyhow::bail!("Cannot count terms over an empty document list");
        }

        let mut counts = vec![0usize; self.vocabulary.len()];
        let mut seen = vec![false; self.vocabulary.len()];
        let mut touched = Vec::new();

        for document in documents {
            for gram in self.ngrams(document.as_ref()) {
                let Some(indices) = self.surfaces.get(&gram) else {
                    continue;
                };
                for &index in indices {
                    if !seen[index] {
                        seen[index] = true;
                        touched.push(index);
                    }
                }
            }

            for index in touched.drain(..) {
                counts[index] += 1;
                seen[index] = false;
            }
        }

        let total = documents.len() as f64;
        let rows: Vec<SkillCount> = self
            .vocabulary
            .iter()
            .zip(counts)
            .map(|((term, _), count)| SkillCount {
                skill: term.to_string(),
                count,
                frequency: count as f64 / total,
            })
            .collect();

        debug!(
            terms = rows.len(),
            matched = rows.iter().filter(|r| r.count > 0).count(),
            documents = documents.len(),
            "Counted vocabulary terms"
        );

        Ok(CountResult {
            rows,
            document_count: documents.len(),
        })
    }

    /// All n-grams of one document, after lowercasing and stopword removal.
    pub fn ngrams(&self, document: &str) -> Vec<String> {
        let tokens: Vec<String> = self
            .mode
            .tokenizer()
            .tokenize(&document.to_lowercase())
            .into_iter()
            .filter(|token| !self.stopwords.contains(token))
            .collect();

        let mut grams = Vec::new();
        for n in self.ngram.min..=self.ngram.max {
            if n > tokens.len() {
                break;
            }
            grams.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        grams
    }
}

/// Lowercase and collapse internal whitespace so vocabulary entries compare
/// equal to space-joined n-grams.
fn normalize_surface(form: &str) -> String {
    form.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
