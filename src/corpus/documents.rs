use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::postings::JobPosting;
use crate::text::lemmatizer::Lemmatizer;
use crate::text::normalize::normalize_document;

/// Which rendering of the postings a counting pass reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// The description exactly as it appears in the dataset
    Raw,
    /// The normalized, noun-lemmatized description
    Lemmatized,
}

/// Raw and lemmatized descriptions, index-aligned.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    raw: Vec<String>,
    lemmatized: Vec<String>,
}

impl Corpus {
    /// Normalize every posting's description once, up front.
    pub fn build(postings: &[JobPosting], lemmatizer: &Lemmatizer) -> Self {
        let pb = ProgressBar::new(postings.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Lemmatizing [{bar:40.cyan/blue}] {pos}/{len}")
                .expect("valid template")
                .progress_chars("=> "),
        );

        let mut raw = Vec::with_capacity(postings.len());
        let mut lemmatized = Vec::with_capacity(postings.len());
        for posting in postings {
            lemmatized.push(normalize_document(&posting.description, lemmatizer));
            raw.push(posting.description.clone());
            pb.inc(1);
        }
        pb.finish_and_clear();

        info!(documents = raw.len(), "Built lemmatized corpus");
        Self { raw, lemmatized }
    }

    pub fn documents(&self, source: TextSource) -> &[String] {
        match source {
            TextSource::Raw => &self.raw,
            TextSource::Lemmatized => &self.lemmatized,
        }
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
