// Category pipeline driver.
//
// Loads everything a run needs before writing anything: postings, stopwords
// and all nine vocabularies. A missing or malformed resource therefore
// aborts the run with no output files. Once counting starts, each category
// is counted and written in table order; the passes share only read-only
// inputs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::categories::{SkillCategory, CATEGORIES};
use crate::config::Config;
use crate::corpus::documents::Corpus;
use crate::corpus::postings::{load_postings, JobType};
use crate::counting::counter::TermCounter;
use crate::counting::result::CountResult;
use crate::output::table::write_counts;
use crate::text::lemmatizer::Lemmatizer;
use crate::vocab::stopwords::StopwordSet;
use crate::vocab::Vocabulary;

/// The outcome of one category pass.
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub category: &'static SkillCategory,
    /// Where the count table was written
    pub path: PathBuf,
    pub result: CountResult,
}

/// Run every category for `job_type` and write one count table per category.
pub fn run(
    config: &Config,
    job_type: JobType,
    lemmatizer: &Lemmatizer,
) -> Result<Vec<CategoryReport>> {
    let postings = load_postings(&config.input_path, job_type)?;
    if postings.is_empty() {
        anyhow::bail!(
            "No postings with Job Type '{}' in {}",
            job_type.label(),
            config.input_path.display()
        );
    }

    let stopwords = StopwordSet::load(&config.stopwords_path())?;
    let vocabularies = CATEGORIES
        .iter()
        .map(|category| Vocabulary::load(&config.vocabulary_path(category.vocabulary_file)))
        .collect::<Result<Vec<_>>>()?;

    println!("Lemmatizing {} postings...", postings.len());
    let corpus = Corpus::build(&postings, lemmatizer);

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut reports = Vec::with_capacity(CATEGORIES.len());
    for (category, vocabulary) in CATEGORIES.iter().zip(&vocabularies) {
        let report = run_category(
            category,
            vocabulary,
            &corpus,
            &stopwords,
            job_type,
            &config.output_dir,
        )?;
        reports.push(report);
    }

    info!(
        job_type = job_type.label(),
        categories = reports.len(),
        "Run complete"
    );
    Ok(reports)
}

/// Count one category over the corpus without writing anything.
pub fn count_category(
    category: &SkillCategory,
    vocabulary: &Vocabulary,
    corpus: &Corpus,
    stopwords: &StopwordSet,
) -> Result<CountResult> {
    let counter = TermCounter::new(vocabulary, category.ngram, stopwords, category.mode)?;
    counter
        .count(corpus.documents(category.source))
        .with_context(|| format!("Counting failed for category {}", category.name))
}

fn run_category(
    category: &'static SkillCategory,
    vocabulary: &Vocabulary,
    corpus: &Corpus,
    stopwords: &StopwordSet,
    job_type: JobType,
    output_dir: &Path,
) -> Result<CategoryReport> {
    let result = count_category(category, vocabulary, corpus, stopwords)?;
    let path = output_dir.join(category.output_file_name(job_type));
    write_counts(&path, &result)?;

    info!(
        category = category.name,
        terms = result.rows.len(),
        matched = result.rows.iter().filter(|r| r.count > 0).count(),
        "Category counted"
    );

    Ok(CategoryReport {
        category,
        path,
        result,
    })
}
