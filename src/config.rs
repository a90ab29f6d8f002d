use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::lexicon;

/// Name of the stopword list inside the resources directory.
pub const STOPWORDS_FILE: &str = "stopwords.txt";

/// Central configuration loaded from environment variables.
///
/// Every path has a default relative to the working directory, except the
/// lexicon, which lives in the platform data directory so that a single
/// download serves every checkout. The .env file is loaded automatically at
/// startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Filtered job postings CSV (needs "Job Type" and "Job Description")
    pub input_path: PathBuf,
    /// Directory holding the vocabulary files and stopwords.txt
    pub resources_dir: PathBuf,
    /// Directory the per-category count tables are written to
    pub output_dir: PathBuf,
    /// Directory containing the WordNet noun index and exception list
    pub lexicon_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let lexicon_dir = env::var("SKILLCOUNT_LEXICON_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| lexicon::default_lexicon_dir());

        Ok(Self {
            input_path: env::var("SKILLCOUNT_INPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("processed-data/df_filtered.csv")),
            resources_dir: env::var("SKILLCOUNT_RESOURCES")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("resources")),
            output_dir: env::var("SKILLCOUNT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("processed-data")),
            lexicon_dir,
        })
    }

    /// Path of the comma-separated stopword list.
    pub fn stopwords_path(&self) -> PathBuf {
        self.resources_dir.join(STOPWORDS_FILE)
    }

    /// Path of a vocabulary file inside the resources directory.
    pub fn vocabulary_path(&self, file_name: &str) -> PathBuf {
        self.resources_dir.join(file_name)
    }

    /// Check that the input CSV exists.
    pub fn require_input(&self) -> Result<()> {
        if !self.input_path.exists() {
            anyhow::bail!(
                "Job postings file not found: {}\n\
                 Set SKILLCOUNT_INPUT to point at the filtered postings CSV.",
                self.input_path.display()
            );
        }
        Ok(())
    }

    /// Check that the lemmatizer lexicon has been downloaded.
    /// Call this before building the lemmatized corpus.
    pub fn require_lexicon(&self) -> Result<()> {
        if !lexicon::lexicon_files_present(&self.lexicon_dir) {
            anyhow::bail!(
                "Lemmatizer lexicon not found in {}\n\
                 Run `skillcount download-lexicon` to download it,\n\
                 or set SKILLCOUNT_LEXICON_DIR to an existing copy.",
                self.lexicon_dir.display()
            );
        }
        Ok(())
    }
}
