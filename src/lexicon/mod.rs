// Lemmatizer lexicon: the WordNet noun index and its irregular-form list.
//
// The files are fetched once by `skillcount download-lexicon` and read from
// disk on every run. Nothing here downloads implicitly.

pub mod download;

pub use download::{default_lexicon_dir, download_lexicon, lexicon_files_present};

/// Noun lemma index: one lemma per line, first whitespace-separated field.
pub const INDEX_FILE: &str = "index.noun";

/// Irregular noun forms: `inflected base [base...]` per line.
pub const EXCEPTIONS_FILE: &str = "noun.exc";
