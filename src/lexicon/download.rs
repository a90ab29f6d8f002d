// Lexicon download helper.
//
// Fetches the WordNet corpus archive published in the NLTK data repository
// and extracts the two files the noun lemmatizer needs.
//
// Files are stored in a platform-appropriate directory
// (~/.local/share/skillcount/wordnet/ on Linux) so they persist across runs.

use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::{EXCEPTIONS_FILE, INDEX_FILE};

/// WordNet archive from the NLTK data packages.
const WORDNET_ARCHIVE_URL: &str =
    "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/corpora/wordnet.zip";

/// Directory prefix of the lexicon files inside the archive.
const ARCHIVE_PREFIX: &str = "wordnet";

/// Returns the default directory for storing the lexicon.
/// Uses the platform data directory: ~/.local/share/skillcount/wordnet/ on Linux.
pub fn default_lexicon_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("skillcount")
        .join("wordnet")
}

/// Check whether both lexicon files exist.
pub fn lexicon_files_present(dir: &Path) -> bool {
    dir.join(INDEX_FILE).exists() && dir.join(EXCEPTIONS_FILE).exists()
}

/// Download the WordNet archive and extract the noun index and exceptions.
///
/// Skips the download when both files already exist. Creates the directory
/// as needed.
pub async fn download_lexicon(dir: &Path) -> Result<()> {
    if lexicon_files_present(dir) {
        info!(dir = %dir.display(), "Lexicon already present, skipping download");
        println!("  {} and {} (already exist)", INDEX_FILE, EXCEPTIONS_FILE);
        return Ok(());
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create lexicon directory: {}", dir.display()))?;

    println!("  Downloading wordnet.zip (~10 MB)...");
    let client = reqwest::Client::new();
    let archive = download_archive(&client, WORDNET_ARCHIVE_URL).await?;

    extract_lexicon(&archive, dir)?;
    info!(dir = %dir.display(), "Lexicon extracted");
    Ok(())
}

/// Pull the noun index and exception list out of a WordNet zip archive.
pub fn extract_lexicon(archive: &[u8], dir: &Path) -> Result<()> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive))
        .context("Downloaded lexicon is not a valid zip archive")?;

    for name in [INDEX_FILE, EXCEPTIONS_FILE] {
        let entry_name = format!("{ARCHIVE_PREFIX}/{name}");
        let mut entry = zip
            .by_name(&entry_name)
            .with_context(|| format!("Lexicon archive has no entry {entry_name}"))?;

        let mut contents = Vec::new();
        entry
            .read_to_end(&mut contents)
            .with_context(|| format!("Failed to read {entry_name} from archive"))?;

        let dest = dir.join(name);
        std::fs::write(&dest, &contents)
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        println!("  {} ({} bytes)", name, contents.len());
    }

    Ok(())
}

/// Download the archive into memory, showing a progress bar.
async fn download_archive(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let mut response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let pb = match response.content_length() {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .expect("valid template")
                    .progress_chars("=> "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("    {spinner} {bytes}")
                    .expect("valid template"),
            );
            pb
        }
    };

    let mut bytes = Vec::with_capacity(response.content_length().unwrap_or(0) as usize);
    while let Some(chunk) = response
        .chunk()
        .await
        .context("Failed to read response body")?
    {
        bytes.extend_from_slice(&chunk);
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    info!("Downloaded {} ({} bytes)", url, bytes.len());
    Ok(bytes)
}
