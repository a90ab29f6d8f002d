// Status display — shows which inputs and resources are in place.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::lexicon::{EXCEPTIONS_FILE, INDEX_FILE};
use crate::pipeline::categories::CATEGORIES;

/// Print configured paths and whether each one exists.
///
/// Returns the number of required files that are missing.
pub fn show(config: &Config) -> usize {
    let mut missing = 0;

    println!("{}", "Input".bold());
    missing += report_path("postings", &config.input_path);

    println!("\n{}", "Resources".bold());
    missing += report_path("stopwords", &config.stopwords_path());
    for category in &CATEGORIES {
        missing += report_path(
            category.name,
            &config.vocabulary_path(category.vocabulary_file),
        );
    }

    println!("\n{}", "Lexicon".bold());
    missing += report_path(INDEX_FILE, &config.lexicon_dir.join(INDEX_FILE));
    missing += report_path(EXCEPTIONS_FILE, &config.lexicon_dir.join(EXCEPTIONS_FILE));

    println!("\n{}", "Output".bold());
    let out = &config.output_dir;
    let state = if out.is_dir() {
        "exists".green()
    } else {
        "will be created".dimmed()
    };
    println!("  {:<28} {} ({})", "directory", out.display(), state);

    missing
}

/// Show status and fail when any required file is missing.
pub fn check(config: &Config) -> Result<()> {
    let missing = show(config);
    if missing > 0 {
        anyhow::bail!("{missing} required file(s) missing");
    }
    println!("\n{}", "Ready to run.".green().bold());
    Ok(())
}

fn report_path(label: &str, path: &Path) -> usize {
    if path.exists() {
        println!("  {:<28} {} ({})", label, path.display(), "ok".green());
        0
    } else {
        println!("  {:<28} {} ({})", label, path.display(), "missing".red());
        1
    }
}
