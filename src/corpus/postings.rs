use std::fmt;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// The job categories a run can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum JobType {
    Analyst,
    Engineer,
    Scientist,
}

impl JobType {
    /// The exact "Job Type" value postings carry in the dataset.
    pub fn label(self) -> &'static str {
        match self {
            JobType::Analyst => "data analyst",
            JobType::Engineer => "data engineer",
            JobType::Scientist => "data scientist",
        }
    }

    /// Short name used on the command line and in output file names.
    pub fn slug(self) -> &'static str {
        match self {
            JobType::Analyst => "analyst",
            JobType::Engineer => "engineer",
            JobType::Scientist => "scientist",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single job posting row. Other columns in the file are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "Job Type")]
    pub job_type: String,
    #[serde(rename = "Job Description")]
    pub description: String,
}

/// Load the postings whose "Job Type" matches `job_type` exactly.
pub fn load_postings(path: &Path, job_type: JobType) -> Result<Vec<JobPosting>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open job postings {}", path.display()))?;
    let postings = read_postings(file, job_type)
        .with_context(|| format!("Failed to read job postings {}", path.display()))?;

    info!(
        path = %path.display(),
        job_type = job_type.label(),
        postings = postings.len(),
        "Loaded job postings"
    );
    Ok(postings)
}

/// Read postings CSV from any reader, keeping rows for `job_type`.
///
/// A missing "Job Type" or "Job Description" column is an error.
pub fn read_postings<R: Read>(reader: R, job_type: JobType) -> Result<Vec<JobPosting>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers().context("Failed to read CSV header")?;
    for column in ["Job Type", "Job Description"] {
        if !headers.iter().any(|h| h == column) {
            anyhow::bail!("Missing required column '{column}'");
        }
    }

    let mut postings = Vec::new();
    for (i, row) in csv_reader.deserialize::<JobPosting>().enumerate() {
        // Row numbers are 1-based and count the header line.
        let posting = row.with_context(|| format!("Malformed posting on line {}", i + 2))?;
        if posting.job_type == job_type.label() {
            postings.push(posting);
        }
    }
    Ok(postings)
}
