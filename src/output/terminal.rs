// Colored terminal output for run summaries.
//
// The count tables on disk are the real output; this is the quick look a
// person gets after `skillcount <job>` finishes.

use colored::Colorize;

use crate::corpus::postings::JobType;
use crate::pipeline::run::CategoryReport;

/// How many terms to list per category.
const TOP_TERMS: usize = 5;

/// Display the top terms of every category written during a run.
pub fn display_run_summary(job_type: JobType, reports: &[CategoryReport]) {
    let documents = reports.first().map(|r| r.result.document_count).unwrap_or(0);
    println!(
        "\n{}",
        format!("=== Skill counts for {job_type} ({documents} postings) ===").bold()
    );

    for report in reports {
        println!();
        println!(
            "  {}  {}",
            report.category.name.bold(),
            report.path.display().to_string().dimmed()
        );

        let top = report.result.top(TOP_TERMS);
        if top.is_empty() {
            println!("    {}", "no vocabulary terms found".dimmed());
            continue;
        }

        for row in top {
            println!(
                "    {:<32} {:>6}  {} {:.2}",
                super::truncate_chars(&row.skill, 29),
                row.count,
                frequency_bar(row.frequency),
                row.frequency
            );
        }
    }
    println!();
}

/// A 20-character bar colored by how common the term is.
fn frequency_bar(frequency: f64) -> colored::ColoredString {
    let bar_width: usize = 20;
    let filled = (frequency.clamp(0.0, 1.0) * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    if frequency >= 0.5 {
        bar.bright_green()
    } else if frequency >= 0.2 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}
