// CSV writer for count tables: `Skill,Count,Frequency`, one row per
// vocabulary term.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::counting::result::CountResult;

/// Write a count table to `path`, replacing any existing file.
pub fn write_counts(path: &Path, result: &CountResult) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_counts_to(file, result).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), rows = result.rows.len(), "Wrote count table");
    Ok(())
}

/// Write a count table to any writer.
pub fn write_counts_to<W: Write>(writer: W, result: &CountResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if result.rows.is_empty() {
        csv_writer.write_record(["Skill", "Count", "Frequency"])?;
    }
    for row in &result.rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counting::result::SkillCount;

    #[test]
    fn test_writes_header_and_rows_in_order() {
        let result = CountResult {
            rows: vec![
                SkillCount {
                    skill: "sql".to_string(),
                    count: 1,
                    frequency: 0.5,
                },
                SkillCount {
                    skill: "node.js, express".to_string(),
                    count: 0,
                    frequency: 0.0,
                },
            ],
            document_count: 2,
        };

        let mut out = Vec::new();
        write_counts_to(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Skill,Count,Frequency");
        assert_eq!(lines[1], "sql,1,0.5");
        // Embedded commas are quoted
        assert_eq!(lines[2], "\"node.js, express\",0,0.0");
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let result = CountResult {
            rows: vec![],
            document_count: 1,
        };
        let mut out = Vec::new();
        write_counts_to(&mut out, &result).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Skill,Count,Frequency\n");
    }
}
