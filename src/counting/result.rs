// Count tables produced by a counting pass.

use serde::Serialize;

/// One vocabulary term's document count and frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCount {
    #[serde(rename = "Skill")]
    pub skill: String,
    /// Number of documents containing the term at least once
    #[serde(rename = "Count")]
    pub count: usize,
    /// `count / document_count`, always within [0, 1]
    #[serde(rename = "Frequency")]
    pub frequency: f64,
}

/// The full table for one pass: one row per vocabulary term, in vocabulary
/// order, zero-count terms included.
#[derive(Debug, Clone, PartialEq)]
pub struct CountResult {
    pub rows: Vec<SkillCount>,
    pub document_count: usize,
}

impl CountResult {
    /// Look up a row by its canonical skill name.
    pub fn get(&self, skill: &str) -> Option<&SkillCount> {
        self.rows.iter().find(|row| row.skill == skill)
    }

    /// The `n` most common terms that occur at all, highest count first.
    /// Ties keep vocabulary order.
    pub fn top(&self, n: usize) -> Vec<&SkillCount> {
        let mut found: Vec<&SkillCount> = self.rows.iter().filter(|r| r.count > 0).collect();
        found.sort_by(|a, b| b.count.cmp(&a.count));
        found.truncate(n);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(skill: &str, count: usize) -> SkillCount {
        SkillCount {
            skill: skill.to_string(),
            count,
            frequency: count as f64 / 4.0,
        }
    }

    #[test]
    fn test_top_skips_zero_and_is_stable() {
        let result = CountResult {
            rows: vec![row("a", 1), row("b", 0), row("c", 3), row("d", 1)],
            document_count: 4,
        };
        let top: Vec<&str> = result.top(5).iter().map(|r| r.skill.as_str()).collect();
        assert_eq!(top, vec!["c", "a", "d"]);
        assert_eq!(result.top(1).len(), 1);
    }

    #[test]
    fn test_get() {
        let result = CountResult {
            rows: vec![row("sql", 2)],
            document_count: 4,
        };
        assert_eq!(result.get("sql").unwrap().frequency, 0.5);
        assert!(result.get("python").is_none());
    }
}
