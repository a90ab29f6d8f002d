// The nine skill categories counted for every job type.
//
// Education, experience and the general miscellaneous phrases are matched
// against lemmatized text so that "master's degrees" and "master degree"
// agree. Technology names are matched against the raw text, where surface
// forms carry the meaning. Datastores use plain word splitting; everything
// else uses Treebank tokens so numbers and one-letter names survive.

use crate::corpus::documents::TextSource;
use crate::corpus::postings::JobType;
use crate::counting::counter::{CountMode, NgramRange};

/// Configuration of a single counting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    /// Used in the output file name: `<job>-counts-<name>.csv`
    pub name: &'static str,
    /// Vocabulary file inside the resources directory
    pub vocabulary_file: &'static str,
    pub ngram: NgramRange,
    pub mode: CountMode,
    pub source: TextSource,
}

impl SkillCategory {
    /// File name of this category's output table for `job_type`.
    pub fn output_file_name(&self, job_type: JobType) -> String {
        format!("{}-counts-{}.csv", job_type.slug(), self.name)
    }
}

pub static CATEGORIES: [SkillCategory; 9] = [
    SkillCategory {
        name: "education",
        vocabulary_file: "dict_education.txt",
        ngram: NgramRange::new(2, 2),
        mode: CountMode::Lemmatizing,
        source: TextSource::Lemmatized,
    },
    SkillCategory {
        name: "experience",
        vocabulary_file: "dict_experience.txt",
        ngram: NgramRange::new(3, 3),
        mode: CountMode::Lemmatizing,
        source: TextSource::Lemmatized,
    },
    SkillCategory {
        name: "skill-datastores",
        vocabulary_file: "dict_skills_datastores.txt",
        ngram: NgramRange::new(1, 2),
        mode: CountMode::NonLemmatizing,
        source: TextSource::Raw,
    },
    SkillCategory {
        name: "skill-cloudproviders",
        vocabulary_file: "dict_skills_cloudproviders.txt",
        ngram: NgramRange::new(1, 3),
        mode: CountMode::Lemmatizing,
        source: TextSource::Raw,
    },
    SkillCategory {
        name: "skill-dataformats",
        vocabulary_file: "dict_skills_dataformats.txt",
        ngram: NgramRange::new(1, 1),
        mode: CountMode::Lemmatizing,
        source: TextSource::Raw,
    },
    SkillCategory {
        name: "skill-datapipelines",
        vocabulary_file: "dict_skills_datapipelines.txt",
        ngram: NgramRange::new(1, 2),
        mode: CountMode::Lemmatizing,
        source: TextSource::Raw,
    },
    SkillCategory {
        name: "skill-generalanalytics",
        vocabulary_file: "dict_skills_generalanalytics.txt",
        ngram: NgramRange::new(1, 2),
        mode: CountMode::Lemmatizing,
        source: TextSource::Raw,
    },
    SkillCategory {
        name: "skill-generalmisc",
        vocabulary_file: "dict_skills_generalmisc.txt",
        ngram: NgramRange::new(2, 2),
        mode: CountMode::Lemmatizing,
        source: TextSource::Lemmatized,
    },
    SkillCategory {
        name: "skill-programminglanguages",
        vocabulary_file: "dict_skills_programminglanguages.txt",
        ngram: NgramRange::new(1, 1),
        mode: CountMode::Lemmatizing,
        source: TextSource::Raw,
    },
];

/// Look up a category by name.
pub fn category(name: &str) -> Option<&'static SkillCategory> {
    CATEGORIES.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_files_are_unique() {
        let names: HashSet<&str> = CATEGORIES.iter().map(|c| c.name).collect();
        let files: HashSet<&str> = CATEGORIES.iter().map(|c| c.vocabulary_file).collect();
        assert_eq!(names.len(), CATEGORIES.len());
        assert_eq!(files.len(), CATEGORIES.len());
    }

    #[test]
    fn test_all_ranges_valid() {
        for c in &CATEGORIES {
            assert!(c.ngram.validate().is_ok(), "{} has a bad range", c.name);
        }
    }

    #[test]
    fn test_output_file_name() {
        let c = category("skill-programminglanguages").unwrap();
        assert_eq!(
            c.output_file_name(JobType::Analyst),
            "analyst-counts-skill-programminglanguages.csv"
        );
        assert!(category("nonexistent").is_none());
    }
}
