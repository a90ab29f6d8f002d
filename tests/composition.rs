// Composition tests — the full pipeline from postings CSV to count tables.
//
// Each test builds a throwaway workspace (postings, resources, output dir)
// in a temp directory and runs the driver for one job type. The lemmatizer
// is built in memory so no lexicon download is needed.

use std::path::Path;

use skillcount::config::Config;
use skillcount::corpus::postings::JobType;
use skillcount::pipeline::categories::CATEGORIES;
use skillcount::pipeline::run::run;
use skillcount::text::lemmatizer::Lemmatizer;

const POSTINGS: &str = "\
Company,Job Type,Job Description
Acme,data analyst,SQL and Python experience
Globex,data analyst,\"Python, AWS, Docker\"
Initech,data engineer,\"Master's degree required. 5 years of experience with PostgreSQL and Java.\"
";

fn vocabulary_for(file: &str) -> &'static str {
    match file {
        "dict_education.txt" => "{'master degree': None, 'bachelor degree': None}",
        "dict_experience.txt" => "{'year of experience': None}",
        "dict_skills_datastores.txt" => "{'postgresql': ['postgres'], 'mongodb': None}",
        "dict_skills_cloudproviders.txt" => "{'aws': ['amazon web services'], 'azure': None}",
        "dict_skills_dataformats.txt" => "{'json', 'csv'}",
        "dict_skills_datapipelines.txt" => "['airflow', 'docker']",
        "dict_skills_generalanalytics.txt" => "{'statistics': None, 'python': None}",
        "dict_skills_generalmisc.txt" => "{'machine learning': None}",
        "dict_skills_programminglanguages.txt" => {
            "{\n  'python': None,\n  'sql': None,\n  'java': None,\n  'r': None,\n}"
        }
        other => panic!("unexpected vocabulary file {other}"),
    }
}

fn workspace(root: &Path) -> Config {
    let resources = root.join("resources");
    std::fs::create_dir_all(&resources).unwrap();
    std::fs::write(resources.join("stopwords.txt"), "and,with,of,the").unwrap();
    for category in &CATEGORIES {
        std::fs::write(
            resources.join(category.vocabulary_file),
            vocabulary_for(category.vocabulary_file),
        )
        .unwrap();
    }

    let input_path = root.join("df_filtered.csv");
    std::fs::write(&input_path, POSTINGS).unwrap();

    Config {
        input_path,
        resources_dir: resources,
        output_dir: root.join("processed-data"),
        lexicon_dir: root.join("wordnet"),
    }
}

fn lemmatizer() -> Lemmatizer {
    Lemmatizer::from_parts(["master", "degree", "year", "experience"], &[])
}

/// Read a written table back as (skill, count, frequency) rows.
fn read_table(path: &Path) -> Vec<(String, usize, f64)> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["Skill", "Count", "Frequency"]);
    reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (
                r[0].to_string(),
                r[1].parse().unwrap(),
                r[2].parse().unwrap(),
            )
        })
        .collect()
}

fn output_files(dir: &Path) -> usize {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

// ============================================================
// Happy path
// ============================================================

#[test]
fn analyst_run_counts_programming_languages() {
    let tmp = tempfile::tempdir().unwrap();
    let config = workspace(tmp.path());

    let reports = run(&config, JobType::Analyst, &lemmatizer()).unwrap();
    assert_eq!(reports.len(), 9);
    assert_eq!(output_files(&config.output_dir), 9);

    let table = read_table(
        &config
            .output_dir
            .join("analyst-counts-skill-programminglanguages.csv"),
    );
    assert_eq!(
        table,
        vec![
            ("python".to_string(), 2, 1.0),
            ("sql".to_string(), 1, 0.5),
            ("java".to_string(), 0, 0.0),
            ("r".to_string(), 0, 0.0),
        ]
    );
}

#[test]
fn every_category_writes_one_row_per_term() {
    let tmp = tempfile::tempdir().unwrap();
    let config = workspace(tmp.path());

    let reports = run(&config, JobType::Analyst, &lemmatizer()).unwrap();
    for report in &reports {
        let expected = skillcount::vocab::Vocabulary::parse(vocabulary_for(
            report.category.vocabulary_file,
        ))
        .unwrap()
        .len();
        let table = read_table(&report.path);
        assert_eq!(table.len(), expected, "rows for {}", report.category.name);
        assert_eq!(report.result.document_count, 2);
    }

    let cloud = read_table(&config.output_dir.join("analyst-counts-skill-cloudproviders.csv"));
    assert_eq!(cloud[0], ("aws".to_string(), 1, 0.5));
}

#[test]
fn engineer_run_uses_lemmatized_text_for_education() {
    let tmp = tempfile::tempdir().unwrap();
    let config = workspace(tmp.path());

    run(&config, JobType::Engineer, &lemmatizer()).unwrap();

    let education = read_table(&config.output_dir.join("engineer-counts-education.csv"));
    assert_eq!(education[0], ("master degree".to_string(), 1, 1.0));
    assert_eq!(education[1], ("bachelor degree".to_string(), 0, 0.0));

    // "5 years of experience" -> "5 year of experience"; "of" is a stopword
    // in counting, so the trigram is not formed
    let experience = read_table(&config.output_dir.join("engineer-counts-experience.csv"));
    assert_eq!(experience[0].1, 0);

    let datastores = read_table(&config.output_dir.join("engineer-counts-skill-datastores.csv"));
    assert_eq!(datastores[0], ("postgresql".to_string(), 1, 1.0));
}

// ============================================================
// Failures write nothing
// ============================================================

#[test]
fn job_type_without_postings_fails_without_output() {
    let tmp = tempfile::tempdir().unwrap();
    let config = workspace(tmp.path());

    let err = run(&config, JobType::Scientist, &lemmatizer()).unwrap_err();
    assert!(err.to_string().contains("data scientist"));
    assert_eq!(output_files(&config.output_dir), 0);
}

#[test]
fn malformed_vocabulary_aborts_before_any_write() {
    let tmp = tempfile::tempdir().unwrap();
    let config = workspace(tmp.path());
    std::fs::write(
        config.vocabulary_path("dict_skills_programminglanguages.txt"),
        "{'python': None",
    )
    .unwrap();

    let err = run(&config, JobType::Analyst, &lemmatizer()).unwrap_err();
    assert!(format!("{err:#}").contains("dict_skills_programminglanguages.txt"));
    assert_eq!(output_files(&config.output_dir), 0);
}

#[test]
fn missing_stopwords_aborts() {
    let tmp = tempfile::tempdir().unwrap();
    let config = workspace(tmp.path());
    std::fs::remove_file(config.stopwords_path()).unwrap();

    assert!(run(&config, JobType::Analyst, &lemmatizer()).is_err());
    assert_eq!(output_files(&config.output_dir), 0);
}

#[test]
fn missing_description_column_is_a_data_error() {
    let tmp = tempfile::tempdir().unwrap();
    let config = workspace(tmp.path());
    std::fs::write(&config.input_path, "Job Type,Summary\ndata analyst,SQL\n").unwrap();

    let err = run(&config, JobType::Analyst, &lemmatizer()).unwrap_err();
    assert!(format!("{err:#}").contains("Job Description"));
    assert_eq!(output_files(&config.output_dir), 0);
}
