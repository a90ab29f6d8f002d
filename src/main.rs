use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use skillcount::config::Config;
use skillcount::corpus::postings::JobType;

/// skillcount: skill and keyword frequency tables for job postings.
///
/// Counts how many postings of one job type mention each term of nine
/// curated vocabularies (education, experience, datastores, cloud providers,
/// data formats, pipelines, general analytics, miscellaneous, programming
/// languages) and writes one CSV table per vocabulary.
#[derive(Parser)]
#[command(
    name = "skillcount",
    version,
    about,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Job type whose postings are counted
    #[arg(value_enum)]
    job_type: Option<JobType>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the WordNet noun lexicon used for lemmatization (~10 MB)
    DownloadLexicon,

    /// Show which inputs, resources and lexicon files are present
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("skillcount=info")),
        )
        .init();

    // Usage errors go to stdout and stop before any work is done
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            print!("{}", e.render());
            std::process::exit(2);
        }
        Err(e) => e.exit(),
    };

    match (cli.command, cli.job_type) {
        (Some(Commands::DownloadLexicon), _) => {
            let config = Config::load()?;

            println!("Downloading lemmatizer lexicon...");
            println!("  Destination: {}", config.lexicon_dir.display());

            skillcount::lexicon::download_lexicon(&config.lexicon_dir).await?;

            println!("\n{}", "Lexicon downloaded successfully.".bold());
            println!("You can now run `skillcount analyst|engineer|scientist`.");
        }

        (Some(Commands::Status), _) => {
            let config = Config::load()?;
            skillcount::status::check(&config)?;
        }

        (None, Some(job_type)) => {
            let config = Config::load()?;
            config.require_input()?;
            config.require_lexicon()?;

            info!(job_type = job_type.label(), "Counting skills");
            let lemmatizer = skillcount::text::lemmatizer::Lemmatizer::load(&config.lexicon_dir)?;
            let reports = skillcount::pipeline::run::run(&config, job_type, &lemmatizer)?;

            skillcount::output::terminal::display_run_summary(job_type, &reports);
            println!(
                "{}",
                format!(
                    "Wrote {} tables to {}",
                    reports.len(),
                    config.output_dir.display()
                )
                .bold()
            );
        }

        (None, None) => {
            println!("Wrong number of arguments.\n");
            print!("{}", Cli::command().render_usage());
            println!();
            std::process::exit(2);
        }
    }

    Ok(())
}
