use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillsync::batch::{rank_resumes, write_ranking_csv, write_reports};
use skillsync::config::resume_paths;
use skillsync::matcher::DEFAULT_REQUIRED_SKILLS;
use skillsync::pdf_processor::PdfProcessor;
use skillsync::report::render_report;
use skillsync::{AnalysisRequest, Analyzer, AppConfig, RequirementSource};

#[derive(Parser)]
#[command(name = "skillsync", version)]
#[command(about = "Match a resume against required skills and get feedback")]
struct Cli {
    /// Config file (defaults to ./skillsync.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a single resume
    Analyze {
        resume: PathBuf,
        #[command(flatten)]
        requirements: RequirementArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Also save the feedback report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Rank every PDF resume in a directory
    Batch {
        dir: PathBuf,
        #[command(flatten)]
        requirements: RequirementArgs,
        /// Write ranking CSV here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Write one feedback report per resume into this directory
        #[arg(long)]
        reports_dir: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RequirementArgs {
    /// Job description text
    #[arg(long, conflicts_with_all = ["jd_file", "skills"])]
    jd: Option<String>,
    /// File containing the job description
    #[arg(long, conflicts_with = "skills")]
    jd_file: Option<PathBuf>,
    /// Comma-separated required skills
    #[arg(long)]
    skills: Option<String>,
    /// Job title for the salary and demand lookup
    #[arg(long)]
    job_title: Option<String>,
    /// Password for encrypted PDFs
    #[arg(long)]
    password: Option<String>,
}

impl RequirementArgs {
    fn source(&self) -> Result<RequirementSource> {
        if let Some(jd) = &self.jd {
            return Ok(RequirementSource::JobDescription(jd.clone()));
        }
        if let Some(path) = &self.jd_file {
            let jd = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read job description at {}", path.display()))?;
            return Ok(RequirementSource::JobDescription(jd));
        }
        let skills = self.skills.as_deref().unwrap_or(DEFAULT_REQUIRED_SKILLS);
        Ok(RequirementSource::Manual(skills.to_string()))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.log_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Vocabulary v{} with {} terms, {:?} matching",
        config.vocabulary.version(),
        config.vocabulary.len(),
        config.match_mode
    );
    let analyzer = Analyzer::new(&config);

    match cli.command {
        Command::Analyze {
            resume,
            requirements,
            format,
            report,
        } => {
            let source = requirements.source()?;
            let bytes = PdfProcessor::read_resume(&resume)
                .with_context(|| format!("Failed to read resume at {}", resume.display()))?;
            let analysis = analyzer
                .analyze(&AnalysisRequest {
                    resume: &bytes,
                    password: requirements.password.as_deref(),
                    requirements: &source,
                    job_title: requirements.job_title.as_deref(),
                })
                .with_context(|| format!("Could not analyze {}", resume.display()))?;

            let document = render_report(&analysis);
            match format {
                OutputFormat::Text => print!("{document}"),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
            }
            if let Some(path) = report {
                std::fs::write(&path, &document)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                info!("Report saved to {}", path.display());
            }
        }
        Command::Batch {
            dir,
            requirements,
            output,
            reports_dir,
        } => {
            let source = requirements.source()?;
            let paths = resume_paths(&dir)?;
            info!("Found {} resumes in {}", paths.len(), dir.display());
            let entries = rank_resumes(
                &analyzer,
                &paths,
                &source,
                requirements.job_title.as_deref(),
                requirements.password.as_deref(),
            );

            if let Some(reports_dir) = &reports_dir {
                write_reports(&entries, &dir, reports_dir)
                    .with_context(|| format!("Failed to write reports to {}", reports_dir.display()))?;
            }

            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    write_ranking_csv(&entries, file)?;
                }
                None => write_ranking_csv(&entries, std::io::stdout().lock())?,
            }
        }
    }

    Ok(())
}
