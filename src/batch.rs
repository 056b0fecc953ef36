//! Ranks a folder of resumes against one set of requirements.

use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{AnalysisReport, RequirementSource};
use crate::pdf_processor::PdfProcessor;
use crate::pipeline::{AnalysisRequest, Analyzer};
use crate::report::render_report;
use crate::utils::{ensure_directory_exists, report_file_names};

pub struct BatchEntry {
    pub path: PathBuf,
    pub outcome: std::result::Result<AnalysisReport, String>,
}

impl BatchEntry {
    fn score(&self) -> Option<u32> {
        self.outcome.as_ref().ok().map(|report| report.result.score)
    }
}

#[derive(Serialize)]
struct RankingRow<'a> {
    file: String,
    name: &'a str,
    score: Option<u32>,
    matched: String,
    missing: String,
    freshness: &'a str,
    error: &'a str,
}

/// Analyzes each resume independently. A broken file is recorded and the
/// batch moves on. Results come back best score first; failures last.
pub fn rank_resumes(
    analyzer: &Analyzer,
    paths: &[PathBuf],
    requirements: &RequirementSource,
    job_title: Option<&str>,
    password: Option<&str>,
) -> Vec<BatchEntry> {
    let mut entries: Vec<BatchEntry> = paths
        .iter()
        .map(|path| {
            let outcome = PdfProcessor::read_resume(path)
                .and_then(|bytes| {
                    analyzer.analyze(&AnalysisRequest {
                        resume: &bytes,
                        password,
                        requirements,
                        job_title,
                    })
                })
                .map_err(|e| {
                    warn!("Skipping {}: {}", path.display(), e);
                    e.to_string()
                });
            if let Ok(report) = &outcome {
                info!("{} scored {}%", path.display(), report.result.score);
            }
            BatchEntry {
                path: path.clone(),
                outcome,
            }
        })
        .collect();
    entries.sort_by(|a, b| b.score().cmp(&a.score()).then_with(|| a.path.cmp(&b.path)));
    entries
}

pub fn write_ranking_csv<W: Write>(entries: &[BatchEntry], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for entry in entries {
        let file = display_name(&entry.path);
        let row = match &entry.outcome {
            Ok(report) => RankingRow {
                file,
                name: report.candidate.name.as_deref().unwrap_or(""),
                score: Some(report.result.score),
                matched: report.result.matched_skills.join("; "),
                missing: report.result.missing_skills.join("; "),
                freshness: &report.freshness_message,
                error: "",
            },
            Err(error) => RankingRow {
                file,
                name: "",
                score: None,
                matched: String::new(),
                missing: String::new(),
                freshness: "",
                error,
            },
        };
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes one feedback report per successful entry into `reports_dir`,
/// named after each resume's path below `root`. Returns how many were written.
pub fn write_reports(entries: &[BatchEntry], root: &Path, reports_dir: &Path) -> Result<usize> {
    ensure_directory_exists(reports_dir)?;
    let paths: Vec<&Path> = entries.iter().map(|entry| entry.path.as_path()).collect();
    let names = report_file_names(root, &paths);
    let mut written = 0;
    for (entry, name) in entries.iter().zip(names) {
        if let Ok(analysis) = &entry.outcome {
            std::fs::write(reports_dir.join(name), render_report(analysis))?;
            written += 1;
        }
    }
    info!("Wrote {} reports to {}", written, reports_dir.display());
    Ok(written)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
