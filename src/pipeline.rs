//! End-to-end analysis of one resume: extract, match, score, annotate.
//! Each call works on its own in-memory copy of the upload.

use chrono::{Datelike, Utc};
use tracing::info;

use crate::config::AppConfig;
use crate::contact::{extract_contact, HeadingNameRecognizer, NameRecognizer};
use crate::error::DocumentReadError;
use crate::feedback::{generate_feedback, resume_analytics, suggest_technical_improvements};
use crate::heuristics::{
    check_freshness, classify_skill_tiers, detect_years, extract_experience, proficiency_map,
};
use crate::market::job_market_fit;
use crate::matcher::SkillMatcher;
use crate::models::{AnalysisReport, RequirementSource, ResumeDocument};
use crate::pdf_processor::PdfProcessor;

pub struct AnalysisRequest<'a> {
    pub resume: &'a [u8],
    pub password: Option<&'a str>,
    pub requirements: &'a RequirementSource,
    pub job_title: Option<&'a str>,
}

pub struct Analyzer {
    matcher: SkillMatcher,
    stale_after_years: u32,
    names: Box<dyn NameRecognizer>,
}

impl Analyzer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            matcher: config.matcher(),
            stale_after_years: config.stale_after_years,
            names: Box::new(HeadingNameRecognizer),
        }
    }

    pub fn with_name_recognizer(mut self, names: Box<dyn NameRecognizer>) -> Self {
        self.names = names;
        self
    }

    pub fn matcher(&self) -> &SkillMatcher {
        &self.matcher
    }

    /// Fails only when the PDF cannot be read; there are no partial results.
    pub fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<AnalysisReport, DocumentReadError> {
        let text = PdfProcessor::extract_text(request.resume, request.password)?;
        Ok(self.analyze_text(text, request.requirements, request.job_title, Utc::now().year()))
    }

    pub fn read_document(&self, text: String, current_year: i32) -> ResumeDocument {
        ResumeDocument {
            skills: self.matcher.detect_skills(&text),
            years: detect_years(&text, current_year),
            experience: extract_experience(&text),
            text,
        }
    }

    pub fn analyze_text(
        &self,
        text: String,
        requirements: &RequirementSource,
        job_title: Option<&str>,
        current_year: i32,
    ) -> AnalysisReport {
        let document = self.read_document(text, current_year);
        let required_skills = self.matcher.required_skills(requirements);
        let result = self.matcher.match_skills(&document.text, &required_skills);
        info!(
            score = result.score,
            matched = result.matched_skills.len(),
            missing = result.missing_skills.len(),
            "Scored resume"
        );

        let freshness = check_freshness(&document.text, current_year, self.stale_after_years);

        AnalysisReport {
            candidate: extract_contact(&document.text, self.names.as_ref()),
            proficiency: proficiency_map(&document.text, &result.matched_skills),
            skill_tiers: classify_skill_tiers(&document.skills),
            feedback: generate_feedback(&result.matched_skills, &result.missing_skills),
            technical_tips: suggest_technical_improvements(&result.missing_skills),
            analytics: resume_analytics(&document.skills, &result.matched_skills, &result.missing_skills),
            market_fit: job_title.map(job_market_fit),
            freshness_message: freshness.message(),
            freshness,
            vocabulary_version: self.matcher.vocabulary().version().to_string(),
            generated_at: Utc::now().to_rfc3339(),
            required_skills,
            resume_skills: document.skills,
            experience: document.experience,
            text: document.text,
            result,
        }
    }
}
