use serde::{Deserialize, Serialize};
use std::fmt;

/// Text pulled out of one uploaded resume plus everything derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeDocument {
    pub text: String,
    pub skills: Vec<String>,
    pub years: Vec<i32>,
    pub experience: Vec<ExperienceEntry>,
}

/// Where the required skills for a session come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementSource {
    /// Free-text job description scanned against the vocabulary.
    JobDescription(String),
    /// Comma-separated list taken as-is, vocabulary or not.
    Manual(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub start_year: String,
    pub end_year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Freshness {
    Current { last_year: i32 },
    Stale { last_year: i32 },
    Indeterminate,
}

impl Freshness {
    pub fn message(&self) -> String {
        match self {
            Freshness::Current { last_year } => {
                format!("Resume includes recent experience (up to {last_year}).")
            }
            Freshness::Stale { last_year } => format!(
                "Resume seems outdated (last year mentioned: {last_year}). Consider updating it."
            ),
            Freshness::Indeterminate => {
                "Couldn't detect any years. Please ensure job dates are included.".to_string()
            }
        }
    }
}

/// Ordered from least to most mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Proficiency {
    #[serde(rename = "Not Mentioned")]
    NotMentioned,
    Beginner,
    Intermediate,
    Expert,
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Proficiency::NotMentioned => "Not Mentioned",
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Expert => "Expert",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProficiency {
    pub skill: String,
    pub level: Proficiency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketFit {
    pub salary_range: String,
    pub demand: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillTier {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierGroup {
    pub tier: SkillTier,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeAnalytics {
    pub total_resume_skills: usize,
    pub matched_skills: usize,
    pub missing_skills: usize,
}

/// Everything one analysis produces. Consumed by the report renderer and
/// the JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub text: String,
    pub candidate: CandidateContact,
    pub resume_skills: Vec<String>,
    pub required_skills: Vec<String>,
    #[serde(flatten)]
    pub result: MatchResult,
    pub freshness: Freshness,
    pub freshness_message: String,
    pub proficiency: Vec<SkillProficiency>,
    pub experience: Vec<ExperienceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_fit: Option<MarketFit>,
    pub skill_tiers: Vec<TierGroup>,
    pub feedback: String,
    pub technical_tips: Vec<String>,
    pub analytics: ResumeAnalytics,
    pub vocabulary_version: String,
    pub generated_at: String,
}
