//! Skill detection, requirement extraction and the overlap score.

use tracing::debug;

use crate::models::{MatchResult, RequirementSource};
use crate::vocabulary::{contains_term, normalize_term, MatchMode, SkillVocabulary};

pub const DEFAULT_REQUIRED_SKILLS: &str = "Python, SQL, Machine Learning, Power BI";

#[derive(Debug, Clone)]
pub struct SkillMatcher {
    vocabulary: SkillVocabulary,
    mode: MatchMode,
}

impl SkillMatcher {
    pub fn new(vocabulary: SkillVocabulary, mode: MatchMode) -> Self {
        Self { vocabulary, mode }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Vocabulary terms present in `text`, in vocabulary order.
    pub fn detect_skills(&self, text: &str) -> Vec<String> {
        let skills = self.vocabulary.find_in(text, self.mode);
        debug!("Detected {} vocabulary skills: {:?}", skills.len(), skills);
        skills
    }

    /// Job descriptions are filtered through the vocabulary; manual lists
    /// are not.
    pub fn required_skills(&self, source: &RequirementSource) -> Vec<String> {
        match source {
            RequirementSource::JobDescription(jd) => self.detect_skills(jd),
            RequirementSource::Manual(list) => parse_skill_list(list),
        }
    }

    /// Splits `required` into skills present in `resume_text` and skills
    /// absent from it, then scores the overlap. Both lists keep `required`
    /// order.
    pub fn match_skills(&self, resume_text: &str, required: &[String]) -> MatchResult {
        let lowered = resume_text.to_lowercase();
        let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = dedup(required)
            .into_iter()
            .partition(|skill| contains_term(&lowered, skill, self.mode));
        let score = overlap_score(&matched_skills, required);
        MatchResult {
            matched_skills,
            missing_skills,
            score,
        }
    }
}

/// Comma-separated list, trimmed and lower-cased. Blank and repeated
/// entries are dropped.
pub fn parse_skill_list(list: &str) -> Vec<String> {
    dedup(
        &list
            .split(',')
            .map(normalize_term)
            .filter(|skill| !skill.is_empty())
            .collect::<Vec<_>>(),
    )
}

fn dedup(skills: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        if !unique.contains(skill) {
            unique.push(skill.clone());
        }
    }
    unique
}

/// `round(|matched ∩ required| / |required| * 100)`, 0 when nothing is
/// required.
pub fn overlap_score(matched: &[String], required: &[String]) -> u32 {
    let required = dedup(required);
    if required.is_empty() {
        return 0;
    }
    let hits = required.iter().filter(|skill| matched.contains(skill)).count();
    (hits as f64 / required.len() as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SkillMatcher {
        SkillMatcher::new(SkillVocabulary::default(), MatchMode::Word)
    }

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn python_sql_against_python_sql_aws_scores_67() {
        let text = "I have 5 years of Python and SQL experience since 2021";
        let result = matcher().match_skills(text, &skills(&["python", "sql", "aws"]));
        assert_eq!(result.matched_skills, skills(&["python", "sql"]));
        assert_eq!(result.missing_skills, skills(&["aws"]));
        assert_eq!(result.score, 67);
    }

    #[test]
    fn matched_and_missing_partition_required() {
        let m = matcher();
        let text = "Django, AWS and Excel with some deep learning";
        let cases = [
            skills(&["python", "aws", "excel", "rust"]),
            skills(&["aws", "aws", "deep learning"]),
            skills(&[]),
            skills(&["go"]),
        ];
        for required in cases {
            let result = m.match_skills(text, &required);
            let expected = dedup(&required);
            let mut union = result.matched_skills.clone();
            union.extend(result.missing_skills.clone());
            union.sort();
            let mut sorted = expected.clone();
            sorted.sort();
            assert_eq!(union, sorted);
            assert!(result
                .matched_skills
                .iter()
                .all(|skill| !result.missing_skills.contains(skill)));
        }
    }

    #[test]
    fn overlap_score_edges() {
        let required = skills(&["python", "sql"]);
        assert_eq!(overlap_score(&required, &required), 100);
        assert_eq!(overlap_score(&skills(&["aws"]), &required), 0);
        assert_eq!(overlap_score(&skills(&["python"]), &[]), 0);
        assert_eq!(overlap_score(&[], &[]), 0);
    }

    #[test]
    fn empty_requirements_score_zero() {
        let result = matcher().match_skills("Python everywhere", &[]);
        assert_eq!(result.score, 0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn job_description_is_filtered_by_vocabulary() {
        let source = RequirementSource::JobDescription(
            "We need Rust, AWS and strong SQL. Python is a plus.".to_string(),
        );
        assert_eq!(matcher().required_skills(&source), skills(&["python", "sql", "aws"]));
    }

    #[test]
    fn manual_list_keeps_terms_outside_vocabulary() {
        let source = RequirementSource::Manual(" Rust ,  Power   BI,, python, RUST ".to_string());
        assert_eq!(
            matcher().required_skills(&source),
            skills(&["rust", "power bi", "python"])
        );
    }

    #[test]
    fn manual_skill_outside_vocabulary_can_match() {
        let required = parse_skill_list("Rust, Kubernetes");
        let result = matcher().match_skills("Shipped Rust services", &required);
        assert_eq!(result.matched_skills, skills(&["rust"]));
        assert_eq!(result.missing_skills, skills(&["kubernetes"]));
        assert_eq!(result.score, 50);
    }

    #[test]
    fn blank_manual_list_is_empty() {
        assert!(parse_skill_list("").is_empty());
        assert!(parse_skill_list(" , ,").is_empty());
    }

    #[test]
    fn default_required_skills_parse() {
        assert_eq!(
            parse_skill_list(DEFAULT_REQUIRED_SKILLS),
            skills(&["python", "sql", "machine learning", "power bi"])
        );
    }

    #[test]
    fn substring_mode_matches_inside_words() {
        let legacy = SkillMatcher::new(SkillVocabulary::default(), MatchMode::Substring);
        let result = legacy.match_skills("JavaScript developer", &skills(&["java"]));
        assert_eq!(result.score, 100);
        let result = matcher().match_skills("JavaScript developer", &skills(&["java"]));
        assert_eq!(result.score, 0);
    }
}
