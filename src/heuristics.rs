//! Best-effort annotators over raw resume text. None of these fail: odd
//! formatting just yields empty or default results.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{ExperienceEntry, Freshness, Proficiency, SkillProficiency, SkillTier, TierGroup};
use crate::vocabulary::count_word_occurrences;

pub const EARLIEST_YEAR: i32 = 2000;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(20\d{2})\b").expect("valid year regex"));

// title, optional company, start year, end year ("Present" allowed)
static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)([A-Z][\w\s,&-]+?)\s*[\n\-–]\s*([\w\s]+)?\s*(?:\(|\-)?(20\d{2})\s*(?:to|–|-)\s*(Present|20\d{2})",
    )
    .expect("valid experience regex")
});

const TIER_TABLE: &[(SkillTier, &[&str])] = &[
    (
        SkillTier::Beginner,
        &["python", "java", "sql", "c++", "html", "css", "javascript"],
    ),
    (
        SkillTier::Intermediate,
        &["machine learning", "data analysis", "git", "excel", "tensorflow", "flask", "django"],
    ),
    (
        SkillTier::Advanced,
        &["deep learning", "power bi", "aws", "cloud", "devops"],
    ),
];

/// Sorted, de-duplicated years in `[2000, current_year]` mentioned in `text`.
pub fn detect_years(text: &str, current_year: i32) -> Vec<i32> {
    let mut years: Vec<i32> = YEAR_RE
        .captures_iter(text)
        .filter_map(|cap| cap[1].parse::<i32>().ok())
        .filter(|year| (EARLIEST_YEAR..=current_year).contains(year))
        .collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Stale when the latest year mentioned is more than `stale_after_years`
/// behind `current_year`.
pub fn check_freshness(text: &str, current_year: i32, stale_after_years: u32) -> Freshness {
    match detect_years(text, current_year).last() {
        None => Freshness::Indeterminate,
        Some(&last_year) if i64::from(current_year) - i64::from(last_year) > i64::from(stale_after_years) => {
            Freshness::Stale { last_year }
        }
        Some(&last_year) => Freshness::Current { last_year },
    }
}

pub fn proficiency_for_count(count: usize) -> Proficiency {
    match count {
        0 => Proficiency::NotMentioned,
        1..=2 => Proficiency::Beginner,
        3..=4 => Proficiency::Intermediate,
        _ => Proficiency::Expert,
    }
}

/// Counts case-insensitive whole-word mentions of `skill`.
pub fn estimate_proficiency(text: &str, skill: &str) -> Proficiency {
    let count = count_word_occurrences(&text.to_lowercase(), &skill.to_lowercase());
    proficiency_for_count(count)
}

pub fn proficiency_map(text: &str, skills: &[String]) -> Vec<SkillProficiency> {
    let lowered = text.to_lowercase();
    skills
        .iter()
        .map(|skill| SkillProficiency {
            skill: skill.clone(),
            level: proficiency_for_count(count_word_occurrences(&lowered, &skill.to_lowercase())),
        })
        .collect()
}

/// Lossy scan for "Title - Company (2019 - Present)" shaped lines.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let entries: Vec<ExperienceEntry> = EXPERIENCE_RE
        .captures_iter(text)
        .filter_map(|cap| {
            // The lazy title can swallow earlier lines; the role is the last one.
            let job_title = cap
                .get(1)?
                .as_str()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .last()?
                .to_string();
            let company = cap
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|c| !c.is_empty())
                .unwrap_or("Not specified")
                .to_string();
            Some(ExperienceEntry {
                job_title,
                company,
                start_year: cap.get(3)?.as_str().to_string(),
                end_year: cap.get(4)?.as_str().to_string(),
            })
        })
        .collect();
    debug!("Extracted {} experience entries", entries.len());
    entries
}

/// Groups known skills by tier. Unknown skills and empty tiers are left out.
pub fn classify_skill_tiers(skills: &[String]) -> Vec<TierGroup> {
    TIER_TABLE
        .iter()
        .filter_map(|(tier, members)| {
            let skills: Vec<String> = skills
                .iter()
                .filter(|skill| members.contains(&skill.to_lowercase().as_str()))
                .cloned()
                .collect();
            (!skills.is_empty()).then_some(TierGroup { tier: *tier, skills })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_stale_threshold_never_marks_stale() {
        assert_eq!(
            check_freshness("Graduated 2019", 2026, u32::MAX),
            Freshness::Current { last_year: 2019 }
        );
    }

    #[test]
    fn old_year_only_is_stale() {
        assert_eq!(
            check_freshness("Graduated in 2019", 2029, 2),
            Freshness::Stale { last_year: 2019 }
        );
    }

    #[test]
    fn current_year_is_current() {
        assert_eq!(
            check_freshness("Intern 2018, engineer 2026", 2026, 2),
            Freshness::Current { last_year: 2026 }
        );
    }

    #[test]
    fn gap_equal_to_threshold_is_still_current() {
        assert_eq!(
            check_freshness("Last role ended 2024", 2026, 2),
            Freshness::Current { last_year: 2024 }
        );
    }

    #[test]
    fn no_years_is_indeterminate() {
        assert_eq!(check_freshness("No dates here, 42 projects", 2026, 2), Freshness::Indeterminate);
    }

    #[test]
    fn future_and_ancient_years_are_ignored() {
        assert_eq!(detect_years("1999 2003 2003 2031 20210", 2026), vec![2003]);
        assert_eq!(
            check_freshness("Planned for 2035", 2026, 2),
            Freshness::Indeterminate
        );
    }

    #[test]
    fn proficiency_thresholds() {
        assert_eq!(proficiency_for_count(0), Proficiency::NotMentioned);
        assert_eq!(proficiency_for_count(1), Proficiency::Beginner);
        assert_eq!(proficiency_for_count(3), Proficiency::Intermediate);
        assert_eq!(proficiency_for_count(5), Proficiency::Expert);
    }

    #[test]
    fn proficiency_never_decreases_with_more_mentions() {
        let mut previous = Proficiency::NotMentioned;
        for count in 0..12 {
            let level = proficiency_for_count(count);
            assert!(level >= previous, "count {count} dropped to {level}");
            previous = level;
        }
    }

    #[test]
    fn proficiency_counts_whole_words_case_insensitively() {
        let text = "Python scripts. PYTHON tooling; python. pythonic code";
        assert_eq!(estimate_proficiency(text, "python"), Proficiency::Intermediate);
        assert_eq!(estimate_proficiency(text, "rust"), Proficiency::NotMentioned);
    }

    #[test]
    fn proficiency_map_follows_skill_order() {
        let skills = vec!["sql".to_string(), "aws".to_string()];
        let map = proficiency_map("SQL sql SQL sql SQL and aws", &skills);
        assert_eq!(map[0].skill, "sql");
        assert_eq!(map[0].level, Proficiency::Expert);
        assert_eq!(map[1].level, Proficiency::Beginner);
    }

    #[test]
    fn extracts_dash_and_paren_experience() {
        let entries = extract_experience("Software Engineer - Acme Corp (2019 - 2022)");
        assert_eq!(
            entries,
            vec![ExperienceEntry {
                job_title: "Software Engineer".to_string(),
                company: "Acme Corp".to_string(),
                start_year: "2019".to_string(),
                end_year: "2022".to_string(),
            }]
        );
    }

    #[test]
    fn extracts_present_as_end_year() {
        let entries = extract_experience("Data Analyst - Globex 2021 to Present");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job_title, "Data Analyst");
        assert_eq!(entries[0].company, "Globex");
        assert_eq!(entries[0].end_year, "Present");
    }

    #[test]
    fn multi_line_titles_keep_last_line() {
        let entries = extract_experience("Experience\nSoftware Engineer - Acme Corp (2019 - 2022)");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job_title, "Software Engineer");
    }

    #[test]
    fn unstructured_text_yields_no_experience() {
        assert!(extract_experience("I like computers and coffee.").is_empty());
        assert!(extract_experience("").is_empty());
    }

    #[test]
    fn tiers_skip_unknown_skills_and_empty_groups() {
        let skills = vec!["python".to_string(), "aws".to_string(), "rust".to_string()];
        let tiers = classify_skill_tiers(&skills);
        assert_eq!(
            tiers,
            vec![
                TierGroup {
                    tier: SkillTier::Beginner,
                    skills: vec!["python".to_string()]
                },
                TierGroup {
                    tier: SkillTier::Advanced,
                    skills: vec!["aws".to_string()]
                },
            ]
        );
    }
}
