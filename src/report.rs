//! Plain-text feedback report. `parse_report_skills` reads the skill lists
//! back so a saved report can be checked against the analysis.

use crate::models::AnalysisReport;

pub const REPORT_TITLE: &str = "SkillSync - Feedback Report";
const MATCHED_HEADER: &str = "Matched Skills:";
const MISSING_HEADER: &str = "Missing Skills:";
const ITEM_PREFIX: &str = "- ";

pub fn render_report(report: &AnalysisReport) -> String {
    let mut lines = vec![REPORT_TITLE.to_string(), String::new()];
    if let Some(name) = &report.candidate.name {
        lines.push(format!("Candidate: {name}"));
    }
    lines.push(format!("Match Score: {}%", report.result.score));
    lines.push(format!("Freshness: {}", report.freshness_message));
    lines.push(String::new());

    push_list(&mut lines, MATCHED_HEADER, &report.result.matched_skills);
    push_list(&mut lines, MISSING_HEADER, &report.result.missing_skills);

    if !report.proficiency.is_empty() {
        lines.push("Skill Proficiency:".to_string());
        lines.extend(
            report
                .proficiency
                .iter()
                .map(|entry| format!("  {}: {}", entry.skill, entry.level)),
        );
        lines.push(String::new());
    }

    if let Some(fit) = &report.market_fit {
        lines.push(format!("Estimated Salary Range: {}", fit.salary_range));
        lines.push(format!("Market Demand: {}", fit.demand));
        lines.push(String::new());
    }

    lines.push("Feedback:".to_string());
    if !report.feedback.is_empty() {
        lines.push(report.feedback.trim_end().to_string());
    }
    lines.extend(report.technical_tips.iter().cloned());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_list(lines: &mut Vec<String>, header: &str, skills: &[String]) {
    lines.push(header.to_string());
    lines.extend(skills.iter().map(|skill| format!("{ITEM_PREFIX}{skill}")));
    lines.push(String::new());
}

/// Matched and missing skills as listed in a rendered report.
pub fn parse_report_skills(document: &str) -> (Vec<String>, Vec<String>) {
    (
        parse_list(document, MATCHED_HEADER),
        parse_list(document, MISSING_HEADER),
    )
}

fn parse_list(document: &str, header: &str) -> Vec<String> {
    document
        .lines()
        .skip_while(|line| *line != header)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.strip_prefix(ITEM_PREFIX))
        .map(str::to_string)
        .collect()
}
