use crate::models::ResumeAnalytics;

pub fn generate_feedback(matched: &[String], missing: &[String]) -> String {
    let mut feedback = String::new();
    if !missing.is_empty() {
        feedback.push_str("Skill Improvement Tips:\n");
        for skill in missing {
            feedback.push_str(&format!(
                "- Consider learning {skill} via Coursera, Udemy, or YouTube.\n"
            ));
        }
    }
    if matched.is_empty() {
        if !feedback.is_empty() {
            feedback.push('\n');
        }
        feedback.push_str("Formatting Tip:\n- Highlight your skills in a separate 'Skills' section.\n");
    }
    feedback
}

pub fn suggest_technical_improvements(missing: &[String]) -> Vec<String> {
    if missing.is_empty() {
        return vec![
            "Great! Your resume already aligns well with the required technical areas.".to_string(),
        ];
    }
    vec![format!(
        "Consider improving your expertise in: {}",
        missing.join(", ")
    )]
}

pub fn resume_analytics(resume_skills: &[String], matched: &[String], missing: &[String]) -> ResumeAnalytics {
    ResumeAnalytics {
        total_resume_skills: resume_skills.len(),
        matched_skills: matched.len(),
        missing_skills: missing.len(),
    }
}
