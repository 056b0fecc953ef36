//! Candidate contact details. Optional enrichment; nothing here feeds the
//! score.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::CandidateContact;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\- ]{8,}\d").expect("valid phone regex"));

/// Finds a person's name in resume text. Swap in an entity recognizer by
/// implementing this.
pub trait NameRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Option<String>;
}

/// Takes the first non-empty line that looks like "Jane Q Doe": two to four
/// capitalized alphabetic words.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingNameRecognizer;

impl NameRecognizer for HeadingNameRecognizer {
    fn recognize(&self, text: &str) -> Option<String> {
        let line = text.lines().map(str::trim).find(|line| !line.is_empty())?;
        let words: Vec<&str> = line.split_whitespace().collect();
        let looks_like_name = (2..=4).contains(&words.len())
            && words.iter().all(|word| {
                word.chars().next().is_some_and(char::is_uppercase)
                    && word.chars().all(|c| c.is_alphabetic() || c == '.' || c == '\'' || c == '-')
            });
        looks_like_name.then(|| words.join(" "))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoNameRecognizer;

impl NameRecognizer for NoNameRecognizer {
    fn recognize(&self, _text: &str) -> Option<String> {
        None
    }
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_contact(text: &str, names: &dyn NameRecognizer) -> CandidateContact {
    CandidateContact {
        name: names.recognize(text),
        email: extract_email(text),
        phone: extract_phone(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\n  Priya Sharma\npriya.sharma@example.com | +91 98765-43210\nSkills: Python";

    #[test]
    fn finds_email_and_phone() {
        assert_eq!(extract_email(RESUME).as_deref(), Some("priya.sharma@example.com"));
        assert_eq!(extract_phone(RESUME).as_deref(), Some("+91 98765-43210"));
    }

    #[test]
    fn missing_contact_fields_are_none() {
        assert_eq!(extract_email("no contact info"), None);
        assert_eq!(extract_phone("call 555-1234"), None);
    }

    #[test]
    fn heading_recognizer_takes_first_line_name() {
        assert_eq!(
            HeadingNameRecognizer.recognize(RESUME).as_deref(),
            Some("Priya Sharma")
        );
    }

    #[test]
    fn heading_recognizer_rejects_non_name_headings() {
        assert_eq!(HeadingNameRecognizer.recognize("CURRICULUM vitae 2024"), None);
        assert_eq!(HeadingNameRecognizer.recognize("Resume"), None);
        assert_eq!(HeadingNameRecognizer.recognize(""), None);
    }

    #[test]
    fn contact_uses_injected_recognizer() {
        let contact = extract_contact(RESUME, &NoNameRecognizer);
        assert_eq!(contact.name, None);
        assert!(contact.email.is_some());
    }
}
