//! The shared skill vocabulary and the term-matching rule used by every
//! extractor that looks for skills in free text.

use serde::{Deserialize, Serialize};

pub const DEFAULT_VOCABULARY_VERSION: &str = "2";

pub const DEFAULT_TERMS: &[&str] = &[
    "python",
    "sql",
    "machine learning",
    "data analysis",
    "excel",
    "git",
    "power bi",
    "java",
    "c++",
    "tensorflow",
    "deep learning",
    "flask",
    "django",
    "aws",
    "devops",
    "cloud",
    "nlp",
    "keras",
    "azure",
    "github",
    "html",
    "css",
    "javascript",
];

/// How a skill term must appear in text to count as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Term must not be glued to other word characters ("java" does not
    /// match inside "javascript").
    #[default]
    Word,
    /// Plain case-insensitive substring search.
    Substring,
}

/// Versioned, ordered list of lower-case skill terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawVocabulary", into = "RawVocabulary")]
pub struct SkillVocabulary {
    version: String,
    terms: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct RawVocabulary {
    #[serde(default = "default_version")]
    version: String,
    #[serde(default = "default_terms")]
    terms: Vec<String>,
}

fn default_version() -> String {
    DEFAULT_VOCABULARY_VERSION.to_string()
}

fn default_terms() -> Vec<String> {
    DEFAULT_TERMS.iter().map(|t| t.to_string()).collect()
}

impl From<RawVocabulary> for SkillVocabulary {
    fn from(raw: RawVocabulary) -> Self {
        SkillVocabulary::new(raw.version, raw.terms)
    }
}

impl From<SkillVocabulary> for RawVocabulary {
    fn from(vocab: SkillVocabulary) -> Self {
        RawVocabulary {
            version: vocab.version,
            terms: vocab.terms,
        }
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        SkillVocabulary::new(DEFAULT_VOCABULARY_VERSION, DEFAULT_TERMS.iter().copied())
    }
}

impl SkillVocabulary {
    /// Normalizes every term and drops empties and repeats, keeping the
    /// first occurrence's position.
    pub fn new<I, S>(version: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for term in terms {
            let term = normalize_term(term.as_ref());
            if !term.is_empty() && !normalized.contains(&term) {
                normalized.push(term);
            }
        }
        Self {
            version: version.into(),
            terms: normalized,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms present in `text`, in vocabulary order.
    pub fn find_in(&self, text: &str, mode: MatchMode) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.terms
            .iter()
            .filter(|term| contains_term(&lowered, term, mode))
            .cloned()
            .collect()
    }
}

/// Lower-cases, trims and collapses inner whitespace so a term always fits
/// on a single line.
pub fn normalize_term(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `haystack` must already be lower-cased.
pub fn contains_term(haystack: &str, term: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => !term.is_empty() && haystack.contains(term),
        MatchMode::Word => count_word_occurrences(haystack, term) > 0,
    }
}

/// Counts non-overlapping occurrences of `term` that are not flanked by word
/// characters. `haystack` must already be lower-cased.
pub fn count_word_occurrences(haystack: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut pos = 0;
    while let Some(offset) = haystack[pos..].find(term) {
        let start = pos + offset;
        let end = start + term.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        if !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char) {
            count += 1;
            pos = end;
        } else {
            // A rejected candidate may overlap a valid one starting inside it.
            pos = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
        }
    }
    count
}
