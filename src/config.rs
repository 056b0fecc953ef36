use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;
use crate::matcher::SkillMatcher;
use crate::vocabulary::{MatchMode, SkillVocabulary};

pub const DEFAULT_CONFIG_FILE: &str = "skillsync.toml";
pub const ENV_PREFIX: &str = "SKILLSYNC_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub match_mode: MatchMode,
    /// Resumes whose latest year is further back than this are stale.
    pub stale_after_years: u32,
    pub vocabulary: SkillVocabulary,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            match_mode: MatchMode::default(),
            stale_after_years: 2,
            vocabulary: SkillVocabulary::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, then `skillsync.toml` (or `path`), then `SKILLSYNC_*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let config = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        Ok(config)
    }

    pub fn matcher(&self) -> SkillMatcher {
        SkillMatcher::new(self.vocabulary.clone(), self.match_mode)
    }
}

/// Every `*.pdf` under `dir`, sorted by path.
pub fn resume_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| std::io::Error::other(e.to_string()))?;
        let is_pdf = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if entry.file_type().is_file() && is_pdf {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.match_mode, MatchMode::Word);
        assert_eq!(config.stale_after_years, 2);
        assert_eq!(config.vocabulary, SkillVocabulary::default());
    }

    #[test]
    fn toml_overrides_vocabulary_and_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skillsync.toml");
        fs::write(
            &path,
            r#"
match_mode = "substring"
stale_after_years = 3

[vocabulary]
version = "team-2026"
terms = ["Rust", "Kubernetes", "rust"]
"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert_eq!(config.stale_after_years, 3);
        assert_eq!(config.vocabulary.version(), "team-2026");
        assert_eq!(config.vocabulary.terms(), &["rust".to_string(), "kubernetes".to_string()]);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn invalid_match_mode_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "match_mode = \"fuzzy\"\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn resume_paths_finds_nested_pdfs_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.pdf"), b"%PDF").unwrap();
        fs::write(dir.path().join("nested").join("a.PDF"), b"%PDF").unwrap();
        fs::write(dir.path().join("notes.txt"), b"hi").unwrap();

        let paths = resume_paths(dir.path()).unwrap();
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["b.pdf", "a.PDF"]);
    }
}
