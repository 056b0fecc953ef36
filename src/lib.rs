//! Resume-to-requirements skill matching: PDF text extraction, vocabulary
//! skill detection, overlap scoring and heuristic annotations.

pub mod batch;
pub mod config;
pub mod contact;
pub mod error;
pub mod feedback;
pub mod heuristics;
pub mod market;
pub mod matcher;
pub mod models;
pub mod pdf_processor;
pub mod pipeline;
pub mod report;
pub mod utils;
pub mod vocabulary;

pub use config::AppConfig;
pub use error::{DocumentReadError, SkillSyncError};
pub use models::{AnalysisReport, MatchResult, RequirementSource};
pub use pipeline::{AnalysisRequest, Analyzer};
