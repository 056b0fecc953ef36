use pdf::error::PdfError;
use thiserror::Error;

/// Failure to turn uploaded bytes into resume text. Aborts the pipeline.
#[derive(Debug, Error)]
pub enum DocumentReadError {
    #[error("not a readable PDF: {0}")]
    Malformed(String),

    #[error("PDF is encrypted and no valid password was supplied")]
    Encrypted,

    #[error("failed to read resume: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PdfError> for DocumentReadError {
    fn from(err: PdfError) -> Self {
        match root_cause(err) {
            PdfError::InvalidPassword => DocumentReadError::Encrypted,
            other => DocumentReadError::Malformed(other.to_string()),
        }
    }
}

/// The pdf crate wraps failures in `Try` frames carrying only a source
/// location; the useful error is at the bottom.
fn root_cause(mut err: PdfError) -> PdfError {
    loop {
        match err {
            PdfError::Try { source, .. } => err = *source,
            other => return other,
        }
    }
}

#[derive(Debug, Error)]
pub enum SkillSyncError {
    #[error(transparent)]
    DocumentRead(#[from] DocumentReadError),

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<figment::Error> for SkillSyncError {
    fn from(err: figment::Error) -> Self {
        SkillSyncError::Config(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, SkillSyncError>;

