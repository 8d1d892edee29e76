use crate::store::SourceError;
use crate::view::ViewError;

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error(transparent)]
    View(#[from] ViewError),
    #[error("failed to refresh records: {0}")]
    Refresh(#[from] SourceError),
    #[error("shared state lock poisoned: {0}")]
    LockPoisoned(String),
}

impl ClinicError {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        ClinicError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for ClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicError::LockPoisoned(e.to_string())
    }
}

impl From<clinidesk_types::TextError> for ClinicError {
    fn from(e: clinidesk_types::TextError) -> Self {
        ClinicError::InvalidInput(e.to_string())
    }
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
