use crate::policy::DeleteBlockReason;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid login credentials")]
    LoginFailed,

    #[error("case not found: {0}")]
    CaseNotFound(String),

    #[error("deletion blocked: {0:?}")]
    DeletionBlocked(DeleteBlockReason),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
