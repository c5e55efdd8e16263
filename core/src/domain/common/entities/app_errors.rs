use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("internal server error")]
    InternalServerError,

    #[error("not found")]
    NotFound,

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("no profiles to export")]
    EmptyExport,

    #[error("external service error: {0}")]
    ExternalServiceError(String),
}
