//! Error types for the course registry

use thiserror::Error;

use crate::validation::ValidationReport;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("this course not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Error::InvalidRequest(msg.into())
    }
}

impl From<ValidationReport> for Error {
    fn from(report: ValidationReport) -> Self {
        Error::Validation(report)
    }
}
