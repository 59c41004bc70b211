// isoforge-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum IsoforgeError {
    // --- DOMAIN ERRORS (static tables, malformed records) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing, Templates) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- GENERIC / APPLICATION ERRORS ---
    #[error("Internal Error: {0}")]
    #[diagnostic(code(isoforge::internal))]
    InternalError(String),

    #[error("Unsafe path traversal detected: {0}")]
    #[diagnostic(
        code(isoforge::unsafe_path),
        help("target-path and clean-targets must be relative paths inside the project.")
    )]
    UnsafePath(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for IsoforgeError {
    fn from(err: std::io::Error) -> Self {
        IsoforgeError::Infrastructure(InfrastructureError::Io(err))
    }
}
