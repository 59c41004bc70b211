// isoforge-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Rename table inconsistency: {0}")]
    #[diagnostic(
        code(isoforge::domain::renames),
        help("Every deprecated code must map to exactly one current code, and no code may be both.")
    )]
    RenameTableInconsistency(String),

    #[error("Type alias table inconsistency: {0}")]
    #[diagnostic(
        code(isoforge::domain::type_aliases),
        help("A synonym may only collapse into a single canonical type.")
    )]
    TypeAliasInconsistency(String),
}
