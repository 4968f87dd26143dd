use thiserror::Error;

/// Domain-level errors
///
/// Classification itself never fails; these cover the edges where
/// identifiers, quirk rules and node descriptions enter the system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid value ID: {0}")]
    InvalidValueId(String),

    #[error("Invalid quirk rule: {0}")]
    InvalidQuirk(String),

    #[error("Invalid node description: {0}")]
    InvalidNodeDescription(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
