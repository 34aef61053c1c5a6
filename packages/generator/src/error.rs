//! Generator Errors

use thiserror::Error;

/// Misuse of the import manager protocol.
///
/// The manager is otherwise infallible: registration and confirmation never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("import manager queried before init")]
    NotInitialized,
    #[error("import manager initialized twice")]
    AlreadyInitialized,
}

/// Invalid generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown generator option: {0}")]
    UnknownOption(String),
    #[error("invalid value {value:?} for option {option}")]
    InvalidValue { option: String, value: String },
    #[error("invalid import path: {0:?}")]
    InvalidImportPath(String),
    #[error("unknown standard library: {0:?}")]
    UnknownLibrary(String),
}

pub type Result<T> = std::result::Result<T, ImportError>;
