use thiserror::Error;

use crate::errors::domain::DomainError;

/// Outermost error type for the `trompf` binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Label printed ahead of the message, e.g. `[FATAL ERROR] ...`.
    pub fn label(&self) -> &'static str {
        match self {
            AppError::Domain(err) => err.label(),
            AppError::Io(_) => "IO ERROR",
            AppError::Json(_) => "OUTPUT ERROR",
            AppError::Config { .. } => "CONFIGURATION ERROR",
        }
    }

    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config { .. } => 2,
            AppError::Domain(DomainError::Configuration(..)) => 2,
            AppError::Domain(DomainError::Invariant(..)) => 70,
            _ => 1,
        }
    }
}
