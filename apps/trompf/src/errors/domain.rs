//! Domain-level error type used across the engine and the console layer.
//!
//! The engine is I/O-agnostic: every fallible operation returns
//! `Result<T, DomainError>`. The binary converts into
//! `crate::error::AppError` at the outermost boundary.

use thiserror::Error;

/// Construction-time problems with the roster or options. Never retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigKind {
    PlayerCount,
    BlankName,
    TeamSplit,
    UnknownTeam,
    PlayerSpec,
    Seed,
    Flag,
}

/// Malformed collaborator input. Retried a bounded number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputKind {
    BidUnparsable,
    BidOutOfRange,
    ParseCard,
}

/// Unrecoverable aborts that are not logic defects.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FatalKind {
    BidAttemptsExhausted,
    InputClosed,
    Io,
}

/// Impossible states; seeing one means the engine has a bug.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvariantKind {
    DeckSize,
    EmptyDeck,
    HandSize,
    CardNotInHand,
    CardConservation,
    TrickFull,
    TrickIncomplete,
    TrickWinnerOutOfRange,
    TrumpUnset,
    DeclarerUnset,
    PhaseMismatch,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{1}")]
    Configuration(ConfigKind, String),
    #[error("{1}")]
    InputValidation(InputKind, String),
    #[error("{1}")]
    Fatal(FatalKind, String),
    #[error("invariant violated ({0:?}): {1}")]
    Invariant(InvariantKind, String),
}

impl DomainError {
    pub fn config(kind: ConfigKind, detail: impl Into<String>) -> Self {
        Self::Configuration(kind, detail.into())
    }

    pub fn input(kind: InputKind, detail: impl Into<String>) -> Self {
        Self::InputValidation(kind, detail.into())
    }

    pub fn fatal(kind: FatalKind, detail: impl Into<String>) -> Self {
        Self::Fatal(kind, detail.into())
    }

    pub fn invariant(kind: InvariantKind, detail: impl Into<String>) -> Self {
        Self::Invariant(kind, detail.into())
    }

    pub fn invariant_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Invariant(InvariantKind::Other(detail.clone()), detail)
    }

    /// Label printed ahead of the message when the error reaches the user.
    pub fn label(&self) -> &'static str {
        match self {
            DomainError::Configuration(..) => "CONFIGURATION ERROR",
            DomainError::InputValidation(..) => "VALIDATION ERROR",
            DomainError::Fatal(..) => "FATAL ERROR",
            DomainError::Invariant(..) => "INVARIANT VIOLATION",
        }
    }

    /// Only malformed collaborator input may be asked for again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::InputValidation(..))
    }
}
