//! Crate-level error type.
//!
//! [`TidingsError`] is what every public operation returns. It keeps the
//! layer an error came from so callers can tell a rejected template
//! ([`DomainError`]) from a missing record or a broken store
//! ([`ApplicationError`]).

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TidingsError {
    /// A template rule rejected the input.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Lookup or storage failure around the rules.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl TidingsError {
    /// What the user can do about it.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category().into(),
            Self::Application(e) => e.category(),
        }
    }

    /// Rule violations never succeed on retry; only a contended store might.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::StoreLockError))
    }

    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Application(_) => None,
        }
    }
}

/// Coarse classification used by front-ends to pick styling and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Permission,
    NotFound,
    Internal,
}

impl From<domain::ErrorCategory> for ErrorCategory {
    fn from(category: domain::ErrorCategory) -> Self {
        match category {
            domain::ErrorCategory::Validation => Self::Validation,
            domain::ErrorCategory::Permission => Self::Permission,
            domain::ErrorCategory::NotFound => Self::NotFound,
        }
    }
}

pub type TidingsResult<T> = Result<T, TidingsError>;
