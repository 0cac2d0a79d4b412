//! Traversal run lifecycle errors.

use super::error_code::{self, GridwalkErrorCode};

/// Errors that can occur when starting a traversal run.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RunnerError {
    #[error("Runner already started; stop it or let it finish first")]
    AlreadyRunning,

    #[error("No {role} cell designated")]
    MissingDesignation { role: &'static str },
}

impl GridwalkErrorCode for RunnerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyRunning => error_code::ALREADY_RUNNING,
            Self::MissingDesignation { .. } => error_code::MISSING_DESIGNATION,
        }
    }
}
