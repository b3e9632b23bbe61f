//! Error types for redressal.
//!
//! This module defines all error types used throughout the redressal crate.
//! Authentication failures are deliberately NOT errors; lookups that can
//! legitimately miss return `Option` instead.

use thiserror::Error;

use crate::record::StudentId;

/// The main error type for redressal operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Registry Errors ===
    /// An operation referenced a student identifier with no record.
    #[error("no student registered with id {id}")]
    UnknownStudent {
        /// The identifier that failed to resolve.
        id: StudentId,
    },

    /// A status or feedback update targeted a student with zero grievances.
    #[error("no grievances found for student {id}")]
    NoGrievances {
        /// The student whose grievance list was empty.
        id: StudentId,
    },

    /// The supplied college name does not match a grievance's record.
    #[error("college name '{given}' does not match '{expected}'")]
    CollegeMismatch {
        /// College name recorded on the grievance.
        expected: String,
        /// College name supplied by the caller.
        given: String,
    },

    /// A status value outside Pending / In Progress / Resolved.
    #[error("invalid status '{value}' (expected Pending, In Progress or Resolved)")]
    InvalidStatus {
        /// The unrecognized status string.
        value: String,
    },

    /// Every identifier in the allocation range has been issued.
    #[error("student identifier space exhausted")]
    IdSpaceExhausted,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Terminal or stream I/O failed in the interactive shell.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for redressal operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an unknown-student error.
    #[must_use]
    pub fn unknown_student(id: StudentId) -> Self {
        Self::UnknownStudent { id }
    }

    /// Create a college-mismatch error.
    #[must_use]
    pub fn college_mismatch(expected: impl Into<String>, given: impl Into<String>) -> Self {
        Self::CollegeMismatch {
            expected: expected.into(),
            given: given.into(),
        }
    }

    /// Check if this error is a bad student reference.
    #[must_use]
    pub fn is_unknown_student(&self) -> bool {
        matches!(self, Self::UnknownStudent { .. })
    }

    /// Check if this error is locally recoverable by re-prompting the user.
    ///
    /// Every registry error is; only configuration and I/O failures are not.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::ConfigLoad(_) | Self::ConfigValidation { .. } | Self::Io(_)
        )
    }
}
