//! Core record types for redressal.
//!
//! This module defines the fundamental data structures for the grievance
//! registry: students, admins, and the grievances filed against a college.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A student identifier, system-generated and unique per registry instance.
pub type StudentId = u32;

/// Lifecycle state of a grievance.
///
/// Transitions are permissive: any state is reachable from any state,
/// including re-entry into the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrievanceStatus {
    /// Filed and awaiting triage.
    Pending,
    /// Being worked on by an administrator.
    InProgress,
    /// Closed with a resolution.
    Resolved,
}

impl std::fmt::Display for GrievanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Resolved => write!(f, "Resolved"),
        }
    }
}

impl std::str::FromStr for GrievanceStatus {
    type Err = Error;

    /// Parse the user-facing status spellings, verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "In Progress" => Ok(Self::InProgress),
            "Resolved" => Ok(Self::Resolved),
            other => Err(Error::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier assigned at registration.
    pub id: StudentId,
    /// Full name.
    pub name: String,
    /// Opaque credential string, compared verbatim at login.
    pub password: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

impl Student {
    /// Create a new student record with the given identifier.
    #[must_use]
    pub fn new(id: StudentId, name: String, password: String, email: String, phone: String) -> Self {
        Self {
            id,
            name,
            password,
            email,
            phone,
        }
    }
}

/// A registered administrator.
///
/// Usernames are chosen by the registrant and are NOT checked for
/// uniqueness; duplicate registrations shadow each other at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// Login name.
    pub username: String,
    /// Opaque credential string.
    pub password: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

impl Admin {
    /// Create a new admin record.
    #[must_use]
    pub fn new(username: String, password: String, email: String, phone: String) -> Self {
        Self {
            username,
            password,
            email,
            phone,
        }
    }
}

/// A student-filed grievance.
///
/// Holds a weak reference to the filing student (validated at submission,
/// not an ownership link) and tracks lifecycle state with submission and
/// resolution timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grievance {
    /// Identifier of the student who filed this grievance.
    pub student_id: StudentId,
    /// Free-form category, e.g. Academic/Health/Library/Other.
    pub category: String,
    /// Free-text description of the complaint.
    pub description: String,
    /// Name of the college the grievance is against.
    pub college: String,
    /// Current lifecycle state.
    pub status: GrievanceStatus,
    /// When this grievance was submitted.
    pub submitted_at: DateTime<Utc>,
    /// When this grievance last entered `Resolved`. Never cleared once set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    /// Resolution feedback, absent until provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Grievance {
    /// Create a new pending grievance, stamped with the current time.
    #[must_use]
    pub fn new(student_id: StudentId, category: String, description: String, college: String) -> Self {
        Self {
            student_id,
            category,
            description,
            college,
            status: GrievanceStatus::Pending,
            submitted_at: Utc::now(),
            resolved_at: None,
            feedback: None,
        }
    }

    /// Apply a new lifecycle state.
    ///
    /// Entering `Resolved` stamps `resolved_at` with the current time, also
    /// on re-entry. Leaving `Resolved` does not clear the stamp.
    pub fn set_status(&mut self, status: GrievanceStatus) {
        self.status = status;
        if status == GrievanceStatus::Resolved {
            self.resolved_at = Some(Utc::now());
        }
    }

    /// Attach or replace resolution feedback.
    pub fn add_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback = Some(feedback.into());
    }

    /// Check whether this grievance has been resolved at least once.
    #[must_use]
    pub fn has_resolution(&self) -> bool {
        self.resolved_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grievance() -> Grievance {
        Grievance::new(
            123_456,
            "Library".to_string(),
            "noisy".to_string(),
            "ABC College".to_string(),
        )
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GrievanceStatus::Pending.to_string(), "Pending");
        assert_eq!(GrievanceStatus::InProgress.to_string(), "In Progress");
        assert_eq!(GrievanceStatus::Resolved.to_string(), "Resolved");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "Pending".parse::<GrievanceStatus>().unwrap(),
            GrievanceStatus::Pending
        );
        assert_eq!(
            "In Progress".parse::<GrievanceStatus>().unwrap(),
            GrievanceStatus::InProgress
        );
        assert_eq!(
            "Resolved".parse::<GrievanceStatus>().unwrap(),
            GrievanceStatus::Resolved
        );
    }

    #[test]
    fn test_status_from_str_invalid() {
        let err = "Closed".parse::<GrievanceStatus>().unwrap_err();
        assert!(matches!(err, Error::InvalidStatus { .. }));
        assert!(err.to_string().contains("Closed"));
    }

    #[test]
    fn test_status_from_str_is_case_sensitive() {
        // Only the exact spellings are accepted.
        assert!("pending".parse::<GrievanceStatus>().is_err());
        assert!("in progress".parse::<GrievanceStatus>().is_err());
    }

    #[test]
    fn test_grievance_new_is_pending() {
        let grievance = sample_grievance();
        assert_eq!(grievance.status, GrievanceStatus::Pending);
        assert!(grievance.resolved_at.is_none());
        assert!(grievance.feedback.is_none());
        assert!(!grievance.has_resolution());
    }

    #[test]
    fn test_set_status_resolved_stamps_time() {
        let mut grievance = sample_grievance();
        grievance.set_status(GrievanceStatus::Resolved);

        assert_eq!(grievance.status, GrievanceStatus::Resolved);
        assert!(grievance.has_resolution());
        assert!(grievance.resolved_at.unwrap() >= grievance.submitted_at);
    }

    #[test]
    fn test_set_status_back_to_pending_keeps_stamp() {
        let mut grievance = sample_grievance();
        grievance.set_status(GrievanceStatus::Resolved);
        let stamped = grievance.resolved_at;

        grievance.set_status(GrievanceStatus::Pending);
        assert_eq!(grievance.status, GrievanceStatus::Pending);
        assert_eq!(grievance.resolved_at, stamped);
    }

    #[test]
    fn test_set_status_reentry_restamps() {
        let mut grievance = sample_grievance();
        grievance.set_status(GrievanceStatus::Resolved);
        let first = grievance.resolved_at.unwrap();

        grievance.set_status(GrievanceStatus::Resolved);
        let second = grievance.resolved_at.unwrap();
        assert!(second >= first);
    }

    #[test]
    fn test_add_feedback() {
        let mut grievance = sample_grievance();
        grievance.add_feedback("handled by staff");
        assert_eq!(grievance.feedback.as_deref(), Some("handled by staff"));

        grievance.add_feedback("reopened and fixed");
        assert_eq!(grievance.feedback.as_deref(), Some("reopened and fixed"));
    }

    #[test]
    fn test_grievance_serialization() {
        let grievance = sample_grievance();
        let json = serde_json::to_string(&grievance).unwrap();
        let back: Grievance = serde_json::from_str(&json).unwrap();

        assert_eq!(grievance, back);
        // Absent optionals are skipped entirely.
        assert!(!json.contains("resolved_at"));
        assert!(!json.contains("feedback"));
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&GrievanceStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_student_new() {
        let student = Student::new(
            654_321,
            "Asha".to_string(),
            "secret".to_string(),
            "asha@example.com".to_string(),
            "5550100".to_string(),
        );
        assert_eq!(student.id, 654_321);
        assert_eq!(student.name, "Asha");
    }

    #[test]
    fn test_admin_new() {
        let admin = Admin::new(
            "admin".to_string(),
            "adminpassword".to_string(),
            "admin@example.com".to_string(),
            "1234567890".to_string(),
        );
        assert_eq!(admin.username, "admin");
        assert_eq!(admin.password, "adminpassword");
    }
}
