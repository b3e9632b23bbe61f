//! The in-memory grievance registry.
//!
//! This module provides the record-management core: student and admin
//! registries plus the grievance collection, with registration,
//! authentication, submission, bulk status/feedback updates, listing, and
//! live report counts.
//!
//! All lookups are linear scans. Record counts are a single institution's
//! grievance volume, so no index is kept.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::id::IdAllocator;
use crate::record::{Admin, Grievance, GrievanceStatus, Student, StudentId};

/// Owner of all student, admin, and grievance records.
///
/// Single-threaded and synchronous; data lives for the process lifetime
/// only. Grievances are never deleted.
#[derive(Debug, Default)]
pub struct Registry {
    students: Vec<Student>,
    admins: Vec<Admin>,
    grievances: Vec<Grievance>,
    ids: IdAllocator,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new student and return the allocated identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::IdSpaceExhausted` if no identifier can be allocated.
    pub fn register_student(
        &mut self,
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<StudentId> {
        let id = self.ids.allocate()?;
        let student = Student::new(id, name.into(), password.into(), email.into(), phone.into());
        self.students.push(student);
        info!("Registered student with id {}", id);
        Ok(id)
    }

    /// Register a new administrator.
    ///
    /// Usernames are not checked for uniqueness; duplicate registrations
    /// shadow each other at login.
    pub fn register_admin(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> &Admin {
        let admin = Admin::new(username.into(), password.into(), email.into(), phone.into());
        info!("Registered admin '{}'", admin.username);
        self.admins.push(admin);
        self.admins.last().expect("just pushed")
    }

    /// Authenticate a student by identifier and password.
    ///
    /// Returns `None` on any mismatch; wrong credentials are not an error.
    #[must_use]
    pub fn authenticate_student(&self, id: StudentId, password: &str) -> Option<&Student> {
        let student = self
            .students
            .iter()
            .find(|s| s.id == id && s.password == password);
        if student.is_none() {
            debug!("Failed student login attempt for id {}", id);
        }
        student
    }

    /// Authenticate an administrator by username and password.
    #[must_use]
    pub fn authenticate_admin(&self, username: &str, password: &str) -> Option<&Admin> {
        let admin = self
            .admins
            .iter()
            .find(|a| a.username == username && a.password == password);
        if admin.is_none() {
            debug!("Failed admin login attempt for '{}'", username);
        }
        admin
    }

    /// Look up a student by identifier.
    #[must_use]
    pub fn find_student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Submit a grievance on behalf of a registered student.
    ///
    /// The new grievance starts in `Pending` with its submission time set.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownStudent` when the identifier does not resolve
    /// to a registered student.
    pub fn submit_grievance(
        &mut self,
        student_id: StudentId,
        category: impl Into<String>,
        description: impl Into<String>,
        college: impl Into<String>,
    ) -> Result<&Grievance> {
        if self.find_student(student_id).is_none() {
            return Err(Error::unknown_student(student_id));
        }

        let grievance = Grievance::new(
            student_id,
            category.into(),
            description.into(),
            college.into(),
        );
        debug!(
            "Submitting '{}' grievance for student {}",
            grievance.category, student_id
        );
        self.grievances.push(grievance);
        Ok(self.grievances.last().expect("just pushed"))
    }

    /// All grievances filed by the given student, in submission order.
    #[must_use]
    pub fn grievances_for_student(&self, student_id: StudentId) -> Vec<&Grievance> {
        self.grievances
            .iter()
            .filter(|g| g.student_id == student_id)
            .collect()
    }

    /// Apply a new status to every grievance of the given student.
    ///
    /// The update is all-or-nothing: every grievance's recorded college name
    /// must match `college` or nothing changes. Entering `Resolved` stamps
    /// the resolution time on each grievance.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoGrievances` when the student has no grievances, or
    /// `Error::CollegeMismatch` when any grievance names a different college.
    pub fn update_status(
        &mut self,
        student_id: StudentId,
        status: GrievanceStatus,
        college: &str,
    ) -> Result<()> {
        self.check_bulk_update(student_id, college)?;

        let mut updated = 0;
        for grievance in self
            .grievances
            .iter_mut()
            .filter(|g| g.student_id == student_id)
        {
            grievance.set_status(status);
            updated += 1;
        }
        info!(
            "Set status '{}' on {} grievance(s) for student {}",
            status, updated, student_id
        );
        Ok(())
    }

    /// Set feedback text on every grievance of the given student.
    ///
    /// Same matching and failure rules as [`Registry::update_status`].
    ///
    /// # Errors
    ///
    /// Returns `Error::NoGrievances` when the student has no grievances, or
    /// `Error::CollegeMismatch` when any grievance names a different college.
    pub fn update_feedback(
        &mut self,
        student_id: StudentId,
        feedback: &str,
        college: &str,
    ) -> Result<()> {
        self.check_bulk_update(student_id, college)?;

        for grievance in self
            .grievances
            .iter_mut()
            .filter(|g| g.student_id == student_id)
        {
            grievance.add_feedback(feedback);
        }
        debug!("Updated feedback for student {}", student_id);
        Ok(())
    }

    /// Validate a bulk update target before mutating anything.
    fn check_bulk_update(&self, student_id: StudentId, college: &str) -> Result<()> {
        let mut found_any = false;
        for grievance in self.grievances.iter().filter(|g| g.student_id == student_id) {
            found_any = true;
            if grievance.college != college {
                return Err(Error::college_mismatch(grievance.college.clone(), college));
            }
        }
        if found_any {
            Ok(())
        } else {
            Err(Error::NoGrievances { id: student_id })
        }
    }

    /// All grievances, optionally filtered by status, in insertion order.
    #[must_use]
    pub fn list_grievances(&self, filter: Option<GrievanceStatus>) -> Vec<&Grievance> {
        self.grievances
            .iter()
            .filter(|g| filter.map_or(true, |status| g.status == status))
            .collect()
    }

    /// Count grievances by status at call time.
    #[must_use]
    pub fn report(&self) -> Report {
        let mut report = Report::default();
        for grievance in &self.grievances {
            report.total += 1;
            match grievance.status {
                GrievanceStatus::Pending => report.pending += 1,
                GrievanceStatus::InProgress => report.in_progress += 1,
                GrievanceStatus::Resolved => report.resolved += 1,
            }
        }
        report
    }

    /// Number of registered students.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of registered administrators.
    #[must_use]
    pub fn admin_count(&self) -> usize {
        self.admins.len()
    }
}

/// A live snapshot of grievance counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Total grievances on record.
    pub total: usize,
    /// Grievances currently pending.
    pub pending: usize,
    /// Grievances currently in progress.
    pub in_progress: usize,
    /// Grievances currently resolved.
    pub resolved: usize,
}
