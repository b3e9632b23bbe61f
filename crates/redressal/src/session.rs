//! Session state for the presentation layer.
//!
//! The authenticated identity is an explicit value the presentation layer
//! owns and threads through its calls; the core never holds a notion of
//! "currently logged in".

use crate::record::StudentId;

/// The currently authenticated identity, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// A student, identified by registry id.
    Student(StudentId),
    /// An administrator, identified by username.
    Admin(String),
}

/// Explicit session state held by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// Create a session with nobody logged in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful student login.
    pub fn login_student(&mut self, id: StudentId) {
        self.identity = Some(Identity::Student(id));
    }

    /// Record a successful admin login.
    pub fn login_admin(&mut self, username: impl Into<String>) {
        self.identity = Some(Identity::Admin(username.into()));
    }

    /// Clear the authenticated identity.
    pub fn logout(&mut self) {
        self.identity = None;
    }

    /// The authenticated identity, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The logged-in student's id, if a student is authenticated.
    #[must_use]
    pub fn student_id(&self) -> Option<StudentId> {
        match self.identity {
            Some(Identity::Student(id)) => Some(id),
            _ => None,
        }
    }

    /// Whether an administrator is authenticated.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self.identity, Some(Identity::Admin(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_anonymous() {
        let session = Session::new();
        assert!(session.identity().is_none());
        assert!(session.student_id().is_none());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_student_login_logout() {
        let mut session = Session::new();
        session.login_student(123_456);
        assert_eq!(session.student_id(), Some(123_456));
        assert!(!session.is_admin());

        session.logout();
        assert!(session.identity().is_none());
    }

    #[test]
    fn test_admin_login() {
        let mut session = Session::new();
        session.login_admin("admin");
        assert!(session.is_admin());
        assert!(session.student_id().is_none());
        assert_eq!(
            session.identity(),
            Some(&Identity::Admin("admin".to_string()))
        );
    }

    #[test]
    fn test_login_replaces_identity() {
        let mut session = Session::new();
        session.login_student(123_456);
        session.login_admin("admin");
        assert!(session.is_admin());
        assert!(session.student_id().is_none());
    }
}
