//! Interactive shell for the grievance registry.
//!
//! A terminal menu tree: students register, log in, and file grievances;
//! administrators triage them and generate reports. The shell performs
//! presence validation on raw input, renders records, and surfaces core
//! errors to the user.
//!
//! The shell is generic over its reader and writer so the flows can be
//! driven from tests without a terminal.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{Grievance, GrievanceStatus, StudentId};
use crate::registry::Registry;
use crate::session::Session;

/// The interactive presentation layer.
///
/// Owns the registry and the session for the duration of the run; the core
/// never sees ambient globals.
#[derive(Debug)]
pub struct Shell<R, W> {
    reader: R,
    writer: W,
    registry: Registry,
    session: Session,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over the given registry and I/O streams.
    pub fn new(registry: Registry, reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            registry,
            session: Session::new(),
        }
    }

    /// Access the underlying registry (used by tests to inspect state).
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run the main menu loop until the user exits.
    ///
    /// # Errors
    ///
    /// Returns an error only on stream I/O failure; every registry error is
    /// rendered and the menu re-prompts.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.writer, "\n--- Main Menu ---")?;
            writeln!(self.writer, "1) Student")?;
            writeln!(self.writer, "2) Admin")?;
            writeln!(self.writer, "3) Exit")?;
            match self.prompt("> ")?.as_str() {
                "1" => self.student_menu()?,
                "2" => self.admin_menu()?,
                "3" => {
                    writeln!(self.writer, "Goodbye.")?;
                    return Ok(());
                }
                _ => writeln!(self.writer, "Invalid choice.")?,
            }
        }
    }

    // === Student flows ===

    fn student_menu(&mut self) -> Result<()> {
        loop {
            writeln!(self.writer, "\n--- Student Grievance Redressal Cell ---")?;
            writeln!(self.writer, "1) Register new student")?;
            writeln!(self.writer, "2) Login")?;
            writeln!(self.writer, "3) Back")?;
            match self.prompt("> ")?.as_str() {
                "1" => self.register_student()?,
                "2" => self.student_login()?,
                "3" => return Ok(()),
                _ => writeln!(self.writer, "Invalid choice.")?,
            }
        }
    }

    fn register_student(&mut self) -> Result<()> {
        let name = self.prompt("Student name: ")?;
        let password = self.prompt("Password: ")?;
        let email = self.prompt("Email: ")?;
        let phone = self.prompt("Phone number: ")?;
        if name.is_empty() || password.is_empty() || email.is_empty() || phone.is_empty() {
            writeln!(self.writer, "All fields are required.")?;
            return Ok(());
        }

        let id = self.registry.register_student(name, password, email, phone)?;
        writeln!(self.writer, "Student registered successfully. ID: {id}")?;
        Ok(())
    }

    fn student_login(&mut self) -> Result<()> {
        let Some(id) = self.prompt_student_id()? else {
            return Ok(());
        };
        let password = self.prompt("Password: ")?;

        if self.registry.authenticate_student(id, &password).is_some() {
            self.session.login_student(id);
            self.student_home(id)?;
        } else {
            writeln!(self.writer, "Invalid ID or password.")?;
        }
        Ok(())
    }

    fn student_home(&mut self, id: StudentId) -> Result<()> {
        loop {
            writeln!(self.writer, "\n--- Student Menu ---")?;
            writeln!(self.writer, "1) Submit grievance")?;
            writeln!(self.writer, "2) View my details")?;
            writeln!(self.writer, "3) Update feedback")?;
            writeln!(self.writer, "4) Logout")?;
            match self.prompt("> ")?.as_str() {
                "1" => self.submit_grievance(id)?,
                "2" => self.view_own_details(id)?,
                "3" => self.update_own_feedback(id)?,
                "4" => {
                    self.session.logout();
                    return Ok(());
                }
                _ => writeln!(self.writer, "Invalid choice.")?,
            }
        }
    }

    fn submit_grievance(&mut self, id: StudentId) -> Result<()> {
        let category = self.prompt("Grievance type (Academic/Health/Library/Other): ")?;
        let description = self.prompt("Description: ")?;
        let college = self.prompt("College name: ")?;
        if category.is_empty() || description.is_empty() || college.is_empty() {
            writeln!(self.writer, "All fields are required.")?;
            return Ok(());
        }

        match self.registry.submit_grievance(id, category, description, college) {
            Ok(_) => writeln!(self.writer, "Grievance submitted successfully.")?,
            Err(err) => writeln!(self.writer, "Error: {err}")?,
        }
        Ok(())
    }

    fn view_own_details(&mut self, id: StudentId) -> Result<()> {
        // Field borrows are disjoint: the registry is read while the writer
        // renders, so nothing needs cloning here.
        let Some(student) = self.registry.find_student(id) else {
            writeln!(self.writer, "Error: {}", Error::unknown_student(id))?;
            return Ok(());
        };

        writeln!(self.writer, "Name:  {}", student.name)?;
        writeln!(self.writer, "ID:    {}", student.id)?;
        writeln!(self.writer, "Email: {}", student.email)?;
        writeln!(self.writer, "Phone: {}", student.phone)?;
        writeln!(self.writer, "Grievances:")?;
        let filed = self.registry.grievances_for_student(id);
        if filed.is_empty() {
            writeln!(self.writer, "  (none)")?;
        }
        for grievance in filed {
            Self::render_grievance(&mut self.writer, grievance)?;
        }
        Ok(())
    }

    fn update_own_feedback(&mut self, id: StudentId) -> Result<()> {
        let own: Vec<Grievance> = self
            .registry
            .grievances_for_student(id)
            .into_iter()
            .cloned()
            .collect();
        if own.is_empty() {
            writeln!(self.writer, "You have no grievances to provide feedback for.")?;
            return Ok(());
        }

        let category = self.prompt("Grievance type to update (Academic/Health/Library/Other): ")?;
        let Some(target) = own.iter().find(|g| g.category == category) else {
            writeln!(self.writer, "No grievance found with the given type.")?;
            return Ok(());
        };

        let feedback = self.prompt("New feedback: ")?;
        if feedback.is_empty() {
            writeln!(self.writer, "Feedback must not be empty.")?;
            return Ok(());
        }

        let college = target.college.clone();
        match self.registry.update_feedback(id, &feedback, &college) {
            Ok(()) => writeln!(self.writer, "Feedback updated successfully.")?,
            Err(err) => writeln!(self.writer, "Error: {err}")?,
        }
        Ok(())
    }

    // === Admin flows ===

    fn admin_menu(&mut self) -> Result<()> {
        loop {
            writeln!(self.writer, "\n--- Admin Menu ---")?;
            writeln!(self.writer, "1) Register new admin")?;
            writeln!(self.writer, "2) Login")?;
            writeln!(self.writer, "3) Back")?;
            match self.prompt("> ")?.as_str() {
                "1" => self.register_admin()?,
                "2" => self.admin_login()?,
                "3" => return Ok(()),
                _ => writeln!(self.writer, "Invalid choice.")?,
            }
        }
    }

    fn register_admin(&mut self) -> Result<()> {
        let username = self.prompt("Admin username: ")?;
        let password = self.prompt("Password: ")?;
        let email = self.prompt("Email: ")?;
        let phone = self.prompt("Phone number: ")?;
        if username.is_empty() || password.is_empty() || email.is_empty() || phone.is_empty() {
            writeln!(self.writer, "All fields are required.")?;
            return Ok(());
        }

        let admin = self.registry.register_admin(username, password, email, phone);
        let username = admin.username.clone();
        writeln!(
            self.writer,
            "Admin registered successfully. Username: {username}"
        )?;
        Ok(())
    }

    fn admin_login(&mut self) -> Result<()> {
        let username = self.prompt("Admin username: ")?;
        let password = self.prompt("Password: ")?;

        if self.registry.authenticate_admin(&username, &password).is_some() {
            self.session.login_admin(username);
            self.admin_home()?;
        } else {
            writeln!(self.writer, "Invalid username or password.")?;
        }
        Ok(())
    }

    fn admin_home(&mut self) -> Result<()> {
        loop {
            writeln!(self.writer, "\n--- Admin Menu ---")?;
            writeln!(self.writer, "1) Update grievance status")?;
            writeln!(self.writer, "2) View grievances")?;
            writeln!(self.writer, "3) Generate report")?;
            writeln!(self.writer, "4) Logout")?;
            match self.prompt("> ")?.as_str() {
                "1" => self.update_status()?,
                "2" => self.view_all_grievances()?,
                "3" => self.generate_report()?,
                "4" => {
                    self.session.logout();
                    return Ok(());
                }
                _ => writeln!(self.writer, "Invalid choice.")?,
            }
        }
    }

    fn update_status(&mut self) -> Result<()> {
        let Some(id) = self.prompt_student_id()? else {
            return Ok(());
        };
        let status_input = self.prompt("New status (Pending, In Progress, Resolved): ")?;
        let status: GrievanceStatus = match status_input.parse() {
            Ok(status) => status,
            Err(err) => {
                writeln!(self.writer, "Error: {err}")?;
                return Ok(());
            }
        };
        let college = self.prompt("College name: ")?;
        if college.is_empty() {
            writeln!(self.writer, "All fields are required.")?;
            return Ok(());
        }

        match self.registry.update_status(id, status, &college) {
            Ok(()) => writeln!(self.writer, "Grievance status updated successfully.")?,
            Err(err) => writeln!(self.writer, "Error: {err}")?,
        }
        Ok(())
    }

    fn view_all_grievances(&mut self) -> Result<()> {
        let all = self.registry.list_grievances(None);
        if all.is_empty() {
            writeln!(self.writer, "No grievances found.")?;
            return Ok(());
        }
        for grievance in all {
            writeln!(self.writer, "Student ID: {}", grievance.student_id)?;
            Self::render_grievance(&mut self.writer, grievance)?;
        }
        Ok(())
    }

    fn generate_report(&mut self) -> Result<()> {
        let report = self.registry.report();
        writeln!(self.writer, "Total grievances: {}", report.total)?;
        writeln!(self.writer, "Pending:          {}", report.pending)?;
        writeln!(self.writer, "In progress:      {}", report.in_progress)?;
        writeln!(self.writer, "Resolved:         {}", report.resolved)?;
        Ok(())
    }

    // === Helpers ===

    /// Prompt for a student id, reporting unparsable input to the user.
    fn prompt_student_id(&mut self) -> Result<Option<StudentId>> {
        let raw = self.prompt("Student ID: ")?;
        match raw.parse::<StudentId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.writer, "Invalid student ID.")?;
                Ok(None)
            }
        }
    }

    /// Print a label and read one trimmed line of input.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            debug!("Input stream closed; leaving shell");
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }
        Ok(line.trim().to_string())
    }

    fn render_grievance(writer: &mut W, grievance: &Grievance) -> Result<()> {
        writeln!(writer, "  Type:        {}", grievance.category)?;
        writeln!(writer, "  Description: {}", grievance.description)?;
        writeln!(writer, "  College:     {}", grievance.college)?;
        writeln!(writer, "  Status:      {}", grievance.status)?;
        writeln!(
            writer,
            "  Feedback:    {}",
            grievance.feedback.as_deref().unwrap_or("None")
        )?;
        Ok(())
    }
}
