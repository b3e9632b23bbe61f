//! `redressal` - An in-memory student grievance redressal core
//!
//! This library provides the record-management core of a college grievance
//! redressal cell: student and admin registries, grievance lifecycle with
//! status and feedback updates, and live report counts, plus the interactive
//! terminal front-end that drives it.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod id;
pub mod logging;
pub mod record;
pub mod registry;
pub mod session;

pub use config::Config;
pub use error::{Error, Result};
pub use id::IdAllocator;
pub use logging::init_logging;
pub use record::{Admin, Grievance, GrievanceStatus, Student, StudentId};
pub use registry::{Registry, Report};
pub use session::{Identity, Session};
