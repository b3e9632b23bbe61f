//! Student identifier allocation.
//!
//! Identifiers are random six-digit numbers, unique for the lifetime of the
//! allocator. Collisions are retried internally; once the space is consumed
//! the allocator fails explicitly rather than looping forever.

use std::collections::HashSet;

use rand::Rng;

use crate::error::{Error, Result};
use crate::record::StudentId;

/// Smallest identifier the allocator will issue.
pub const ID_MIN: StudentId = 100_000;

/// Largest identifier the allocator will issue.
pub const ID_MAX: StudentId = 999_999;

/// Allocator for unique random student identifiers.
#[derive(Debug)]
pub struct IdAllocator {
    issued: HashSet<StudentId>,
    min: StudentId,
    max: StudentId,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Create an allocator over the standard six-digit range.
    #[must_use]
    pub fn new() -> Self {
        Self::with_range(ID_MIN, ID_MAX)
    }

    /// Create an allocator over a custom inclusive range.
    fn with_range(min: StudentId, max: StudentId) -> Self {
        Self {
            issued: HashSet::new(),
            min,
            max,
        }
    }

    /// Allocate a fresh identifier, retrying internally on collision.
    ///
    /// # Errors
    ///
    /// Returns `Error::IdSpaceExhausted` when every identifier in the range
    /// has already been issued.
    pub fn allocate(&mut self) -> Result<StudentId> {
        let space = usize::try_from(self.max - self.min).unwrap_or(usize::MAX) + 1;
        if self.issued.len() >= space {
            return Err(Error::IdSpaceExhausted);
        }

        let mut rng = rand::rng();
        loop {
            let candidate = rng.random_range(self.min..=self.max);
            if self.issued.insert(candidate) {
                return Ok(candidate);
            }
        }
    }

    /// Number of identifiers issued so far.
    #[must_use]
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}
