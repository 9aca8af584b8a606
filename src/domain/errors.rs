//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// A student with this email already exists
    DuplicateEmail(String),
    /// The (student, course) pair is already enrolled
    DuplicateEnrollment,
    /// Resource not found; the string names the entity kind
    NotFound(&'static str),
    /// Enrollment reference to a student that does not exist
    StudentNotFound,
    /// Enrollment reference to a course that does not exist
    CourseNotFound,
    /// Caller-supplied identifier token that is not a valid store key
    InvalidIdentifier(String),
    /// Input shape violation with message
    Validation(String),
    /// Database/persistence error
    Database(String),
    /// Upstream service unreachable or returned an error
    Upstream(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::DuplicateEmail(email) => {
                write!(f, "Email already registered: {}", email)
            }
            DomainError::DuplicateEnrollment => {
                write!(f, "Student is already enrolled in this course")
            }
            DomainError::NotFound(kind) => write!(f, "{} not found", kind),
            DomainError::StudentNotFound => write!(f, "Student not found"),
            DomainError::CourseNotFound => write!(f, "Course not found"),
            DomainError::InvalidIdentifier(token) => {
                write!(f, "Invalid identifier: {}", token)
            }
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::Upstream(msg) => write!(f, "Upstream service error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
