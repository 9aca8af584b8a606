//! Services Layer
//!
//! Pure business logic for the record store, kept out of the HTTP handlers.
//! Everything returns `Result<_, DomainError>`; the API layer decides what
//! each failure looks like on the wire.

pub mod course_service;
pub mod enrollment_service;
pub mod student_service;
