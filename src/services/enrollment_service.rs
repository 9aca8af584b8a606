//! Enrollment Service - the referential-integrity core.
//!
//! An enrollment may only reference a student and a course that exist at the
//! moment it is written, and a (student, course) pair enrolls at most once.
//! The check-then-insert sequence runs inside a transaction so a concurrent
//! delete of a parent record cannot slip in between the existence check and
//! the write.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::domain::{parse_id, DomainError};
use crate::models::course::Entity as Course;
use crate::models::enrollment::{self, Entity as Enrollment};
use crate::models::student::Entity as Student;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentDto {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
}

impl From<enrollment::Model> for EnrollmentDto {
    fn from(model: enrollment::Model) -> Self {
        Self {
            id: model.id.to_string(),
            student_id: model.student_id.to_string(),
            course_id: model.course_id.to_string(),
        }
    }
}

/// Incoming references, as the caller sends them: opaque text tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentInput {
    pub student_id: String,
    pub course_id: String,
}

impl EnrollmentInput {
    fn resolve(&self) -> Result<(i32, i32), DomainError> {
        Ok((parse_id(&self.student_id)?, parse_id(&self.course_id)?))
    }
}

/// Verify both foreign keys resolve to live records.
async fn check_references<C: ConnectionTrait>(
    conn: &C,
    student_id: i32,
    course_id: i32,
) -> Result<(), DomainError> {
    if Student::find_by_id(student_id).one(conn).await?.is_none() {
        return Err(DomainError::StudentNotFound);
    }
    if Course::find_by_id(course_id).one(conn).await?.is_none() {
        return Err(DomainError::CourseNotFound);
    }
    Ok(())
}

pub async fn list_enrollments(db: &DatabaseConnection) -> Result<Vec<EnrollmentDto>, DomainError> {
    let enrollments = Enrollment::find().all(db).await?;
    Ok(enrollments.into_iter().map(EnrollmentDto::from).collect())
}

pub async fn create_enrollment(
    db: &DatabaseConnection,
    input: EnrollmentInput,
) -> Result<EnrollmentDto, DomainError> {
    let (student_id, course_id) = input.resolve()?;

    let txn = db.begin().await?;

    check_references(&txn, student_id, course_id).await?;

    let duplicate = Enrollment::find()
        .filter(enrollment::Column::StudentId.eq(student_id))
        .filter(enrollment::Column::CourseId.eq(course_id))
        .one(&txn)
        .await?;
    if duplicate.is_some() {
        return Err(DomainError::DuplicateEnrollment);
    }

    let now = chrono::Utc::now().to_rfc3339();
    let new_enrollment = enrollment::ActiveModel {
        student_id: Set(student_id),
        course_id: Set(course_id),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_enrollment.insert(&txn).await?;
    txn.commit().await?;

    Ok(EnrollmentDto::from(model))
}

/// Replace both references, re-running the same integrity checks as create.
pub async fn update_enrollment(
    db: &DatabaseConnection,
    id: i32,
    input: EnrollmentInput,
) -> Result<EnrollmentDto, DomainError> {
    let (student_id, course_id) = input.resolve()?;

    let txn = db.begin().await?;

    let existing = Enrollment::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound("Enrollment"))?;

    check_references(&txn, student_id, course_id).await?;

    let duplicate = Enrollment::find()
        .filter(enrollment::Column::StudentId.eq(student_id))
        .filter(enrollment::Column::CourseId.eq(course_id))
        .filter(enrollment::Column::Id.ne(id))
        .one(&txn)
        .await?;
    if duplicate.is_some() {
        return Err(DomainError::DuplicateEnrollment);
    }

    let mut active: enrollment::ActiveModel = existing.into();
    active.student_id = Set(student_id);
    active.course_id = Set(course_id);
    active.updated_at = Set(chrono::Utc::now().to_rfc3339());

    let model = active.update(&txn).await?;
    txn.commit().await?;

    Ok(EnrollmentDto::from(model))
}

pub async fn delete_enrollment(db: &DatabaseConnection, id: i32) -> Result<(), DomainError> {
    let enrollment = Enrollment::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound("Enrollment"))?;

    enrollment.delete(db).await?;
    Ok(())
}
