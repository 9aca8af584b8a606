//! Student Service - CRUD plus the email-uniqueness rule.
//!
//! Deleting a student cascades to enrollments inside a transaction so no
//! enrollment is left dangling if the process dies mid-delete.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::models::enrollment::{self, Entity as Enrollment};
use crate::models::student::{self, Entity as Student};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDto {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl From<student::Model> for StudentDto {
    fn from(model: student::Model) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name,
            age: model.age,
            email: model.email,
        }
    }
}

/// Incoming student fields, used for both create and full-replacement update.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentInput {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl StudentInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("name must not be empty".into()));
        }
        if !is_valid_email(&self.email) {
            return Err(DomainError::Validation(format!(
                "not a valid email address: {}",
                self.email
            )));
        }
        Ok(())
    }
}

/// Structural email check: one `@`, a non-empty local part, and a dotted
/// domain with no whitespace. Deliverability is not our problem.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(|c| c.is_whitespace()) || domain.contains('@') {
        return false;
    }

    // Domain needs at least one dot with labels on both sides
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

pub async fn list_students(db: &DatabaseConnection) -> Result<Vec<StudentDto>, DomainError> {
    let students = Student::find().all(db).await?;
    Ok(students.into_iter().map(StudentDto::from).collect())
}

pub async fn create_student(
    db: &DatabaseConnection,
    input: StudentInput,
) -> Result<StudentDto, DomainError> {
    input.validate()?;

    let existing = Student::find()
        .filter(student::Column::Email.eq(input.email.clone()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(DomainError::DuplicateEmail(input.email));
    }

    let now = chrono::Utc::now().to_rfc3339();
    let new_student = student::ActiveModel {
        name: Set(input.name),
        age: Set(input.age),
        email: Set(input.email),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_student.insert(db).await?;
    Ok(StudentDto::from(model))
}

/// Full-replacement update. Re-checks email uniqueness against everyone
/// except the record being updated.
pub async fn update_student(
    db: &DatabaseConnection,
    id: i32,
    input: StudentInput,
) -> Result<StudentDto, DomainError> {
    input.validate()?;

    let existing = Student::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound("Student"))?;

    let clash = Student::find()
        .filter(student::Column::Email.eq(input.email.clone()))
        .filter(student::Column::Id.ne(id))
        .one(db)
        .await?;
    if clash.is_some() {
        return Err(DomainError::DuplicateEmail(input.email));
    }

    let mut active: student::ActiveModel = existing.into();
    active.name = Set(input.name);
    active.age = Set(input.age);
    active.email = Set(input.email);
    active.updated_at = Set(chrono::Utc::now().to_rfc3339());

    let model = active.update(db).await?;
    Ok(StudentDto::from(model))
}

/// Delete a student and every enrollment referencing it, atomically.
pub async fn delete_student(db: &DatabaseConnection, id: i32) -> Result<(), DomainError> {
    let txn = db.begin().await?;

    let student = Student::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound("Student"))?;

    Enrollment::delete_many()
        .filter(enrollment::Column::StudentId.eq(id))
        .exec(&txn)
        .await?;

    student.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("first.last@dept.university.edu"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@example..com"));
        assert!(!is_valid_email("ana a@example.com"));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let input = StudentInput {
            name: "   ".to_string(),
            age: 20,
            email: "ok@example.com".to_string(),
        };
        assert!(input.validate().is_err());
    }
}
