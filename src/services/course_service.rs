//! Course Service - plain CRUD; deletes cascade to enrollments.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::models::course::{self, Entity as Course};
use crate::models::enrollment::{self, Entity as Enrollment};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDto {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl From<course::Model> for CourseDto {
    fn from(model: course::Model) -> Self {
        Self {
            id: model.id.to_string(),
            title: model.title,
            description: model.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseInput {
    pub title: String,
    pub description: String,
}

pub async fn list_courses(db: &DatabaseConnection) -> Result<Vec<CourseDto>, DomainError> {
    let courses = Course::find().all(db).await?;
    Ok(courses.into_iter().map(CourseDto::from).collect())
}

// No uniqueness rule on title; two sections of the same course are fine.
pub async fn create_course(
    db: &DatabaseConnection,
    input: CourseInput,
) -> Result<CourseDto, DomainError> {
    let now = chrono::Utc::now().to_rfc3339();
    let new_course = course::ActiveModel {
        title: Set(input.title),
        description: Set(input.description),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_course.insert(db).await?;
    Ok(CourseDto::from(model))
}

pub async fn update_course(
    db: &DatabaseConnection,
    id: i32,
    input: CourseInput,
) -> Result<CourseDto, DomainError> {
    let existing = Course::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound("Course"))?;

    let mut active: course::ActiveModel = existing.into();
    active.title = Set(input.title);
    active.description = Set(input.description);
    active.updated_at = Set(chrono::Utc::now().to_rfc3339());

    let model = active.update(db).await?;
    Ok(CourseDto::from(model))
}

/// Delete a course and every enrollment referencing it, atomically.
pub async fn delete_course(db: &DatabaseConnection, id: i32) -> Result<(), DomainError> {
    let txn = db.begin().await?;

    let course = Course::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound("Course"))?;

    Enrollment::delete_many()
        .filter(enrollment::Column::CourseId.eq(id))
        .exec(&txn)
        .await?;

    course.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}
