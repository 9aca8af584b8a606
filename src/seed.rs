//! Demo data seeder.
//!
//! Wipes all three collections and rebuilds a small fixture set: five
//! students with distinct emails, three courses, and one enrollment per
//! student against a randomly picked course. Convenience tooling, not a
//! correctness-critical path.

use rand::seq::SliceRandom;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::domain::DomainError;
use crate::models::{course, enrollment, student};

const STUDENT_NAMES: [&str; 5] = [
    "Ana Martins",
    "Bruno Costa",
    "Carla Jensen",
    "David Okafor",
    "Elena Petrova",
];

const COURSES: [(&str, &str); 3] = [
    ("Linear Algebra", "Vector spaces, matrices and linear maps."),
    ("Operating Systems", "Processes, scheduling and memory management."),
    ("Databases", "Relational modelling, SQL and transactions."),
];

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    // Start from a clean slate
    enrollment::Entity::delete_many().exec(db).await?;
    student::Entity::delete_many().exec(db).await?;
    course::Entity::delete_many().exec(db).await?;

    let now = chrono::Utc::now().to_rfc3339();

    let mut student_ids = Vec::with_capacity(STUDENT_NAMES.len());
    for (i, name) in STUDENT_NAMES.iter().enumerate() {
        let new_student = student::ActiveModel {
            name: Set(name.to_string()),
            age: Set(18 + (i as i32 * 3) % 13),
            email: Set(format!("student{}@example.edu", i + 1)),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };
        let res = student::Entity::insert(new_student).exec(db).await?;
        student_ids.push(res.last_insert_id);
    }

    let mut course_ids = Vec::with_capacity(COURSES.len());
    for (title, description) in COURSES {
        let new_course = course::ActiveModel {
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };
        let res = course::Entity::insert(new_course).exec(db).await?;
        course_ids.push(res.last_insert_id);
    }

    for student_id in student_ids {
        let course_id = *course_ids
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| DomainError::Database("no seeded courses".into()))?;

        let new_enrollment = enrollment::ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };
        enrollment::Entity::insert(new_enrollment).exec(db).await?;
    }

    Ok(())
}
