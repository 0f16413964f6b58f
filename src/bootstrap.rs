use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::prelude::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde_json::json;
use uuid::Uuid;

use crate::config::APP_CONFIG;
use crate::entities::{app_user, course, course_section, quiz};

/// Seeds a published demo course with sections and quizzes, plus the demo
/// accounts from the allowlist. Skipped when a published course exists.
pub async fn initialize_demo_course(db: &DatabaseConnection) -> Result<()> {
    let existing_course = course::Entity::find()
        .filter(course::Column::IsPublished.eq(true))
        .one(db)
        .await
        .context("Failed to check existing courses")?;

    if existing_course.is_some() {
        tracing::info!("Published course already exists, skipping demo seed");
        return Ok(());
    }

    tracing::info!("Seeding demo course...");

    let now = Utc::now().naive_utc();
    let course_id = Uuid::new_v4();

    let demo_course = course::ActiveModel {
        course_id: Set(course_id),
        title: Set("Practical Systems Programming".to_string()),
        description: Set(Some(
            "A hands-on introduction to systems programming concepts.".to_string(),
        )),
        price: Set(Decimal::new(4900, 2)),
        is_published: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    demo_course
        .insert(db)
        .await
        .context("Failed to insert demo course")?;

    let section_titles = [
        "Getting Started",
        "Memory and Ownership",
        "Concurrency Basics",
        "Working with the Network",
        "Putting It Together",
    ];

    let mut first_section_id = None;
    for (index, title) in section_titles.iter().enumerate() {
        let section_id = Uuid::new_v4();
        if first_section_id.is_none() {
            first_section_id = Some(section_id);
        }

        let section = course_section::ActiveModel {
            section_id: Set(section_id),
            course_id: Set(course_id),
            title: Set(title.to_string()),
            content: Set(Some(format!("Lesson material for \"{}\".", title))),
            order_index: Set(index as i32),
            created_at: Set(now),
            updated_at: Set(now),
        };

        section
            .insert(db)
            .await
            .context("Failed to insert demo section")?;
    }

    if let Some(section_id) = first_section_id {
        let demo_quiz = quiz::ActiveModel {
            quiz_id: Set(Uuid::new_v4()),
            section_id: Set(section_id),
            question: Set("Which tool builds this project?".to_string()),
            options: Set(json!(["make", "cargo", "cmake", "gradle"])),
            correct_answer: Set(1),
            order_index: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        demo_quiz
            .insert(db)
            .await
            .context("Failed to insert demo quiz")?;
    }

    for (index, email) in APP_CONFIG.demo_email_list().iter().enumerate() {
        let existing_user = app_user::Entity::find()
            .filter(app_user::Column::Email.eq(email.clone()))
            .one(db)
            .await
            .context("Failed to check demo account")?;

        if existing_user.is_some() {
            continue;
        }

        let user = app_user::ActiveModel {
            user_id: Set(Uuid::new_v4()),
            email: Set(email.clone()),
            full_name: Set(format!("Demo Student {}", index + 1)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        user.insert(db)
            .await
            .context("Failed to insert demo account")?;
    }

    tracing::info!("Demo course seeded");

    Ok(())
}
