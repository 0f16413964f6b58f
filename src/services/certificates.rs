//! Course-completion check and certificate issuance.
//!
//! Issuance runs in a single transaction and relies on the
//! `uq_certificate_user_course` unique index: the insert is
//! ON CONFLICT DO NOTHING, so two racing calls converge on one
//! certificate row and both return its number.

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::config::CERTIFICATE_PREFIX;
use crate::entities::sea_orm_active_enums::EnrollmentStatusEnum;
use crate::entities::{app_user, certificate, course, course_section, enrollment, user_progress};
use crate::utils::random::generate_numeric_code;

/// `CERT-<year>-<6 digit code>`. Collisions across the random draw are
/// absorbed by the unique index on certificate_number, not by this function.
pub fn generate_certificate_number() -> String {
    let year = Utc::now().year();
    format!("{}-{}-{}", CERTIFICATE_PREFIX, year, generate_numeric_code(6))
}

/// True iff the course has at least one section and the user has a completed
/// progress row for every section. A course with no sections is never
/// complete, so empty courses cannot mint certificates.
pub async fn is_course_completed<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    course_id: Uuid,
) -> Result<bool> {
    let sections = course_section::Entity::find()
        .filter(course_section::Column::CourseId.eq(course_id))
        .all(db)
        .await
        .context("Failed to load course sections")?;

    if sections.is_empty() {
        return Ok(false);
    }

    let completed = user_progress::Entity::find()
        .filter(user_progress::Column::UserId.eq(user_id))
        .filter(user_progress::Column::CourseId.eq(course_id))
        .filter(user_progress::Column::Completed.eq(true))
        .all(db)
        .await
        .context("Failed to load user progress")?;

    Ok(completed.len() == sections.len())
}

/// Issues a certificate for (user, course) at most once.
///
/// Returns the existing certificate if one was already issued, `None` if the
/// course is not complete (no writes in that case), or the freshly inserted
/// certificate. The insert and the enrollment status update commit together;
/// a store error rolls both back.
pub async fn issue_certificate(
    db: &DatabaseConnection,
    user_id: Uuid,
    course_id: Uuid,
) -> Result<Option<certificate::Model>> {
    let txn = db
        .begin()
        .await
        .context("Failed to begin issuance transaction")?;

    let existing = certificate::Entity::find()
        .filter(certificate::Column::UserId.eq(user_id))
        .filter(certificate::Column::CourseId.eq(course_id))
        .one(&txn)
        .await
        .context("Failed to look up existing certificate")?;

    if let Some(model) = existing {
        txn.commit().await?;
        return Ok(Some(model));
    }

    if !is_course_completed(&txn, user_id, course_id).await? {
        txn.commit().await?;
        return Ok(None);
    }

    // Snapshot recipient and course title at issuance time
    let recipient = app_user::Entity::find()
        .filter(app_user::Column::UserId.eq(user_id))
        .one(&txn)
        .await
        .context("Failed to load certificate recipient")?
        .ok_or_else(|| anyhow::anyhow!("User not found"))?;

    let course = course::Entity::find()
        .filter(course::Column::CourseId.eq(course_id))
        .one(&txn)
        .await
        .context("Failed to load course")?
        .ok_or_else(|| anyhow::anyhow!("Course not found"))?;

    let now = Utc::now().naive_utc();
    let certificate_id = Uuid::new_v4();
    let certificate_number = generate_certificate_number();

    let issued = certificate::Model {
        certificate_id,
        user_id,
        course_id,
        certificate_number: certificate_number.clone(),
        recipient_name: recipient.full_name.clone(),
        course_title: course.title.clone(),
        issued_at: now,
        created_at: now,
        updated_at: now,
    };

    let certificate_model = certificate::ActiveModel {
        certificate_id: Set(certificate_id),
        user_id: Set(user_id),
        course_id: Set(course_id),
        certificate_number: Set(certificate_number),
        recipient_name: Set(recipient.full_name),
        course_title: Set(course.title),
        issued_at: Set(now),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let insert = certificate::Entity::insert(certificate_model)
        .on_conflict(
            OnConflict::columns([certificate::Column::UserId, certificate::Column::CourseId])
                .do_nothing()
                .to_owned(),
        )
        .exec(&txn)
        .await;

    match insert {
        Ok(_) => {
            enrollment::Entity::update_many()
                .col_expr(
                    enrollment::Column::Status,
                    Expr::value(EnrollmentStatusEnum::Completed),
                )
                .col_expr(enrollment::Column::CompletedAt, Expr::value(Some(now)))
                .col_expr(enrollment::Column::UpdatedAt, Expr::value(now))
                .filter(enrollment::Column::UserId.eq(user_id))
                .filter(enrollment::Column::CourseId.eq(course_id))
                .exec(&txn)
                .await
                .context("Failed to complete enrollment")?;

            txn.commit().await.context("Failed to commit issuance")?;
            Ok(Some(issued))
        }
        Err(DbErr::RecordNotInserted) => {
            // A concurrent issuance won the unique index; hand back its row
            let winner = certificate::Entity::find()
                .filter(certificate::Column::UserId.eq(user_id))
                .filter(certificate::Column::CourseId.eq(course_id))
                .one(&txn)
                .await
                .context("Failed to load concurrently issued certificate")?;
            txn.commit().await?;
            Ok(winner)
        }
        Err(err) => {
            txn.rollback().await.ok();
            Err(err).context("Failed to insert certificate")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use sea_orm::prelude::Decimal;

    fn section(course_id: Uuid, order_index: i32) -> course_section::Model {
        let now = Utc::now().naive_utc();
        course_section::Model {
            section_id: Uuid::new_v4(),
            course_id,
            title: format!("Section {}", order_index),
            content: None,
            order_index,
            created_at: now,
            updated_at: now,
        }
    }

    fn completed_progress(user_id: Uuid, course_id: Uuid, section_id: Uuid) -> user_progress::Model {
        let now = Utc::now().naive_utc();
        user_progress::Model {
            progress_id: Uuid::new_v4(),
            user_id,
            course_id,
            section_id,
            completed: true,
            completed_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    fn recipient(user_id: Uuid) -> app_user::Model {
        let now = Utc::now().naive_utc();
        app_user::Model {
            user_id,
            email: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn published_course(course_id: Uuid) -> course::Model {
        let now = Utc::now().naive_utc();
        course::Model {
            course_id,
            title: "Systems Programming".to_string(),
            description: None,
            price: Decimal::new(4900, 2),
            is_published: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn issued_certificate(user_id: Uuid, course_id: Uuid, number: &str) -> certificate::Model {
        let now = Utc::now().naive_utc();
        certificate::Model {
            certificate_id: Uuid::new_v4(),
            user_id,
            course_id,
            certificate_number: number.to_string(),
            recipient_name: "Ada Lovelace".to_string(),
            course_title: "Systems Programming".to_string(),
            issued_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    fn assert_number_format(number: &str) {
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3, "unexpected format: {}", number);
        assert_eq!(parts[0], "CERT");
        assert_eq!(parts[1].len(), 4);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn certificate_number_matches_format() {
        for _ in 0..50 {
            assert_number_format(&generate_certificate_number());
        }
    }

    #[tokio::test]
    async fn course_without_sections_is_never_complete() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<course_section::Model>::new()])
            .into_connection();

        let complete = is_course_completed(&db, Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();
        assert!(!complete);
    }

    #[tokio::test]
    async fn course_is_complete_when_all_sections_done() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();
        let sections: Vec<_> = (0..3).map(|i| section(course_id, i)).collect();
        let progress: Vec<_> = sections
            .iter()
            .map(|s| completed_progress(user_id, course_id, s.section_id))
            .collect();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([sections])
            .append_query_results([progress])
            .into_connection();

        let complete = is_course_completed(&db, user_id, course_id).await.unwrap();
        assert!(complete);
    }

    #[tokio::test]
    async fn course_is_incomplete_while_sections_remain() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();
        let sections: Vec<_> = (0..5).map(|i| section(course_id, i)).collect();
        let progress: Vec<_> = sections
            .iter()
            .take(4)
            .map(|s| completed_progress(user_id, course_id, s.section_id))
            .collect();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([sections])
            .append_query_results([progress])
            .into_connection();

        let complete = is_course_completed(&db, user_id, course_id).await.unwrap();
        assert!(!complete);
    }

    #[tokio::test]
    async fn issuing_twice_returns_the_same_certificate() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();
        let existing = issued_certificate(user_id, course_id, "CERT-2026-031415");

        // Only the lookup result is mocked: any insert or update would fail
        // the test because no exec results are queued.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing.clone()]])
            .into_connection();

        let reissued = issue_certificate(&db, user_id, course_id)
            .await
            .unwrap()
            .expect("certificate expected");
        assert_eq!(reissued.certificate_number, existing.certificate_number);
        assert_eq!(reissued.certificate_id, existing.certificate_id);
    }

    #[tokio::test]
    async fn incomplete_course_yields_no_certificate_and_no_writes() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();
        let sections: Vec<_> = (0..2).map(|i| section(course_id, i)).collect();
        let progress = vec![completed_progress(user_id, course_id, sections[0].section_id)];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<certificate::Model>::new()])
            .append_query_results([sections])
            .append_query_results([progress])
            .into_connection();

        let issued = issue_certificate(&db, user_id, course_id).await.unwrap();
        assert!(issued.is_none());
    }

    #[tokio::test]
    async fn completing_the_last_section_issues_exactly_one_certificate() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();
        let sections: Vec<_> = (0..5).map(|i| section(course_id, i)).collect();
        let progress: Vec<_> = sections
            .iter()
            .map(|s| completed_progress(user_id, course_id, s.section_id))
            .collect();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<certificate::Model>::new()])
            .append_query_results([sections])
            .append_query_results([progress])
            .append_query_results([vec![recipient(user_id)]])
            .append_query_results([vec![published_course(course_id)]])
            // the certificate insert, then the enrollment transitioning to
            // completed in the same transaction
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let issued = issue_certificate(&db, user_id, course_id)
            .await
            .unwrap()
            .expect("certificate expected");

        assert_number_format(&issued.certificate_number);
        assert_eq!(issued.recipient_name, "Ada Lovelace");
        assert_eq!(issued.course_title, "Systems Programming");
        assert_eq!(issued.user_id, user_id);
        assert_eq!(issued.course_id, course_id);
    }

    #[tokio::test]
    async fn losing_the_issuance_race_returns_the_winner() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();
        let sections = vec![section(course_id, 0)];
        let progress = vec![completed_progress(user_id, course_id, sections[0].section_id)];
        let winner = issued_certificate(user_id, course_id, "CERT-2026-271828");

        // The conflict-tolerant insert affects no row (DO NOTHING), so the
        // issuer re-reads the row the concurrent call inserted. The losing
        // call must not touch the enrollment: no further exec results are
        // queued beyond the conflicted insert.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<certificate::Model>::new()])
            .append_query_results([sections])
            .append_query_results([progress])
            .append_query_results([vec![recipient(user_id)]])
            .append_query_results([vec![published_course(course_id)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .append_query_results([vec![winner.clone()]])
            .into_connection();

        let issued = issue_certificate(&db, user_id, course_id)
            .await
            .unwrap()
            .expect("winner certificate expected");
        assert_eq!(issued.certificate_number, winner.certificate_number);
    }
}
