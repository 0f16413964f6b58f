//! Wipes demo-account learning data so the full enrollment-to-certificate
//! flow can be replayed in demonstrations.

use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};

use crate::entities::sea_orm_active_enums::EnrollmentStatusEnum;
use crate::entities::{
    app_user, certificate, enrollment, exercise_submission, quiz_response, user_progress,
};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DemoResetSummary {
    pub users_matched: u64,
    pub progress_deleted: u64,
    pub quiz_responses_deleted: u64,
    pub submissions_deleted: u64,
    pub certificates_deleted: u64,
    pub enrollments_reverted: u64,
}

/// Deletes progress, quiz responses, exercise submissions and certificates
/// for every account in `demo_emails`, and reverts their enrollments to
/// active. All-or-nothing: a failure rolls the whole reset back.
pub async fn reset_demo_accounts(
    db: &DatabaseConnection,
    demo_emails: &[String],
) -> Result<DemoResetSummary> {
    if demo_emails.is_empty() {
        return Ok(DemoResetSummary::default());
    }

    let txn = db.begin().await.context("Failed to begin demo reset")?;

    let user_ids: Vec<_> = app_user::Entity::find()
        .filter(app_user::Column::Email.is_in(demo_emails.to_vec()))
        .all(&txn)
        .await
        .context("Failed to resolve demo accounts")?
        .into_iter()
        .map(|u| u.user_id)
        .collect();

    if user_ids.is_empty() {
        txn.commit().await?;
        return Ok(DemoResetSummary::default());
    }

    let progress_deleted = user_progress::Entity::delete_many()
        .filter(user_progress::Column::UserId.is_in(user_ids.clone()))
        .exec(&txn)
        .await
        .context("Failed to delete demo progress")?
        .rows_affected;

    let quiz_responses_deleted = quiz_response::Entity::delete_many()
        .filter(quiz_response::Column::UserId.is_in(user_ids.clone()))
        .exec(&txn)
        .await
        .context("Failed to delete demo quiz responses")?
        .rows_affected;

    let submissions_deleted = exercise_submission::Entity::delete_many()
        .filter(exercise_submission::Column::UserId.is_in(user_ids.clone()))
        .exec(&txn)
        .await
        .context("Failed to delete demo submissions")?
        .rows_affected;

    let certificates_deleted = certificate::Entity::delete_many()
        .filter(certificate::Column::UserId.is_in(user_ids.clone()))
        .exec(&txn)
        .await
        .context("Failed to delete demo certificates")?
        .rows_affected;

    let enrollments_reverted = enrollment::Entity::update_many()
        .col_expr(
            enrollment::Column::Status,
            Expr::value(EnrollmentStatusEnum::Active),
        )
        .col_expr(
            enrollment::Column::CompletedAt,
            Expr::value(Option::<chrono::NaiveDateTime>::None),
        )
        .col_expr(
            enrollment::Column::UpdatedAt,
            Expr::value(Utc::now().naive_utc()),
        )
        .filter(enrollment::Column::UserId.is_in(user_ids.clone()))
        .filter(enrollment::Column::Status.eq(EnrollmentStatusEnum::Completed))
        .exec(&txn)
        .await
        .context("Failed to revert demo enrollments")?
        .rows_affected;

    txn.commit().await.context("Failed to commit demo reset")?;

    Ok(DemoResetSummary {
        users_matched: user_ids.len() as u64,
        progress_deleted,
        quiz_responses_deleted,
        submissions_deleted,
        certificates_deleted,
        enrollments_reverted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use uuid::Uuid;

    fn demo_user(email: &str) -> app_user::Model {
        let now = Utc::now().naive_utc();
        app_user::Model {
            user_id: Uuid::new_v4(),
            email: email.to_string(),
            full_name: "Demo Student".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn empty_allowlist_touches_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let summary = reset_demo_accounts(&db, &[]).await.unwrap();
        assert_eq!(summary, DemoResetSummary::default());
    }

    #[tokio::test]
    async fn unknown_emails_touch_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<app_user::Model>::new()])
            .into_connection();

        let summary = reset_demo_accounts(&db, &["ghost@example.com".to_string()])
            .await
            .unwrap();
        assert_eq!(summary, DemoResetSummary::default());
    }

    #[tokio::test]
    async fn reset_wipes_learning_data_and_reverts_enrollments() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![demo_user("demo@example.com")]])
            .append_exec_results([exec(5), exec(3), exec(2), exec(1), exec(1)])
            .into_connection();

        let summary = reset_demo_accounts(&db, &["demo@example.com".to_string()])
            .await
            .unwrap();

        assert_eq!(summary.users_matched, 1);
        assert_eq!(summary.progress_deleted, 5);
        assert_eq!(summary.quiz_responses_deleted, 3);
        assert_eq!(summary.submissions_deleted, 2);
        assert_eq!(summary.certificates_deleted, 1);
        assert_eq!(summary.enrollments_reverted, 1);
    }
}
