use anyhow::Result;
use chrono::Utc;
use sea_orm::prelude::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::enrollment;
use crate::entities::sea_orm_active_enums::EnrollmentStatusEnum;
use crate::static_service::DATABASE_CONNECTION;

pub struct EnrollmentRepository;

impl EnrollmentRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<enrollment::Model>> {
        let db = self.get_connection();
        let enrollments = enrollment::Entity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .order_by_desc(enrollment::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(enrollments)
    }

    pub async fn find_by_user_and_course(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<enrollment::Model>> {
        let db = self.get_connection();
        let enrollment = enrollment::Entity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .filter(enrollment::Column::CourseId.eq(course_id))
            .one(db)
            .await?;
        Ok(enrollment)
    }

    /// Payment-callback semantics: make sure an active enrollment exists for
    /// (user, course) and tag it with the payment session. A pending row is
    /// promoted to active; a completed row only gets the session tag.
    pub async fn ensure_active(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        payment_session_id: String,
        amount_paid: Option<Decimal>,
    ) -> Result<enrollment::Model> {
        let db = self.get_connection();
        self.ensure_active_on(db, user_id, course_id, payment_session_id, amount_paid)
            .await
    }

    pub(crate) async fn ensure_active_on<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: Uuid,
        course_id: Uuid,
        payment_session_id: String,
        amount_paid: Option<Decimal>,
    ) -> Result<enrollment::Model> {
        let now = Utc::now().naive_utc();

        let existing = enrollment::Entity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .filter(enrollment::Column::CourseId.eq(course_id))
            .one(db)
            .await?;

        let result = match existing {
            Some(model) => {
                let keep_completed = model.status == EnrollmentStatusEnum::Completed;
                let mut active_model: enrollment::ActiveModel = model.into();
                if !keep_completed {
                    active_model.status = Set(EnrollmentStatusEnum::Active);
                }
                active_model.payment_session_id = Set(Some(payment_session_id));
                if let Some(amount) = amount_paid {
                    active_model.amount_paid = Set(Some(amount));
                }
                active_model.updated_at = Set(now);
                active_model.update(db).await?
            }
            None => {
                let enrollment_model = enrollment::ActiveModel {
                    enrollment_id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    course_id: Set(course_id),
                    status: Set(EnrollmentStatusEnum::Active),
                    amount_paid: Set(amount_paid),
                    payment_session_id: Set(Some(payment_session_id)),
                    completed_at: Set(None),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                enrollment_model.insert(db).await?
            }
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn enrollment_row(
        user_id: Uuid,
        course_id: Uuid,
        status: EnrollmentStatusEnum,
        payment_session_id: Option<&str>,
    ) -> enrollment::Model {
        let now = Utc::now().naive_utc();
        enrollment::Model {
            enrollment_id: Uuid::new_v4(),
            user_id,
            course_id,
            status: status.clone(),
            amount_paid: Some(Decimal::new(4900, 2)),
            payment_session_id: payment_session_id.map(str::to_string),
            completed_at: match status {
                EnrollmentStatusEnum::Completed => Some(now),
                _ => None,
            },
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn first_payment_creates_an_active_enrollment() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();
        let inserted = enrollment_row(
            user_id,
            course_id,
            EnrollmentStatusEnum::Active,
            Some("cs_live_001"),
        );

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<enrollment::Model>::new()])
            // INSERT .. RETURNING for the new row
            .append_query_results([vec![inserted]])
            .into_connection();

        let enrollment = EnrollmentRepository::new()
            .ensure_active_on(
                &db,
                user_id,
                course_id,
                "cs_live_001".to_string(),
                Some(Decimal::new(4900, 2)),
            )
            .await
            .unwrap();

        assert_eq!(enrollment.status, EnrollmentStatusEnum::Active);
        assert_eq!(enrollment.payment_session_id.as_deref(), Some("cs_live_001"));
    }

    #[tokio::test]
    async fn pending_enrollment_is_promoted_to_active() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();
        let pending = enrollment_row(user_id, course_id, EnrollmentStatusEnum::Pending, None);
        let mut promoted = pending.clone();
        promoted.status = EnrollmentStatusEnum::Active;
        promoted.payment_session_id = Some("cs_live_002".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![pending]])
            // UPDATE .. RETURNING for the promoted row
            .append_query_results([vec![promoted]])
            .into_connection();

        let enrollment = EnrollmentRepository::new()
            .ensure_active_on(&db, user_id, course_id, "cs_live_002".to_string(), None)
            .await
            .unwrap();

        assert_eq!(enrollment.status, EnrollmentStatusEnum::Active);
        assert_eq!(enrollment.payment_session_id.as_deref(), Some("cs_live_002"));
    }

    #[tokio::test]
    async fn completed_enrollment_keeps_its_status_on_replayed_payment() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();
        let completed = enrollment_row(
            user_id,
            course_id,
            EnrollmentStatusEnum::Completed,
            Some("cs_live_003"),
        );
        let mut retagged = completed.clone();
        retagged.payment_session_id = Some("cs_live_004".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![completed]])
            .append_query_results([vec![retagged]])
            .into_connection();

        let enrollment = EnrollmentRepository::new()
            .ensure_active_on(&db, user_id, course_id, "cs_live_004".to_string(), None)
            .await
            .unwrap();

        // The callback refreshes the session tag but never demotes a
        // completed enrollment back to active.
        assert_eq!(enrollment.status, EnrollmentStatusEnum::Completed);
        assert_eq!(enrollment.payment_session_id.as_deref(), Some("cs_live_004"));
        assert!(enrollment.completed_at.is_some());

        let update = db.into_transaction_log();
        let statement = format!("{:?}", update.last().unwrap());
        assert!(!statement.to_lowercase().contains("'active'"));
    }
}
