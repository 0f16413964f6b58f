use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::certificate;
use crate::static_service::DATABASE_CONNECTION;

pub struct CertificateRepository;

impl CertificateRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    /// Public verification path; no ownership check on purpose.
    pub async fn find_by_number(
        &self,
        certificate_number: &str,
    ) -> Result<Option<certificate::Model>> {
        let db = self.get_connection();
        let certificate = certificate::Entity::find()
            .filter(certificate::Column::CertificateNumber.eq(certificate_number))
            .one(db)
            .await?;
        Ok(certificate)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<certificate::Model>> {
        let db = self.get_connection();
        let certificates = certificate::Entity::find()
            .filter(certificate::Column::UserId.eq(user_id))
            .order_by_desc(certificate::Column::IssuedAt)
            .all(db)
            .await?;
        Ok(certificates)
    }
}
