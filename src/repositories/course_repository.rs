use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::{course, course_section};
use crate::static_service::DATABASE_CONNECTION;

pub struct CourseRepository;

impl CourseRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    /// Published courses, newest first. The storefront only ever shows these.
    pub async fn find_published(&self) -> Result<Vec<course::Model>> {
        let db = self.get_connection();
        let courses = course::Entity::find()
            .filter(course::Column::IsPublished.eq(true))
            .order_by_desc(course::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(courses)
    }

    pub async fn find_by_id(&self, course_id: Uuid) -> Result<Option<course::Model>> {
        let db = self.get_connection();
        let course = course::Entity::find()
            .filter(course::Column::CourseId.eq(course_id))
            .one(db)
            .await?;
        Ok(course)
    }

    /// Sections of a course in their configured order.
    pub async fn find_sections(&self, course_id: Uuid) -> Result<Vec<course_section::Model>> {
        let db = self.get_connection();
        let sections = course_section::Entity::find()
            .filter(course_section::Column::CourseId.eq(course_id))
            .order_by_asc(course_section::Column::OrderIndex)
            .all(db)
            .await?;
        Ok(sections)
    }
}
