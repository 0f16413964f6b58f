use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::section_diagram;
use crate::static_service::DATABASE_CONNECTION;

pub struct DiagramRepository;

impl DiagramRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_section(&self, section_id: Uuid) -> Result<Vec<section_diagram::Model>> {
        let db = self.get_connection();
        let diagrams = section_diagram::Entity::find()
            .filter(section_diagram::Column::SectionId.eq(section_id))
            .order_by_asc(section_diagram::Column::OrderIndex)
            .all(db)
            .await?;
        Ok(diagrams)
    }

    pub async fn find_by_id(&self, diagram_id: Uuid) -> Result<Option<section_diagram::Model>> {
        let db = self.get_connection();
        let diagram = section_diagram::Entity::find()
            .filter(section_diagram::Column::DiagramId.eq(diagram_id))
            .one(db)
            .await?;
        Ok(diagram)
    }

    pub async fn create(
        &self,
        section_id: Uuid,
        title: String,
        description: Option<String>,
        image_url: String,
        order_index: i32,
    ) -> Result<section_diagram::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let diagram_model = section_diagram::ActiveModel {
            diagram_id: Set(Uuid::new_v4()),
            section_id: Set(section_id),
            title: Set(title),
            description: Set(description),
            image_url: Set(image_url),
            order_index: Set(order_index),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = diagram_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        diagram_id: Uuid,
        updates: DiagramUpdate,
    ) -> Result<section_diagram::Model> {
        let diagram = self
            .find_by_id(diagram_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Diagram not found"))?;
        let db = self.get_connection();

        let mut active_model: section_diagram::ActiveModel = diagram.into();

        if let Some(title) = updates.title {
            active_model.title = Set(title);
        }
        if let Some(description) = updates.description {
            active_model.description = Set(Some(description));
        }
        if let Some(image_url) = updates.image_url {
            active_model.image_url = Set(image_url);
        }
        if let Some(order_index) = updates.order_index {
            active_model.order_index = Set(order_index);
        }

        active_model.updated_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, diagram_id: Uuid) -> Result<DeleteResult> {
        let diagram = self
            .find_by_id(diagram_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Diagram not found"))?;
        let db = self.get_connection();

        let active_model: section_diagram::ActiveModel = diagram.into();
        let result = active_model.delete(db).await?;
        Ok(result)
    }
}

pub struct DiagramUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
}
