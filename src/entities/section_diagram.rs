//! `SeaORM` Entity for section_diagram table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "section_diagram"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub diagram_id: Uuid,
    pub section_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub order_index: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    DiagramId,
    SectionId,
    Title,
    Description,
    ImageUrl,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    DiagramId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    CourseSection,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::DiagramId => ColumnType::Uuid.def(),
            Self::SectionId => ColumnType::Uuid.def(),
            Self::Title => ColumnType::String(StringLen::None).def(),
            Self::Description => ColumnType::Text.def().null(),
            Self::ImageUrl => ColumnType::String(StringLen::None).def(),
            Self::OrderIndex => ColumnType::Integer.def(),
            Self::CreatedAt => ColumnType::DateTime.def(),
            Self::UpdatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::CourseSection => Entity::belongs_to(super::course_section::Entity)
                .from(Column::SectionId)
                .to(super::course_section::Column::SectionId)
                .into(),
        }
    }
}

impl Related<super::course_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
