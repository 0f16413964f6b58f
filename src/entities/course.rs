//! `SeaORM` Entity for course table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "course"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub is_published: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    CourseId,
    Title,
    Description,
    Price,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    CourseId,
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
            Self::CourseId => ColumnType::Uuid.def(),
            Self::Title => ColumnType::String(StringLen::None).def(),
            Self::Description => ColumnType::Text.def().null(),
            Self::Price => ColumnType::Decimal(Some((10, 2))).def(),
            Self::IsPublished => ColumnType::Boolean.def(),
            Self::CreatedAt => ColumnType::DateTime.def(),
            Self::UpdatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::CourseSection => Entity::has_many(super::course_section::Entity).into(),
        }
    }
}

impl Related<super::course_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
