//! `SeaORM` Entity for quiz table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "quiz"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub quiz_id: Uuid,
    pub section_id: Uuid,
    pub question: String,
    /// JSON array of answer options; `correct_answer` indexes into it.
    pub options: Value,
    pub correct_answer: i32,
    pub order_index: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    QuizId,
    SectionId,
    Question,
    Options,
    CorrectAnswer,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    QuizId,
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
            Self::QuizId => ColumnType::Uuid.def(),
            Self::SectionId => ColumnType::Uuid.def(),
            Self::Question => ColumnType::Text.def(),
            Self::Options => ColumnType::Json.def(),
            Self::CorrectAnswer => ColumnType::Integer.def(),
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
