//! `SeaORM` Entity for quiz_response table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "quiz_response"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub response_id: Uuid,
    pub user_id: Uuid,
    pub quiz_id: Uuid,
    pub selected_answer: i32,
    pub is_correct: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    ResponseId,
    UserId,
    QuizId,
    SelectedAnswer,
    IsCorrect,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    ResponseId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    AppUser,
    Quiz,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::ResponseId => ColumnType::Uuid.def(),
            Self::UserId => ColumnType::Uuid.def(),
            Self::QuizId => ColumnType::Uuid.def(),
            Self::SelectedAnswer => ColumnType::Integer.def(),
            Self::IsCorrect => ColumnType::Boolean.def(),
            Self::CreatedAt => ColumnType::DateTime.def(),
            Self::UpdatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::AppUser => Entity::belongs_to(super::app_user::Entity)
                .from(Column::UserId)
                .to(super::app_user::Column::UserId)
                .into(),
            Self::Quiz => Entity::belongs_to(super::quiz::Entity)
                .from(Column::QuizId)
                .to(super::quiz::Column::QuizId)
                .into(),
        }
    }
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
