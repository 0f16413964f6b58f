//! `SeaORM` Entity for exercise_submission table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::SubmissionTypeEnum;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "exercise_submission"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub submission_id: Uuid,
    pub user_id: Uuid,
    pub section_id: Uuid,
    pub exercise_number: i32,
    pub submission_type: SubmissionTypeEnum,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    SubmissionId,
    UserId,
    SectionId,
    ExerciseNumber,
    SubmissionType,
    Content,
    FileUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    SubmissionId,
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
    CourseSection,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::SubmissionId => ColumnType::Uuid.def(),
            Self::UserId => ColumnType::Uuid.def(),
            Self::SectionId => ColumnType::Uuid.def(),
            Self::ExerciseNumber => ColumnType::Integer.def(),
            Self::SubmissionType => SubmissionTypeEnum::db_type(),
            Self::Content => ColumnType::Text.def().null(),
            Self::FileUrl => ColumnType::String(StringLen::None).def().null(),
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
            Self::CourseSection => Entity::belongs_to(super::course_section::Entity)
                .from(Column::SectionId)
                .to(super::course_section::Column::SectionId)
                .into(),
        }
    }
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
}

impl Related<super::course_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
