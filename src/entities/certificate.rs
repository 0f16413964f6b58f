//! `SeaORM` Entity for certificate table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "certificate"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub certificate_id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub certificate_number: String,
    pub recipient_name: String,
    pub course_title: String,
    pub issued_at: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    CertificateId,
    UserId,
    CourseId,
    CertificateNumber,
    RecipientName,
    CourseTitle,
    IssuedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    CertificateId,
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
    Course,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::CertificateId => ColumnType::Uuid.def(),
            Self::UserId => ColumnType::Uuid.def(),
            Self::CourseId => ColumnType::Uuid.def(),
            Self::CertificateNumber => ColumnType::String(StringLen::None).def().unique(),
            Self::RecipientName => ColumnType::String(StringLen::None).def(),
            Self::CourseTitle => ColumnType::String(StringLen::None).def(),
            Self::IssuedAt => ColumnType::DateTime.def(),
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
            Self::Course => Entity::belongs_to(super::course::Entity)
                .from(Column::CourseId)
                .to(super::course::Column::CourseId)
                .into(),
        }
    }
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
