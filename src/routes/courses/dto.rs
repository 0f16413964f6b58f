use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::{course, course_section};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: String,
    pub is_published: bool,
    pub created_at: String,
}

impl From<course::Model> for CourseResponse {
    fn from(model: course::Model) -> Self {
        Self {
            course_id: model.course_id,
            title: model.title,
            description: model.description,
            price: model.price.to_string(),
            is_published: model.is_published,
            created_at: model.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseListResponse {
    pub total: usize,
    pub courses: Vec<CourseResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SectionResponse {
    pub section_id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub order_index: i32,
}

impl From<course_section::Model> for SectionResponse {
    fn from(model: course_section::Model) -> Self {
        Self {
            section_id: model.section_id,
            course_id: model.course_id,
            title: model.title,
            content: model.content,
            order_index: model.order_index,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SectionListResponse {
    pub total: usize,
    pub sections: Vec<SectionResponse>,
}
