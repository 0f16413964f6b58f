pub mod app_user;
pub mod certificate;
pub mod course;
pub mod course_section;
pub mod enrollment;
pub mod exercise_submission;
pub mod quiz;
pub mod quiz_response;
pub mod sea_orm_active_enums;
pub mod section_diagram;
pub mod user_progress;
