pub use sea_orm_migration::prelude::*;

mod m20260810_100000_create_users_and_courses;
mod m20260810_113000_create_enrollment_and_progress;
mod m20260811_090000_create_quiz_and_submissions;
mod m20260812_140000_create_certificate;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_100000_create_users_and_courses::Migration),
            Box::new(m20260810_113000_create_enrollment_and_progress::Migration),
            Box::new(m20260811_090000_create_quiz_and_submissions::Migration),
            Box::new(m20260812_140000_create_certificate::Migration),
        ]
    }
}
