pub mod admin;
pub mod certificates;
pub mod courses;
pub mod diagrams;
pub mod enrollments;
pub mod health;
pub mod progress;
pub mod quizzes;
pub mod stats;
pub mod submissions;
