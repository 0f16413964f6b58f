pub mod certificate_repository;
pub mod course_repository;
pub mod diagram_repository;
pub mod enrollment_repository;
pub mod progress_repository;
pub mod quiz_repository;
pub mod submission_repository;

pub use certificate_repository::CertificateRepository;
pub use course_repository::CourseRepository;
pub use diagram_repository::{DiagramRepository, DiagramUpdate};
pub use enrollment_repository::EnrollmentRepository;
pub use progress_repository::ProgressRepository;
pub use quiz_repository::QuizRepository;
pub use submission_repository::SubmissionRepository;
