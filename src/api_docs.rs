use utoipa::OpenApi;

use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::route::health_check,
        routes::courses::route::get_published_courses,
        routes::courses::route::get_course,
        routes::courses::route::get_course_sections,
        routes::enrollments::route::payment_success,
        routes::enrollments::route::get_user_enrollments,
        routes::progress::route::record_progress,
        routes::progress::route::get_user_progress,
        routes::quizzes::route::get_section_quizzes,
        routes::quizzes::route::submit_quiz_response,
        routes::quizzes::route::get_user_quiz_responses,
        routes::submissions::route::submit_exercise,
        routes::submissions::route::get_user_submissions,
        routes::diagrams::route::create_diagram,
        routes::diagrams::route::update_diagram,
        routes::diagrams::route::delete_diagram,
        routes::diagrams::route::get_section_diagrams,
        routes::certificates::route::issue,
        routes::certificates::route::verify_certificate,
        routes::certificates::route::get_user_certificates,
        routes::stats::route::get_stats_overview,
        routes::admin::route::demo_reset,
    ),
    components(schemas(
        routes::courses::dto::CourseResponse,
        routes::courses::dto::CourseListResponse,
        routes::courses::dto::SectionResponse,
        routes::courses::dto::SectionListResponse,
        routes::enrollments::dto::PaymentSuccessRequest,
        routes::enrollments::dto::EnrollmentResponse,
        routes::enrollments::dto::EnrollmentListResponse,
        routes::progress::dto::RecordProgressRequest,
        routes::progress::dto::ProgressResponse,
        routes::progress::dto::ProgressListResponse,
        routes::quizzes::dto::QuizQuestionResponse,
        routes::quizzes::dto::QuizListResponse,
        routes::quizzes::dto::SubmitQuizResponseRequest,
        routes::quizzes::dto::QuizResponseResponse,
        routes::quizzes::dto::QuizResponseListResponse,
        routes::submissions::dto::SubmitExerciseRequest,
        routes::submissions::dto::SubmissionResponse,
        routes::submissions::dto::SubmissionListResponse,
        routes::diagrams::dto::CreateDiagramRequest,
        routes::diagrams::dto::UpdateDiagramRequest,
        routes::diagrams::dto::DiagramResponse,
        routes::diagrams::dto::DiagramListResponse,
        routes::certificates::dto::IssueCertificateRequest,
        routes::certificates::dto::CertificateResponse,
        routes::certificates::dto::IssueCertificateResponse,
        routes::certificates::dto::CertificateListResponse,
        routes::stats::dto::StatsOverviewResponse,
        routes::admin::dto::DemoResetResponse,
        crate::entities::sea_orm_active_enums::EnrollmentStatusEnum,
        crate::entities::sea_orm_active_enums::SubmissionTypeEnum,
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Courses", description = "Published course catalogue"),
        (name = "Enrollments", description = "Enrollment lifecycle and payment callback"),
        (name = "Progress", description = "Per-section completion tracking"),
        (name = "Quizzes", description = "Quiz delivery and graded responses"),
        (name = "Submissions", description = "Exercise submissions"),
        (name = "Diagrams", description = "Admin-managed section diagrams"),
        (name = "Certificates", description = "Certificate issuance and verification"),
        (name = "Statistics", description = "Admin reporting"),
        (name = "Admin", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;
