use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{assignment, auth, club, document, student},
    docs::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/signupStudent", post(auth::signup_student))
        .route("/auth/createAdvisor", post(auth::create_advisor))
        .route("/auth/createAdmin", post(auth::create_admin))
        .route("/auth/deleteStudent", post(student::delete_student))
        .route(
            "/auth/updateStudentProfile",
            post(student::update_student_profile),
        )
        .route("/auth/getStudentInfo", get(student::get_student_info))
        .route("/assignment/addAssignment", post(assignment::add_assignment))
        .route(
            "/assignment/addDocumentsToAssignment",
            post(assignment::add_documents_to_assignment),
        )
        .route(
            "/assignment/deleteAssignment",
            post(assignment::delete_assignment),
        )
        .route("/assignment/allAssignments", get(assignment::all_assignments))
        .route("/assignment/assignmentView", get(assignment::assignment_view))
        .route(
            "/assignment/studentAssignments",
            get(assignment::student_assignments),
        )
        .route("/club/createClub", post(club::create_club))
        .route("/club/assignAdvisor", post(club::assign_advisor))
        .route("/club/joinClub", post(club::join_club))
        .route("/club/leaveClub", post(club::leave_club))
        .route("/club/setMemberRole", post(club::set_member_role))
        .route("/club/allClubs", get(club::all_clubs))
        .route("/club/clubView", get(club::club_view))
        .route("/document/addDocument", post(document::add_document))
        .route("/document/allDocuments", get(document::all_documents))
        .route("/document/documentView", get(document::document_view))
        .route("/document/deleteDocument", post(document::delete_document))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
