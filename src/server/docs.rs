use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{ErrorDto, IdDto, MessageDto},
        assignment::{AddDocumentsDto, AssigneeDto, AssignmentDto, CreateAssignmentDto},
        auth::{CreateAccountDto, JwtResponseDto, LoginDto, SignupStudentDto},
        club::{
            AssignAdvisorDto, ClubDto, ClubMemberDto, ClubRoleNameDto, CreateClubDto,
            MembershipDto, SetMemberRoleDto,
        },
        document::{CreateDocumentDto, DocumentDto},
        student::{StudentDto, UpdateStudentProfileDto},
    },
    server::controller::{assignment, auth, club, document, student},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::signup_student,
        auth::create_advisor,
        auth::create_admin,
        student::delete_student,
        student::update_student_profile,
        student::get_student_info,
        assignment::add_assignment,
        assignment::add_documents_to_assignment,
        assignment::delete_assignment,
        assignment::all_assignments,
        assignment::assignment_view,
        assignment::student_assignments,
        club::create_club,
        club::assign_advisor,
        club::join_club,
        club::leave_club,
        club::set_member_role,
        club::all_clubs,
        club::club_view,
        document::add_document,
        document::all_documents,
        document::document_view,
        document::delete_document,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        IdDto,
        LoginDto,
        JwtResponseDto,
        SignupStudentDto,
        CreateAccountDto,
        StudentDto,
        UpdateStudentProfileDto,
        CreateAssignmentDto,
        AddDocumentsDto,
        AssigneeDto,
        AssignmentDto,
        ClubRoleNameDto,
        CreateClubDto,
        AssignAdvisorDto,
        MembershipDto,
        SetMemberRoleDto,
        ClubMemberDto,
        ClubDto,
        CreateDocumentDto,
        DocumentDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Login, registration and student accounts"),
        (name = "assignment", description = "Club assignments and their documents"),
        (name = "club", description = "Clubs, advisors and memberships"),
        (name = "document", description = "Documents"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by guarded endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
