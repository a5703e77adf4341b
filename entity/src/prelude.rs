pub use super::admin::Entity as Admin;
pub use super::advisor::Entity as Advisor;
pub use super::assignment::Entity as Assignment;
pub use super::assignment_assignee::Entity as AssignmentAssignee;
pub use super::club::Entity as Club;
pub use super::club_role::Entity as ClubRole;
pub use super::document::Entity as Document;
pub use super::student::Entity as Student;
pub use super::user::Entity as User;
