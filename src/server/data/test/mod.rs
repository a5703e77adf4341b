mod club_role;
mod document;
mod student;
mod user;
