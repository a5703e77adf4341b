mod document;
mod student;
mod user;
