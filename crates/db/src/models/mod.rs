pub mod submission;
pub mod tool;
pub mod user;
