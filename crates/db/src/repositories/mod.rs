mod submission_repo;
mod tool_repo;
mod user_repo;

pub use submission_repo::SubmissionRepo;
pub use tool_repo::ToolRepo;
pub use user_repo::UserRepo;
