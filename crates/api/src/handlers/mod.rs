pub mod auth;
pub mod showcase;
pub mod tools;
