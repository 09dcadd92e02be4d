//! Shared domain types, errors, and validation for Prompt Architect Pro.

pub mod error;
pub mod types;
pub mod validate;
