//! Showcase submission model and DTOs.

use architect_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A community showcase entry tied to the submitting user.
///
/// `tool_used` is a free-text reference to a catalog tool's name; it is not
/// a foreign key, so entries may name tools that are not in the catalog.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseSubmission {
    pub id: DbId,
    pub user_id: DbId,
    pub prompt_text: String,
    pub rating: i32,
    pub image_url: Option<String>,
    pub tool_used: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a showcase submission. Optional fields are `None` when
/// the submitter left them blank.
#[derive(Debug, Clone)]
pub struct CreateSubmission {
    pub user_id: DbId,
    pub prompt_text: String,
    pub rating: i32,
    pub image_url: Option<String>,
    pub tool_used: Option<String>,
}
