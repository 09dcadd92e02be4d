//! Catalog tool model.

use architect_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A single generation tool in the read-only catalog.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Tool {
    pub id: DbId,
    pub name: String,
}

/// Which catalog a query targets. Image and video tools live in separate
/// tables with identical shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCategory {
    Image,
    Video,
}

impl ToolCategory {
    /// Backing table name for this catalog.
    pub fn table(self) -> &'static str {
        match self {
            ToolCategory::Image => "image_tools",
            ToolCategory::Video => "video_tools",
        }
    }

    /// Human-readable label used in error messages ("image" / "video").
    pub fn label(self) -> &'static str {
        match self {
            ToolCategory::Image => "image",
            ToolCategory::Video => "video",
        }
    }
}
