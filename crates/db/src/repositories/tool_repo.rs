//! Repository for the read-only tool catalogs.

use sqlx::PgPool;

use crate::models::tool::{Tool, ToolCategory};

/// Provides read access to the image/video tool catalogs. The catalogs are
/// seeded out of band; no write operations exist.
pub struct ToolRepo;

impl ToolRepo {
    /// List every tool in a catalog, sorted ascending by name.
    ///
    /// No filtering and no pagination -- the catalogs are small and returned
    /// whole. Ordering is the database collation's ascending sort.
    pub async fn list(pool: &PgPool, category: ToolCategory) -> Result<Vec<Tool>, sqlx::Error> {
        let query = format!("SELECT id, name FROM {} ORDER BY name ASC", category.table());
        sqlx::query_as::<_, Tool>(&query).fetch_all(pool).await
    }
}
