//! Repository for the `showcase_submissions` table.

use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, ShowcaseSubmission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, prompt_text, rating, image_url, tool_used, created_at";

/// Provides create and list operations for showcase submissions. Entries are
/// created once per submission; moderation and deletion live elsewhere.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new showcase submission, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<ShowcaseSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO showcase_submissions (user_id, prompt_text, rating, image_url, tool_used)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShowcaseSubmission>(&query)
            .bind(input.user_id)
            .bind(&input.prompt_text)
            .bind(input.rating)
            .bind(&input.image_url)
            .bind(&input.tool_used)
            .fetch_one(pool)
            .await
    }

    /// List all submissions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShowcaseSubmission>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM showcase_submissions ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ShowcaseSubmission>(&query)
            .fetch_all(pool)
            .await
    }
}
