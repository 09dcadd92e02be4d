use architect_core::types::DbId;

/// An established session: the authenticated user plus the bearer token used
/// on subsequent requests. Read-only from the flows' perspective.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: DbId,
    pub access_token: String,
}
