//! Update name and email of a user.

use axum::Json;
use axum::extract::State;

use crate::router::JsonBody;
use crate::user::{User, UserRepository};
use crate::ServerError;

/// Responds with the request body, even when no row matched `id`.
pub async fn handler(
    State(repo): State<UserRepository>,
    JsonBody(user): JsonBody<User>,
) -> Result<Json<User>, ServerError> {
    repo.update(&user).await?;
    Ok(Json(user))
}
