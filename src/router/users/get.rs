//! Get a single user.

use axum::Json;
use axum::extract::State;

use crate::ServerError;
use crate::router::UserId;
use crate::user::{User, UserRepository};

pub async fn handler(
    State(repo): State<UserRepository>,
    UserId(id): UserId,
) -> Result<Json<User>, ServerError> {
    Ok(Json(repo.find_by_id(id).await?))
}
