//! List every user.

use axum::Json;
use axum::extract::State;

use crate::ServerError;
use crate::user::{User, UserRepository};

pub async fn handler(
    State(repo): State<UserRepository>,
) -> Result<Json<Vec<User>>, ServerError> {
    Ok(Json(repo.list().await?))
}
