//! Create a user.
//!
//! The response echoes the request body as received. Its `id` is the one
//! sent by the client, not the one PostgreSQL assigned to the new row.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::ServerError;
use crate::router::JsonBody;
use crate::user::{User, UserRepository};

pub async fn handler(
    State(repo): State<UserRepository>,
    JsonBody(user): JsonBody<User>,
) -> Result<(StatusCode, Json<User>), ServerError> {
    repo.insert(&user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
