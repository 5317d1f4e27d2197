mod repository;

pub use repository::*;

use serde::{Deserialize, Serialize};

/// User as saved on database.
///
/// Missing JSON fields fall back to their zero value, so a body without
/// `id` binds to `id = 0`.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow,
)]
#[serde(default)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}
