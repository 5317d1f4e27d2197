//! Users-related HTTP API.
mod create;
mod delete;
mod get;
mod list;
mod update;

use axum::Router;
use axum::middleware;
use axum::routing::get;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `GET /users` goes to `list`, `POST /users` to `create` and
        // `PUT /users` to `update`.
        .route(
            "/",
            get(list::handler)
                .post(create::handler)
                .put(update::handler),
        )
        // `GET /users/:ID` goes to `get`, `DELETE /users/:ID` to `delete`.
        .route("/{id}", get(get::handler).delete(delete::handler))
        .route_layer(middleware::from_fn(crate::middleware::json_content_type))
}
