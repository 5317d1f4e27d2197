//! Middlewares for routes.

use axum::extract::Request;
use axum::http::{HeaderValue, StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;

const APPLICATION_JSON: &str = "application/json";

/// Force `Content-Type: application/json` on every response carrying a body.
pub async fn json_content_type(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    if response.status() != StatusCode::NO_CONTENT {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_JSON),
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::routing::{delete, get};

    use super::*;
    use crate::make_request;

    #[tokio::test]
    async fn test_plain_text_is_rewritten() {
        let app = Router::new()
            .route("/", get(|| async { "text" }))
            .route_layer(axum::middleware::from_fn(json_content_type));

        let response = make_request(
            app,
            axum::http::Method::GET,
            "/",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], APPLICATION_JSON);
    }

    #[tokio::test]
    async fn test_no_content_is_left_bare() {
        let app = Router::new()
            .route("/", delete(|| async { StatusCode::NO_CONTENT }))
            .route_layer(axum::middleware::from_fn(json_content_type));

        let response = make_request(
            app,
            axum::http::Method::DELETE,
            "/",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }
}
