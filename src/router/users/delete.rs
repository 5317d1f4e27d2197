//! Delete user from database.

use axum::extract::State;
use axum::http::StatusCode;

use crate::router::UserId;
use crate::user::UserRepository;
use crate::ServerError;

/// Always `204 No Content`, whether a row existed or not.
pub async fn handler(
    State(repo): State<UserRepository>,
    UserId(id): UserId,
) -> Result<StatusCode, ServerError> {
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use sqlx::{Pool, Postgres};

    use crate::user::UserRepository;
    use crate::*;

    #[sqlx::test(fixtures(
        "../../../fixtures/schema.sql",
        "../../../fixtures/users.sql"
    ))]
    async fn test_delete_handler(pool: Pool<Postgres>) {
        let repo = UserRepository::new(pool.clone());
        let ann = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|user| user.name == "Ann")
            .unwrap();
        let app = app(router::state(pool));

        let path = format!("/users/{}", ann.id);
        let response = make_request(
            app.clone(),
            Method::DELETE,
            &path,
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());

        // Ann must be deleted.
        let response =
            make_request(app, Method::GET, &path, String::default()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Bob");
    }

    #[sqlx::test(fixtures("../../../fixtures/schema.sql"))]
    async fn test_delete_unknown_user(pool: Pool<Postgres>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::DELETE,
            "/users/999",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }
}
