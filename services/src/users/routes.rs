use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::users::source::UserSource;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

pub fn users_routes<U: UserSource>(source: U) -> Router {
    Router::new()
        .route("/users", get(list_users::<U>))
        .with_state(source)
}

async fn list_users<U: UserSource>(State(source): State<U>) -> Response {
    match source.list_users().await {
        Ok(users) => {
            tracing::debug!(count = users.len(), "listed users");
            (StatusCode::OK, Json(users)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to list users");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Failed to fetch users",
                }),
            )
                .into_response()
        }
    }
}
