//! The response envelope for failed operations.
//!
//! Every failure is answered with HTTP 200 and a body of the form
//! `{"err": "<message>"}`; callers tell errors apart from results only by the
//! presence of the `err` key.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use todo_core::TodoError;
use tracing::warn;

#[derive(Debug)]
pub struct ApiError(pub TodoError);

pub type ApiResult<T> = Result<Json<T>, ApiError>;

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        warn!(error = %message, "request failed");
        (StatusCode::OK, Json(json!({ "err": message }))).into_response()
    }
}
