//! Extractors that answer every rejection with the `err` envelope.
//!
//! `RecordId` is the `{id}` path segment. A segment that does not decode (for
//! instance invalid UTF-8) cannot name a stored record, so it is reported as
//! an unknown id.
//!
//! `RecordBody` is the body of create and update. JSON bodies (`application/json` or any `+json` type) and URL-encoded form
//! bodies are both accepted. A body that is empty, carries another content
//! type, or is JSON but not an object becomes an empty field map, so create
//! reports the missing fields and update changes nothing. Only JSON that does
//! not parse is an error.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Form,
};
use serde_json::{Map, Value};
use todo_core::TodoError;
use tracing::debug;

use crate::error::ApiError;

#[derive(Debug)]
pub struct RecordId(pub String);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                debug!(error = %rejection.body_text(), "undecodable record id");
                Err(ApiError(TodoError::RecordNotFound))
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordBody(pub Map<String, Value>);

impl<S> FromRequest<S> for RecordBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(media_type)
            .unwrap_or_default();

        if content_type == "application/x-www-form-urlencoded" {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|rejection| invalid(rejection.body_text()))?;
            let fields = pairs
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            return Ok(Self(fields));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| invalid(rejection.body_text()))?;

        if !is_json(&content_type) || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice(&bytes) {
            Ok(Value::Object(fields)) => Ok(Self(fields)),
            Ok(_) => Ok(Self::default()),
            Err(err) => Err(invalid(err.to_string())),
        }
    }
}

/// Lower-cased media type without parameters such as `charset`.
fn media_type(header: &str) -> String {
    header
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn is_json(media_type: &str) -> bool {
    media_type == "application/json" || media_type.ends_with("+json")
}

fn invalid(detail: String) -> ApiError {
    ApiError(TodoError::InvalidBody(detail))
}
