/**
 * Error Conversion
 *
 * `AuthError` implements `IntoResponse` so handlers and middleware can return
 * it directly.
 *
 * # Response Format
 *
 * Credential and authorization failures use a `message` key:
 * ```json
 * { "message": "Invalid password", "status": 401 }
 * ```
 *
 * Everything else uses `error`, plus `field` when a single request field is
 * at fault:
 * ```json
 * { "error": "Passwords do not match", "field": "password_confirm", "status": 400 }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Map, Value};

use crate::backend::error::types::{AuthError, ErrorKind};

impl AuthError {
    /// Build the JSON body sent to the client
    pub fn to_json(&self) -> Value {
        let status = self.status_code();
        let message = self.public_message();

        let key = match self.kind() {
            ErrorKind::Credential | ErrorKind::Authorization => "message",
            _ => "error",
        };

        let mut body = Map::new();
        body.insert(key.to_string(), Value::String(message));
        if let Some(field) = self.field() {
            body.insert("field".to_string(), Value::String(field.to_string()));
        }
        body.insert("status".to_string(), json!(status.as_u16()));
        Value::Object(body)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if self.kind() == ErrorKind::Dependency {
            tracing::error!("Request failed: {}", self);
        }
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}
