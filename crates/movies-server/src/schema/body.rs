//! Request body decoding and echo responses.
//!
//! [`JsonBody`] reads the raw request bytes, decodes them as JSON regardless
//! of `Content-Type`, and keeps the raw bytes so the handler can echo them.
//! [`EchoBody`] writes those bytes back as plain text.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A JSON-decoded request body together with the bytes it was decoded from.
#[derive(Debug, Clone)]
pub struct JsonBody<T> {
    pub value: T,
    pub raw: Bytes,
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(error = %rejection, "problem reading request body");
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge(rejection.body_text())
            } else {
                ApiError::BadRequest(rejection.body_text())
            }
        })?;

        let value = serde_json::from_slice(&raw).map_err(|err| {
            tracing::warn!(error = %err, "problem decoding request body");
            ApiError::BadRequest(format!("invalid JSON body: {}", err))
        })?;

        Ok(JsonBody { value, raw })
    }
}

/// Echoes a request body back as `text/plain`.
#[derive(Debug, Clone)]
pub struct EchoBody(pub Bytes);

impl IntoResponse for EchoBody {
    fn into_response(self) -> Response {
        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0,
        )
            .into_response()
    }
}
