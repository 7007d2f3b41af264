use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uigen_core::codegen::RequestError;

#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Server returned HTTP {status}: {detail}")]
    Http { status: u16, detail: String },
}

impl From<RequestError> for Error {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::EmptyDescription => Error::EmptyDescription,
        }
    }
}

/// Client errors are reported as `{"detail": <message>}` with HTTP 400.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::EmptyDescription | Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::Http { .. } => StatusCode::BAD_GATEWAY,
        };

        (
            status,
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
