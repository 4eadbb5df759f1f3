//! HTTP mapping for `RiecountError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use riecount_core::error::{ClientCode, RiecountError};

/// Handler error: wraps the shared error so it can become a response.
#[derive(Debug)]
pub struct ApiError(pub RiecountError);

impl From<RiecountError> for ApiError {
    fn from(e: RiecountError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::StorageRead | ClientCode::StorageWrite | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.client_code().as_str();
        if status.is_server_error() {
            tracing::error!(code, error = %self.0, "request failed");
        }
        let body = Json(json!({
            "error": code,
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
