use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::menu_actor::MenuError;

/// A failed request. Rendered as a bare status code with an empty body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
}

impl ApiError {
    pub const fn new(status: StatusCode) -> Self {
        Self { status }
    }

    pub const fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }
}

impl From<MenuError> for ApiError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::InvalidArgument(_) => Self::new(StatusCode::BAD_REQUEST),
            MenuError::NotFound(_) => Self::not_found(),
            MenuError::ActorCommunicationError(ref message) => {
                error!(error = %message, "Menu store unavailable");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status.into_response()
    }
}
