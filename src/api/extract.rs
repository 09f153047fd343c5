use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use super::ApiError;

/// `Json` whose rejections become bare status codes like every other
/// failure: 415 for a missing JSON content type, 400 for anything else.
#[derive(Debug)]
pub struct MenuJson<T>(pub T);

impl<S, T> FromRequest<S> for MenuJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(error = %rejection, "Rejected request body");
                Err(ApiError::from(rejection))
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE)
            }
            _ => Self::new(StatusCode::BAD_REQUEST),
        }
    }
}
