use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use domain::BlogError;

use crate::render::render_error;

/// HTML error response for a failed view.
#[derive(Debug)]
pub struct HttpError(pub BlogError);

impl From<BlogError> for HttpError {
    fn from(err: BlogError) -> Self {
        Self(err)
    }
}

impl From<anyhow::Error> for HttpError {
    fn from(err: anyhow::Error) -> Self {
        Self(BlogError::Internal(err))
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match &self.0 {
            BlogError::NotFound(what) => {
                tracing::debug!(what = %what, "not found");
                (
                    StatusCode::NOT_FOUND,
                    render_error("Not Found", "The page you requested does not exist."),
                )
                    .into_response()
            }
            BlogError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST")],
                render_error("Method Not Allowed", "This address only accepts form submissions."),
            )
                .into_response(),
            BlogError::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    render_error(
                        "Server Error",
                        "Something went wrong on our side. Please try again later.",
                    ),
                )
                    .into_response()
            }
        }
    }
}
