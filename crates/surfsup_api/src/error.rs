//! HTTP-facing error type.
//!
//! Every variant maps to a generic 500; request-time inputs are never
//! rejected with 4xx.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use surfsup_core::RepoError;

#[derive(Debug)]
pub enum ApiError {
    /// A dataset query failed.
    Query(RepoError),
    /// The blocking query task could not be joined.
    TaskFailed(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Query(_) => "query_failed",
            Self::TaskFailed(_) => "task_failed",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query(err) => write!(f, "query failed: {err}"),
            Self::TaskFailed(message) => write!(f, "query task failed: {message}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Query(err) => Some(err),
            Self::TaskFailed(_) => None,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Query(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(
            "event=api_error module=api status=error error_code={} error={}",
            self.code(),
            self
        );
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
