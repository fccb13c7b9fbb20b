//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::validation::{ValidationReport, ValidationRender};
use crate::Error;

/// Error returned by handlers, already shaped for the wire
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

#[derive(Debug)]
enum ErrorBody {
    Text(String),
    Report(ValidationReport),
}

impl ApiError {
    /// Map a registry error, writing validation failures in the given mode
    pub fn new(err: Error, render: ValidationRender) -> Self {
        match err {
            Error::NotFound => Self::text(StatusCode::NOT_FOUND, Error::NotFound.to_string()),
            Error::Validation(report) => match render {
                ValidationRender::Structured => Self {
                    status: StatusCode::BAD_REQUEST,
                    body: ErrorBody::Report(report),
                },
                ValidationRender::Message => {
                    Self::text(StatusCode::BAD_REQUEST, report.first_message())
                }
            },
            Error::InvalidRequest(msg) => Self::text(StatusCode::BAD_REQUEST, msg),
        }
    }

    fn text(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody::Text(msg.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.body {
            ErrorBody::Text(msg) => (self.status, msg).into_response(),
            ErrorBody::Report(report) => (self.status, Json(report)).into_response(),
        }
    }
}
