//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`Error`] free of Actix types while giving every handler the same
//! JSON error body and status mapping. Internal errors are redacted before
//! they reach the client; the trace id is kept so logs can be correlated.
//!
//! Bodies carry the message twice: once as `error`, the field existing
//! clients read, and once inside the `code`/`message` envelope.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode, web};
use serde::Serialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message, identical to `message`.
    #[schema(example = "Webinar not found")]
    pub error: String,
    /// Code, message, details and trace id.
    #[serde(flatten)]
    pub envelope: Error,
}

impl From<Error> for ErrorResponse {
    fn from(envelope: Error) -> Self {
        Self {
            error: envelope.message().to_owned(),
            envelope,
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(message = self.message(), "request failed with internal error");
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(ErrorResponse::from(redact_if_internal(self)))
    }
}

/// JSON extractor configuration that reports malformed bodies through the
/// standard error envelope instead of Actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        Error::invalid_request("request body is not valid JSON for this endpoint")
            .with_details(json!({ "code": "invalid_body", "reason": err.to_string() }))
            .into()
    })
}
