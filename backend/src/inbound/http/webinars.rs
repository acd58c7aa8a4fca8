//! Webinar HTTP handlers.
//!
//! ```text
//! POST /webinars/{webinarId}/seats
//! ```
//!
//! `seats` may arrive as a JSON number or a numeric string. Any integer is
//! passed on to the use case, including negative and oversized ones, so the
//! seat rules decide the outcome; only values that are not integers are
//! refused here. Requests act as the configured user.

use std::num::IntErrorKind;

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::ChangeSeatsRequest;
use crate::domain::{Error, WebinarId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;

/// Seat count as sent by clients.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SeatsInput {
    /// A JSON number, e.g. `30`.
    Number(serde_json::Number),
    /// A numeric string, e.g. `"30"`.
    Text(String),
}

/// Request payload for changing a webinar's seat count.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChangeSeatsBody {
    /// Requested seat count.
    #[schema(value_type = Option<String>, example = "30")]
    pub seats: Option<SeatsInput>,
}

/// Confirmation returned when the seat count was stored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChangeSeatsResponse {
    /// Always `Seats updated`.
    #[schema(example = "Seats updated")]
    pub message: String,
}

fn invalid_seats_error(value: &str) -> Error {
    Error::invalid_request("seats must be an integer").with_details(json!({
        "field": "seats",
        "value": value,
        "code": "invalid_seats",
    }))
}

/// Integers beyond `i64` saturate; they are far past the seat cap either way.
fn parse_seats(input: Option<SeatsInput>) -> Result<i64, Error> {
    match input {
        None => Err(
            Error::invalid_request("missing required field: seats").with_details(json!({
                "field": "seats",
                "code": "missing_field",
            })),
        ),
        Some(SeatsInput::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|_| i64::MAX))
            .ok_or_else(|| invalid_seats_error(&number.to_string())),
        Some(SeatsInput::Text(text)) => match text.trim().parse::<i64>() {
            Ok(seats) => Ok(seats),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(invalid_seats_error(&text)),
            },
        },
    }
}

fn parse_webinar_id(raw: String) -> Result<WebinarId, Error> {
    WebinarId::new(raw).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": "webinarId",
            "code": "invalid_webinar_id",
        }))
    })
}

/// Raise a webinar's seat capacity.
#[utoipa::path(
    post,
    path = "/webinars/{webinarId}/seats",
    request_body = ChangeSeatsBody,
    params(
        ("webinarId" = String, Path, description = "Webinar identifier")
    ),
    responses(
        (status = 200, description = "Seats updated", body = ChangeSeatsResponse),
        (status = 400, description = "Invalid request or seat rule violated", body = ErrorResponse),
        (status = 401, description = "Requester does not organize the webinar", body = ErrorResponse),
        (status = 404, description = "Webinar not found", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["webinars"],
    operation_id = "changeWebinarSeats"
)]
#[post("/webinars/{webinarId}/seats")]
pub async fn change_seats(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ChangeSeatsBody>,
) -> ApiResult<web::Json<ChangeSeatsResponse>> {
    let webinar_id = parse_webinar_id(path.into_inner())?;
    let seats = parse_seats(payload.into_inner().seats)?;

    state
        .seats
        .change_seats(ChangeSeatsRequest {
            user: state.requester(),
            webinar_id,
            seats,
        })
        .await?;

    Ok(web::Json(ChangeSeatsResponse {
        message: "Seats updated".to_owned(),
    }))
}

#[cfg(test)]
#[path = "webinars_tests.rs"]
mod tests;
