//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the request, response and error schemas they use. It is exported as
//! JSON by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::ErrorResponse;
use crate::inbound::http::webinars::{ChangeSeatsBody, ChangeSeatsResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Webinars API",
        description = "Seat management for webinars."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::webinars::change_seats,
    ),
    components(schemas(ChangeSeatsBody, ChangeSeatsResponse, ErrorResponse, Error, ErrorCode)),
    tags(
        (name = "webinars", description = "Webinar capacity management")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn documents_the_seat_route() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/webinars/{webinarId}/seats"));
        assert_eq!(doc.paths.paths.len(), 1);
    }

    #[rstest]
    fn seat_change_schemas_expose_their_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        assert_object_schema_has_field(
            schemas.get("ChangeSeatsBody").expect("request schema"),
            "seats",
        );
        assert_object_schema_has_field(
            schemas.get("ChangeSeatsResponse").expect("response schema"),
            "message",
        );
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
