//! Test utilities for the webinars crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`. Compiled
//! only for tests or with the `test-support` feature.

pub mod seeds {
    //! Canonical users and webinars used across test suites.

    use chrono::{DateTime, Duration, TimeZone, Utc};

    use crate::domain::{User, UserId, Webinar, WebinarId, WebinarProps};

    /// Id of the seeded webinar.
    pub const WEBINAR_ID: &str = "webinar-id";

    /// Seat count of the seeded webinar.
    pub const WEBINAR_SEATS: u32 = 100;

    fn user(id: &str) -> User {
        let id = UserId::new(id).unwrap_or_else(|err| panic!("seed user id {id}: {err}"));
        User::new(id)
    }

    /// The organizer of [`webinar`].
    pub fn alice() -> User {
        user("alice")
    }

    /// A user who organizes nothing.
    pub fn bob() -> User {
        user("bob")
    }

    fn start_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("seed start date is unambiguous"))
    }

    /// Build a one-hour webinar with the given identity, owner and capacity.
    pub fn webinar_with(id: &str, organizer: &User, seats: u32) -> Webinar {
        let start = start_date();
        let props = WebinarProps {
            id: WebinarId::new(id).unwrap_or_else(|err| panic!("seed webinar id {id}: {err}")),
            organizer_id: organizer.id().clone(),
            title: "Webinar title".to_owned(),
            start_date: start,
            end_date: start + Duration::hours(1),
            seats,
        };
        Webinar::new(props).unwrap_or_else(|err| panic!("seed webinar: {err}"))
    }

    /// Alice's webinar with [`WEBINAR_SEATS`] seats.
    pub fn webinar() -> Webinar {
        webinar_with(WEBINAR_ID, &alice(), WEBINAR_SEATS)
    }

    /// Id of [`webinar`].
    pub fn webinar_id() -> WebinarId {
        webinar().id().clone()
    }
}
