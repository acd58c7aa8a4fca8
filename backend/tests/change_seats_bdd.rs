//! Behaviour tests for the seat-change use case over the in-memory adapter.
//!
//! Scenarios live in `tests/features/change_seats.feature`. Each one seeds
//! its own store, so refused changes can be checked against the seeded
//! value.

use std::cell::RefCell;
use std::sync::Arc;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;

use webinars::domain::ports::{ChangeSeatsRequest, WebinarRepository};
use webinars::domain::{ChangeSeats, ChangeSeatsError, User, UserId, WebinarId};
use webinars::outbound::memory::InMemoryWebinarRepository;
use webinars::test_support::seeds::webinar_with;

struct ChangeSeatsWorld {
    runtime: Runtime,
    repository: Arc<InMemoryWebinarRepository>,
    use_case: ChangeSeats<InMemoryWebinarRepository>,
    outcome: RefCell<Option<Result<(), ChangeSeatsError>>>,
}

impl ChangeSeatsWorld {
    fn new() -> Self {
        let repository = Arc::new(InMemoryWebinarRepository::default());
        Self {
            runtime: Runtime::new().expect("create runtime"),
            use_case: ChangeSeats::new(repository.clone()),
            repository,
            outcome: RefCell::new(None),
        }
    }

    fn change(&self, user: User, webinar_id: WebinarId, seats: i64) {
        let result = self.runtime.block_on(self.use_case.execute(ChangeSeatsRequest {
            user,
            webinar_id,
            seats,
        }));
        *self.outcome.borrow_mut() = Some(result);
    }

    fn outcome(&self) -> Result<(), ChangeSeatsError> {
        self.outcome
            .borrow()
            .clone()
            .expect("a seat change should have been attempted")
    }
}

fn user(name: &str) -> User {
    User::new(UserId::new(name).expect("valid user id"))
}

fn id(raw: &str) -> WebinarId {
    WebinarId::new(raw).expect("valid webinar id")
}

#[fixture]
fn world() -> ChangeSeatsWorld {
    ChangeSeatsWorld::new()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("a webinar {webinar} organized by {organizer} with {seats} seats")]
fn a_webinar_organized_by(world: &ChangeSeatsWorld, webinar: String, organizer: String, seats: u32) {
    let seeded = webinar_with(&webinar, &user(&organizer), seats);
    world
        .runtime
        .block_on(world.repository.create(&seeded))
        .expect("seed webinar");
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("{requester} changes the seats of {webinar} to {seats}")]
fn user_changes_the_seats(world: &ChangeSeatsWorld, requester: String, webinar: String, seats: i64) {
    world.change(user(&requester), id(&webinar), seats);
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the change succeeds")]
fn the_change_succeeds(world: &ChangeSeatsWorld) {
    if let Err(err) = world.outcome() {
        panic!("expected the change to succeed, got: {err}");
    }
}

#[then("the change is refused as {reason}")]
fn the_change_is_refused_as(world: &ChangeSeatsWorld, reason: String) {
    let expected = match reason.as_str() {
        "not_found" => ChangeSeatsError::WebinarNotFound,
        "not_organizer" => ChangeSeatsError::WebinarNotOrganizer,
        "reduce_seats" => ChangeSeatsError::WebinarReduceSeats,
        "too_many_seats" => ChangeSeatsError::WebinarTooManySeats,
        other => panic!("unknown refusal reason: {other}"),
    };
    assert_eq!(world.outcome(), Err(expected));
}

#[then("webinar {webinar} has {seats} seats")]
fn webinar_has_seats(world: &ChangeSeatsWorld, webinar: String, seats: u32) {
    let stored = world
        .repository
        .find_by_id_sync(&id(&webinar))
        .expect("webinar should be stored");
    assert_eq!(stored.seats(), seats);
}

#[then("no webinar {webinar} was created")]
fn no_webinar_was_created(world: &ChangeSeatsWorld, webinar: String) {
    assert!(world.repository.find_by_id_sync(&id(&webinar)).is_none());
    assert_eq!(world.repository.len(), 1);
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/change_seats.feature",
    name = "Organizer raises the seat count"
)]
fn organizer_raises_the_seat_count(world: ChangeSeatsWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/change_seats.feature",
    name = "Webinar does not exist"
)]
fn webinar_does_not_exist(world: ChangeSeatsWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/change_seats.feature",
    name = "Someone else tries to change the seats"
)]
fn someone_else_tries_to_change_the_seats(world: ChangeSeatsWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/change_seats.feature",
    name = "Organizer reduces the seat count"
)]
fn organizer_reduces_the_seat_count(world: ChangeSeatsWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/change_seats.feature",
    name = "Organizer asks for more than 1000 seats"
)]
fn organizer_asks_for_more_than_1000_seats(world: ChangeSeatsWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/change_seats.feature",
    name = "Repeating an accepted change is harmless"
)]
fn repeating_an_accepted_change_is_harmless(world: ChangeSeatsWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/change_seats.feature",
    name = "Ownership is checked before the seat count"
)]
fn ownership_is_checked_before_the_seat_count(world: ChangeSeatsWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/change_seats.feature",
    name = "Reduction is checked before the cap"
)]
fn reduction_is_checked_before_the_cap(world: ChangeSeatsWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/change_seats.feature",
    name = "A negative count by the organizer is a reduction"
)]
fn a_negative_count_by_the_organizer_is_a_reduction(world: ChangeSeatsWorld) {
    let _ = world;
}
