//! Diesel table definitions.
//!
//! Must match `migrations/` exactly; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Webinars and their seat capacity.
    webinars (id) {
        id -> Text,
        organizer_id -> Text,
        title -> Text,
        start_date -> Timestamptz,
        end_date -> Timestamptz,
        seats -> Int4,
    }
}
