//! Route handlers for the contacts API.

pub mod contacts;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Contacts
        .route(
            "/api/contacts",
            get(contacts::list_contacts)
                .post(contacts::create_contact)
                .delete(contacts::delete_all_contacts),
        )
        .route("/api/contacts/getByFirstName", get(contacts::get_by_first_name))
        .route("/api/contacts/published", get(contacts::published_contacts))
        .route("/api/contacts/count", get(contacts::count_contacts))
        .route(
            "/api/contacts/:id",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
}
