use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::help_requests::handlers;
use crate::features::help_requests::services::HelpRequestService;

/// Create routes for the help requests feature
pub fn routes(service: Arc<HelpRequestService>) -> Router {
    Router::new()
        .route(
            "/api/help-requests",
            get(handlers::list_help_requests).post(handlers::create_help_request),
        )
        .route(
            "/api/help-requests/{id}",
            get(handlers::get_help_request)
                .put(handlers::update_help_request)
                .delete(handlers::delete_help_request),
        )
        .route(
            "/api/help-requests/{id}/volunteer",
            post(handlers::volunteer_for_request),
        )
        .with_state(service)
}
