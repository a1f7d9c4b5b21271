#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum::Router;
#[cfg(test)]
use chrono::{DateTime, Utc};
#[cfg(test)]
use fake::faker::name::en::Name;
#[cfg(test)]
use fake::Fake;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::auth::{routes as auth_routes, AuthService};
#[cfg(test)]
use crate::features::help_requests::models::{HelpRequest, RequestStatus, Urgency, Volunteer};
#[cfg(test)]
use crate::features::help_requests::{routes as help_requests_routes, HelpRequestService};
#[cfg(test)]
use crate::features::stats::{routes as stats_routes, StatsService};
#[cfg(test)]
use crate::modules::store::JsonStore;

/// A plain open/medium/food request created at the given instant
#[cfg(test)]
pub fn request_at(created_at: DateTime<Utc>) -> HelpRequest {
    HelpRequest {
        id: Uuid::new_v4(),
        title: "Need groceries delivered".to_string(),
        description: "Weekly shopping run for an elderly neighbor".to_string(),
        category: "food".to_string(),
        urgency: Urgency::Medium,
        status: RequestStatus::Open,
        location: None,
        requester: None,
        contact_info: None,
        volunteers: Vec::new(),
        created_at,
    }
}

#[cfg(test)]
pub fn joined_volunteer() -> Volunteer {
    Volunteer {
        id: Uuid::new_v4(),
        name: Name().fake(),
        joined_at: Utc::now(),
    }
}

/// In-memory store preloaded with the given requests
#[cfg(test)]
pub async fn seeded_store(requests: Vec<HelpRequest>) -> Arc<JsonStore> {
    let store = Arc::new(JsonStore::in_memory());
    for request in requests {
        store.insert_help_request(request).await.unwrap();
    }
    store
}

/// Full application router over the given store, for route-level tests
#[cfg(test)]
pub fn test_app(store: Arc<JsonStore>) -> Router {
    Router::new()
        .merge(help_requests_routes::routes(Arc::new(
            HelpRequestService::new(Arc::clone(&store)),
        )))
        .merge(auth_routes::routes(Arc::new(AuthService::new(Arc::clone(
            &store,
        )))))
        .merge(stats_routes::routes(Arc::new(StatsService::new(store))))
}
