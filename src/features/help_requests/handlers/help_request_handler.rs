use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::help_requests::dtos::{
    CreateHelpRequestDto, UpdateHelpRequestDto, VolunteerRequestDto,
};
use crate::features::help_requests::models::HelpRequest;
use crate::features::help_requests::services::HelpRequestService;
use crate::shared::types::{ApiResponse, Meta};

/// List all help requests
#[utoipa::path(
    get,
    path = "/api/help-requests",
    responses(
        (status = 200, description = "All help requests", body = ApiResponse<Vec<HelpRequest>>),
    ),
    tag = "help-requests"
)]
pub async fn list_help_requests(
    State(service): State<Arc<HelpRequestService>>,
) -> Result<Json<ApiResponse<Vec<HelpRequest>>>> {
    let requests = service.list().await;
    let total = requests.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(requests),
        None,
        Some(Meta { total }),
    )))
}

/// Create a new help request
#[utoipa::path(
    post,
    path = "/api/help-requests",
    request_body = CreateHelpRequestDto,
    responses(
        (status = 201, description = "Help request created", body = ApiResponse<HelpRequest>),
        (status = 400, description = "Validation error")
    ),
    tag = "help-requests"
)]
pub async fn create_help_request(
    State(service): State<Arc<HelpRequestService>>,
    AppJson(dto): AppJson<CreateHelpRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<HelpRequest>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let request = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(request), None, None)),
    ))
}

/// Get a help request by ID
#[utoipa::path(
    get,
    path = "/api/help-requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Help request ID")
    ),
    responses(
        (status = 200, description = "Help request found", body = ApiResponse<HelpRequest>),
        (status = 404, description = "Help request not found")
    ),
    tag = "help-requests"
)]
pub async fn get_help_request(
    State(service): State<Arc<HelpRequestService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<HelpRequest>>> {
    let request = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(request), None, None)))
}

/// Partially update a help request
#[utoipa::path(
    put,
    path = "/api/help-requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Help request ID")
    ),
    request_body = UpdateHelpRequestDto,
    responses(
        (status = 200, description = "Help request updated", body = ApiResponse<HelpRequest>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Help request not found")
    ),
    tag = "help-requests"
)]
pub async fn update_help_request(
    State(service): State<Arc<HelpRequestService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateHelpRequestDto>,
) -> Result<Json<ApiResponse<HelpRequest>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let request = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(request), None, None)))
}

/// Delete a help request
#[utoipa::path(
    delete,
    path = "/api/help-requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Help request ID")
    ),
    responses(
        (status = 200, description = "Help request deleted"),
        (status = 404, description = "Help request not found")
    ),
    tag = "help-requests"
)]
pub async fn delete_help_request(
    State(service): State<Arc<HelpRequestService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Help request deleted".to_string()),
        None,
    )))
}

/// Volunteer for a help request
#[utoipa::path(
    post,
    path = "/api/help-requests/{id}/volunteer",
    params(
        ("id" = Uuid, Path, description = "Help request ID")
    ),
    request_body = VolunteerRequestDto,
    responses(
        (status = 200, description = "Volunteer added", body = ApiResponse<HelpRequest>),
        (status = 400, description = "Invalid volunteer data"),
        (status = 404, description = "Help request not found"),
        (status = 409, description = "Volunteer already joined")
    ),
    tag = "help-requests"
)]
pub async fn volunteer_for_request(
    State(service): State<Arc<HelpRequestService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<VolunteerRequestDto>,
) -> Result<Json<ApiResponse<HelpRequest>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let request = service.volunteer(id, dto.volunteer).await?;
    Ok(Json(ApiResponse::success(
        Some(request),
        Some("Successfully volunteered for help request".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use crate::features::help_requests::models::{HelpRequest, RequestStatus, Urgency};
    use crate::shared::test_helpers::{request_at, seeded_store, test_app};
    use crate::shared::types::ApiResponse;

    #[tokio::test]
    async fn create_applies_server_owned_defaults() {
        let store = seeded_store(Vec::new()).await;
        let server = TestServer::new(test_app(store)).unwrap();

        let response = server
            .post("/api/help-requests")
            .json(&json!({
                "title": "Emergency shelter needed",
                "description": "Family of 4 needs immediate temporary housing",
                "category": "housing",
                "urgency": "critical",
                "contactInfo": "mike.r@email.com"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<HelpRequest> = response.json();
        let request = body.data.unwrap();
        assert_eq!(request.status, RequestStatus::Open);
        assert_eq!(request.urgency, Urgency::Critical);
        assert!(request.volunteers.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_empty_title() {
        let store = seeded_store(Vec::new()).await;
        let server = TestServer::new(test_app(store)).unwrap();

        let response = server
            .post("/api/help-requests")
            .json(&json!({
                "title": "",
                "description": "Needs a ride to the clinic",
                "category": "medical",
                "urgency": "high"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_returns_all_requests_with_total() {
        let store = seeded_store(vec![request_at(Utc::now()), request_at(Utc::now())]).await;
        let server = TestServer::new(test_app(store)).unwrap();

        let response = server.get("/api/help-requests").await;
        response.assert_status_ok();
        let body: ApiResponse<Vec<HelpRequest>> = response.json();
        assert_eq!(body.data.unwrap().len(), 2);
        assert_eq!(body.meta.unwrap().total, 2);
    }

    #[tokio::test]
    async fn get_unknown_id_returns_404() {
        let store = seeded_store(Vec::new()).await;
        let server = TestServer::new(test_app(store)).unwrap();

        let response = server
            .get(&format!("/api/help-requests/{}", Uuid::new_v4()))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let seeded = request_at(Utc::now());
        let id = seeded.id;
        let title = seeded.title.clone();
        let created_at = seeded.created_at;
        let store = seeded_store(vec![seeded]).await;
        let server = TestServer::new(test_app(store)).unwrap();

        let response = server
            .put(&format!("/api/help-requests/{}", id))
            .json(&json!({ "status": "in_progress" }))
            .await;

        response.assert_status_ok();
        let body: ApiResponse<HelpRequest> = response.json();
        let updated = body.data.unwrap();
        assert_eq!(updated.status, RequestStatus::InProgress);
        assert_eq!(updated.title, title);
        assert_eq!(updated.created_at, created_at);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_404() {
        let store = seeded_store(Vec::new()).await;
        let server = TestServer::new(test_app(store)).unwrap();

        let response = server
            .put(&format!("/api/help-requests/{}", Uuid::new_v4()))
            .json(&json!({ "status": "completed" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_removes_the_request() {
        let seeded = request_at(Utc::now());
        let id = seeded.id;
        let store = seeded_store(vec![seeded]).await;
        let server = TestServer::new(test_app(store)).unwrap();

        server
            .delete(&format!("/api/help-requests/{}", id))
            .await
            .assert_status_ok();
        server
            .get(&format!("/api/help-requests/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn volunteer_flow_appends_then_conflicts_on_repeat() {
        let seeded = request_at(Utc::now());
        let id = seeded.id;
        let store = seeded_store(vec![seeded]).await;
        let server = TestServer::new(test_app(store)).unwrap();

        let volunteer_id = Uuid::new_v4();
        let body = json!({ "volunteer": { "id": volunteer_id, "name": "Alex Chen" } });

        let response = server
            .post(&format!("/api/help-requests/{}/volunteer", id))
            .json(&body)
            .await;
        response.assert_status_ok();
        let parsed: ApiResponse<HelpRequest> = response.json();
        let request = parsed.data.unwrap();
        assert_eq!(request.volunteers.len(), 1);
        assert_eq!(request.volunteers[0].id, volunteer_id);

        let repeat = server
            .post(&format!("/api/help-requests/{}/volunteer", id))
            .json(&body)
            .await;
        repeat.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn volunteer_with_blank_name_is_rejected() {
        let seeded = request_at(Utc::now());
        let id = seeded.id;
        let store = seeded_store(vec![seeded]).await;
        let server = TestServer::new(test_app(store)).unwrap();

        let response = server
            .post(&format!("/api/help-requests/{}/volunteer", id))
            .json(&json!({ "volunteer": { "id": Uuid::new_v4(), "name": "" } }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
