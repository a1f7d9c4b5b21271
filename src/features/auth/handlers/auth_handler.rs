use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::LoginRequestDto;
use crate::features::auth::models::User;
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;

/// Mock login
///
/// Trusts the submitted name/email/role and records it; there is no
/// credential check and no token issuance.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "User logged in", body = ApiResponse<User>),
        (status = 400, description = "Validation error")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<User>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.login(dto).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}
