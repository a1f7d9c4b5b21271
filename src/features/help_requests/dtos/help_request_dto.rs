use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::help_requests::models::{GeoLocation, Requester, RequestStatus, Urgency};

/// Location payload for create/update requests
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GeoLocationDto {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be within -90..90"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be within -180..180"))]
    pub lng: f64,

    #[validate(length(min = 1, max = 255, message = "Address must be 1-255 characters"))]
    pub address: String,
}

impl From<GeoLocationDto> for GeoLocation {
    fn from(dto: GeoLocationDto) -> Self {
        Self {
            lat: dto.lat,
            lng: dto.lng,
            address: dto.address,
        }
    }
}

/// Requester display data submitted with a new request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RequesterDto {
    #[validate(length(min = 1, max = 255, message = "Requester name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(max = 50, message = "Requester role must not exceed 50 characters"))]
    pub role: String,
}

impl From<RequesterDto> for Requester {
    fn from(dto: RequesterDto) -> Self {
        Self {
            name: dto.name,
            role: dto.role,
        }
    }
}

/// Request DTO for creating a help request
///
/// The server owns `id`, `status`, `volunteers` and `createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHelpRequestDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    /// Category key; unrecognized values are accepted and grouped as-is
    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: String,

    pub urgency: Urgency,

    #[validate(nested)]
    pub location: Option<GeoLocationDto>,

    #[validate(nested)]
    pub requester: Option<RequesterDto>,

    #[validate(length(max = 255, message = "Contact info must not exceed 255 characters"))]
    pub contact_info: Option<String>,
}

/// Request DTO for partially updating a help request
///
/// Only fields present in the body are applied. `id`, `createdAt` and
/// `volunteers` are not updatable; volunteers are appended through the
/// volunteer endpoint only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHelpRequestDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: Option<String>,

    pub urgency: Option<Urgency>,

    pub status: Option<RequestStatus>,

    #[validate(nested)]
    pub location: Option<GeoLocationDto>,

    #[validate(nested)]
    pub requester: Option<RequesterDto>,

    #[validate(length(max = 255, message = "Contact info must not exceed 255 characters"))]
    pub contact_info: Option<String>,
}

/// Volunteer identity submitted when joining a request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct VolunteerDto {
    pub id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Volunteer name must be 1-255 characters"))]
    pub name: String,
}

/// Request body for the volunteer endpoint: `{"volunteer": {"id", "name"}}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct VolunteerRequestDto {
    #[validate(nested)]
    pub volunteer: VolunteerDto,
}
