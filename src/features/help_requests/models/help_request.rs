use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Priority attached to a help request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Critical => write!(f, "critical"),
            Urgency::High => write!(f, "high"),
            Urgency::Medium => write!(f, "medium"),
            Urgency::Low => write!(f, "low"),
        }
    }
}

/// Lifecycle status of a help request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Open,
    InProgress,
    Completed,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Open => write!(f, "open"),
            RequestStatus::InProgress => write!(f, "in_progress"),
            RequestStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Geographic point with a human-readable address
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// Display data about who opened the request (untrusted, client-supplied)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Requester {
    pub name: String,
    pub role: String,
}

/// One volunteer attached to a help request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: Uuid,
    pub name: String,
    /// Stamped by the server when the volunteer joins
    pub joined_at: DateTime<Utc>,
}

/// A community member's request for assistance
///
/// The stored document and the wire format are the same record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Conventional values: food, housing, medical, transportation,
    /// childcare, elderly, education, other. Unrecognized values are kept
    /// as-is and group under their own key in statistics.
    pub category: String,
    pub urgency: Urgency,
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<Requester>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    /// Append-only; at most one entry per volunteer id
    pub volunteers: Vec<Volunteer>,
    /// Set once at creation, never mutated
    pub created_at: DateTime<Utc>,
}
