use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::help_requests::dtos::{
    CreateHelpRequestDto, UpdateHelpRequestDto, VolunteerDto,
};
use crate::features::help_requests::models::{HelpRequest, RequestStatus, Volunteer};
use crate::modules::store::{JsonStore, VolunteerOutcome};

/// Service for managing help requests
pub struct HelpRequestService {
    store: Arc<JsonStore>,
}

impl HelpRequestService {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<HelpRequest> {
        self.store.list_help_requests().await
    }

    pub async fn get(&self, id: Uuid) -> Result<HelpRequest> {
        self.store
            .get_help_request(id)
            .await
            .ok_or_else(|| AppError::NotFound("Help request not found".to_string()))
    }

    /// Create a new request; the server owns id, status, volunteers and
    /// createdAt
    pub async fn create(&self, dto: CreateHelpRequestDto) -> Result<HelpRequest> {
        let request = HelpRequest {
            id: Uuid::new_v4(),
            title: dto.title,
            description: dto.description,
            category: dto.category,
            urgency: dto.urgency,
            status: RequestStatus::Open,
            location: dto.location.map(Into::into),
            requester: dto.requester.map(Into::into),
            contact_info: dto.contact_info,
            volunteers: Vec::new(),
            created_at: Utc::now(),
        };

        let created = self.store.insert_help_request(request).await?;
        tracing::info!(
            "Help request created: id={}, category={}, urgency={}",
            created.id,
            created.category,
            created.urgency
        );
        Ok(created)
    }

    /// Apply the fields present in the update body; createdAt stays untouched
    pub async fn update(&self, id: Uuid, dto: UpdateHelpRequestDto) -> Result<HelpRequest> {
        let updated = self
            .store
            .update_help_request(id, |request| {
                if let Some(title) = dto.title {
                    request.title = title;
                }
                if let Some(description) = dto.description {
                    request.description = description;
                }
                if let Some(category) = dto.category {
                    request.category = category;
                }
                if let Some(urgency) = dto.urgency {
                    request.urgency = urgency;
                }
                if let Some(status) = dto.status {
                    request.status = status;
                }
                if let Some(location) = dto.location {
                    request.location = Some(location.into());
                }
                if let Some(requester) = dto.requester {
                    request.requester = Some(requester.into());
                }
                if let Some(contact_info) = dto.contact_info {
                    request.contact_info = Some(contact_info);
                }
            })
            .await?
            .ok_or_else(|| AppError::NotFound("Help request not found".to_string()))?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let deleted = self.store.delete_help_request(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Help request not found".to_string()));
        }
        tracing::info!("Help request deleted: id={}", id);
        Ok(())
    }

    /// Append a volunteer; the store enforces at most one entry per id
    pub async fn volunteer(&self, id: Uuid, dto: VolunteerDto) -> Result<HelpRequest> {
        let volunteer = Volunteer {
            id: dto.id,
            name: dto.name,
            joined_at: Utc::now(),
        };

        match self.store.add_volunteer(id, volunteer).await? {
            VolunteerOutcome::Added(request) => {
                tracing::info!(
                    "Volunteer joined: request_id={}, volunteer_count={}",
                    request.id,
                    request.volunteers.len()
                );
                Ok(request)
            }
            VolunteerOutcome::AlreadyJoined => {
                Err(AppError::Conflict("Volunteer already joined".to_string()))
            }
            VolunteerOutcome::NotFound => {
                Err(AppError::NotFound("Help request not found".to_string()))
            }
        }
    }
}
