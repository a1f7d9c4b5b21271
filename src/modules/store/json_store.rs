use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::config::{StoreBackend, StoreConfig};
use crate::features::auth::models::User;
use crate::features::help_requests::models::{HelpRequest, Volunteer};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed data file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Everything the application persists, as one document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    pub help_requests: Vec<HelpRequest>,
    pub users: Vec<User>,
}

/// Outcome of appending a volunteer to a request
#[derive(Debug)]
pub enum VolunteerOutcome {
    Added(HelpRequest),
    AlreadyJoined,
    NotFound,
}

/// Injectable document store for help requests and users
///
/// One `RwLock` guards the whole document; mutations hold the write lock
/// across their check-and-modify step and the file rewrite.
pub struct JsonStore {
    data: RwLock<StoreData>,
    data_path: Option<PathBuf>,
}

impl JsonStore {
    /// Store with no file backing; state dies with the process
    pub fn in_memory() -> Self {
        Self {
            data: RwLock::new(StoreData::default()),
            data_path: None,
        }
    }

    /// Open the configured store, creating the data file from the seed file
    /// on first run (empty defaults when no seed exists)
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        if config.backend == StoreBackend::Memory {
            return Ok(Self::in_memory());
        }

        let raw = match tokio::fs::read_to_string(&config.data_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let seeded = Self::seed_contents(&config.seed_path).await?;
                if let Some(parent) = config.data_path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(&config.data_path, &seeded).await?;
                seeded
            }
            Err(e) => return Err(e.into()),
        };

        let data: StoreData = serde_json::from_str(&raw)?;

        Ok(Self {
            data: RwLock::new(data),
            data_path: Some(config.data_path.clone()),
        })
    }

    async fn seed_contents(seed_path: &Path) -> Result<String, StoreError> {
        match tokio::fs::read_to_string(seed_path).await {
            Ok(raw) => {
                // Refuse to boot from a seed we cannot parse
                serde_json::from_str::<StoreData>(&raw)?;
                Ok(raw)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Ok(serde_json::to_string_pretty(&StoreData::default())?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrite the whole data file (no-op for the memory backend)
    async fn persist(&self, data: &StoreData) -> Result<(), StoreError> {
        if let Some(path) = &self.data_path {
            let raw = serde_json::to_string_pretty(data)?;
            tokio::fs::write(path, raw).await?;
        }
        Ok(())
    }

    /// Snapshot of all help requests; the aggregator's sole data dependency
    pub async fn list_help_requests(&self) -> Vec<HelpRequest> {
        self.data.read().await.help_requests.clone()
    }

    pub async fn get_help_request(&self, id: Uuid) -> Option<HelpRequest> {
        self.data
            .read()
            .await
            .help_requests
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    pub async fn insert_help_request(
        &self,
        request: HelpRequest,
    ) -> Result<HelpRequest, StoreError> {
        let mut data = self.data.write().await;
        data.help_requests.push(request.clone());
        self.persist(&data).await?;
        Ok(request)
    }

    /// Apply `apply` to the matching record and persist; `None` when the id
    /// is unknown
    pub async fn update_help_request<F>(
        &self,
        id: Uuid,
        apply: F,
    ) -> Result<Option<HelpRequest>, StoreError>
    where
        F: FnOnce(&mut HelpRequest),
    {
        let mut data = self.data.write().await;
        let Some(request) = data.help_requests.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        apply(request);
        let updated = request.clone();
        self.persist(&data).await?;
        Ok(Some(updated))
    }

    pub async fn delete_help_request(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        let before = data.help_requests.len();
        data.help_requests.retain(|r| r.id != id);
        if data.help_requests.len() == before {
            return Ok(false);
        }
        self.persist(&data).await?;
        Ok(true)
    }

    /// Append a volunteer to a request, enforcing at most one entry per
    /// volunteer id
    pub async fn add_volunteer(
        &self,
        id: Uuid,
        volunteer: Volunteer,
    ) -> Result<VolunteerOutcome, StoreError> {
        let mut data = self.data.write().await;
        let Some(request) = data.help_requests.iter_mut().find(|r| r.id == id) else {
            return Ok(VolunteerOutcome::NotFound);
        };
        if request.volunteers.iter().any(|v| v.id == volunteer.id) {
            return Ok(VolunteerOutcome::AlreadyJoined);
        }
        request.volunteers.push(volunteer);
        let updated = request.clone();
        self.persist(&data).await?;
        Ok(VolunteerOutcome::Added(updated))
    }

    pub async fn insert_user(&self, user: User) -> Result<User, StoreError> {
        let mut data = self.data.write().await;
        data.users.push(user.clone());
        self.persist(&data).await?;
        Ok(user)
    }
}
