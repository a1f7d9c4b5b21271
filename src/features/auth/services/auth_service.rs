use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::auth::dtos::LoginRequestDto;
use crate::features::auth::models::User;
use crate::modules::store::JsonStore;

/// Service for the mock login flow
pub struct AuthService {
    store: Arc<JsonStore>,
}

impl AuthService {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Record the submitted identity and echo it back
    pub async fn login(&self, dto: LoginRequestDto) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            name: dto.name,
            email: dto.email,
            role: dto.role,
            is_authenticated: true,
        };

        let user = self.store.insert_user(user).await?;
        tracing::info!("User logged in: id={}, role={}", user.id, user.role);
        Ok(user)
    }
}
