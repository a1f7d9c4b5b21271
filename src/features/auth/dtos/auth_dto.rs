use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::shared::constants::KNOWN_ROLES;

/// Request DTO for the mock login endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// One of: volunteer, ngo, needsHelp
    #[validate(custom(
        function = validate_role,
        message = "Role must be one of: volunteer, ngo, needsHelp"
    ))]
    pub role: String,
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if KNOWN_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_role"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(role: &str) -> LoginRequestDto {
        LoginRequestDto {
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@email.com".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn known_roles_pass_validation() {
        for role in KNOWN_ROLES {
            assert!(dto(role).validate().is_ok(), "role {} should be valid", role);
        }
    }

    #[test]
    fn unknown_role_fails_validation() {
        assert!(dto("admin").validate().is_err());
        assert!(dto("").validate().is_err());
    }

    #[test]
    fn invalid_email_fails_validation() {
        let mut login = dto("volunteer");
        login.email = "not-an-email".to_string();
        assert!(login.validate().is_err());
    }
}
