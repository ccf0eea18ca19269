//! Organization domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::organization::{AdminCredentialsDto, CreateOrganizationDto, OrganizationDto},
    server::{error::AppError, util::input::non_blank},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: i32,
    pub name: String,
    /// Free-form type such as "university" or "company".
    pub org_type: String,
    pub created_at: DateTime<Utc>,
}

impl Organization {
    pub fn into_dto(self) -> OrganizationDto {
        OrganizationDto {
            id: self.id,
            name: self.name,
            org_type: self.org_type,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an organization domain model at the repository boundary.
    pub fn from_entity(entity: entity::organization::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            org_type: entity.org_type,
            created_at: entity.created_at,
        }
    }
}

/// Plaintext credentials of an organization's generated admin account.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn into_dto(self) -> AdminCredentialsDto {
        AdminCredentialsDto {
            email: self.email,
            password: self.password,
        }
    }
}

/// Parameters for creating an organization. Both fields are trimmed and non-empty.
#[derive(Debug, Clone)]
pub struct CreateOrganizationParam {
    pub name: String,
    pub org_type: String,
}

impl TryFrom<CreateOrganizationDto> for CreateOrganizationParam {
    type Error = AppError;

    /// Validates the request body.
    ///
    /// # Returns
    /// - `Ok(CreateOrganizationParam)` - Name and type present
    /// - `Err(AppError::BadRequest)` - Either field missing or blank
    fn try_from(dto: CreateOrganizationDto) -> Result<Self, Self::Error> {
        match (non_blank(dto.name), non_blank(dto.org_type)) {
            (Some(name), Some(org_type)) => Ok(Self { name, org_type }),
            _ => Err(AppError::BadRequest(
                "Organization name and type are required".to_string(),
            )),
        }
    }
}

/// Admin account inserted in the same transaction as its organization.
///
/// The organization id is not known until the organization row exists, so it is filled in
/// by the repository.
#[derive(Debug, Clone)]
pub struct NewAdminParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Result of creating an organization: the organization and its admin's credentials.
#[derive(Debug, Clone)]
pub struct CreatedOrganization {
    pub organization: Organization,
    pub admin_credentials: AdminCredentials,
}
