//! User domain models and parameters.
//!
//! Provides the domain model for users and the parameter types used when registering
//! users and changing their approval state.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::{LoginDto, RegisterUserDto, UserDto, UserRole},
    server::{
        error::AppError,
        util::input::{non_blank, normalize_email},
    },
};

/// User account within an organization.
///
/// Carries the password hash for login verification; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Lower-cased email.
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: UserRole,
    pub organization_id: i32,
    /// Whether the user may log in. Organizers start unapproved.
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
}

impl User {
    /// Converts the user domain model to a sanitized DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role,
            organization_id: self.organization_id,
            approved: self.approved,
            created_at: self.created_at,
            approved_at: self.approved_at,
            rejected_at: self.rejected_at,
        }
    }

    /// "First Last", as shown to scanning operators.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - The stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = entity
            .role
            .parse::<UserRole>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse role of user {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password_hash: entity.password_hash,
            role,
            organization_id: entity.organization_id,
            approved: entity.approved,
            created_at: entity.created_at,
            approved_at: entity.approved_at,
            rejected_at: entity.rejected_at,
        })
    }
}

/// Validated input for self-registration.
///
/// The email is normalized and the role is never `Admin`.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub organization_id: i32,
}

impl TryFrom<RegisterUserDto> for RegisterUserParam {
    type Error = AppError;

    /// Validates a registration request.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - Every field present and the role self-assignable
    /// - `Err(AppError::BadRequest)` - A field is missing, the role is unknown, or the
    ///   role is admin
    fn try_from(dto: RegisterUserDto) -> Result<Self, Self::Error> {
        let password = dto.password.filter(|p| !p.is_empty());
        let (
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(password),
            Some(role),
            Some(organization_id),
        ) = (
            non_blank(dto.first_name),
            non_blank(dto.last_name),
            non_blank(dto.email),
            password,
            non_blank(dto.role),
            dto.organization_id,
        )
        else {
            return Err(AppError::BadRequest("All fields are required".to_string()));
        };

        let role = role
            .parse::<UserRole>()
            .map_err(|_| AppError::BadRequest(format!("Invalid role '{}'", role)))?;
        if role == UserRole::Admin {
            return Err(AppError::BadRequest(
                "Admin accounts cannot be self-registered".to_string(),
            ));
        }

        Ok(Self {
            first_name,
            last_name,
            email: normalize_email(&email),
            password,
            role,
            organization_id,
        })
    }
}

/// Login credentials with a normalized email.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl TryFrom<LoginDto> for LoginParam {
    type Error = AppError;

    fn try_from(dto: LoginDto) -> Result<Self, Self::Error> {
        match (non_blank(dto.email), dto.password.filter(|p| !p.is_empty())) {
            (Some(email), Some(password)) => Ok(Self {
                email: normalize_email(&email),
                password,
            }),
            _ => Err(AppError::BadRequest(
                "Email and password are required".to_string(),
            )),
        }
    }
}

/// Row to insert into the user collection. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub organization_id: i32,
    pub approved: bool,
}
