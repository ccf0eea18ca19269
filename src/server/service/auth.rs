//! Authentication service: self-registration, login and session user lookup.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        data::{is_unique_violation, organization::OrganizationRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParam, LoginParam, RegisterUserParam, User},
        util::password::{hash_password, verify_password},
    },
};

fn email_taken() -> AppError {
    AppError::Conflict("User with this email already exists".to_string())
}

/// Service providing authentication business logic.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Students and employees are approved immediately; organizers wait for an admin.
    ///
    /// # Arguments
    /// - `param` - Validated registration with a normalized email and a non-admin role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered (ignoring case)
    /// - `Err(AppError::BadRequest)` - Organization does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(email_taken());
        }

        if OrganizationRepository::new(self.db)
            .find_by_id(param.organization_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Organization {} not found",
                param.organization_id
            )));
        }

        let approved = param.role != UserRole::Organizer;
        let user = user_repo
            .create(CreateUserParam {
                first_name: param.first_name,
                last_name: param.last_name,
                email: param.email,
                password_hash: hash_password(&param.password)?,
                role: param.role,
                organization_id: param.organization_id,
                approved,
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    email_taken()
                } else {
                    AppError::DbErr(e)
                }
            })?;

        tracing::info!("Registered {} {} as {}", user.role, user.id, user.email);

        Ok(user)
    }

    /// Checks credentials.
    ///
    /// Admins may log in regardless of their approval flag.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid and the account may log in
    /// - `Err(AuthError::UnknownEmail)` - No user with that email
    /// - `Err(AuthError::InvalidCredentials)` - Wrong password
    /// - `Err(AuthError::NotApproved)` - Account awaiting approval
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&param.email)
            .await?
        else {
            return Err(AuthError::UnknownEmail.into());
        };

        if !verify_password(&param.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials(user.id).into());
        }

        if !user.approved && user.role != UserRole::Admin {
            return Err(AuthError::NotApproved(user.id).into());
        }

        Ok(user)
    }

    /// Resolves the user stored in a session.
    ///
    /// # Returns
    /// - `Ok(User)` - The session's user
    /// - `Err(AuthError::UserNotInDatabase)` - The user no longer exists
    pub async fn current_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}
