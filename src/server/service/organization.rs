//! Organization service for business logic.
//!
//! Creating an organization also provisions its admin account with a fixed default
//! password that is returned once to the caller.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, organization::OrganizationRepository, user::UserRepository},
    error::AppError,
    model::organization::{
        AdminCredentials, CreateOrganizationParam, CreatedOrganization, NewAdminParam,
        Organization,
    },
    util::{password::hash_password, slug::admin_email},
};

/// Password given to every generated organization admin.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Service providing business logic for organizations.
pub struct OrganizationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizationService<'a> {
    /// Creates a new OrganizationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrganizationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every organization in insertion order.
    pub async fn list(&self) -> Result<Vec<Organization>, AppError> {
        Ok(OrganizationRepository::new(self.db).get_all().await?)
    }

    /// Creates an organization and its admin account.
    ///
    /// The admin gets the email `admin@<slug>.com`, first name "Admin", the organization
    /// name as last name and the default password. Both rows are written in one
    /// transaction.
    ///
    /// # Arguments
    /// - `param` - Validated organization name and type
    ///
    /// # Returns
    /// - `Ok(CreatedOrganization)` - The organization and the admin's plaintext credentials
    /// - `Err(AppError::Conflict)` - The name is taken (ignoring case) or the admin email is
    ///   already in use
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        param: CreateOrganizationParam,
    ) -> Result<CreatedOrganization, AppError> {
        let organization_repo = OrganizationRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        if organization_repo
            .find_by_name_ignore_case(&param.name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Organization with this name already exists".to_string(),
            ));
        }

        let email = admin_email(&param.name);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(admin_email_taken(&email));
        }

        let admin = NewAdminParam {
            first_name: "Admin".to_string(),
            last_name: param.name.clone(),
            email: email.clone(),
            password_hash: hash_password(DEFAULT_ADMIN_PASSWORD)?,
        };

        let (organization, _admin) = organization_repo
            .create_with_admin(param, admin)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    admin_email_taken(&email)
                } else {
                    AppError::DbErr(e)
                }
            })?;

        tracing::info!(
            "Created organization {} ({}) with admin {}",
            organization.id,
            organization.name,
            email
        );

        Ok(CreatedOrganization {
            organization,
            admin_credentials: AdminCredentials {
                email,
                password: DEFAULT_ADMIN_PASSWORD.to_string(),
            },
        })
    }
}

fn admin_email_taken(email: &str) -> AppError {
    AppError::Conflict(format!("Admin email {} is already in use", email))
}
