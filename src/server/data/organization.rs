//! Organization data repository for database operations.
//!
//! Provides the `OrganizationRepository` for listing and looking up organizations and for
//! creating an organization together with its admin account in a single transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    TransactionTrait,
};

use crate::{
    model::user::UserRole,
    server::model::{
        organization::{CreateOrganizationParam, NewAdminParam, Organization},
        user::User,
    },
};

/// Repository providing database operations for organizations.
pub struct OrganizationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizationRepository<'a> {
    /// Creates a new OrganizationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrganizationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all organizations in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<Organization>)` - Every organization, ordered by id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Organization>, DbErr> {
        let entities = entity::prelude::Organization::find()
            .order_by_asc(entity::organization::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Organization::from_entity).collect())
    }

    /// Finds an organization by id.
    ///
    /// # Returns
    /// - `Ok(Some(Organization))` - Organization found
    /// - `Ok(None)` - No organization with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Organization>, DbErr> {
        let entity = entity::prelude::Organization::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Organization::from_entity))
    }

    /// Finds an organization whose name matches ignoring case.
    ///
    /// Comparison uses Unicode lower-casing, which SQLite's `LOWER` does not, so the
    /// match is done over the full collection.
    ///
    /// # Arguments
    /// - `name` - Name to look for
    ///
    /// # Returns
    /// - `Ok(Some(Organization))` - First organization with a matching name
    /// - `Ok(None)` - No organization matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name_ignore_case(
        &self,
        name: &str,
    ) -> Result<Option<Organization>, DbErr> {
        let wanted = name.to_lowercase();

        let organizations = self.get_all().await?;

        Ok(organizations
            .into_iter()
            .find(|organization| organization.name.to_lowercase() == wanted))
    }

    /// Creates an organization and its admin account atomically.
    ///
    /// Both rows are inserted in one transaction; if the admin insert fails (for example
    /// on a duplicate email) the organization insert is rolled back too.
    ///
    /// # Arguments
    /// - `param` - Organization name and type
    /// - `admin` - Admin account details with an already hashed password
    ///
    /// # Returns
    /// - `Ok((Organization, User))` - The created organization and its admin
    /// - `Err(DbErr)` - Database error; nothing was written
    pub async fn create_with_admin(
        &self,
        param: CreateOrganizationParam,
        admin: NewAdminParam,
    ) -> Result<(Organization, User), DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let organization = entity::organization::ActiveModel {
            name: ActiveValue::Set(param.name),
            org_type: ActiveValue::Set(param.org_type),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let admin = entity::user::ActiveModel {
            first_name: ActiveValue::Set(admin.first_name),
            last_name: ActiveValue::Set(admin.last_name),
            email: ActiveValue::Set(admin.email),
            password_hash: ActiveValue::Set(admin.password_hash),
            role: ActiveValue::Set(UserRole::Admin.as_str().to_string()),
            organization_id: ActiveValue::Set(organization.id),
            approved: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            approved_at: ActiveValue::Set(None),
            rejected_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok((Organization::from_entity(organization), User::from_entity(admin)?))
    }
}
