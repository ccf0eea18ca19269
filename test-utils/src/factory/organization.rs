//! Organization factory for creating test organization entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test organizations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let organization = OrganizationFactory::new(&db)
///     .name("Acme U")
///     .org_type("university")
///     .build()
///     .await?;
/// ```
pub struct OrganizationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    org_type: String,
}

impl<'a> OrganizationFactory<'a> {
    /// Creates a new OrganizationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Organization {id}"` where id is auto-incremented
    /// - org_type: `"university"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Organization {}", id),
            org_type: "university".to_string(),
        }
    }

    /// Sets the organization name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the organization type.
    pub fn org_type(mut self, org_type: impl Into<String>) -> Self {
        self.org_type = org_type.into();
        self
    }

    /// Builds and inserts the organization entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::organization::Model)` - Created organization entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::organization::Model, DbErr> {
        entity::organization::ActiveModel {
            name: ActiveValue::Set(self.name),
            org_type: ActiveValue::Set(self.org_type),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an organization with default values.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::organization::Model, DbErr> {
    OrganizationFactory::new(db).build().await
}
