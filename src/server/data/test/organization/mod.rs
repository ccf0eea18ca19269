use crate::{
    model::user::UserRole,
    server::{
        data::{is_unique_violation, organization::OrganizationRepository},
        model::organization::{CreateOrganizationParam, NewAdminParam},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_with_admin;
mod get_all;

fn acme_param() -> CreateOrganizationParam {
    CreateOrganizationParam {
        name: "Acme U".to_string(),
        org_type: "university".to_string(),
    }
}

fn admin_param(email: &str) -> NewAdminParam {
    NewAdminParam {
        first_name: "Admin".to_string(),
        last_name: "Acme U".to_string(),
        email: email.to_string(),
        password_hash: "!".to_string(),
    }
}
