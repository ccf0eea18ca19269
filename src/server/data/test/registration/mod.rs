use crate::server::data::{is_unique_violation, registration::RegistrationRepository};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
