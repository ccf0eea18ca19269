use crate::server::data::{attendance::AttendanceRepository, is_unique_violation};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
