use crate::server::{error::AppError, service::user::UserService};
use test_utils::{builder::TestBuilder, factory};

mod list_by_organization;
mod set_approval;
