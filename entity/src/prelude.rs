pub use super::attendance::Entity as Attendance;
pub use super::event::Entity as Event;
pub use super::organization::Entity as Organization;
pub use super::registration::Entity as Registration;
pub use super::user::Entity as User;
