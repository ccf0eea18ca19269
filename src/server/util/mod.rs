//! Small helpers shared by the service layer.

pub mod date;
pub mod input;
pub mod password;
pub mod slug;
