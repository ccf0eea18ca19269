//! Request-scoped helpers layered over the session.
//!
//! - `session` - Typed access to the values this application keeps in a session
//! - `auth` - Resolves the logged-in user for handlers that need one

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
