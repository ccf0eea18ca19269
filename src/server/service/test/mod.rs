mod attendance;
mod user;
