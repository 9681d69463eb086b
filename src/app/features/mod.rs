pub mod auth;
pub mod boards;
