pub mod auth;
pub mod help_requests;
pub mod stats;
