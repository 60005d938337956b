//! Business services for the storage gateway.

pub mod auth;
