//! Domain types for the storage gateway.

mod user;

pub use user::{ApiUser, User};
