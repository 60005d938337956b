//! Newtype wrappers and the setup-profile data model.
//!
//! These types are the unit of exchange between the lifecycle controller,
//! the storage gateway, and the calculator. Numeric user input (watt,
//! hours, prices, bills) is deliberately string-typed: parsing is deferred
//! to calculation time and tolerates malformed input (see [`crate::calc`]).

mod email;
mod id;
mod setup;

pub use email::{Email, EmailError};
pub use id::UserId;
pub use setup::{Device, SetupProfile, UserProfile};
