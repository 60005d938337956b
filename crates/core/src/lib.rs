//! Voltura Core - Shared types and pure logic.
//!
//! This crate provides the common vocabulary used across all Voltura
//! components:
//! - `server` - Storage gateway HTTP service (auth + setup documents)
//! - `client` - Session/setup lifecycle controller consumed by UI layers
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows
//! it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers and the setup-profile data model
//! - [`tariff`] - Static PLN tariff table (price per kWh by capacity tier)
//! - [`calc`] - Monthly consumption, bill, and carbon-footprint estimates
//! - [`recommend`] - Static energy-saving recommendation catalogue

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod calc;
pub mod recommend;
pub mod tariff;
pub mod types;

pub use types::*;
