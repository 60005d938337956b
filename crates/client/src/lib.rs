//! Client-side session and setup lifecycle for the Voltura dashboard.
//!
//! This crate owns everything between a UI event and the storage gateway:
//! the [`StorageGateway`] trait and its HTTP implementation, the demo
//! account fixtures, and the [`LifecycleController`] state machine that
//! keeps authentication state, setup-completion state, and persisted user
//! data consistent across login, signup, setup, edit, and reset.
//!
//! Rendering, styling, and translation are external collaborators: the
//! controller exposes state and a notice side-channel, nothing more.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod controller;
pub mod demo;
pub mod gateway;

pub use controller::{LifecycleController, Notice, Screen, Severity};
pub use gateway::{GatewayError, HttpGateway, RemoteAccount, Session, SignupData, StorageGateway};
