//! Core business logic
//!
//! The host configuration model and the setup flow. Console and process
//! access is injected by the caller.

pub mod host_config;
pub mod wizard;
