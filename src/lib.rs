//! chihuahua-setup - host setup utility for the ChihuahuaOS build tree
//!
//! Records where the GCC cross-compilers live on this machine and
//! optionally runs the Meson configuration script for every project.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Host configuration model and setup flow
//! - [`infra`] - Infrastructure layer (filesystem, processes)
//! - [`config`] - Fixed names and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
