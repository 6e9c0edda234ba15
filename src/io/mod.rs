//! Input/output and ambient concerns
//!
//! This module contains:
//! - The command-line front end
//! - Defaults and limits shared across the crate
//! - Error types
//! - Top-down PNG previews of a collection
//! - JSON snapshots for persistence

/// Command-line parsing and command execution
pub mod cli;
/// Default values and limits
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Top-down preview rendering
pub mod image;
/// Flat, serializable form of a collection
pub mod snapshot;
