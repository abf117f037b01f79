//! Core engine for the release packager
//!
//! - **config**: optional `package.toml` parsing and validation
//! - **error**: error types with contextual help messages and exit codes
//! - **executor**: runs a plan step by step, stopping at the first failure
//! - **plan**: the ordered operations of a release, hashed and serializable
//! - **runner**: external command execution (no shell)

pub mod config;
pub mod error;
pub mod executor;
pub mod plan;
pub mod runner;
