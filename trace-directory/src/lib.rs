//! TRACE Directory Layer
//!
//! Provides access to the external profile directory:
//! - HTTP client construction and reachability checks
//! - The [`ProfileDirectory`] capability (search hits, per-hit detail)
//! - A GitHub-backed implementation of that capability
//! - A fail-soft [`DirectoryClient`] that hydrates hits into candidates

pub mod client;
pub mod directory;
pub mod github;

pub use client::*;
pub use directory::*;
pub use github::*;
