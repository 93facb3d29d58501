//! TRACE Pipeline
//!
//! Stages run per search request:
//! - **Enricher**: simulates a cross-platform trust signal per candidate
//! - **Ranking**: scores, derives display fields, sorts and truncates
//! - **Service**: empty-query shortcut, live ranking, catalog fallback
//!
//! ## Configuration
//!
//! All tunables load from a TOML file; see [`config::TraceConfig`].

pub mod config;
pub mod enricher;
pub mod ranking;
pub mod service;

pub use config::*;
pub use enricher::*;
pub use ranking::*;
pub use service::*;
