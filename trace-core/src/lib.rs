//! TRACE Core - Candidate domain model for team-formation discovery
//!
//! This crate provides the pure, I/O-free building blocks:
//! - Profile records as they move through discovery and hydration
//! - Simulated trust signals and their fixed platform set
//! - The bounded TRACE score
//! - Derived display fields (role, skills, outbound links)
//! - The static seed catalog and its fallback matcher
//! - Skill overlap matching

pub mod profile;
pub mod scoring;
pub mod display;
pub mod catalog;
pub mod fallback;
pub mod matching;

pub use profile::*;
pub use scoring::*;
pub use display::*;
pub use catalog::*;
pub use fallback::*;
pub use matching::*;

/// Score credited to any directory hit before activity and enrichment
pub const BASE_SCORE: f64 = 60.0;

/// Maximum points contributed by public contributions
pub const REPO_CAP: f64 = 20.0;

/// Points per public contribution
pub const REPO_WEIGHT: f64 = 0.5;

/// Maximum points contributed by followers
pub const FOLLOWER_CAP: f64 = 10.0;

/// Points per follower
pub const FOLLOWER_WEIGHT: f64 = 0.1;

/// Upper bound on any score
pub const SCORE_CEILING: u8 = 99;

/// Boost carried by every present trust signal
pub const DEFAULT_BOOST: u32 = 15;

/// Probability that enrichment yields a trust signal
pub const DEFAULT_PRESENCE_PROBABILITY: f64 = 0.6;

/// Directory hits requested per live search
pub const DEFAULT_SEARCH_LIMIT: usize = 6;

/// Number of ranked candidates returned by a live search
pub const DEFAULT_TOP_N: usize = 3;

/// Origin tag attached to every live candidate
pub const DIRECTORY_SOURCE: &str = "GitHub";
