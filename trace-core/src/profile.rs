//! Profile records moving through discovery
//!
//! A search hit starts as a [`BasicProfile`], is hydrated with a
//! [`ProfileDetail`] into a [`CandidateProfile`], and leaves the pipeline
//! as a [`RankedCandidate`]. All of them are built per request and dropped
//! once the response is produced.

use serde::{Deserialize, Serialize};

use crate::DIRECTORY_SOURCE;

/// Biography used when the directory has none
pub const DEFAULT_BIO: &str = "Open source contributor";

/// Identity stub returned by a directory search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicProfile {
    /// Directory-assigned numeric id
    pub id: u64,
    /// Handle / login
    pub username: String,
    /// Avatar image URL
    pub avatar: String,
    /// Public profile page
    pub link: String,
    /// API link used to hydrate this hit
    #[serde(default)]
    pub detail_url: Option<String>,
}

/// Hydrated attributes for one [`BasicProfile`]
///
/// Every field is optional: a failed hydration produces `ProfileDetail::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetail {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: Option<u32>,
    pub followers: Option<u32>,
}

/// A search hit merged with its hydrated detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: u64,
    /// Display name (falls back to the handle)
    pub name: String,
    pub username: String,
    pub avatar: String,
    /// Origin tag, always the directory name for live results
    pub source: String,
    pub link: String,
    pub bio: String,
    pub public_repos: u32,
    pub followers: u32,
}

impl CandidateProfile {
    /// Merge a search hit with its (possibly empty) detail
    pub fn merge(basic: BasicProfile, detail: ProfileDetail) -> Self {
        let name = non_blank(detail.name).unwrap_or_else(|| basic.username.clone());
        let bio = non_blank(detail.bio).unwrap_or_else(|| DEFAULT_BIO.to_string());

        Self {
            id: basic.id,
            name,
            username: basic.username,
            avatar: basic.avatar,
            source: DIRECTORY_SOURCE.to_string(),
            link: basic.link,
            bio,
            public_repos: detail.public_repos.unwrap_or(0),
            followers: detail.followers.unwrap_or(0),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Platforms the enrichment simulator may attribute a badge to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Coursera,
    LinkedIn,
    Udemy,
}

impl Platform {
    /// Every platform, in draw order
    pub const ALL: [Platform; 3] = [Platform::Coursera, Platform::LinkedIn, Platform::Udemy];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Coursera => "Coursera",
            Platform::LinkedIn => "LinkedIn",
            Platform::Udemy => "Udemy",
        }
    }

    /// Badge label shown for this platform
    pub fn badge(&self) -> &'static str {
        match self {
            Platform::Coursera => "Certified",
            Platform::LinkedIn => "Skill Endorsed",
            Platform::Udemy => "Course Complete",
        }
    }
}

/// Simulated cross-platform verification badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustSignal {
    pub verified: bool,
    pub platform: Platform,
    pub badge_text: String,
    pub trust_score_boost: u32,
}

impl TrustSignal {
    pub fn new(platform: Platform, qualifier: &str, boost: u32) -> Self {
        Self {
            verified: true,
            platform,
            badge_text: format!("{} - {}", platform.badge(), qualifier),
            trust_score_boost: boost,
        }
    }
}

/// Final output unit of a live search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    /// Role derived from the query
    pub role: String,
    /// Skills derived from the query
    pub skills: Vec<String>,
    /// TRACE score in [0, 99]
    pub score: u8,
    /// Trust signal, when enrichment produced one
    pub verified_badge: Option<TrustSignal>,
    /// Professional-network search link
    pub linkedin: String,
    /// Directory profile link
    pub github: String,
}
