//! TRACE score
//!
//! `raw = 60 + min(20, repos * 0.5) + min(10, followers * 0.1) + boost`,
//! floored and capped at 99. Pure: identical inputs give identical scores.

use crate::{
    CandidateProfile, TrustSignal, BASE_SCORE, FOLLOWER_CAP, FOLLOWER_WEIGHT, REPO_CAP,
    REPO_WEIGHT, SCORE_CEILING,
};

/// Score a candidate, optionally boosted by a trust signal
pub fn score(profile: &CandidateProfile, signal: Option<&TrustSignal>) -> u8 {
    let boost = signal.map(|s| s.trust_score_boost).unwrap_or(0);
    score_parts(profile.public_repos, profile.followers, boost)
}

/// Score from raw activity counts and an enrichment boost
pub fn score_parts(public_repos: u32, followers: u32, boost: u32) -> u8 {
    let repo_points = (f64::from(public_repos) * REPO_WEIGHT).min(REPO_CAP);
    let follower_points = (f64::from(followers) * FOLLOWER_WEIGHT).min(FOLLOWER_CAP);
    let raw = BASE_SCORE + repo_points + follower_points + f64::from(boost);

    raw.floor().clamp(0.0, f64::from(SCORE_CEILING)) as u8
}
