//! Ranking pipeline
//!
//! Fetches candidates from the directory, enriches and scores each one
//! independently, attaches query-derived display fields, then keeps the
//! top N by score.
//! - Input: free-text query
//! - Output: at most `top_n` [`RankedCandidate`]s, score descending

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use trace_core::{
    derive_role, derive_skills, linkedin_search_url, score, CandidateProfile, RankedCandidate,
    DEFAULT_SEARCH_LIMIT, DEFAULT_TOP_N,
};
use trace_directory::{DirectoryClient, DirectoryStatus, ProfileDirectory};

use crate::EnrichmentSimulator;

/// Result-size tunables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Ranked candidates kept per live search
    pub top_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Directory → enrichment → scoring → ordering
pub struct RankingPipeline<D> {
    directory: DirectoryClient<D>,
    simulator: EnrichmentSimulator,
    search_limit: usize,
    top_n: usize,
}

impl<D: ProfileDirectory> RankingPipeline<D> {
    pub fn new(directory: DirectoryClient<D>, simulator: EnrichmentSimulator) -> Self {
        Self {
            directory,
            simulator,
            search_limit: DEFAULT_SEARCH_LIMIT,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Number of directory hits requested per search
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Number of ranked candidates kept
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Rank live candidates for a query; empty when the directory yields nothing
    pub async fn rank<R: Rng + ?Sized>(&self, query: &str, rng: &mut R) -> Vec<RankedCandidate> {
        self.rank_with_status(query, rng).await.0
    }

    /// Rank live candidates and report the directory's status
    pub async fn rank_with_status<R: Rng + ?Sized>(
        &self,
        query: &str,
        rng: &mut R,
    ) -> (Vec<RankedCandidate>, DirectoryStatus) {
        let search = self
            .directory
            .search_with_status(query, self.search_limit)
            .await;

        if search.candidates.is_empty() {
            debug!("No live candidates for '{}'", query);
            return (Vec::new(), search.status);
        }

        let ranked = rank_candidates(query, search.candidates, &self.simulator, rng, self.top_n);
        info!("Ranked {} live candidates for '{}'", ranked.len(), query);

        (ranked, search.status)
    }
}

/// Enrich, score and order already-hydrated candidates
///
/// Sorting is stable: equal scores keep directory order.
pub fn rank_candidates<R: Rng + ?Sized>(
    query: &str,
    candidates: Vec<CandidateProfile>,
    simulator: &EnrichmentSimulator,
    rng: &mut R,
    top_n: usize,
) -> Vec<RankedCandidate> {
    let role = derive_role(query);
    let skills = derive_skills(query);

    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .map(|profile| {
            let signal = simulator.simulate(&mut *rng);
            let score = score(&profile, signal.as_ref());

            RankedCandidate {
                linkedin: linkedin_search_url(&profile.name, query),
                github: profile.link.clone(),
                role: role.clone(),
                skills: skills.clone(),
                score,
                verified_badge: signal,
                profile,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(top_n);
    ranked
}
