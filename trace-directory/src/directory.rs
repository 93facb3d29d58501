//! Fail-soft directory search
//!
//! [`ProfileDirectory`] is the capability a data source must offer: a search
//! returning identity stubs and a per-stub detail fetch. [`DirectoryClient`]
//! turns that capability into candidates without ever failing: an unreachable
//! directory yields no candidates, a failed hydration yields a defaulted one.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use trace_core::{BasicProfile, CandidateProfile, ProfileDetail};

use crate::DirectoryError;

/// A read-only source of profiles
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Search for profiles matching free text, at most `limit` hits
    async fn fetch_basic(&self, query: &str, limit: usize)
        -> Result<Vec<BasicProfile>, DirectoryError>;

    /// Fetch hydrated attributes for one hit
    async fn fetch_detail(&self, profile: &BasicProfile) -> Result<ProfileDetail, DirectoryError>;
}

#[async_trait]
impl<T: ProfileDirectory + ?Sized> ProfileDirectory for Arc<T> {
    async fn fetch_basic(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<BasicProfile>, DirectoryError> {
        (**self).fetch_basic(query, limit).await
    }

    async fn fetch_detail(&self, profile: &BasicProfile) -> Result<ProfileDetail, DirectoryError> {
        (**self).fetch_detail(profile).await
    }
}

/// How the directory behaved during one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DirectoryStatus {
    /// Search answered; `degraded` hits fell back to defaulted detail
    Ok { hits: usize, degraded: usize },
    /// Search itself failed
    Unavailable { reason: String },
}

/// Candidates plus the diagnostic status of the search
#[derive(Debug, Clone)]
pub struct DirectorySearch {
    pub candidates: Vec<CandidateProfile>,
    pub status: DirectoryStatus,
}

/// Hydrating, fail-soft directory client
pub struct DirectoryClient<D> {
    directory: D,
    hydration_concurrency: usize,
}

impl<D: ProfileDirectory> DirectoryClient<D> {
    /// Client that hydrates one hit at a time
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            hydration_concurrency: 1,
        }
    }

    /// Allow up to `max_in_flight` hydration calls at once
    pub fn with_concurrency(mut self, max_in_flight: usize) -> Self {
        self.hydration_concurrency = max_in_flight.max(1);
        self
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Search and hydrate; empty on any directory failure
    pub async fn search(&self, query: &str, limit: usize) -> Vec<CandidateProfile> {
        self.search_with_status(query, limit).await.candidates
    }

    /// Search and hydrate, reporting what happened alongside the candidates
    pub async fn search_with_status(&self, query: &str, limit: usize) -> DirectorySearch {
        let hits = match self.directory.fetch_basic(query, limit).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!("Directory search for '{}' failed: {}", query, e);
                return DirectorySearch {
                    candidates: Vec::new(),
                    status: DirectoryStatus::Unavailable {
                        reason: e.to_string(),
                    },
                };
            }
        };

        let hits: Vec<BasicProfile> = hits.into_iter().take(limit).collect();
        debug!("Directory returned {} hits for '{}'", hits.len(), query);

        let directory = &self.directory;
        let hydrated: Vec<(CandidateProfile, bool)> = stream::iter(hits)
            .map(|basic| async move {
                match directory.fetch_detail(&basic).await {
                    Ok(detail) => (CandidateProfile::merge(basic, detail), false),
                    Err(e) => {
                        warn!("Hydration of '{}' failed: {}", basic.username, e);
                        (CandidateProfile::merge(basic, ProfileDetail::default()), true)
                    }
                }
            })
            .buffered(self.hydration_concurrency)
            .collect()
            .await;

        let degraded = hydrated.iter().filter(|(_, failed)| *failed).count();
        let candidates: Vec<CandidateProfile> =
            hydrated.into_iter().map(|(candidate, _)| candidate).collect();

        DirectorySearch {
            status: DirectoryStatus::Ok {
                hits: candidates.len(),
                degraded,
            },
            candidates,
        }
    }
}
