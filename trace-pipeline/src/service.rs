//! Top-level candidate search
//!
//! - Empty query: the whole catalog, unranked
//! - Otherwise: live ranking, falling back to the catalog matcher when the
//!   live path produces nothing
//!
//! An unreachable directory and a directory with no hits look identical in
//! `candidates`; the difference is only reported in `diagnostics`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

use trace_core::{match_catalog, CatalogEntry, RankedCandidate};
use trace_directory::{
    DirectoryClient, DirectoryError, DirectoryStatus, GithubDirectory, ProfileDirectory,
};

use crate::{EnrichmentSimulator, RankingPipeline, TraceConfig};

/// One record in a search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CandidateRecord {
    Ranked(RankedCandidate),
    Catalog(CatalogEntry),
}

/// Which path produced the candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    /// Empty query, catalog passthrough
    Catalog,
    /// Ranked directory results
    Live,
    /// Catalog matches after an empty live result
    Fallback,
}

/// Out-of-band information about how a search ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchDiagnostics {
    pub request_id: String,
    /// Directory status; absent when the directory was not consulted
    pub directory: Option<DirectoryStatus>,
}

/// Response to a candidate search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    pub candidates: Vec<CandidateRecord>,
    pub source: ResultSource,
    pub diagnostics: SearchDiagnostics,
}

/// Candidate search over a directory and a static catalog
pub struct SearchService<D> {
    pipeline: RankingPipeline<D>,
    catalog: Arc<[CatalogEntry]>,
}

impl SearchService<GithubDirectory> {
    /// Build the GitHub-backed service described by a configuration
    pub fn from_config(
        config: &TraceConfig,
        catalog: Vec<CatalogEntry>,
    ) -> Result<Self, DirectoryError> {
        let directory = GithubDirectory::new(config.directory.clone())?;
        let client = DirectoryClient::new(directory)
            .with_concurrency(config.directory.hydration_concurrency);
        let pipeline = RankingPipeline::new(
            client,
            EnrichmentSimulator::new(config.enrichment.clone()),
        )
        .with_search_limit(config.directory.search_limit)
        .with_top_n(config.ranking.top_n);

        Ok(Self::new(pipeline, catalog))
    }
}

impl<D: ProfileDirectory> SearchService<D> {
    pub fn new(pipeline: RankingPipeline<D>, catalog: Vec<CatalogEntry>) -> Self {
        Self {
            pipeline,
            catalog: catalog.into(),
        }
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    /// Search with fresh entropy for enrichment
    pub async fn search(&self, query: &str) -> SearchResponse {
        let mut rng = StdRng::from_entropy();
        self.search_with_rng(query, &mut rng).await
    }

    /// Search with a caller-supplied random source
    pub async fn search_with_rng<R: Rng + ?Sized>(
        &self,
        query: &str,
        rng: &mut R,
    ) -> SearchResponse {
        let request_id = uuid::Uuid::new_v4().to_string()[..8].to_string();
        let span = info_span!("search", request_id = %request_id, query = %query);

        async move {
            let query = query.trim();
            if query.is_empty() {
                info!("Empty query, returning full catalog");
                return SearchResponse {
                    candidates: catalog_records(self.catalog.iter().cloned()),
                    source: ResultSource::Catalog,
                    diagnostics: SearchDiagnostics {
                        request_id,
                        directory: None,
                    },
                };
            }

            let (ranked, status) = self.pipeline.rank_with_status(query, rng).await;

            let (candidates, source) = if ranked.is_empty() {
                let matches = match_catalog(query, &self.catalog);
                info!(
                    "No live results ({:?}), fallback matched {} catalog entries",
                    status,
                    matches.len()
                );
                (catalog_records(matches), ResultSource::Fallback)
            } else {
                let records = ranked.into_iter().map(CandidateRecord::Ranked).collect();
                (records, ResultSource::Live)
            };

            SearchResponse {
                candidates,
                source,
                diagnostics: SearchDiagnostics {
                    request_id,
                    directory: Some(status),
                },
            }
        }
        .instrument(span)
        .await
    }
}

fn catalog_records<I>(entries: I) -> Vec<CandidateRecord>
where
    I: IntoIterator<Item = CatalogEntry>,
{
    entries.into_iter().map(CandidateRecord::Catalog).collect()
}
