use async_trait::async_trait;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use trace_core::{seed_catalog, BasicProfile, ProfileDetail};
use trace_directory::{DirectoryClient, DirectoryError, DirectoryStatus, ProfileDirectory};
use trace_pipeline::{
    CandidateRecord, EnrichmentConfig, EnrichmentSimulator, RankingPipeline, ResultSource,
    SearchService,
};

/// In-memory directory: (login, public_repos, followers) per hit
struct StaticDirectory {
    users: Vec<(&'static str, u32, u32)>,
    offline: bool,
    search_calls: AtomicUsize,
}

impl StaticDirectory {
    fn new(users: Vec<(&'static str, u32, u32)>) -> Self {
        Self {
            users,
            offline: false,
            search_calls: AtomicUsize::new(0),
        }
    }

    fn offline() -> Self {
        Self {
            users: Vec::new(),
            offline: true,
            search_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ProfileDirectory for StaticDirectory {
    async fn fetch_basic(
        &self,
        _query: &str,
        limit: usize,
    ) -> Result<Vec<BasicProfile>, DirectoryError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(DirectoryError::Timeout(15));
        }

        Ok(self
            .users
            .iter()
            .enumerate()
            .take(limit)
            .map(|(i, (login, _, _))| BasicProfile {
                id: i as u64 + 1,
                username: login.to_string(),
                avatar: format!("https://avatars.example/{}", login),
                link: format!("https://github.com/{}", login),
                detail_url: None,
            })
            .collect())
    }

    async fn fetch_detail(&self, profile: &BasicProfile) -> Result<ProfileDetail, DirectoryError> {
        let (_, repos, followers) = self
            .users
            .iter()
            .find(|(login, _, _)| *login == profile.username)
            .copied()
            .ok_or(DirectoryError::Decode("unknown user".to_string()))?;

        Ok(ProfileDetail {
            name: None,
            bio: None,
            public_repos: Some(repos),
            followers: Some(followers),
        })
    }
}

fn service(directory: Arc<StaticDirectory>, search_limit: usize) -> SearchService<Arc<StaticDirectory>> {
    let pipeline = RankingPipeline::new(
        DirectoryClient::new(directory).with_concurrency(2),
        EnrichmentSimulator::default(),
    )
    .with_search_limit(search_limit)
    .with_top_n(3);

    SearchService::new(pipeline, seed_catalog().to_vec())
}

fn never_enriched() -> StepRng {
    StepRng::new(0, 0)
}

fn ranked(records: &[CandidateRecord]) -> Vec<(String, u8)> {
    records
        .iter()
        .map(|record| match record {
            CandidateRecord::Ranked(r) => (r.profile.username.clone(), r.score),
            CandidateRecord::Catalog(c) => panic!("unexpected catalog entry {}", c.name),
        })
        .collect()
}

fn catalog_names(records: &[CandidateRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| match record {
            CandidateRecord::Catalog(c) => c.name.clone(),
            CandidateRecord::Ranked(r) => panic!("unexpected live candidate {}", r.profile.name),
        })
        .collect()
}

#[tokio::test]
async fn live_results_are_ranked_and_truncated() {
    let directory = Arc::new(StaticDirectory::new(vec![
        ("ann", 2, 0),
        ("ben", 40, 100),
        ("cat", 10, 0),
        ("dan", 0, 50),
        ("eve", 10, 0),
    ]));
    let service = service(directory, 6);

    let response = service.search_with_rng("rust", &mut never_enriched()).await;

    assert_eq!(response.source, ResultSource::Live);
    assert_eq!(
        ranked(&response.candidates),
        vec![
            ("ben".to_string(), 90),
            ("cat".to_string(), 65),
            ("dan".to_string(), 65),
        ]
    );
    assert_eq!(
        response.diagnostics.directory,
        Some(DirectoryStatus::Ok { hits: 5, degraded: 0 })
    );
}

#[tokio::test]
async fn live_results_use_derived_fields_and_defaults() {
    let directory = Arc::new(StaticDirectory::new(vec![("zoe", 0, 0)]));
    let service = service(directory, 6);

    let response = service
        .search_with_rng("machine learning engineer", &mut never_enriched())
        .await;

    let CandidateRecord::Ranked(top) = &response.candidates[0] else {
        panic!("expected a live candidate");
    };
    assert_eq!(top.profile.name, "zoe");
    assert_eq!(top.profile.bio, "Open source contributor");
    assert_eq!(top.profile.source, "GitHub");
    assert_eq!(top.role, "Machine Learning Engineer");
    assert_eq!(top.skills[0], "machine");
    assert_eq!(top.score, 60);
    assert_eq!(top.github, "https://github.com/zoe");
}

#[tokio::test]
async fn search_limit_bounds_directory_hits() {
    let directory = Arc::new(StaticDirectory::new(vec![
        ("a", 0, 0),
        ("b", 0, 0),
        ("c", 40, 0),
    ]));
    let service = service(directory, 2);

    let response = service.search_with_rng("go", &mut never_enriched()).await;
    let users: Vec<String> = ranked(&response.candidates).into_iter().map(|(u, _)| u).collect();
    assert_eq!(users, vec!["a", "b"]);
}

#[tokio::test]
async fn empty_query_returns_catalog_without_directory() {
    let directory = Arc::new(StaticDirectory::new(vec![("ann", 1, 1)]));
    let service = service(directory.clone(), 6);

    let response = service.search("   ").await;

    assert_eq!(response.source, ResultSource::Catalog);
    assert_eq!(response.candidates.len(), seed_catalog().len());
    assert_eq!(
        catalog_names(&response.candidates),
        vec!["Sarah Chen", "Marcus Johnson", "Emma Wilson", "Alex Rodriguez"]
    );
    assert!(response.diagnostics.directory.is_none());
    assert_eq!(directory.search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn offline_directory_falls_back_to_catalog() {
    let service = service(Arc::new(StaticDirectory::offline()), 6);

    let response = service.search_with_rng("engineer", &mut never_enriched()).await;

    assert_eq!(response.source, ResultSource::Fallback);
    assert_eq!(
        catalog_names(&response.candidates),
        vec!["Marcus Johnson", "Alex Rodriguez"]
    );
    assert!(matches!(
        response.diagnostics.directory,
        Some(DirectoryStatus::Unavailable { .. })
    ));
}

#[tokio::test]
async fn no_hits_and_offline_look_the_same() {
    let offline = service(Arc::new(StaticDirectory::offline()), 6);
    let empty = service(Arc::new(StaticDirectory::new(Vec::new())), 6);

    let a = offline.search_with_rng("react", &mut never_enriched()).await;
    let b = empty.search_with_rng("react", &mut never_enriched()).await;

    assert_eq!(a.candidates, b.candidates);
    assert_eq!(a.source, b.source);
    assert_ne!(a.diagnostics.directory, b.diagnostics.directory);
}

#[tokio::test]
async fn fallback_may_be_empty() {
    let service = service(Arc::new(StaticDirectory::offline()), 6);

    let response = service.search("cobol").await;
    assert_eq!(response.source, ResultSource::Fallback);
    assert!(response.candidates.is_empty());
}

#[tokio::test]
async fn enrichment_can_lift_a_candidate() {
    let directory = Arc::new(StaticDirectory::new(vec![("low", 0, 0), ("high", 20, 0)]));
    let pipeline = RankingPipeline::new(
        DirectoryClient::new(directory),
        EnrichmentSimulator::new(EnrichmentConfig {
            presence_probability: 1.0,
            ..Default::default()
        }),
    );
    let service = SearchService::new(pipeline, seed_catalog().to_vec());

    // Every draw is 0.5: both candidates receive a badge
    let mut rng = StepRng::new(u64::MAX / 2, 0);
    let response = service.search_with_rng("rust", &mut rng).await;

    assert_eq!(
        ranked(&response.candidates),
        vec![("high".to_string(), 85), ("low".to_string(), 75)]
    );
}

#[tokio::test]
async fn scores_stay_bounded_across_seeds() {
    let directory = Arc::new(StaticDirectory::new(vec![
        ("a", 500, 5_000),
        ("b", 0, 0),
        ("c", 39, 99),
        ("d", 41, 101),
    ]));
    let service = service(directory, 6);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let response = service.search_with_rng("rust", &mut rng).await;
        let scores: Vec<u8> = ranked(&response.candidates).into_iter().map(|(_, s)| s).collect();

        assert!(scores.len() <= 3);
        assert!(scores.iter().all(|s| (60..=99).contains(s)));
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }
}
