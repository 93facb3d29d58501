//! GitHub-backed profile directory
//!
//! Searches `/search/users` and hydrates each hit through the API link
//! embedded in it.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use trace_core::{BasicProfile, ProfileDetail};

use crate::{create_directory_client, DirectoryConfig, DirectoryError, ProfileDirectory};

/// Largest page the search endpoint accepts
const MAX_PER_PAGE: usize = 100;

/// GitHub user directory
pub struct GithubDirectory {
    config: DirectoryConfig,
    client: Client,
}

impl GithubDirectory {
    pub fn new(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        let client = create_directory_client(&config)?;
        Ok(Self { config, client })
    }

    fn api_root(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Build the user search URL for a query
    pub fn search_url(&self, query: &str, limit: usize) -> String {
        format!(
            "{}/search/users?q={}&per_page={}",
            self.api_root(),
            urlencoding::encode(query),
            limit.clamp(1, MAX_PER_PAGE)
        )
    }

    /// Detail URL for a hit: the embedded link, else the conventional path
    pub fn detail_url(&self, profile: &BasicProfile) -> String {
        match &profile.detail_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "{}/users/{}",
                self.api_root(),
                urlencoding::encode(&profile.username)
            ),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DirectoryError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DirectoryError::from_transport(e, self.config.timeout_secs))?;

        if !response.status().is_success() {
            return Err(DirectoryError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectoryError::from_transport(e, self.config.timeout_secs))?;

        serde_json::from_str(&body).map_err(|e| DirectoryError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ProfileDirectory for GithubDirectory {
    async fn fetch_basic(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<BasicProfile>, DirectoryError> {
        let url = self.search_url(query, limit);
        debug!("Searching directory: {}", url);

        let data: GitHubUserSearchResponse = self.get_json(&url).await?;

        Ok(data
            .items
            .into_iter()
            .map(|item| BasicProfile {
                id: item.id,
                username: item.login,
                avatar: item.avatar_url,
                link: item.html_url,
                detail_url: item.url,
            })
            .collect())
    }

    async fn fetch_detail(&self, profile: &BasicProfile) -> Result<ProfileDetail, DirectoryError> {
        let url = self.detail_url(profile);
        debug!("Hydrating {} from {}", profile.username, url);

        let user: GitHubUser = self.get_json(&url).await?;

        Ok(ProfileDetail {
            name: user.name,
            bio: user.bio,
            public_repos: user.public_repos,
            followers: user.followers,
        })
    }
}

// GitHub API response types
#[derive(Debug, Deserialize)]
struct GitHubUserSearchResponse {
    #[serde(default)]
    items: Vec<GitHubUserItem>,
}

#[derive(Debug, Deserialize)]
struct GitHubUserItem {
    id: u64,
    login: String,
    #[serde(default)]
    avatar_url: String,
    #[serde(default)]
    html_url: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GitHubUser {
    name: Option<String>,
    bio: Option<String>,
    public_repos: Option<u32>,
    followers: Option<u32>,
}
