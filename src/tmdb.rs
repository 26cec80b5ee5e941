use std::{num::NonZeroU32, sync::Arc};

use async_trait::async_trait;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{MovieDetails, SearchCandidate},
};

/// Where movie metadata comes from. Handlers only talk to this trait.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn search(&self, title: &str) -> AppResult<Vec<SearchCandidate>>;

    async fn details(&self, remote_id: i64) -> AppResult<MovieDetails>;
}

pub struct TmdbClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, access_token: String, base_url: String, rps: u32) -> Self {
        let rps = NonZeroU32::new(rps).unwrap_or(NonZeroU32::MIN);
        let limiter = Arc::new(RateLimiter::direct(Quota::per_second(rps)));
        Self { client, access_token, base_url, limiter }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn search(&self, title: &str) -> AppResult<Vec<SearchCandidate>> {
        self.limiter.until_ready().await;

        let resp: SearchResponse = self
            .client
            .get(self.url("search/movie"))
            .bearer_auth(&self.access_token)
            .query(&[("query", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(query = %title, results = resp.results.len(), "tmdb search");
        Ok(resp.results)
    }

    async fn details(&self, remote_id: i64) -> AppResult<MovieDetails> {
        self.limiter.until_ready().await;

        let details: MovieDetails = self
            .client
            .get(self.url(&format!("movie/{remote_id}")))
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(remote_id, title = %details.original_title, "tmdb details");
        Ok(details)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchCandidate>,
}
