use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tempfile::TempDir;

use crate::{
    AppState,
    config::Config,
    db,
    error::AppResult,
    models::{MovieDetails, NewMovie, SearchCandidate},
    store::MovieStore,
    tmdb::MovieSource,
};

/// Canned stand-in for TMDB that records the titles it was asked about.
#[derive(Clone, Default)]
pub struct FakeSource {
    pub candidates: Vec<SearchCandidate>,
    pub details: HashMap<i64, MovieDetails>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeSource {
    pub fn with_candidates(candidates: Vec<SearchCandidate>) -> Self {
        Self { candidates, ..Default::default() }
    }

    pub fn with_details(remote_id: i64, details: MovieDetails) -> Self {
        Self { details: HashMap::from([(remote_id, details)]), ..Default::default() }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieSource for FakeSource {
    async fn search(&self, title: &str) -> AppResult<Vec<SearchCandidate>> {
        self.queries.lock().unwrap().push(title.to_string());
        Ok(self.candidates.clone())
    }

    async fn details(&self, remote_id: i64) -> AppResult<MovieDetails> {
        match self.details.get(&remote_id) {
            Some(details) => Ok(details.clone()),
            None => Err(anyhow::anyhow!("no such movie: {remote_id}").into()),
        }
    }
}

pub fn new_movie(title: &str, year: i32) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        year,
        description: format!("{title} description"),
        img_url: format!("https://image.tmdb.org/t/p/w500/{year}.jpg"),
    }
}

pub async fn temp_store() -> (MovieStore, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());
    let db = db::connect_and_migrate(&url).await.unwrap();
    (MovieStore::new(db), dir)
}

pub async fn test_state(source: FakeSource) -> (Arc<AppState>, TempDir) {
    let (store, dir) = temp_store().await;
    let config = Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        tmdb_access_token: "test-token".to_string(),
        tmdb_base_url: "http://127.0.0.1:9".to_string(),
        tmdb_image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        database_url: String::new(),
        tmdb_rps: 100,
        http_timeout_secs: 1,
    };
    let state = AppState { config: Arc::new(config), store, tmdb: Arc::new(source) };
    (Arc::new(state), dir)
}
