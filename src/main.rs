mod config;
mod db;
mod entities;
mod error;
mod models;
mod ranking;
mod routes;
mod store;
mod templates;
#[cfg(test)]
mod testing;
mod tmdb;

use std::{sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    store::MovieStore,
    tmdb::{MovieSource, TmdbClient},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
    pub tmdb: Arc<dyn MovieSource>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/delete", get(routes::delete))
        .route("/add", get(routes::add_form).post(routes::search))
        .route("/add_movie", get(routes::add_movie))
        .route("/update", get(routes::edit_form).post(routes::update))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movieshelf=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let http = reqwest::Client::builder()
        .user_agent("movieshelf/0.1")
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;

    let tmdb = TmdbClient::new(
        http,
        config.tmdb_access_token.clone(),
        config.tmdb_base_url.clone(),
        config.tmdb_rps,
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        store: MovieStore::new(db),
        tmdb: Arc::new(tmdb),
    });

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
