use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    http::{StatusCode, header::LOCATION},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::AppResult,
    models::{AddMovieForm, NewMovie, UpdateForm},
    templates,
};

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    id: i32,
}

#[derive(Debug, Deserialize)]
pub struct RemoteIdQuery {
    id: i64,
}

/// 302 to `location`, the status browsers follow with a GET after a form post.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.rank_all().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<Response> {
    state.store.delete(q.id).await?;
    Ok(found("/"))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page(None))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddMovieForm>,
) -> AppResult<Html<String>> {
    let title = form.movie_title.trim();
    if title.is_empty() {
        return Ok(Html(templates::add_page(Some("movie title is required"))));
    }

    let candidates = state.tmdb.search(title).await?;
    Ok(Html(templates::select_page(title, &candidates)))
}

pub async fn add_movie(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RemoteIdQuery>,
) -> AppResult<Response> {
    let details = state.tmdb.details(q.id).await?;
    let movie = NewMovie::from_details(details, &state.config.tmdb_image_base_url)?;
    let id = state.store.insert(movie).await?;
    Ok(found(&format!("/update?id={id}")))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(q.id).await?;
    Ok(Html(templates::edit_page(&movie, &UpdateForm::default(), None)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
    Form(form): Form<UpdateForm>,
) -> AppResult<Response> {
    let (rating, review) = match form.validate() {
        Ok(valid) => valid,
        Err(message) => {
            tracing::debug!(id = q.id, %message, "rejected review form");
            let movie = state.store.get(q.id).await?;
            return Ok(Html(templates::edit_page(&movie, &form, Some(&message))).into_response());
        },
    };

    state.store.update(q.id, rating, review).await?;
    Ok(found("/"))
}
