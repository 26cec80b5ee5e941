use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("movie {0} not found")]
    NotFound(i32),

    #[error("a movie titled {0:?} is already in the collection")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("TMDB has no poster for {0:?}")]
    MissingPoster(String),

    #[error("TMDB has no release date for {0:?}")]
    MissingReleaseDate(String),

    #[error("TMDB release date {date:?} for {title:?} has no readable year")]
    BadReleaseDate { title: String, date: String },
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    source: anyhow::Error,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn internal(source: anyhow::Error) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, source }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.source.fmt(f)
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Conflict(_) | StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status, source: anyhow::Error::new(err) }
    }
}

impl From<MetadataError> for AppError {
    fn from(err: MetadataError) -> Self {
        Self::internal(anyhow::Error::new(err))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::internal(anyhow::Error::new(err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = %self.source, "request failed");
        } else {
            tracing::debug!(status = %self.status, error = %self.source, "request rejected");
        }
        let body = crate::templates::error_page(self.status, self.to_string());
        (self.status, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
