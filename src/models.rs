use serde::Deserialize;

use crate::error::MetadataError;

pub const UNREVIEWED: &str = "None";

/// One entry of a TMDB title search, as offered on the selection page.
#[derive(Clone, Debug, Deserialize)]
pub struct SearchCandidate {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl SearchCandidate {
    /// Name to show for the candidate; some results carry only `original_title`.
    pub fn display_title(&self) -> &str {
        match self.original_title.as_deref() {
            Some(original) if self.title.trim().is_empty() => original,
            _ => &self.title,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetails {
    pub original_title: String,
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// A movie ready to be stored, before the database assigns its id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: String,
}

impl NewMovie {
    pub fn from_details(
        details: MovieDetails,
        image_base_url: &str,
    ) -> Result<Self, MetadataError> {
        let title = details.original_title;

        let Some(poster_path) = non_empty(details.poster_path) else {
            return Err(MetadataError::MissingPoster(title));
        };
        let Some(release_date) = non_empty(details.release_date) else {
            return Err(MetadataError::MissingReleaseDate(title));
        };

        let year = release_date
            .split('-')
            .next()
            .and_then(|year| year.trim().parse::<i32>().ok());
        let Some(year) = year else {
            return Err(MetadataError::BadReleaseDate { title, date: release_date });
        };

        let img_url = format!(
            "{}/{}",
            image_base_url.trim_end_matches('/'),
            poster_path.trim_start_matches('/')
        );

        Ok(Self { title, year, description: details.overview, img_url })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct AddMovieForm {
    #[serde(default)]
    pub movie_title: String,
}

/// Raw rating/review submission; kept as strings so an invalid form can be
/// shown back to the user unchanged.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

impl UpdateForm {
    pub fn validate(&self) -> Result<(f64, String), String> {
        let rating = self.rating.trim();
        let review = self.review.trim();

        if rating.is_empty() {
            return Err("rating is required".to_string());
        }
        if review.is_empty() {
            return Err("review is required".to_string());
        }

        let rating: f64 = rating.parse().map_err(|_| format!("{rating:?} is not a number"))?;
        if !rating.is_finite() || !(0.0..=10.0).contains(&rating) {
            return Err("rating must be between 0 and 10".to_string());
        }

        Ok((rating, review.to_string()))
    }
}
