//! OMDb movie metadata client.

use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use super::{http_client, read_body};
use crate::{
    config::Settings,
    error::{LiriError, Result},
};

const SERVICE: &str = "omdb";

pub const IMDB_SOURCE: &str = "Internet Movie Database";
pub const ROTTEN_TOMATOES_SOURCE: &str = "Rotten Tomatoes";

const NOT_FOUND: &str = "Movie not found!";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Movie {
    pub title: Option<String>,
    pub year: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ratings: Vec<Rating>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub plot: Option<String>,
    pub actors: Option<String>,
    /// `"False"` when the lookup failed; the reason is in `error`.
    pub response: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Rating {
    pub source: String,
    pub value: String,
}

impl Movie {
    /// Value reported by `source`; the last entry wins and empty values count as unrated.
    pub fn rating(&self, source: &str) -> Option<&str> {
        self.ratings
            .iter()
            .rev()
            .find(|r| r.source == source)
            .map(|r| r.value.as_str())
            .filter(|v| !v.is_empty())
    }

    pub fn imdb_rating(&self) -> Option<&str> {
        self.rating(IMDB_SOURCE)
    }

    pub fn rotten_tomatoes_rating(&self) -> Option<&str> {
        self.rating(ROTTEN_TOMATOES_SOURCE)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Rating>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Rating>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Build the lookup URL for `title`.
///
/// Only the first space becomes `+`; later spaces are left for the HTTP layer
/// to percent-encode.
pub fn movie_query_url(title: &str, settings: &Settings) -> String {
    format!(
        "{base}/?apikey={key}&t={title}",
        base = settings.omdb_api_base,
        key = settings.omdb_api_key,
        title = title.replacen(' ', "+", 1),
    )
}

/// Look up a movie by title. `Ok(None)` means the service found nothing.
pub async fn fetch_movie(title: &str, settings: &Settings) -> Result<Option<Movie>> {
    let url = movie_query_url(title, settings);
    debug!(%title, "querying omdb");
    let client = http_client(SERVICE)?;
    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(LiriError::transport(SERVICE))?;
    let body = read_body(SERVICE, resp).await?;
    parse_movie(&body)
}

fn parse_movie(body: &str) -> Result<Option<Movie>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let movie: Movie = serde_json::from_str(body).map_err(LiriError::decode(SERVICE))?;
    if movie.response.as_deref() == Some("False") {
        let message = movie.error.unwrap_or_else(|| "unknown error".to_string());
        if message == NOT_FOUND {
            return Ok(None);
        }
        return Err(LiriError::Api {
            service: SERVICE,
            message,
        });
    }
    info!(title = movie.title.as_deref().unwrap_or_default(), "movie found");
    Ok(Some(movie))
}
