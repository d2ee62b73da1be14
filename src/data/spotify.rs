//! Music catalog client: client-credentials token exchange and track search.

use serde::Deserialize;
use tracing::{debug, info};
use urlencoding::encode;

use super::{http_client, read_body};
use crate::{
    config::Settings,
    error::{LiriError, Result},
};

const SERVICE: &str = "spotify";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    /// `None` when the payload carries no artists field at all.
    #[serde(default)]
    pub artists: Option<Vec<Artist>>,
    #[serde(default)]
    pub preview_url: Option<String>,
    pub album: Album,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Album {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    tracks: Option<TrackPage>,
}

#[derive(Debug, Deserialize, Default)]
struct TrackPage {
    #[serde(default)]
    items: Option<Vec<Track>>,
}

/// Search the catalog for tracks matching `query`, in API relevance order.
pub async fn search_tracks(query: &str, settings: &Settings) -> Result<Vec<Track>> {
    let client = http_client(SERVICE)?;
    let token = request_token(&client, settings).await?;

    let url = format!(
        "{base}/v1/search?type=track&q={query}",
        base = settings.spotify_api_base,
        query = encode(query),
    );
    debug!(%url, "searching tracks");
    let resp = client
        .get(&url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(LiriError::transport(SERVICE))?;
    let body = read_body(SERVICE, resp).await?;
    let payload: SearchResponse = serde_json::from_str(&body).map_err(LiriError::decode(SERVICE))?;
    let items = payload
        .tracks
        .unwrap_or_default()
        .items
        .unwrap_or_default();
    info!(%query, count = items.len(), "track search complete");
    Ok(items)
}

async fn request_token(client: &reqwest::Client, settings: &Settings) -> Result<String> {
    let (id, secret) = settings.spotify_credentials()?;
    let url = format!("{}/api/token", settings.spotify_accounts_base);
    let resp = client
        .post(&url)
        .basic_auth(id, Some(secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(LiriError::transport(SERVICE))?;
    let body = read_body(SERVICE, resp).await?;
    let token: TokenResponse = serde_json::from_str(&body).map_err(LiriError::decode(SERVICE))?;
    Ok(token.access_token)
}
