//! Timeline client for the v1.1 `statuses/user_timeline` endpoint.

use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::info;
use urlencoding::encode;

use super::{http_client, read_body};
use crate::{
    config::Settings,
    error::{LiriError, Result},
};

const SERVICE: &str = "twitter";
const TIMELINE_PATH: &str = "/1.1/statuses/user_timeline.json";

/// Number of statuses shown by `my-tweets`.
pub const TIMELINE_LIMIT: usize = 20;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Status {
    pub created_at: String,
    #[serde(alias = "full_text")]
    pub text: String,
}

/// Fetch the most recent statuses of the authenticated account (or of
/// `TWITTER_SCREEN_NAME` when set), newest first as the API returns them.
pub async fn fetch_user_timeline(settings: &Settings) -> Result<Vec<Status>> {
    let credentials = settings.twitter_credentials()?;
    let url = format!("{}{}", settings.twitter_api_base, TIMELINE_PATH);
    let count = TIMELINE_LIMIT.to_string();
    let mut params = vec![("count", count.as_str())];
    if let Some(screen_name) = settings.twitter_screen_name.as_deref() {
        params.push(("screen_name", screen_name));
    }

    let authorization = credentials.authorization_header("GET", &url, &params)?;
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let client = http_client(SERVICE)?;
    let resp = client
        .get(format!("{url}?{query}"))
        .header(AUTHORIZATION, authorization)
        .send()
        .await
        .map_err(LiriError::transport(SERVICE))?;
    let body = read_body(SERVICE, resp).await?;
    let statuses: Vec<Status> = serde_json::from_str(&body).map_err(LiriError::decode(SERVICE))?;
    info!(count = statuses.len(), "fetched timeline");
    Ok(statuses)
}

/// First [`TIMELINE_LIMIT`] statuses in chronological order (newest last).
pub fn chronological(statuses: Vec<Status>) -> Vec<Status> {
    let mut recent: Vec<Status> = statuses.into_iter().take(TIMELINE_LIMIT).collect();
    recent.reverse();
    recent
}
