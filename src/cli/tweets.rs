//! `my-tweets`: print the account's recent timeline.

use tracing::instrument;

use crate::{
    config::Settings,
    data::twitter::{self, Status},
    error::Result,
};

#[instrument(skip(settings))]
pub async fn run(settings: &Settings) -> Result<Vec<String>> {
    let statuses = twitter::fetch_user_timeline(settings).await?;
    Ok(render(&twitter::chronological(statuses)))
}

pub fn render(statuses: &[Status]) -> Vec<String> {
    statuses
        .iter()
        .map(|s| format!("{}: {}", s.created_at, s.text))
        .collect()
}
