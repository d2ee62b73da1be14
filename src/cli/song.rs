//! `spotify-this-song`: print the best track match for a query.

use tracing::{info, instrument};

use crate::{
    config::Settings,
    data::spotify::{self, Track},
    error::Result,
};

pub const NO_SONGS: &str = "No songs found matching that search";

#[instrument(skip(settings))]
pub async fn run(query: &str, settings: &Settings) -> Result<Vec<String>> {
    let tracks = spotify::search_tracks(query, settings).await?;
    match tracks.first() {
        Some(track) => Ok(render(track)),
        None => {
            info!(%query, "no tracks matched");
            Ok(vec![NO_SONGS.to_string()])
        }
    }
}

pub fn render(track: &Track) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);

    if let Some(artists) = &track.artists {
        match artists.as_slice() {
            [only] => lines.push(format!("Artist: {}", only.name)),
            many => {
                let names: Vec<&str> = many.iter().map(|a| a.name.as_str()).collect();
                lines.push(format!("Artists: {}", names.join(", ")));
            }
        }
    }

    lines.push(format!("Name: {}", track.name));
    match track.preview_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => lines.push(format!("Preview URL: {url}")),
        None => lines.push("No Preview URL".to_string()),
    }
    lines.push(format!("Album: {}", track.album.name));
    lines
}
