//! `movie-this`: print OMDb details for a title.

use tracing::{info, instrument};

use crate::{
    config::Settings,
    data::omdb::{self, Movie},
    error::Result,
};

pub const NO_MOVIES: &str = "No movies found matching that search";

const NOT_RATED: &str = "Not Rated";
const MISSING: &str = "N/A";

#[instrument(skip(settings))]
pub async fn run(title: &str, settings: &Settings) -> Result<Vec<String>> {
    match omdb::fetch_movie(title, settings).await? {
        Some(movie) => Ok(render(&movie)),
        None => {
            info!(%title, "no movie matched");
            Ok(vec![NO_MOVIES.to_string()])
        }
    }
}

pub fn render(movie: &Movie) -> Vec<String> {
    let text = |field: &Option<String>| field.as_deref().unwrap_or(MISSING).to_string();
    vec![
        format!("Title: {}", text(&movie.title)),
        format!("Released {}", text(&movie.year)),
        format!("IMDB Rating: {}", movie.imdb_rating().unwrap_or(NOT_RATED)),
        format!(
            "Rotten Tomatoes Rating: {}",
            movie.rotten_tomatoes_rating().unwrap_or(NOT_RATED)
        ),
        format!("Country: {}", text(&movie.country)),
        format!("Language: {}", text(&movie.language)),
        format!("Plot: {}", text(&movie.plot)),
        format!("Actors: {}", text(&movie.actors)),
    ]
}
