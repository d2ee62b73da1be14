//! Terminal assistant that dispatches one of four lookup commands.
//!
//! `my-tweets`, `spotify-this-song` and `movie-this` each make a single call
//! to a third-party API; `do-what-it-says` reads the next command from a local
//! file and dispatches it.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
