//! Error taxonomy shared by the dispatcher, handlers and API clients.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = LiriError> = std::result::Result<T, E>;

pub const USAGE: &str = "Usage: liri <command> [argument]";

pub const ACCEPTED_COMMANDS: &str =
    "Unknown command! Accepted commands are: my-tweets, spotify-this-song, movie-this, do-what-it-says";

#[derive(Debug, Error)]
pub enum LiriError {
    #[error("{}", USAGE)]
    Usage,

    #[error("{}", ACCEPTED_COMMANDS)]
    UnknownCommand(String),

    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned HTTP {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("{service} reported an error: {message}")]
    Api {
        service: &'static str,
        message: String,
    },

    #[error("could not decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not sign request: {0}")]
    Signing(String),

    #[error("missing credential {0}; set it in the environment or .env")]
    MissingCredential(&'static str),

    #[error("could not read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bad input data")]
    BadInput,

    #[error("do-what-it-says cannot be invoked from the command file")]
    NestedFileDispatch,
}

impl LiriError {
    /// Usage errors are printed as-is; everything else gets an `Error:` prefix.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage | Self::UnknownCommand(_))
    }

    pub(crate) fn transport(service: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| Self::Transport { service, source }
    }

    pub(crate) fn decode(service: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::Decode { service, source }
    }
}
