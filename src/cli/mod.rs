//! Command-line interface wiring for liri.

use std::ffi::OsString;

use clap::Parser;
use futures::future::{BoxFuture, FutureExt};
use tracing::debug;

use crate::{
    config::Settings,
    error::{LiriError, Result},
};

pub mod file;
pub mod movie;
pub mod song;
pub mod tweets;

pub const DEFAULT_SONG: &str = "the sign ace of base";
pub const DEFAULT_MOVIE: &str = "Mr. Nobody";

/// Leading flags still handled by clap; any other token is a command tag.
const CLAP_FLAGS: &[&str] = &["-h", "--help", "-V", "--version"];

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Look up tweets, songs and movies from the terminal", long_about = None)]
pub struct Cli {
    /// Command (my-tweets, spotify-this-song, movie-this, do-what-it-says)
    /// followed by its search text or title. Only the first argument is used.
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        Self::parse_from_argv(std::env::args_os())
    }

    /// Parse `argv` (program name first) so that tags and arguments starting
    /// with `-` reach the dispatcher instead of clap's flag parser.
    pub fn parse_from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        <Self as Parser>::parse_from(positional_argv(argv))
    }

    /// The positional list the dispatcher understands.
    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Dispatch the selected command and return the lines to print.
    pub async fn dispatch(self, settings: Settings) -> Result<Vec<String>> {
        dispatch(self.into_args(), &settings).await
    }
}

/// Insert `--` after the program name unless the first token is a clap flag,
/// so everything that follows is collected as a value.
fn positional_argv<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let clap_flag = argv
        .get(1)
        .and_then(|first| first.to_str())
        .is_some_and(|first| CLAP_FLAGS.contains(&first));
    if argv.len() > 1 && !clap_flag {
        argv.insert(1, OsString::from("--"));
    }
    argv
}

/// A parsed command with its argument resolved to a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the last 20 statuses of the configured account.
    MyTweets,
    /// Look up the first track matching `query`.
    SpotifyThisSong { query: String },
    /// Look up a movie by title.
    MovieThis { title: String },
    /// Read the command file and run the command it names.
    DoWhatItSays,
}

impl Command {
    pub const MY_TWEETS: &'static str = "my-tweets";
    pub const SPOTIFY_THIS_SONG: &'static str = "spotify-this-song";
    pub const MOVIE_THIS: &'static str = "movie-this";
    pub const DO_WHAT_IT_SAYS: &'static str = "do-what-it-says";

    /// Interpret `args[0]` as the tag and `args[1]` as the optional argument.
    /// An empty argument falls back to the default.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let tag = args.first().ok_or(LiriError::Usage)?.as_ref();
        let argument = args
            .get(1)
            .map(AsRef::as_ref)
            .filter(|s| !s.is_empty());

        match tag {
            Self::MY_TWEETS => Ok(Self::MyTweets),
            Self::SPOTIFY_THIS_SONG => Ok(Self::SpotifyThisSong {
                query: argument.unwrap_or(DEFAULT_SONG).to_string(),
            }),
            Self::MOVIE_THIS => Ok(Self::MovieThis {
                title: argument.unwrap_or(DEFAULT_MOVIE).to_string(),
            }),
            Self::DO_WHAT_IT_SAYS => Ok(Self::DoWhatItSays),
            other => Err(LiriError::UnknownCommand(other.to_string())),
        }
    }
}

/// Parse `args` and run exactly one handler.
///
/// `do-what-it-says` re-enters this function once with the arguments read
/// from the command file.
pub fn dispatch(args: Vec<String>, settings: &Settings) -> BoxFuture<'_, Result<Vec<String>>> {
    async move {
        let command = Command::from_args(&args)?;
        debug!(?command, "dispatching");
        match command {
            Command::MyTweets => tweets::run(settings).await,
            Command::SpotifyThisSong { query } => song::run(&query, settings).await,
            Command::MovieThis { title } => movie::run(&title, settings).await,
            Command::DoWhatItSays => {
                let args = file::run(settings).await?;
                dispatch(args, settings).await
            }
        }
    }
    .boxed()
}
