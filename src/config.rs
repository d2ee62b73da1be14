//! Runtime configuration utilities for liri.

use std::{env, path::PathBuf};

use anyhow::ensure;
use serde::Deserialize;

use crate::{
    data::oauth::OAuthCredentials,
    error::{LiriError, Result},
};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Application key pair used to sign timeline requests.
    pub twitter_consumer_key: Option<String>,
    pub twitter_consumer_secret: Option<String>,
    /// Access token pair of the account the requests act for.
    pub twitter_access_token_key: Option<String>,
    pub twitter_access_token_secret: Option<String>,
    /// Account whose timeline is read; the authenticated account when unset.
    pub twitter_screen_name: Option<String>,
    pub twitter_api_base: String,
    /// Client id for the client-credentials grant.
    pub spotify_id: Option<String>,
    /// Client secret for the client-credentials grant.
    pub spotify_secret: Option<String>,
    pub spotify_api_base: String,
    pub spotify_accounts_base: String,
    /// Key appended to every OMDb query.
    pub omdb_api_key: String,
    pub omdb_api_base: String,
    /// File read by `do-what-it-says`.
    pub command_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            twitter_consumer_key: None,
            twitter_consumer_secret: None,
            twitter_access_token_key: None,
            twitter_access_token_secret: None,
            twitter_screen_name: None,
            twitter_api_base: "https://api.twitter.com".to_string(),
            spotify_id: None,
            spotify_secret: None,
            spotify_api_base: "https://api.spotify.com".to_string(),
            spotify_accounts_base: "https://accounts.spotify.com".to_string(),
            omdb_api_key: "trilogy".to_string(),
            omdb_api_base: "http://omdbapi.com".to_string(),
            command_file: PathBuf::from("./random.txt"),
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let omdb_api_key = non_empty("OMDB_API_KEY").unwrap_or(defaults.omdb_api_key);
        ensure!(
            !omdb_api_key.contains(char::is_whitespace),
            "OMDB_API_KEY must not contain whitespace"
        );

        Ok(Self {
            twitter_consumer_key: non_empty("TWITTER_CONSUMER_KEY"),
            twitter_consumer_secret: non_empty("TWITTER_CONSUMER_SECRET"),
            twitter_access_token_key: non_empty("TWITTER_ACCESS_TOKEN_KEY"),
            twitter_access_token_secret: non_empty("TWITTER_ACCESS_TOKEN_SECRET"),
            twitter_screen_name: non_empty("TWITTER_SCREEN_NAME"),
            twitter_api_base: base_url("TWITTER_API_BASE", defaults.twitter_api_base),
            spotify_id: non_empty("SPOTIFY_ID"),
            spotify_secret: non_empty("SPOTIFY_SECRET"),
            spotify_api_base: base_url("SPOTIFY_API_BASE", defaults.spotify_api_base),
            spotify_accounts_base: base_url(
                "SPOTIFY_ACCOUNTS_BASE",
                defaults.spotify_accounts_base,
            ),
            omdb_api_key,
            omdb_api_base: base_url("OMDB_API_BASE", defaults.omdb_api_base),
            command_file: non_empty("LIRI_COMMAND_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.command_file),
        })
    }

    /// Signing credentials for the timeline, or a typed error naming the
    /// first missing variable.
    pub fn twitter_credentials(&self) -> Result<OAuthCredentials<'_>> {
        Ok(OAuthCredentials {
            consumer_key: required(&self.twitter_consumer_key, "TWITTER_CONSUMER_KEY")?,
            consumer_secret: required(&self.twitter_consumer_secret, "TWITTER_CONSUMER_SECRET")?,
            token: required(&self.twitter_access_token_key, "TWITTER_ACCESS_TOKEN_KEY")?,
            token_secret: required(
                &self.twitter_access_token_secret,
                "TWITTER_ACCESS_TOKEN_SECRET",
            )?,
        })
    }

    /// Client id and secret for the music catalog.
    pub fn spotify_credentials(&self) -> Result<(&str, &str)> {
        let id = required(&self.spotify_id, "SPOTIFY_ID")?;
        let secret = required(&self.spotify_secret, "SPOTIFY_SECRET")?;
        Ok((id, secret))
    }
}

fn required<'a>(value: &'a Option<String>, key: &'static str) -> Result<&'a str> {
    value.as_deref().ok_or(LiriError::MissingCredential(key))
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn base_url(key: &str, default: String) -> String {
    non_empty(key)
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoints() {
        let settings = Settings::default();
        assert_eq!(settings.omdb_api_key, "trilogy");
        assert_eq!(settings.command_file, PathBuf::from("./random.txt"));
        assert!(settings.spotify_api_base.starts_with("https://"));
    }

    #[test]
    fn missing_credentials_name_the_variable() {
        let settings = Settings::default();
        let err = settings.twitter_credentials().unwrap_err();
        assert!(err.to_string().contains("TWITTER_CONSUMER_KEY"));

        let settings = Settings {
            twitter_consumer_key: Some("ck".into()),
            twitter_consumer_secret: Some("cs".into()),
            twitter_access_token_key: Some("at".into()),
            ..Settings::default()
        };
        let err = settings.twitter_credentials().unwrap_err();
        assert!(err.to_string().contains("TWITTER_ACCESS_TOKEN_SECRET"));

        let settings = Settings {
            spotify_id: Some("id".into()),
            ..Settings::default()
        };
        let err = settings.spotify_credentials().unwrap_err();
        assert!(err.to_string().contains("SPOTIFY_SECRET"));
    }
}
