//! Outbound API clients and local command-file ingestion.

pub mod command_file;
pub mod oauth;
pub mod omdb;
pub mod spotify;
pub mod twitter;

use reqwest::{Client, Response};

use crate::error::{LiriError, Result};

const BODY_PREVIEW_LIMIT: usize = 200;

pub(crate) fn http_client(service: &'static str) -> Result<Client> {
    Client::builder()
        .user_agent(concat!("liri/", env!("CARGO_PKG_VERSION")))
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(LiriError::transport(service))
}

/// Read the whole body, turning non-2xx statuses into [`LiriError::Status`].
pub(crate) async fn read_body(service: &'static str, resp: Response) -> Result<String> {
    let status = resp.status();
    let body = resp.text().await.map_err(LiriError::transport(service))?;
    if !status.is_success() {
        return Err(LiriError::Status {
            service,
            status: status.as_u16(),
            body: preview_body(&body),
        });
    }
    Ok(body)
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }
    if trimmed.len() <= BODY_PREVIEW_LIMIT {
        return trimmed.to_string();
    }
    let mut end = BODY_PREVIEW_LIMIT;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}
