//! Command file ingestion for `do-what-it-says`.
//!
//! The file holds a command and its argument separated by a comma, each
//! optionally wrapped in double quotes:
//!
//! ```text
//! spotify-this-song,"I Want it That Way"
//! ```

use std::path::Path;

use tracing::debug;

use crate::error::{LiriError, Result};

/// Read `path` and turn its contents into a dispatcher argument list.
pub async fn read_command_file(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LiriError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    let args = parse_fields(&content)?;
    debug!(path = %path.display(), ?args, "parsed command file");
    Ok(args)
}

/// Split on every comma and clean each field. Commas inside quotes are not
/// special.
pub fn parse_fields(content: &str) -> Result<Vec<String>> {
    let fields: Vec<String> = content.split(',').map(clean_field).collect();
    if fields.len() < 2 {
        return Err(LiriError::BadInput);
    }
    Ok(fields)
}

/// Trim whitespace, then drop one surrounding pair of double quotes.
pub fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}
