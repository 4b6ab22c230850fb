//! JSON persistence for link lists.

use crate::error::ScrapeError;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Reads and parses a JSON file.
///
/// Any I/O or parse failure yields an empty array, so the caller always gets
/// something iterable back.
pub async fn read_json_file(path: impl AsRef<Path>) -> Value {
    let path = path.as_ref();
    match try_read_json_file(path).await {
        Ok(value) => value,
        Err(e) => {
            ::log::debug!("Could not read {}: {}", path.display(), e);
            Value::Array(Vec::new())
        }
    }
}

/// Reads a JSON array of strings, returning an empty list for anything else
pub async fn read_link_file(path: impl AsRef<Path>) -> Vec<String> {
    serde_json::from_value(read_json_file(path).await).unwrap_or_default()
}

/// Serializes `value` as 2-space indented JSON and overwrites `path` with it
pub async fn write_json_file<T>(path: impl AsRef<Path>, value: &T) -> Result<(), ScrapeError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

async fn try_read_json_file(path: &Path) -> Result<Value, ScrapeError> {
    let data = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&data)?)
}
