//! Record data sources.
//!
//! The table is fed once, at startup, from either a local JSON file or an
//! HTTP(S) URL serving the same document.

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::{header, Client};
use tracing::{debug, info, instrument};

use super::error::{LoadError, Result};
use super::record::Record;

/// Default location of the record fixture, relative to the working directory.
pub const DEFAULT_DATA_SOURCE: &str = "MOCK_DATA.json";

/// Where the record collection is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A JSON file on the local file system.
    File(PathBuf),
    /// A JSON document served over HTTP(S).
    Url(String),
}

impl DataSource {
    /// Interpret a user-supplied location.
    ///
    /// Anything starting with `http://` or `https://` is a URL, everything
    /// else is a file path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::File(PathBuf::from(location))
        }
    }

    /// Read and parse the record collection.
    #[instrument(skip(self), fields(source = %self))]
    pub async fn fetch(&self) -> Result<Vec<Record>> {
        let records = match self {
            DataSource::File(path) => read_file(path).await?,
            DataSource::Url(url) => fetch_url(url).await?,
        };

        info!(count = records.len(), "Records loaded");
        Ok(records)
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_DATA_SOURCE))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

async fn read_file(path: &Path) -> Result<Vec<Record>> {
    debug!("Reading data file");
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&bytes)
}

async fn fetch_url(url: &str) -> Result<Vec<Record>> {
    debug!("Fetching data over HTTP");
    let response = Client::new()
        .get(url)
        .header(header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    parse_records(&bytes)
}

/// Parse a JSON array of records.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>> {
    Ok(serde_json::from_slice(bytes)?)
}
