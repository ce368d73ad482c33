//! Where the roster comes from.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use shared::domain::Doctor;
use tracing::info;
use url::Url;

use crate::error::{DirectoryError, Result};

pub const DEFAULT_ROSTER_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

#[async_trait]
pub trait RosterSource: Send + Sync {
    fn describe(&self) -> String;
    async fn fetch(&self) -> Result<Vec<Doctor>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterLocation {
    Http(Url),
    File(PathBuf),
}

impl RosterLocation {
    pub fn http(input: &str) -> Result<Self> {
        Url::parse(input)
            .map(RosterLocation::Http)
            .map_err(|err| DirectoryError::invalid_url(input, err))
    }

    pub fn into_source(self, http: Client) -> Box<dyn RosterSource> {
        match self {
            RosterLocation::Http(url) => Box::new(HttpRosterSource::with_client(http, url)),
            RosterLocation::File(path) => Box::new(FileRosterSource::new(path)),
        }
    }
}

/// Single unauthenticated GET returning the whole roster as a JSON array.
pub struct HttpRosterSource {
    http: Client,
    url: Url,
}

impl HttpRosterSource {
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(http: Client, url: Url) -> Self {
        Self { http, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl RosterSource for HttpRosterSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<Vec<Doctor>> {
        info!(url = %self.url, "fetching roster");
        let body = fetch_bytes(&self.http, self.url.as_str()).await?;
        let roster = decode_roster(&body, self.url.as_str())?;
        info!(url = %self.url, doctors = roster.len(), "roster fetched");
        Ok(roster)
    }
}

pub struct FileRosterSource {
    path: PathBuf,
}

impl FileRosterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RosterSource for FileRosterSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Doctor>> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| DirectoryError::Io {
                path: self.path.clone(),
                source,
            })?;
        let roster = decode_roster(&body, &self.describe())?;
        info!(path = %self.path.display(), doctors = roster.len(), "roster loaded from file");
        Ok(roster)
    }
}

/// Fixed in-memory roster.
pub struct StaticRosterSource {
    roster: Vec<Doctor>,
}

impl StaticRosterSource {
    pub fn new(roster: Vec<Doctor>) -> Self {
        Self { roster }
    }
}

#[async_trait]
impl RosterSource for StaticRosterSource {
    fn describe(&self) -> String {
        "static roster".to_string()
    }

    async fn fetch(&self) -> Result<Vec<Doctor>> {
        Ok(self.roster.clone())
    }
}

pub fn decode_roster(body: &[u8], origin: &str) -> Result<Vec<Doctor>> {
    serde_json::from_slice(body).map_err(|source| DirectoryError::Decode {
        origin: origin.to_string(),
        source,
    })
}

/// GETs `url` and returns the body; non-success statuses are errors.
pub async fn fetch_bytes(http: &Client, url: &str) -> Result<Vec<u8>> {
    let http_err = |source: reqwest::Error| DirectoryError::Http {
        url: url.to_string(),
        source,
    };
    let bytes = http
        .get(url)
        .send()
        .await
        .map_err(http_err)?
        .error_for_status()
        .map_err(http_err)?
        .bytes()
        .await
        .map_err(http_err)?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
