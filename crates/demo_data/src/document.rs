//! The optional aggregates document and its mock fallback.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde_json::{Map, Value};
use shared::{
    domain::Scenario,
    protocol::{DataDocument, DocumentMetadata, Namespace},
};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

pub const MOCK_DESCRIPTION: &str = "Mock data for demonstration purposes";

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("document is missing namespaces: {0:?}")]
    Incomplete(Vec<Namespace>),
}

#[async_trait]
pub trait DocumentSource: Send + Sync {
    fn describe(&self) -> String;
    async fn fetch(&self) -> Result<DataDocument, DataSourceError>;
}

pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client for data document")?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<DataDocument, DataSourceError> {
        let url = self.url.to_string();
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| DataSourceError::Request {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataSourceError::Status {
                url,
                status: status.as_u16(),
            });
        }
        let body = response
            .text()
            .await
            .map_err(|source| DataSourceError::Request { url, source })?;
        parse_document(&body)
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<DataDocument, DataSourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DataSourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_document(&raw)
    }
}

/// Parses a document and insists on every namespace being present.
pub fn parse_document(raw: &str) -> Result<DataDocument, DataSourceError> {
    let document: DataDocument = serde_json::from_str(raw)?;
    let missing = document.missing_namespaces();
    if !missing.is_empty() {
        return Err(DataSourceError::Incomplete(missing));
    }
    Ok(document)
}

/// Picks a source: a URL wins over a path; neither means mock only.
pub fn resolve_source(
    data_url: Option<&str>,
    data_path: Option<&Path>,
    timeout: Duration,
) -> anyhow::Result<Option<Box<dyn DocumentSource>>> {
    if let Some(raw) = data_url.map(str::trim).filter(|raw| !raw.is_empty()) {
        let url = Url::parse(raw).with_context(|| format!("invalid data url '{raw}'"))?;
        anyhow::ensure!(
            matches!(url.scheme(), "http" | "https"),
            "unsupported data url scheme '{}'",
            url.scheme()
        );
        return Ok(Some(Box::new(HttpSource::new(url, timeout)?)));
    }
    Ok(data_path.map(|path| Box::new(FileSource::new(path)) as Box<dyn DocumentSource>))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    Source(String),
    Mock { reason: String },
}

#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: DataDocument,
    pub origin: DocumentOrigin,
}

impl LoadedDocument {
    pub fn is_mock(&self) -> bool {
        matches!(self.origin, DocumentOrigin::Mock { .. })
    }
}

/// One-shot load. Any failure falls back to the mock document.
pub async fn load_document(source: Option<&dyn DocumentSource>) -> LoadedDocument {
    let Some(source) = source else {
        info!("no data source configured; using mock data");
        return mock_loaded("no data source configured".into());
    };

    match source.fetch().await {
        Ok(document) => {
            let namespaces: Vec<&str> = document.namespaces.keys().map(String::as_str).collect();
            info!(
                source = %source.describe(),
                generated = %document.metadata.generated,
                ?namespaces,
                "loaded aggregated data"
            );
            LoadedDocument {
                document,
                origin: DocumentOrigin::Source(source.describe()),
            }
        }
        Err(err) => {
            warn!(source = %source.describe(), error = %err, "could not load data; using mock data");
            mock_loaded(err.to_string())
        }
    }
}

fn mock_loaded(reason: String) -> LoadedDocument {
    LoadedDocument {
        document: mock_document(Utc::now()),
        origin: DocumentOrigin::Mock { reason },
    }
}

/// Stub document with the same top-level shape as a real one.
pub fn mock_document(generated_at: DateTime<Utc>) -> DataDocument {
    let namespaces: BTreeMap<String, Value> = Namespace::ALL
        .into_iter()
        .map(|ns| {
            let sections: Map<String, Value> = ns
                .sections()
                .into_iter()
                .map(|section| (section.to_string(), Value::Object(Map::new())))
                .collect();
            (ns.key().to_string(), Value::Object(sections))
        })
        .collect();

    DataDocument {
        metadata: DocumentMetadata {
            generated: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            scenarios: vec![Scenario::Before, Scenario::After],
            description: Some(MOCK_DESCRIPTION.to_string()),
        },
        namespaces,
    }
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
