use radiopharma_core::choropleth::WorldGeometry;
use radiopharma_core::datasets::sample_document;
use radiopharma_core::{AggregateDocument, DataError};
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Where the aggregate document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Remote(String),
    File(PathBuf),
    /// The bundled sample; never touches the network.
    Sample,
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Sample => write!(f, "bundled sample"),
        }
    }
}

fn transport(error: reqwest::Error) -> DataError {
    DataError::Transport(error.to_string())
}

/// HTTP access to the document endpoint and the geometry file. Cheap to clone.
#[derive(Debug, Clone)]
pub struct DataClient {
    http: Client,
}

impl DataClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, DataError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(transport)?;
        Ok(Self { http })
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>, DataError> {
        debug!(url, "GET");
        let response = self.http.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "request rejected");
            return Err(DataError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        debug!(url, bytes = body.len(), "response received");
        Ok(body.to_vec())
    }

    pub async fn fetch_document(&self, url: &str) -> Result<AggregateDocument, DataError> {
        let body = self.get(url).await?;
        AggregateDocument::from_slice(&body)
    }

    pub async fn fetch_geometry(&self, url: &str) -> Result<WorldGeometry, DataError> {
        let body = self.get(url).await?;
        WorldGeometry::from_slice(&body)
    }
}

pub async fn load_document(
    client: &DataClient,
    source: &DocumentSource,
) -> Result<AggregateDocument, DataError> {
    match source {
        DocumentSource::Remote(url) => client.fetch_document(url).await,
        DocumentSource::File(path) => {
            let bytes = tokio::fs::read(path).await.map_err(|source| DataError::Io {
                path: path.clone(),
                source,
            })?;
            AggregateDocument::from_slice(&bytes)
        }
        DocumentSource::Sample => Ok(sample_document()),
    }
}
