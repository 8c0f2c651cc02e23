use radiopharma_core::choropleth::WorldGeometry;
use radiopharma_core::{AggregateDocument, DataError};
use std::future::Future;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::client::{load_document, DataClient, DocumentSource};

/// A spawned fetch. Dropping the handle aborts the request.
#[derive(Debug)]
pub struct FetchTask {
    handle: JoinHandle<()>,
}

impl FetchTask {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[derive(Debug)]
pub enum FetchEvent {
    Document {
        generation: u64,
        result: Result<AggregateDocument, DataError>,
    },
    Geometry {
        generation: u64,
        result: Result<WorldGeometry, DataError>,
    },
}

/// Owns the in-flight fetches of one dashboard session and the channel they
/// report on. Each resource keeps a generation counter; only the latest
/// request's result is current.
#[derive(Debug)]
pub struct Fetcher {
    client: DataClient,
    tx: UnboundedSender<FetchEvent>,
    rx: UnboundedReceiver<FetchEvent>,
    document_generation: u64,
    geometry_generation: u64,
    document_task: Option<FetchTask>,
    geometry_task: Option<FetchTask>,
}

impl Fetcher {
    pub fn new(client: DataClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            tx,
            rx,
            document_generation: 0,
            geometry_generation: 0,
            document_task: None,
            geometry_task: None,
        }
    }

    /// Starts loading the document, cancelling any earlier document request.
    pub fn request_document(&mut self, source: DocumentSource) -> u64 {
        self.document_generation += 1;
        let generation = self.document_generation;
        info!(generation, %source, "requesting document");

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.document_task = Some(FetchTask::spawn(async move {
            let result = load_document(&client, &source).await;
            let _ = tx.send(FetchEvent::Document { generation, result });
        }));
        generation
    }

    /// Starts loading the world geometry, cancelling any earlier geometry request.
    pub fn request_geometry(&mut self, url: String) -> u64 {
        self.geometry_generation += 1;
        let generation = self.geometry_generation;
        info!(generation, %url, "requesting world geometry");

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.geometry_task = Some(FetchTask::spawn(async move {
            let result = client.fetch_geometry(&url).await;
            let _ = tx.send(FetchEvent::Geometry { generation, result });
        }));
        generation
    }

    pub fn try_next(&mut self) -> Option<FetchEvent> {
        self.rx.try_recv().ok()
    }

    pub async fn next(&mut self) -> Option<FetchEvent> {
        self.rx.recv().await
    }

    pub fn is_current(&self, event: &FetchEvent) -> bool {
        let current = match event {
            FetchEvent::Document { generation, .. } => *generation == self.document_generation,
            FetchEvent::Geometry { generation, .. } => *generation == self.geometry_generation,
        };
        if !current {
            debug!(?event, "dropping stale fetch result");
        }
        current
    }

    pub fn cancel_all(&mut self) {
        self.document_task = None;
        self.geometry_task = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{FetchEvent, FetchTask, Fetcher};
    use crate::fetch::client::tests::serve;
    use crate::fetch::{DataClient, DocumentSource};
    use axum::http::StatusCode;
    use std::error::Error;
    use std::path::PathBuf;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::{sleep, timeout};

    type TestResult = Result<(), Box<dyn Error>>;

    #[tokio::test]
    async fn dropping_the_task_cancels_it() -> TestResult {
        let (tx, mut rx) = mpsc::unbounded_channel::<u8>();
        let task = FetchTask::spawn(async move {
            sleep(Duration::from_secs(30)).await;
            let _ = tx.send(1);
        });

        drop(task);
        // The aborted future drops its sender, closing the channel without a value.
        assert_eq!(timeout(Duration::from_secs(5), rx.recv()).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn only_the_latest_request_is_current() -> TestResult {
        let mut fetcher = Fetcher::new(DataClient::new(None)?);
        let first = fetcher.request_document(DocumentSource::File(PathBuf::from("missing.json")));
        let second = fetcher.request_document(DocumentSource::Sample);
        assert_eq!((first, second), (1, 2));

        loop {
            let event = timeout(Duration::from_secs(5), fetcher.next())
                .await?
                .ok_or("channel closed")?;
            let FetchEvent::Document { generation, result } = &event else {
                continue;
            };
            if *generation == first {
                assert!(!fetcher.is_current(&event));
                continue;
            }
            assert!(fetcher.is_current(&event));
            assert!(result.is_ok());
            break;
        }
        Ok(())
    }

    #[tokio::test]
    async fn geometry_events_carry_their_own_generation() -> TestResult {
        let url = serve(StatusCode::NOT_FOUND, "{}").await?;
        let mut fetcher = Fetcher::new(DataClient::new(None)?);
        fetcher.request_document(DocumentSource::Sample);
        fetcher.request_document(DocumentSource::Sample);
        let generation = fetcher.request_geometry(url);
        assert_eq!(generation, 1);

        let mut geometry = None;
        while geometry.is_none() {
            match timeout(Duration::from_secs(5), fetcher.next()).await? {
                Some(event @ FetchEvent::Geometry { .. }) => geometry = Some(event),
                Some(_) => {}
                None => return Err("channel closed".into()),
            }
        }

        let event = geometry.ok_or("no geometry event")?;
        assert!(fetcher.is_current(&event));
        assert!(matches!(event, FetchEvent::Geometry { result: Err(_), .. }));
        fetcher.cancel_all();
        assert!(fetcher.document_task.is_none() && fetcher.geometry_task.is_none());
        Ok(())
    }
}
