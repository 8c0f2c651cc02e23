use crate::app::state::App;
use crate::fetch::{DocumentSource, FetchEvent};
use chrono::Local;
use radiopharma_core::datasets::sample_document;
use radiopharma_core::{Fallback, LoadState};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

const OFFLINE_MAP_MESSAGE: &str = "Offline: world map not loaded";

impl App {
    /// Starts the initial document and geometry fetches.
    pub fn start_loading(&mut self) {
        self.document = LoadState::Loading;
        self.request_document();

        if self.source == DocumentSource::Sample {
            self.geometry = LoadState::Failed {
                message: OFFLINE_MAP_MESSAGE.to_string(),
                fallback: None,
            };
        } else {
            self.geometry = LoadState::Loading;
            self.fetcher.request_geometry(self.settings.geo_url.clone());
        }
    }

    /// Refetches the document, keeping the current one visible until the new one lands.
    pub fn refresh(&mut self) {
        if self.document.data().is_some() {
            self.refreshing = true;
        } else {
            self.document = LoadState::Loading;
        }
        self.request_document();

        if self.geometry.error().is_some() && self.source != DocumentSource::Sample {
            self.geometry = LoadState::Loading;
            self.fetcher.request_geometry(self.settings.geo_url.clone());
        }
        self.status_message = "Refreshing data...".to_string();
    }

    fn request_document(&mut self) {
        self.last_refresh = Instant::now();
        self.fetcher.request_document(self.source.clone());
    }

    /// Applies every finished fetch; returns how many were current.
    pub fn drain_fetch_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.fetcher.try_next() {
            if self.apply_fetch_event(event) {
                applied += 1;
            }
        }
        applied
    }

    pub fn apply_fetch_event(&mut self, event: FetchEvent) -> bool {
        if !self.fetcher.is_current(&event) {
            return false;
        }

        match event {
            FetchEvent::Document { generation, result } => {
                self.refreshing = false;
                match result {
                    Ok(document) => {
                        info!(
                            generation,
                            companies = document.companies.len(),
                            isotopes = document.isotopes.len(),
                            targets = document.targets.len(),
                            "document loaded"
                        );
                        self.document = LoadState::Ready(Arc::new(document));
                        self.document_fallback = None;
                        self.fetched_at = Some(Local::now());
                        self.status_message = format!("Data loaded from {}", self.source);
                    }
                    Err(error) => {
                        warn!(generation, %error, "document fetch failed");
                        let (fallback, source) = Fallback::choose(self.document.data().cloned(), || {
                            Arc::new(sample_document())
                        });
                        self.document = LoadState::failed(&error, Some(fallback));
                        self.document_fallback = Some(source);
                        self.status_message = error.banner();
                    }
                }
                self.clamp_selections();
            }
            FetchEvent::Geometry { generation, result } => {
                match result {
                    Ok(geometry) => {
                        info!(generation, countries = geometry.countries.len(), "world geometry loaded");
                        let unmatched = geometry.unmatched_access_entries();
                        if !unmatched.is_empty() {
                            debug!(?unmatched, "access entries without geometry");
                        }
                        self.geometry = LoadState::Ready(Arc::new(geometry));
                    }
                    Err(error) => {
                        warn!(generation, %error, "world geometry fetch failed");
                        self.geometry = LoadState::failed(&error, None);
                    }
                }
                *self.map_cache.get_mut() = None;
            }
        }
        true
    }

    /// Aborts in-flight fetches; their results are never applied.
    pub fn cancel_fetches(&mut self) {
        self.fetcher.cancel_all();
        self.refreshing = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::app::state::App;
    use crate::config::Settings;
    use crate::fetch::{DocumentSource, FetchEvent};
    use radiopharma_core::{AggregateDocument, DataError, Fallback, LoadState};
    use std::error::Error;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::{sleep, timeout};

    type TestResult = Result<(), Box<dyn Error>>;

    async fn settle(app: &mut App) -> TestResult {
        timeout(Duration::from_secs(5), async {
            while app.is_loading() {
                app.drain_fetch_events();
                sleep(Duration::from_millis(10)).await;
            }
        })
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn offline_start_loads_the_sample() -> TestResult {
        let mut app = App::new(Settings::default(), DocumentSource::Sample)?;
        app.start_loading();
        assert!(app.is_loading());
        settle(&mut app).await?;

        assert!(matches!(app.document, LoadState::Ready(_)));
        assert!(app.fetched_at.is_some());
        assert!(app.geometry.error().is_some());
        assert!(app.geometry.data().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn failed_load_falls_back_to_the_sample() -> TestResult {
        let source = DocumentSource::File(PathBuf::from("no/such/file.json"));
        let mut app = App::new(Settings::default(), source)?;
        app.document = LoadState::Loading;
        app.fetcher.request_document(app.source.clone());
        settle(&mut app).await?;

        assert!(app.document.is_fallback());
        assert_eq!(app.document_fallback, Some(Fallback::Sample));
        assert!(app.document.error().is_some_and(|e| e.starts_with("Error Loading Data")));
        assert!(app.data().is_some_and(|document| !document.is_empty()));
        Ok(())
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_previous_document() -> TestResult {
        let source = DocumentSource::File(PathBuf::from("no/such/file.json"));
        let mut app = App::new(Settings::default(), source)?;
        let previous = Arc::new(AggregateDocument {
            total_trials_processed: 7,
            ..AggregateDocument::default()
        });
        app.document = LoadState::Ready(Arc::clone(&previous));

        app.refresh();
        assert!(app.refreshing);
        assert!(app.data().is_some());
        settle(&mut app).await?;

        assert_eq!(app.data().map(|d| d.total_trials_processed), Some(7));
        assert!(app.document.error().is_some());
        assert_eq!(app.document_fallback, Some(Fallback::Previous));
        Ok(())
    }

    #[test]
    fn stale_events_are_ignored() -> Result<(), DataError> {
        let mut app = App::new(Settings::default(), DocumentSource::Sample)?;
        let stale = FetchEvent::Document {
            generation: 41,
            result: Ok(AggregateDocument::default()),
        };
        assert!(!app.apply_fetch_event(stale));
        assert!(app.document.is_loading());
        Ok(())
    }
}
