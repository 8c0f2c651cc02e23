// Data loading for the dashboard: HTTP and file access plus cancellable fetch tasks

mod client;
mod task;

pub use client::{load_document, DataClient, DocumentSource};
pub use task::{FetchEvent, FetchTask, Fetcher};
