// Shared data layer for the radiopharma dashboards.
// Everything here is pure: no I/O beyond parsing bytes handed in by a frontend.

pub mod charts;
pub mod choropleth;
pub mod color;
pub mod datasets;
pub mod document;
pub mod domain;
pub mod error;
pub mod load;
pub mod projection;
pub mod schema;
pub mod summary;
pub mod tabs;
pub mod theme;
pub mod treemap;

pub use document::{AggregateDocument, CountedList, Entity, EntityRecord, PhaseBucket, StudyCounts};
pub use domain::{Phase, Section};
pub use error::DataError;
pub use load::{Fallback, LoadState};
