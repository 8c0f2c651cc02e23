use tracing::warn;

use crate::document::AggregateDocument;

/// Sample aggregate document shown when the live endpoint cannot be reached.
pub const SAMPLE_JSON: &str = include_str!("../../data/sample.json");

pub fn sample_document() -> AggregateDocument {
    AggregateDocument::from_json_str(SAMPLE_JSON).unwrap_or_else(|error| {
        warn!(%error, "bundled sample document failed to parse");
        AggregateDocument::default()
    })
}

#[cfg(test)]
mod tests {
    use super::{sample_document, SAMPLE_JSON};
    use crate::document::AggregateDocument;

    #[test]
    fn sample_parses_cleanly() {
        assert!(AggregateDocument::from_json_str(SAMPLE_JSON).is_ok());
    }

    #[test]
    fn sample_has_every_section() {
        let sample = sample_document();
        assert!(sample.companies.len() >= 8);
        assert!(!sample.isotopes.is_empty());
        assert!(sample.targets.len() >= 6);
        assert!(sample.total_trials_processed > 0);
    }
}
