use std::path::PathBuf;

use thiserror::Error;

/// Failures at the data boundary. Frontends convert these into
/// [`crate::LoadState::Failed`] instead of propagating them.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with HTTP {status}")]
    Status { status: u16 },

    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("geometry contains no usable country features")]
    EmptyGeometry,

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DataError {
    /// Text for the "Error Loading Data" banner.
    pub fn banner(&self) -> String {
        format!("Error Loading Data: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::DataError;

    #[test]
    fn banner_names_the_failure() {
        let error = DataError::Status { status: 503 };
        assert_eq!(
            error.banner(),
            "Error Loading Data: server responded with HTTP 503"
        );
    }

    #[test]
    fn json_errors_convert_with_question_mark() {
        fn parse() -> Result<serde_json::Value, DataError> {
            Ok(serde_json::from_str("{not json")?)
        }

        assert!(matches!(parse(), Err(DataError::Json(_))));
    }
}
