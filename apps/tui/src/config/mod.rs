mod settings;

pub use settings::{
    ConfigError, Settings, DATA_URL_VAR, DEFAULT_DATA_URL, DEFAULT_GEO_URL, DEFAULT_LOG_FILE,
    GEO_URL_VAR, LOG_FILE_VAR, REFRESH_SECS_VAR, TIMEOUT_SECS_VAR,
};
