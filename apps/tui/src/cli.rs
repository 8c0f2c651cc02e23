use std::path::PathBuf;

use clap::Parser;
use radiopharma_core::Phase;

use crate::config::{DATA_URL_VAR, GEO_URL_VAR};
use crate::fetch::DocumentSource;

#[derive(Debug, Parser)]
#[command(name = "radiopharma-tui", version, about = "Radiopharmaceutical industry dashboard")]
pub struct CliArgs {
    /// Print a summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary and projected views as JSON
    #[arg(long)]
    pub json: bool,

    /// Phase used for headless output (total, phase_1, phase_2, phase_3)
    #[arg(long, value_name = "PHASE", value_parser = parse_phase, default_value = "total")]
    pub phase: Phase,

    /// Load the aggregate document from a local JSON file
    #[arg(long, value_name = "PATH", conflicts_with = "offline")]
    pub file: Option<PathBuf>,

    /// Use the bundled sample document and skip all network access
    #[arg(long)]
    pub offline: bool,

    /// Override the aggregate document URL
    #[arg(long = "data-url", value_name = "URL")]
    pub data_url: Option<String>,

    /// Override the world geometry URL
    #[arg(long = "geo-url", value_name = "URL")]
    pub geo_url: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

fn parse_phase(value: &str) -> Result<Phase, String> {
    Phase::parse(value).ok_or_else(|| format!("unknown phase '{value}'"))
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.data_url {
            std::env::set_var(DATA_URL_VAR, url);
        }
        if let Some(url) = &self.geo_url {
            std::env::set_var(GEO_URL_VAR, url);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Where the aggregate document comes from for this run.
    pub fn document_source(&self, data_url: &str) -> DocumentSource {
        if self.offline {
            DocumentSource::Sample
        } else if let Some(path) = &self.file {
            DocumentSource::File(path.clone())
        } else {
            DocumentSource::Remote(data_url.to_string())
        }
    }
}
