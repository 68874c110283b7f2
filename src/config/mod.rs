//! # Configuration Management
//!
//! Command-line flags establish a baseline [`SmurfConfig`]; an optional YAML
//! override file then replaces it wholesale. A broken override file is logged
//! rather than aborting the run, and whatever the failed parse left behind is
//! used as is.

pub mod settings;

pub use settings::{SmurfConfig, DEFAULT_SECRET_NAME, DEFAULT_TAG};

use std::path::Path;
use tracing::warn;

/// Resolve the final configuration from the flag baseline and an optional
/// override file path (empty means no file).
pub fn load_config(baseline: SmurfConfig, config_file: &str) -> SmurfConfig {
    let mut config = baseline;

    if config_file.is_empty() {
        return config;
    }

    if let Err(e) = config.parse_config_file(Path::new(config_file)) {
        warn!("Error parsing config file: '{}'. Continuing with parameter defaults", e);
    }

    config
}
