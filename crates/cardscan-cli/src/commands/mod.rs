pub mod batch;
pub mod config;
pub mod parse;

use std::path::Path;

use cardscan_core::CardScanConfig;

/// Load the config file named on the command line, or the defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CardScanConfig> {
    Ok(match config_path {
        Some(path) => CardScanConfig::from_file(Path::new(path))?,
        None => CardScanConfig::default(),
    })
}
