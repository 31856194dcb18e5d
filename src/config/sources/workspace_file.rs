//! Directory-local config file source: <dir>/termhash.toml

use crate::config::WORKSPACE_CONFIG_FILE;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

/// Add `<dir>/termhash.toml` if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = dir.join(WORKSPACE_CONFIG_FILE);
    Ok(builder.add_source(File::from(path).required(false)))
}
