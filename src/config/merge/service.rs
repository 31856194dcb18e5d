//! MergeService: orchestrates sources, applies merge policy, deserializes to TermHashConfig.

use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::TermHashConfig;
use config::ConfigError;
use config::File;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from a directory and standard sources.
    /// Precedence: global file (lowest) -> `<dir>/termhash.toml` -> environment (highest).
    pub fn load(dir: &Path) -> Result<TermHashConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, dir)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        let config: TermHashConfig = config.try_deserialize()?;
        tracing::debug!(dir = %dir.display(), algorithm = ?config.hash.algorithm, "Loaded configuration");
        Ok(config)
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<TermHashConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        let config: TermHashConfig = config.try_deserialize()?;
        tracing::debug!(path = %path.display(), algorithm = ?config.hash.algorithm, "Loaded configuration file");
        Ok(config)
    }
}
