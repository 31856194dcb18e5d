//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::TermHashConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file, `<dir>/termhash.toml`, and environment.
    pub fn load(dir: &Path) -> Result<TermHashConfig, ConfigError> {
        MergeService::load(dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<TermHashConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
