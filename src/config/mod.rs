//! Configuration
//!
//! Layered configuration for hashing, caching, and logging. Sources are
//! merged by [`merge::service::MergeService`]; callers go through
//! [`ConfigLoader`].

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

use crate::hasher::HashConfig;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

pub use facade::ConfigLoader;

/// Workspace config file name
pub const WORKSPACE_CONFIG_FILE: &str = "termhash.toml";

/// Environment variable prefix (`TERMHASH__HASH__ALGORITHM`, ...)
pub const ENV_PREFIX: &str = "TERMHASH";

fn default_cache_capacity() -> usize {
    4096
}

/// Digest cache configuration (`[cache]` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum cached digests; 0 disables the cache
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermHashConfig {
    #[serde(default)]
    pub hash: HashConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
