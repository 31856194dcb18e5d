//! Default values applied beneath every source.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with defaults for every table.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("hash.algorithm", "identity")?
        .set_default("hash.input", "value")?
        .set_default("cache.capacity", 4096)?
        .set_default("logging.level", "info")
}
