//! Configuration file model and loading.

#[expect(clippy::module_inception, reason = "mirrors the config type it defines")]
mod config;

pub use config::{Config, DEFAULT_CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML, GraphConfig, PublishMethod};
