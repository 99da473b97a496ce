//! Configuration file loading for quizify
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./quizify.toml` or `./.quizify.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/quizify/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat, FileProviderConfig,
    FileQuizConfig, FileStudyConfig,
};
pub use loader::ConfigLoader;
