//! Parsing and validation of `linkdoc.toml` project configuration files.
//!
//! This crate reads the optional project configuration file and produces a
//! strongly-typed [`ProjectConfig`]. Every section has defaults, so a project
//! without a `linkdoc.toml` behaves exactly like one with an empty file.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{
    find_project_root, load_config, load_config_file, load_config_from_str, load_config_or_default,
    CONFIG_FILE,
};
pub use types::*;
