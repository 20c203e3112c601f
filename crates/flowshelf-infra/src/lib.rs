//! Infrastructure layer for flowshelf.
//!
//! Reads the outside world: catalog sources (JSON, TOML and YAML files, or a
//! directory of workflow doc pages), the `config.toml` file, and the
//! flowshelf home directory.

pub mod catalog_source;
pub mod config;
pub mod home;
