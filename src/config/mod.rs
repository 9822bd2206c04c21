//! Configuration model for envgen.
//!
//! This module defines the Config struct that represents `.envgen.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;


pub use model::{Config, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_TEMPLATE_FILE};
pub use operations::validate_prefetch_path;
