//! Configuration module for krypt
//!
//! This module provides configuration management including:
//! - Config file discovery
//! - YAML settings with per-flag overrides

pub mod paths;
pub mod settings;

pub use paths::KryptPaths;
pub use settings::Settings;
