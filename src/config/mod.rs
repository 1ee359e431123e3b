//! Bootstrap configuration for formbind
//!
//! This module provides the string-keyed context the crate is configured
//! from, a layered loader that snapshots it from:
//! 1. TOML context file
//! 2. Environment variables (highest priority)
//!
//! and the [`Settings`] reader that gives the raw entries their meaning.
//!
//! # Usage
//!
//! ```no_run
//! use formbind::config::{self, Settings};
//!
//! let context = config::load().expect("Failed to load context");
//! let settings = Settings::new(&context);
//! let packages = settings.base_packages();
//! ```
//!
//! # Environment Variables
//!
//! Context entries can be overridden using environment variables with the
//! pattern `FORMBIND__<section>__<key>`:
//!
//! - `FORMBIND__FORMBIND__PACKAGES=app.controllers` -> `formbind.packages`
//! - `FORMBIND__FORMBIND__SCANNING=disabled` -> `formbind.scanning`
//!
//! # Context File
//!
//! By default, the context is loaded from `config/formbind.toml`. This can
//! be overridden using the `FORMBIND_CONFIG` environment variable.

mod context;
mod settings;
mod sources;

pub use context::{ContextSource, EnvContext, StaticContext};
pub use settings::{ProviderKind, Settings, keys};
pub use sources::{load, load_from_path};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required setting {key} is not defined ({hint})")]
    Missing { key: String, hint: &'static str },

    #[error("unknown runtime provider {value:?}, expected one of: builtin, bare")]
    UnknownProvider { value: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
