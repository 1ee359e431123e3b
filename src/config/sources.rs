use std::env;
use std::path::PathBuf;

use config::{Environment, File, Source, Value, ValueKind};

use super::ConfigError;
use super::context::StaticContext;

const CONFIG_ENV_VAR: &str = "FORMBIND_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/formbind.toml";
const ENV_PREFIX: &str = "FORMBIND";
const ENV_SEPARATOR: &str = "__";

/// Load the bootstrap context from multiple sources with priority:
/// 1. TOML file (if it exists)
/// 2. Environment variables from .env file (via dotenvy)
/// 3. System environment variables (highest priority)
pub fn load() -> Result<StaticContext, ConfigError> {
    // Load .env file if it exists (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    let config_path = env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    load_from_path(config_path)
}

/// Load the context from a specific path plus the environment overlay.
/// Useful for testing with custom context files.
pub fn load_from_path(config_path: PathBuf) -> Result<StaticContext, ConfigError> {
    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::info!("Loading context from: {}", config_path.display());
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::warn!(
            "Context file not found at {}, using environment overrides only",
            config_path.display()
        );
    }

    // Environment variable overrides
    // FORMBIND__FORMBIND__PACKAGES -> formbind.packages
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );

    let snapshot = builder.build()?;
    let mut context = StaticContext::new();
    for (key, value) in snapshot.collect()? {
        flatten_into(&mut context, key, value);
    }
    Ok(context)
}

/// Nested tables flatten to dotted keys and scalars render to their string
/// form. Arrays and nulls are skipped; list-valued settings travel as
/// comma-separated strings.
fn flatten_into(context: &mut StaticContext, key: String, value: Value) {
    match value.kind {
        ValueKind::Table(table) => {
            for (child, value) in table {
                flatten_into(context, format!("{key}.{child}"), value);
            }
        }
        ValueKind::String(text) => context.set(key, text),
        ValueKind::Boolean(flag) => context.set(key, flag.to_string()),
        ValueKind::I64(number) => context.set(key, number.to_string()),
        ValueKind::I128(number) => context.set(key, number.to_string()),
        ValueKind::U64(number) => context.set(key, number.to_string()),
        ValueKind::U128(number) => context.set(key, number.to_string()),
        ValueKind::Float(number) => context.set(key, number.to_string()),
        _ => {}
    }
}
