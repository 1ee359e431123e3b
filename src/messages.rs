//! Localized message catalogs for conversion failures
//!
//! A catalog holds one locale's key → template mapping. Templates carry a
//! single `{0}` placeholder that receives the raw offending value, so a
//! converter can hand the calling layer a fully formatted, user-facing
//! message without knowing anything about locales itself.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// English templates for every builtin converter key.
const BUILTIN: &[(&str, &str)] = &[
    ("is_not_a_valid_integer", "{0} is not a valid integer."),
    ("is_not_a_valid_number", "{0} is not a valid number."),
    ("is_not_a_valid_boolean", "{0} is not a valid boolean."),
    ("is_not_a_valid_character", "{0} is not a valid character."),
    ("is_not_a_valid_enum_value", "{0} is not a valid enum value."),
    ("is_not_a_valid_date", "{0} is not a valid date."),
    ("is_not_a_valid_time", "{0} is not a valid time."),
    ("is_not_a_valid_datetime", "{0} is not a valid datetime."),
];

/// Catalog file layout: a locale tag plus a flat `[messages]` table.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    locale: String,
    #[serde(default)]
    messages: HashMap<String, String>,
}

/// One locale's key → template mapping.
///
/// Catalogs built from files start from the builtin English defaults, so a
/// partial translation still resolves every builtin key.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: String,
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    /// Builtin English catalog.
    pub fn builtin() -> Self {
        Self {
            locale: "en".to_string(),
            templates: BUILTIN
                .iter()
                .map(|(key, template)| (key.to_string(), template.to_string()))
                .collect(),
        }
    }

    /// Parses a catalog document, overlaying its messages on the builtin
    /// defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        let mut catalog = Self::builtin();
        catalog.locale = file.locale;
        catalog.templates.extend(file.messages);
        Ok(catalog)
    }

    /// Loads a catalog document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Inserts or replaces a single template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    /// Formats the template registered under `key`, substituting the raw
    /// value for the `{0}` placeholder.
    ///
    /// Unknown keys fall back to the builtin English template and then to
    /// `"<key>: <raw>"`; an error message always materializes.
    pub fn format(&self, key: &str, raw: &str) -> String {
        if let Some(template) = self.templates.get(key) {
            return template.replace("{0}", raw);
        }
        if let Some((_, template)) = BUILTIN.iter().find(|(builtin, _)| *builtin == key) {
            return template.replace("{0}", raw);
        }
        format!("{key}: {raw}")
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
