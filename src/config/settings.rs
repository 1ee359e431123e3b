use tracing::info;

use super::ConfigError;
use super::context::ContextSource;

/// Well-known context keys.
pub mod keys {
    pub const PROVIDER: &str = "formbind.provider";
    pub const ENCODING: &str = "formbind.encoding";
    pub const BASE_PACKAGES: &str = "formbind.packages";
    pub const SCANNING: &str = "formbind.scanning";
}

const DISABLED_SENTINEL: &str = "disabled";

/// Runtime profile selected by the provider setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Full default registry plus the enumeration fallback.
    Builtin,
    /// Empty registry the host populates itself.
    Bare,
}

impl ProviderKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Bare => "bare",
        }
    }
}

/// Read-through view over a context source. Nothing is cached: every
/// accessor consults the source anew, so entries set after construction are
/// still seen.
pub struct Settings<'a> {
    context: &'a dyn ContextSource,
}

impl<'a> Settings<'a> {
    pub fn new(context: &'a dyn ContextSource) -> Self {
        Self { context }
    }

    /// Absent is absent, never an error.
    pub fn optional(&self, key: &str) -> Option<String> {
        self.context.get(key)
    }

    /// Fails with the exact missing key and a remediation hint.
    pub fn require(&self, key: &str, hint: &'static str) -> Result<String, ConfigError> {
        self.optional(key).ok_or_else(|| ConfigError::Missing {
            key: key.to_string(),
            hint,
        })
    }

    /// Required comma-separated list; entries are trimmed, order preserved,
    /// empty entries dropped.
    pub fn list(&self, key: &str, hint: &'static str) -> Result<Vec<String>, ConfigError> {
        let raw = self.require(key, hint)?;
        Ok(split_list(&raw))
    }

    /// Flag settings fail open: only the sentinel `disabled` (compared after
    /// trimming, ASCII case ignored) turns a flag off. Absent means enabled.
    pub fn flag_enabled(&self, key: &str) -> bool {
        match self.optional(key) {
            Some(value) => !value.trim().eq_ignore_ascii_case(DISABLED_SENTINEL),
            None => true,
        }
    }

    pub fn base_packages(&self) -> Result<Vec<String>, ConfigError> {
        self.list(
            keys::BASE_PACKAGES,
            "list the base packages to scan, comma-separated",
        )
    }

    pub fn has_base_packages(&self) -> bool {
        self.optional(keys::BASE_PACKAGES).is_some()
    }

    pub fn encoding(&self) -> Option<String> {
        self.optional(keys::ENCODING)
    }

    pub fn scanning_enabled(&self) -> bool {
        let enabled = self.flag_enabled(keys::SCANNING);
        info!(
            "Type scanning is {}",
            if enabled { "enabled" } else { "disabled" }
        );
        enabled
    }

    /// Selects the runtime profile. Absent defaults to the builtin profile;
    /// an unrecognized value is a configuration error, not a fallback.
    pub fn provider(&self) -> Result<ProviderKind, ConfigError> {
        let kind = match self.optional(keys::PROVIDER) {
            None => ProviderKind::Builtin,
            Some(value) => match value.trim() {
                "builtin" => ProviderKind::Builtin,
                "bare" => ProviderKind::Bare,
                _ => return Err(ConfigError::UnknownProvider { value }),
            },
        };
        info!("Using {} as runtime provider", kind.name());
        Ok(kind)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
