use std::collections::BTreeMap;
use std::env;

/// Read-only, string-keyed view of the bootstrap context the host runs in.
/// Lookups are synchronous and never block.
pub trait ContextSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory source for tests and embedding hosts.
#[derive(Debug, Clone, Default)]
pub struct StaticContext {
    entries: BTreeMap<String, String>,
}

impl StaticContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (key, value) in iter {
            context.set(key, value);
        }
        context
    }
}

impl ContextSource for StaticContext {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Live environment-variable source. A dotted key maps to its uppercased,
/// underscore-joined variable name: `formbind.packages` reads
/// `FORMBIND_PACKAGES`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvContext;

impl EnvContext {
    pub fn new() -> Self {
        Self
    }
}

impl ContextSource for EnvContext {
    fn get(&self, key: &str) -> Option<String> {
        env::var(env_var_name(key)).ok()
    }
}

fn env_var_name(key: &str) -> String {
    key.replace(['.', '-'], "_").to_ascii_uppercase()
}
