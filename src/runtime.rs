//! Process-wide runtime lifecycle.
//!
//! The [`Runtime`] bundles the converter registry with its message catalog.
//! Hosts install one at startup via [`init`]; [`global`] hands it out
//! afterwards, falling back to the builtin profile when the startup hook
//! never ran.

use std::sync::OnceLock;

use thiserror::Error;
use tracing::warn;

use crate::config::{ConfigError, ProviderKind, Settings};
use crate::converters::{Bindable, BindError, ConverterRegistry, RegistryError};
use crate::messages::MessageCatalog;

static GLOBAL: OnceLock<Runtime> = OnceLock::new();

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime is already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Shared conversion state built once per process.
#[derive(Debug)]
pub struct Runtime {
    registry: ConverterRegistry,
    messages: MessageCatalog,
}

impl Runtime {
    pub fn new(registry: ConverterRegistry, messages: MessageCatalog) -> Self {
        Self { registry, messages }
    }

    /// The builtin profile: full default registry, English catalog.
    pub fn builtin() -> Self {
        Self::new(ConverterRegistry::with_defaults(), MessageCatalog::builtin())
    }

    /// Assembles a runtime for the configured provider profile. The builtin
    /// profile is verified against the default target set before it is
    /// returned, so a wiring mistake fails here rather than on the first
    /// request.
    pub fn from_settings(settings: &Settings<'_>) -> Result<Self, RuntimeError> {
        let runtime = match settings.provider()? {
            ProviderKind::Builtin => {
                let runtime = Self::builtin();
                runtime
                    .registry
                    .verify(&ConverterRegistry::default_targets())?;
                runtime
            }
            ProviderKind::Bare => {
                Self::new(ConverterRegistry::new(), MessageCatalog::builtin())
            }
        };
        Ok(runtime)
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Mutable registry access, for hosts populating the bare profile
    /// before installing the runtime.
    pub fn registry_mut(&mut self) -> &mut ConverterRegistry {
        &mut self.registry
    }

    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    pub fn convert<T: Bindable>(&self, raw: Option<&str>) -> Result<Option<T>, BindError> {
        self.registry.convert(raw, &self.messages)
    }
}

/// Installs the process-wide runtime. Call once at startup; a second call
/// fails with [`RuntimeError::AlreadyInitialized`] instead of silently
/// replacing what other threads may already hold.
pub fn init(runtime: Runtime) -> Result<&'static Runtime, RuntimeError> {
    let mut installed = false;
    let global = GLOBAL.get_or_init(|| {
        installed = true;
        runtime
    });
    if installed {
        Ok(global)
    } else {
        Err(RuntimeError::AlreadyInitialized)
    }
}

/// Returns the process-wide runtime. When the startup hook never ran, the
/// builtin profile is constructed on first use; `OnceLock` guarantees a
/// single winner under concurrent first calls.
pub fn global() -> &'static Runtime {
    GLOBAL.get_or_init(|| {
        warn!("Runtime was not initialized at startup, falling back to the builtin profile");
        Runtime::builtin()
    })
}
