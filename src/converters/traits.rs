use thiserror::Error;

use crate::converters::types::{BoxedValue, TargetType};
use crate::messages::MessageCatalog;

/// Validation failure raised by a converter. The message is formatted from
/// the locale catalog at the point of failure and travels verbatim to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConversionError {
    message: String,
}

impl ConversionError {
    /// Formats the catalog template under `key` with the offending raw value.
    pub fn from_catalog(catalog: &MessageCatalog, key: &str, raw: &str) -> Self {
        Self {
            message: catalog.format(key, raw),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Turns one raw request string into a typed value.
///
/// Implementations never see empty or absent input; the dispatcher resolves
/// those to a null binding before any converter runs. Stateless by contract,
/// so a single instance serves concurrent requests.
pub trait Converter: Send + Sync {
    fn convert(
        &self,
        raw: &str,
        target: &TargetType,
        catalog: &MessageCatalog,
    ) -> Result<BoxedValue, ConversionError>;
}

impl std::fmt::Debug for dyn Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Converter")
    }
}
