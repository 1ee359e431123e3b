use std::any::TypeId;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use crate::converters::enums::EnumConverter;
use crate::converters::numbers::{FloatConverter, IntConverter};
use crate::converters::primitives::{BooleanConverter, CharConverter};
use crate::converters::temporal::{DateConverter, DateTimeConverter, TimeConverter};
use crate::converters::traits::{ConversionError, Converter};
use crate::converters::types::{Bindable, BoxedValue, FamilyKind, TargetType};
use crate::messages::MessageCatalog;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no converter registered for {0}")]
    NotFound(&'static str),
}

/// Dispatch-level failure. Conversion messages pass through verbatim; they
/// are already formatted for the end user.
#[derive(Debug, Error)]
pub enum BindError {
    #[error(transparent)]
    Missing(#[from] RegistryError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error("converter for {0} produced a value of a different type")]
    ValueMismatch(&'static str),
}

/// Registry mapping target types to converter instances. Exact registrations
/// take precedence; a per-family fallback serves types with no exact entry,
/// which is how one [`EnumConverter`] covers every enumeration.
#[derive(Debug, Clone)]
pub struct ConverterRegistry {
    exact: BTreeMap<TypeId, Arc<dyn Converter>>,
    families: BTreeMap<FamilyKind, Arc<dyn Converter>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self {
            exact: BTreeMap::new(),
            families: BTreeMap::new(),
        }
    }

    /// Registers the authoritative converter for `T`. Re-registration
    /// replaces the previous entry.
    pub fn register<T: Bindable>(&mut self, converter: Arc<dyn Converter>) {
        self.exact.insert(TypeId::of::<T>(), converter);
    }

    /// Registers the fallback converter consulted for every target in
    /// `family` that has no exact entry.
    pub fn register_family(&mut self, family: FamilyKind, converter: Arc<dyn Converter>) {
        self.families.insert(family, converter);
    }

    pub fn resolve(&self, target: &TargetType) -> Result<Arc<dyn Converter>, RegistryError> {
        if let Some(converter) = self.exact.get(&target.id()) {
            return Ok(converter.clone());
        }
        self.families
            .get(&target.family_kind())
            .cloned()
            .ok_or(RegistryError::NotFound(target.name()))
    }

    pub fn has_converter(&self, target: &TargetType) -> bool {
        self.exact.contains_key(&target.id()) || self.families.contains_key(&target.family_kind())
    }

    pub fn has_family(&self, family: FamilyKind) -> bool {
        self.families.contains_key(&family)
    }

    /// Checks that every descriptor in `required` resolves, so a wiring
    /// mistake surfaces at startup instead of on the first request.
    pub fn verify(&self, required: &[TargetType]) -> Result<(), RegistryError> {
        for target in required {
            self.resolve(target)?;
        }
        Ok(())
    }

    /// Dispatch entry point for callers holding a runtime descriptor.
    /// An absent or empty raw value binds to `None` for every target type;
    /// converters never see it.
    pub fn convert_erased(
        &self,
        raw: Option<&str>,
        target: &TargetType,
        messages: &MessageCatalog,
    ) -> Result<Option<BoxedValue>, BindError> {
        let Some(raw) = raw.filter(|value| !value.is_empty()) else {
            return Ok(None);
        };
        let converter = self.resolve(target)?;
        let value = converter.convert(raw, target, messages)?;
        Ok(Some(value))
    }

    /// Typed dispatch entry point: applies the null rule, resolves, invokes,
    /// and downcasts. A converter producing the wrong type is a registration
    /// bug reported as [`BindError::ValueMismatch`], never a panic.
    pub fn convert<T: Bindable>(
        &self,
        raw: Option<&str>,
        messages: &MessageCatalog,
    ) -> Result<Option<T>, BindError> {
        let target = T::target_type();
        match self.convert_erased(raw, &target, messages)? {
            Some(value) => value
                .downcast::<T>()
                .map(|value| Some(*value))
                .map_err(|_| BindError::ValueMismatch(target.name())),
            None => Ok(None),
        }
    }

    /// Registry pre-populated with the builtin converter family and the
    /// enumeration fallback.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register::<i16>(Arc::new(IntConverter::<i16>::new()));
        registry.register::<i32>(Arc::new(IntConverter::<i32>::new()));
        registry.register::<i64>(Arc::new(IntConverter::<i64>::new()));
        registry.register::<u16>(Arc::new(IntConverter::<u16>::new()));
        registry.register::<u32>(Arc::new(IntConverter::<u32>::new()));
        registry.register::<u64>(Arc::new(IntConverter::<u64>::new()));
        registry.register::<f32>(Arc::new(FloatConverter::<f32>::new()));
        registry.register::<f64>(Arc::new(FloatConverter::<f64>::new()));
        registry.register::<bool>(Arc::new(BooleanConverter));
        registry.register::<char>(Arc::new(CharConverter));
        registry.register::<chrono::NaiveTime>(Arc::new(TimeConverter));
        registry.register::<chrono::NaiveDate>(Arc::new(DateConverter));
        registry.register::<chrono::NaiveDateTime>(Arc::new(DateTimeConverter));
        registry.register_family(FamilyKind::Enumerated, Arc::new(EnumConverter));

        registry
    }

    /// Builtin target set, for completeness verification against a registry
    /// expected to cover the defaults.
    pub fn default_targets() -> Vec<TargetType> {
        vec![
            i16::target_type(),
            i32::target_type(),
            i64::target_type(),
            u16::target_type(),
            u32::target_type(),
            u64::target_type(),
            f32::target_type(),
            f64::target_type(),
            bool::target_type(),
            char::target_type(),
            chrono::NaiveTime::target_type(),
            chrono::NaiveDate::target_type(),
            chrono::NaiveDateTime::target_type(),
        ]
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
