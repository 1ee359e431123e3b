use std::marker::PhantomData;
use std::str::FromStr;

use crate::converters::traits::{ConversionError, Converter};
use crate::converters::types::{Bindable, BoxedValue, TargetType};
use crate::messages::MessageCatalog;

/// Converter for integer targets. Parsing is strict: no surrounding
/// whitespace, no sign-free overflow wrapping.
pub struct IntConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> IntConverter<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for IntConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Converter for IntConverter<T>
where
    T: Bindable + FromStr,
{
    fn convert(
        &self,
        raw: &str,
        _target: &TargetType,
        catalog: &MessageCatalog,
    ) -> Result<BoxedValue, ConversionError> {
        raw.parse::<T>()
            .map(|value| Box::new(value) as BoxedValue)
            .map_err(|_| ConversionError::from_catalog(catalog, "is_not_a_valid_integer", raw))
    }
}

/// Converter for floating-point targets.
pub struct FloatConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> FloatConverter<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for FloatConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Converter for FloatConverter<T>
where
    T: Bindable + FromStr,
{
    fn convert(
        &self,
        raw: &str,
        _target: &TargetType,
        catalog: &MessageCatalog,
    ) -> Result<BoxedValue, ConversionError> {
        raw.parse::<T>()
            .map(|value| Box::new(value) as BoxedValue)
            .map_err(|_| ConversionError::from_catalog(catalog, "is_not_a_valid_number", raw))
    }
}
