use crate::converters::traits::{ConversionError, Converter};
use crate::converters::types::{BoxedValue, TargetType};
use crate::messages::MessageCatalog;

/// Accepts `true` and `false` in any ASCII case; everything else is a
/// validation failure rather than a silent `false`.
pub struct BooleanConverter;

impl Converter for BooleanConverter {
    fn convert(
        &self,
        raw: &str,
        _target: &TargetType,
        catalog: &MessageCatalog,
    ) -> Result<BoxedValue, ConversionError> {
        if raw.eq_ignore_ascii_case("true") {
            Ok(Box::new(true))
        } else if raw.eq_ignore_ascii_case("false") {
            Ok(Box::new(false))
        } else {
            Err(ConversionError::from_catalog(
                catalog,
                "is_not_a_valid_boolean",
                raw,
            ))
        }
    }
}

/// Accepts exactly one character. Length is measured in characters, not
/// bytes, so multi-byte input like `é` still binds.
pub struct CharConverter;

impl Converter for CharConverter {
    fn convert(
        &self,
        raw: &str,
        _target: &TargetType,
        catalog: &MessageCatalog,
    ) -> Result<BoxedValue, ConversionError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(Box::new(ch)),
            _ => Err(ConversionError::from_catalog(
                catalog,
                "is_not_a_valid_character",
                raw,
            )),
        }
    }
}
