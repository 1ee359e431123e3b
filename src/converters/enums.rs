use crate::converters::traits::{ConversionError, Converter};
use crate::converters::types::{BoxedValue, TargetType, TypeFamily};
use crate::messages::MessageCatalog;

/// Fallback converter for every enumerated target. Input starting with an
/// ASCII digit is interpreted as a zero-based ordinal; anything else must
/// match a declared constant name exactly, case included.
pub struct EnumConverter;

impl EnumConverter {
    fn invalid(catalog: &MessageCatalog, raw: &str) -> ConversionError {
        ConversionError::from_catalog(catalog, "is_not_a_valid_enum_value", raw)
    }
}

impl Converter for EnumConverter {
    fn convert(
        &self,
        raw: &str,
        target: &TargetType,
        catalog: &MessageCatalog,
    ) -> Result<BoxedValue, ConversionError> {
        let TypeFamily::Enumerated(shape) = target.family() else {
            return Err(Self::invalid(catalog, raw));
        };

        let ordinal = if raw.starts_with(|ch: char| ch.is_ascii_digit()) {
            raw.parse::<usize>()
                .map_err(|_| Self::invalid(catalog, raw))?
        } else {
            shape
                .names
                .iter()
                .position(|name| *name == raw)
                .ok_or_else(|| Self::invalid(catalog, raw))?
        };

        (shape.by_ordinal)(ordinal).ok_or_else(|| Self::invalid(catalog, raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::types::Bindable;

    crate::bindable_enum! {
        enum Priority { Low, Medium, High }
    }

    fn convert(raw: &str) -> Result<Priority, ConversionError> {
        let catalog = MessageCatalog::builtin();
        EnumConverter
            .convert(raw, &Priority::target_type(), &catalog)
            .map(|value| *value.downcast::<Priority>().expect("priority value"))
    }

    #[test]
    fn resolves_by_ordinal() {
        assert_eq!(convert("0").expect("valid"), Priority::Low);
        assert_eq!(convert("2").expect("valid"), Priority::High);
    }

    #[test]
    fn resolves_by_exact_name() {
        assert_eq!(convert("Medium").expect("valid"), Priority::Medium);
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let err = convert("medium").expect_err("wrong case");
        assert_eq!(err.message(), "medium is not a valid enum value.");
    }

    #[test]
    fn rejects_out_of_range_ordinal() {
        let err = convert("5").expect_err("out of range");
        assert_eq!(err.message(), "5 is not a valid enum value.");
    }

    #[test]
    fn digit_prefix_commits_to_ordinal_parsing() {
        let err = convert("2fast").expect_err("junk after digit");
        assert_eq!(err.message(), "2fast is not a valid enum value.");
    }
}
