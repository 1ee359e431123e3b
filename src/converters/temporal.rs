use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::converters::traits::{ConversionError, Converter};
use crate::converters::types::{BoxedValue, TargetType};
use crate::messages::MessageCatalog;

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Wall-clock time of day; seconds are optional and default to zero.
pub struct TimeConverter;

impl Converter for TimeConverter {
    fn convert(
        &self,
        raw: &str,
        _target: &TargetType,
        catalog: &MessageCatalog,
    ) -> Result<BoxedValue, ConversionError> {
        TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
            .map(|time| Box::new(time) as BoxedValue)
            .ok_or_else(|| ConversionError::from_catalog(catalog, "is_not_a_valid_time", raw))
    }
}

/// Calendar date in ISO `year-month-day` order.
pub struct DateConverter;

impl Converter for DateConverter {
    fn convert(
        &self,
        raw: &str,
        _target: &TargetType,
        catalog: &MessageCatalog,
    ) -> Result<BoxedValue, ConversionError> {
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
            .map(|date| Box::new(date) as BoxedValue)
            .ok_or_else(|| ConversionError::from_catalog(catalog, "is_not_a_valid_date", raw))
    }
}

/// Date plus time, with either `T` or a space between the halves and
/// optional seconds.
pub struct DateTimeConverter;

impl Converter for DateTimeConverter {
    fn convert(
        &self,
        raw: &str,
        _target: &TargetType,
        catalog: &MessageCatalog,
    ) -> Result<BoxedValue, ConversionError> {
        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|datetime| Box::new(datetime) as BoxedValue)
            .ok_or_else(|| ConversionError::from_catalog(catalog, "is_not_a_valid_datetime", raw))
    }
}
