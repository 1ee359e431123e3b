pub mod config;
pub mod converters;
pub mod messages;
pub mod runtime;
