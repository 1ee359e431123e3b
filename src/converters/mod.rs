//! Typed value conversion.
//!
//! This module provides the converter contract, the builtin converter
//! family, and the registry that dispatches raw request strings to typed
//! values.
//!
//! ## Key Components
//!
//! - [`Converter`] - Main trait for implementing custom converters
//! - [`ConverterRegistry`] - Registry resolving target types to converters
//! - [`TargetType`] - Descriptor of a conversion target and its family
//! - [`Bindable`] / [`Enumerated`] - Traits a target type implements to
//!   participate in dispatch
//! - [`bindable_enum!`](crate::bindable_enum) - Declares an enum the
//!   registry's fallback can resolve by ordinal or name
//!
//! ## Example
//!
//! ```rust,ignore
//! use formbind::converters::ConverterRegistry;
//! use formbind::messages::MessageCatalog;
//!
//! let registry = ConverterRegistry::with_defaults();
//! let catalog = MessageCatalog::builtin();
//!
//! let age = registry.convert::<i32>(Some("34"), &catalog)?;
//! assert_eq!(age, Some(34));
//! ```

mod enums;
mod numbers;
mod primitives;
mod registry;
mod temporal;
mod traits;
mod types;

pub use enums::EnumConverter;
pub use numbers::{FloatConverter, IntConverter};
pub use primitives::{BooleanConverter, CharConverter};
pub use registry::{BindError, ConverterRegistry, RegistryError};
pub use temporal::{DateConverter, DateTimeConverter, TimeConverter};
pub use traits::{ConversionError, Converter};
pub use types::{
    Bindable, BoxedValue, EnumShape, Enumerated, FamilyKind, TargetType, TypeFamily,
};
