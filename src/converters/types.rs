use std::any::{Any, TypeId, type_name};

/// Type-erased converted value; ownership transfers to the caller.
pub type BoxedValue = Box<dyn Any + Send>;

/// Type family the dispatcher can fall back on when no exact converter is
/// registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FamilyKind {
    Scalar,
    Enumerated,
}

/// Ordered constant sequence of a bindable enum: declared names plus an
/// ordinal constructor. This is what lets one fallback converter serve every
/// enum without reflection.
#[derive(Debug, Clone, Copy)]
pub struct EnumShape {
    pub names: &'static [&'static str],
    pub by_ordinal: fn(usize) -> Option<BoxedValue>,
}

/// Classification carried by a target type descriptor.
#[derive(Debug, Clone, Copy)]
pub enum TypeFamily {
    Scalar,
    Enumerated(EnumShape),
}

/// Descriptor of a conversion target: type identity, display name, and
/// family classification.
#[derive(Debug, Clone, Copy)]
pub struct TargetType {
    id: TypeId,
    name: &'static str,
    family: TypeFamily,
}

impl TargetType {
    pub fn scalar<T: Any + Send>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            family: TypeFamily::Scalar,
        }
    }

    pub fn enumerated<T: Enumerated>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            family: TypeFamily::Enumerated(EnumShape {
                names: T::NAMES,
                by_ordinal: erased_ordinal::<T>,
            }),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn family(&self) -> TypeFamily {
        self.family
    }

    pub fn family_kind(&self) -> FamilyKind {
        match self.family {
            TypeFamily::Scalar => FamilyKind::Scalar,
            TypeFamily::Enumerated(_) => FamilyKind::Enumerated,
        }
    }
}

fn erased_ordinal<T: Enumerated>(ordinal: usize) -> Option<BoxedValue> {
    T::from_ordinal(ordinal).map(|value| Box::new(value) as BoxedValue)
}

/// A type the dispatcher can produce from a raw request string.
pub trait Bindable: Any + Send + Sized {
    fn target_type() -> TargetType;
}

/// Bindable enums expose their constants in declaration order.
pub trait Enumerated: Any + Send + Sized {
    /// Variant names in declaration order.
    const NAMES: &'static [&'static str];

    /// Constant at the zero-based ordinal, if in range.
    fn from_ordinal(ordinal: usize) -> Option<Self>;

    /// Declared name of this constant.
    fn name(&self) -> &'static str;
}

macro_rules! scalar_bindable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bindable for $ty {
                fn target_type() -> TargetType {
                    TargetType::scalar::<$ty>()
                }
            }
        )*
    };
}

scalar_bindable!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool, char);
scalar_bindable!(chrono::NaiveDate, chrono::NaiveTime, chrono::NaiveDateTime);

/// Declares a fieldless enum and implements [`Enumerated`] and [`Bindable`]
/// for it, so the registry's enum fallback can resolve it by ordinal or name.
/// The declared enum derives `Debug`, `Clone`, `Copy`, `PartialEq` and `Eq`.
///
/// ```rust,ignore
/// formbind::bindable_enum! {
///     pub enum Status { Draft, Published, Archived }
/// }
/// ```
#[macro_export]
macro_rules! bindable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $crate::converters::Enumerated for $name {
            const NAMES: &'static [&'static str] = &[$(stringify!($variant)),+];

            fn from_ordinal(ordinal: usize) -> Option<Self> {
                const ALL: &[$name] = &[$($name::$variant),+];
                ALL.get(ordinal).copied()
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl $crate::converters::Bindable for $name {
            fn target_type() -> $crate::converters::TargetType {
                $crate::converters::TargetType::enumerated::<$name>()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::bindable_enum! {
        enum Season { Spring, Summer, Autumn, Winter }
    }

    #[test]
    fn enum_names_follow_declaration_order() {
        assert_eq!(Season::NAMES, &["Spring", "Summer", "Autumn", "Winter"]);
        assert_eq!(Season::Autumn.name(), "Autumn");
    }

    #[test]
    fn from_ordinal_respects_bounds() {
        assert_eq!(Season::from_ordinal(0), Some(Season::Spring));
        assert_eq!(Season::from_ordinal(3), Some(Season::Winter));
        assert_eq!(Season::from_ordinal(4), None);
    }

    #[test]
    fn target_type_classifies_families() {
        let scalar = i32::target_type();
        assert_eq!(scalar.family_kind(), FamilyKind::Scalar);
        assert_eq!(scalar.id(), TypeId::of::<i32>());

        let enumerated = Season::target_type();
        assert_eq!(enumerated.family_kind(), FamilyKind::Enumerated);
        let TypeFamily::Enumerated(shape) = enumerated.family() else {
            panic!("expected enumerated family");
        };
        assert_eq!(shape.names.len(), 4);
    }

    #[test]
    fn erased_ordinal_constructor_round_trips() {
        let TypeFamily::Enumerated(shape) = Season::target_type().family() else {
            panic!("expected enumerated family");
        };
        let value = (shape.by_ordinal)(1).expect("in range");
        let season = value.downcast::<Season>().expect("season value");
        assert_eq!(*season, Season::Summer);
        assert!((shape.by_ordinal)(9).is_none());
    }
}
