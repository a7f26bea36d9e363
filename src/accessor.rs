//! Pattern 1: Type-Safe Generic Accessors
//!
//! `get_property` is generic over a *capability* ("this record has a field
//! addressable by key `K`") rather than over a concrete record type. Keys are
//! zero-sized marker types, so asking for a field a record does not have is
//! rejected by the compiler:
//!
//! ```compile_fail
//! use feature_tour::accessor::{get_property, Person, Title};
//!
//! let alice = Person::new("Alice", 30);
//! get_property(&alice, Title); // Person has no `title`
//! ```

use std::fmt::{self, Display};
use tracing::debug;

/// A marker type naming one field.
pub trait Key: Copy {
    const NAME: &'static str;
}

/// Implemented once per `(record, key)` pair the record owns.
pub trait Property<K: Key> {
    type Value;

    fn property(&self) -> &Self::Value;
}

/// Read the field addressed by `key`. The return type follows the key.
pub fn get_property<R, K>(record: &R, _key: K) -> &<R as Property<K>>::Value
where
    R: Property<K>,
    K: Key,
{
    debug!(key = K::NAME, "reading property");
    record.property()
}

/// Render `key = value` for any displayable field.
pub fn describe<R, K>(record: &R, key: K) -> String
where
    R: Property<K>,
    K: Key,
    <R as Property<K>>::Value: Display,
{
    format!("{} = {}", K::NAME, get_property(record, key))
}

/// Declares a record together with its key markers and `Property` impls.
///
/// ```
/// feature_tour::typed_record! {
///     #[derive(Debug)]
///     pub struct Point {
///         x: i32 => X,
///         y: i32 => Y,
///     }
/// }
///
/// let p = Point { x: 1, y: 2 };
/// assert_eq!(*feature_tour::get_property(&p, Y), 2);
/// ```
#[macro_export]
macro_rules! typed_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $record:ident {
            $($field:ident : $ty:ty => $key:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $record {
            $($vis $field: $ty),+
        }

        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
            $vis struct $key;

            impl $crate::accessor::Key for $key {
                const NAME: &'static str = stringify!($field);
            }

            impl $crate::accessor::Property<$key> for $record {
                type Value = $ty;

                fn property(&self) -> &$ty {
                    &self.$field
                }
            }
        )+
    };
}

// ============================================================================
// Records used by the demo
// ============================================================================

typed_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Person {
        name: String => Name,
        age: u32 => Age,
    }
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

typed_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Book {
        title: String => Title,
        pages: u32 => Pages,
    }
}

impl Book {
    pub fn new(title: impl Into<String>, pages: u32) -> Self {
        Self {
            title: title.into(),
            pages,
        }
    }
}

// ============================================================================
// Lens: a first-class field projection
// ============================================================================

pub struct Lens<R, T> {
    name: &'static str,
    get: fn(&R) -> &T,
}

impl<R, T> Lens<R, T> {
    pub fn view<'a>(&self, record: &'a R) -> &'a T {
        (self.get)(record)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<R, T> Clone for Lens<R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, T> Copy for Lens<R, T> {}

impl<R, T> fmt::Debug for Lens<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens").field("name", &self.name).finish()
    }
}

/// Build a lens for key `K` on record `R`.
pub fn lens<R, K>() -> Lens<R, <R as Property<K>>::Value>
where
    R: Property<K>,
    K: Key,
{
    Lens {
        name: K::NAME,
        get: <R as Property<K>>::property,
    }
}
