//! The extension value tree.
//!
//! A theme's `extend` configuration is a recursive tree of [`ThemeValue`]s:
//! strings, numbers, sequences, string-keyed mappings, explicit nulls, and
//! resolver callbacks. Mappings preserve declaration order, so everything
//! derived from a tree (token names, declaration blocks) comes out in the
//! order the theme author wrote it.
//!
//! Resolver callbacks defer a subtree until the host can supply a
//! [`ValueStore`] for looking up other configuration values. They are legal
//! only as the direct value of a top-level key; the resolvers reject them
//! anywhere deeper.
//!
//! # Example
//!
//! ```rust
//! use indexmap::indexmap;
//! use themeweave::ThemeValue;
//!
//! let colors = ThemeValue::Mapping(indexmap! {
//!     "primary".to_string() => ThemeValue::from("#ff6b35"),
//!     "secondary".to_string() => ThemeValue::from("rebeccapurple"),
//! });
//! assert!(matches!(colors, ThemeValue::Mapping(_)));
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use crate::error::ThemeError;

/// A theme's raw extension tree: top-level key to value.
pub type ExtensionTree = IndexMap<String, ThemeValue>;

/// Runtime lookup handed to resolver callbacks.
///
/// The host supplies this at binding-resolution time; it is the equivalent
/// of "look up another configuration value by dotted key".
pub trait ValueStore {
    /// Looks up a configuration value. Missing keys yield [`ThemeValue::Null`].
    fn get(&self, key: &str) -> ThemeValue;
}

impl<F> ValueStore for F
where
    F: Fn(&str) -> ThemeValue,
{
    fn get(&self, key: &str) -> ThemeValue {
        self(key)
    }
}

/// A [`ValueStore`] with no values; every lookup yields [`ThemeValue::Null`].
///
/// Useful when compiling configurations that contain no resolver callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl ValueStore for NullStore {
    fn get(&self, _key: &str) -> ThemeValue {
        ThemeValue::Null
    }
}

/// A resolver callback: produces a subtree once given the host's value store.
pub type ResolverFn = Arc<dyn Fn(&dyn ValueStore) -> Result<ThemeValue, ThemeError> + Send + Sync>;

/// One value in a theme's extension tree.
#[derive(Clone)]
pub enum ThemeValue {
    /// An explicit "no value". Inert: merged like any other leaf, passed
    /// through by the extension resolver, skipped by the binding resolver.
    Null,
    /// A string leaf. Classified as a color or plain text at resolution time.
    String(String),
    /// A numeric leaf.
    Number(f64),
    /// An ordered sequence; elements are addressed by stringified index.
    Sequence(Vec<ThemeValue>),
    /// A string-keyed mapping; iteration follows declaration order.
    Mapping(IndexMap<String, ThemeValue>),
    /// A deferred subtree, resolved against the host's [`ValueStore`].
    Resolver(ResolverFn),
}

impl ThemeValue {
    /// Wraps a closure as a resolver callback value.
    ///
    /// ```rust
    /// use themeweave::{ThemeValue, ValueStore};
    ///
    /// let value = ThemeValue::resolver(|store: &dyn ValueStore| {
    ///     Ok(store.get("colors.primary"))
    /// });
    /// assert!(matches!(value, ThemeValue::Resolver(_)));
    /// ```
    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn(&dyn ValueStore) -> Result<ThemeValue, ThemeError> + Send + Sync + 'static,
    {
        ThemeValue::Resolver(Arc::new(f))
    }

    /// True for [`ThemeValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ThemeValue::Null)
    }

    /// Human-readable shape name, used in error messages.
    pub(crate) fn shape_name(&self) -> &'static str {
        match self {
            ThemeValue::Null => "null",
            ThemeValue::String(_) => "string",
            ThemeValue::Number(_) => "number",
            ThemeValue::Sequence(_) => "sequence",
            ThemeValue::Mapping(_) => "mapping",
            ThemeValue::Resolver(_) => "callback",
        }
    }
}

impl fmt::Debug for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeValue::Null => f.write_str("Null"),
            ThemeValue::String(s) => f.debug_tuple("String").field(s).finish(),
            ThemeValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            ThemeValue::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            ThemeValue::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
            ThemeValue::Resolver(_) => f.write_str("Resolver(<callback>)"),
        }
    }
}

impl PartialEq for ThemeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ThemeValue::Null, ThemeValue::Null) => true,
            (ThemeValue::String(a), ThemeValue::String(b)) => a == b,
            (ThemeValue::Number(a), ThemeValue::Number(b)) => a == b,
            (ThemeValue::Sequence(a), ThemeValue::Sequence(b)) => a == b,
            (ThemeValue::Mapping(a), ThemeValue::Mapping(b)) => a == b,
            // Callbacks are opaque; identity is the only meaningful equality.
            (ThemeValue::Resolver(a), ThemeValue::Resolver(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue::String(value.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        ThemeValue::String(value)
    }
}

impl From<f64> for ThemeValue {
    fn from(value: f64) -> Self {
        ThemeValue::Number(value)
    }
}

impl From<i64> for ThemeValue {
    fn from(value: i64) -> Self {
        ThemeValue::Number(value as f64)
    }
}

impl From<Vec<ThemeValue>> for ThemeValue {
    fn from(value: Vec<ThemeValue>) -> Self {
        ThemeValue::Sequence(value)
    }
}

impl From<IndexMap<String, ThemeValue>> for ThemeValue {
    fn from(value: IndexMap<String, ThemeValue>) -> Self {
        ThemeValue::Mapping(value)
    }
}

// Only the data subset deserializes; callbacks are code, not configuration.
// Booleans have no meaning in an extension tree and are rejected up front
// rather than silently carried into resolution.
impl<'de> Deserialize<'de> for ThemeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = ThemeValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number, null, sequence, or string-keyed mapping")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Err(E::custom(format!(
                    "unusable value in theme config: boolean `{v}`"
                )))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ThemeValue::Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ThemeValue::Number(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ThemeValue::Number(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ThemeValue::String(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ThemeValue::String(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ThemeValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ThemeValue::Null)
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                ThemeValue::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element::<ThemeValue>()? {
                    items.push(item);
                }
                Ok(ThemeValue::Sequence(items))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, ThemeValue>()? {
                    entries.insert(key, value);
                }
                Ok(ThemeValue::Mapping(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
