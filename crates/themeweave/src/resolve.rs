//! Resolution of the merged tree into reference tokens.
//!
//! Every leaf in the merged tree becomes a reference expression naming a
//! custom property rather than carrying a concrete value. The concrete
//! values live in the per-theme binding blocks (see [`crate::bindings`]),
//! so consumers that read the resolved tree pick up whichever theme is
//! active at render time.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::ThemeError;
use crate::token::{ReferenceExpr, TokenPath};
use crate::value::{ExtensionTree, ThemeValue, ValueStore};

/// A deferred resolved subtree. Invoked with the runtime value store once
/// the consumer is ready to supply one.
pub type DeferredFn =
    Arc<dyn Fn(&dyn ValueStore) -> Result<ResolvedValue, ThemeError> + Send + Sync>;

/// The top level of a resolved tree.
pub type ResolvedExtension = IndexMap<String, ResolvedValue>;

/// A node of the resolved tree. Mirrors the structural shape of the input
/// with every leaf replaced by a token reference.
#[derive(Clone)]
pub enum ResolvedValue {
    /// A null leaf, passed through as-is.
    Null,
    /// A leaf rewritten to reference a custom property.
    Reference(ReferenceExpr),
    Sequence(Vec<ResolvedValue>),
    Mapping(IndexMap<String, ResolvedValue>),
    /// A top-level callback, re-wrapped so resolution happens against the
    /// caller's store when invoked.
    Deferred(DeferredFn),
}

impl ResolvedValue {
    /// Invokes every [`ResolvedValue::Deferred`] node against `store`,
    /// yielding a fully plain tree. Mostly useful in tests and in
    /// inspection tooling; ordinary consumers hand the deferred nodes to
    /// their framework unopened.
    pub fn forced(&self, store: &dyn ValueStore) -> Result<ResolvedValue, ThemeError> {
        match self {
            ResolvedValue::Deferred(resolve) => resolve(store)?.forced(store),
            ResolvedValue::Sequence(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(item.forced(store)?);
                }
                Ok(ResolvedValue::Sequence(out))
            }
            ResolvedValue::Mapping(entries) => {
                let mut out = IndexMap::with_capacity(entries.len());
                for (key, value) in entries {
                    out.insert(key.clone(), value.forced(store)?);
                }
                Ok(ResolvedValue::Mapping(out))
            }
            plain => Ok(plain.clone()),
        }
    }
}

impl fmt::Debug for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedValue::Null => f.write_str("Null"),
            ResolvedValue::Reference(expr) => f.debug_tuple("Reference").field(expr).finish(),
            ResolvedValue::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            ResolvedValue::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
            ResolvedValue::Deferred(_) => f.write_str("Deferred(<callback>)"),
        }
    }
}

impl PartialEq for ResolvedValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ResolvedValue::Null, ResolvedValue::Null) => true,
            (ResolvedValue::Reference(a), ResolvedValue::Reference(b)) => a == b,
            (ResolvedValue::Sequence(a), ResolvedValue::Sequence(b)) => a == b,
            (ResolvedValue::Mapping(a), ResolvedValue::Mapping(b)) => a == b,
            (ResolvedValue::Deferred(a), ResolvedValue::Deferred(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Rewrites the merged tree so every leaf references its custom property.
///
/// Callbacks are only legal directly under a top-level key; one found any
/// deeper fails with [`ThemeError::Structural`].
pub fn resolve_extension(tree: &ExtensionTree) -> Result<ResolvedExtension, ThemeError> {
    let root = TokenPath::root();
    let mut out = ResolvedExtension::with_capacity(tree.len());
    for (key, value) in tree {
        out.insert(key.clone(), resolve_value(value, root.child(key))?);
    }
    Ok(out)
}

fn resolve_value(value: &ThemeValue, path: TokenPath) -> Result<ResolvedValue, ThemeError> {
    match value {
        ThemeValue::Null => Ok(ResolvedValue::Null),
        ThemeValue::String(text) => Ok(ResolvedValue::Reference(ReferenceExpr::for_text(
            text, &path,
        )?)),
        ThemeValue::Number(_) => Ok(ResolvedValue::Reference(ReferenceExpr::plain(&path)?)),
        ThemeValue::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                out.push(resolve_value(item, path.child(index.to_string()))?);
            }
            Ok(ResolvedValue::Sequence(out))
        }
        ThemeValue::Mapping(entries) => {
            let mut out = IndexMap::with_capacity(entries.len());
            for (key, item) in entries {
                out.insert(key.clone(), resolve_value(item, path.child(key))?);
            }
            Ok(ResolvedValue::Mapping(out))
        }
        ThemeValue::Resolver(resolve) => {
            if path.depth() != 1 {
                return Err(ThemeError::structural(format!(
                    "callback found at \"{}\"; callbacks may only appear directly under a top-level key",
                    path.dotted()
                )));
            }
            let resolve = Arc::clone(resolve);
            Ok(ResolvedValue::Deferred(Arc::new(move |store| {
                let produced = resolve(store)?;
                if matches!(produced, ThemeValue::Resolver(_)) {
                    return Err(ThemeError::structural(format!(
                        "callback at \"{}\" returned another callback",
                        path.dotted()
                    )));
                }
                resolve_value(&produced, path.clone())
            })))
        }
    }
}
