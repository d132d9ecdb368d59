//! The tree merge engine.
//!
//! Merges the ordered theme list into one structural tree. Later themes
//! override earlier ones leaf-by-leaf; mappings merge per key and sequences
//! per index, so a theme can override one element of a sequence without
//! replacing the rest.
//!
//! Two shape-reconciliation rules run before ordinary merging:
//!
//! - When either side is a resolver callback, the result is a *new*
//!   callback that resolves both sides at runtime and merges their outputs.
//!   Incompatible outputs (or a callback returning another callback) only
//!   surface when that merged callback runs.
//! - When a mapping or sequence meets a bare primitive, the primitive is
//!   wrapped as `{ DEFAULT: primitive }` first. This is what lets one theme
//!   declare `colors.primary: blue` while another declares
//!   `colors.primary: { DEFAULT: red, 500: pink }` — both land on the same
//!   `DEFAULT` branch instead of conflicting.

use indexmap::IndexMap;

use crate::error::ThemeError;
use crate::options::ThemeConfig;
use crate::token::DEFAULT_MARKER;
use crate::value::{ExtensionTree, ThemeValue, ValueStore};

/// Broad shape classes used to decide whether two resolved callback outputs
/// can be merged at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Structured,
    Text,
    Numeric,
    Callback,
}

fn shape_of(value: &ThemeValue) -> Shape {
    match value {
        ThemeValue::Null | ThemeValue::Sequence(_) | ThemeValue::Mapping(_) => Shape::Structured,
        ThemeValue::String(_) => Shape::Text,
        ThemeValue::Number(_) => Shape::Numeric,
        ThemeValue::Resolver(_) => Shape::Callback,
    }
}

/// Merges every theme's `extend` tree, in evaluation order, into one tree.
///
/// The result contains the union of all paths; conflicting paths are
/// reconciled by the rules above.
pub fn merge_themes(themes: &[ThemeConfig]) -> Result<ExtensionTree, ThemeError> {
    let mut merged = ExtensionTree::new();
    for theme in themes {
        merged = merge_trees(merged, theme.extend.clone())?;
    }
    Ok(merged)
}

fn merge_trees(base: ExtensionTree, overlay: ExtensionTree) -> Result<ExtensionTree, ThemeError> {
    let mut out = base;
    for (key, value) in overlay {
        match out.get_mut(&key) {
            Some(existing) => {
                let previous = std::mem::replace(existing, ThemeValue::Null);
                *existing = merge_values(previous, value)?;
            }
            None => {
                out.insert(key, value);
            }
        }
    }
    Ok(out)
}

/// Merges two values occupying the same path, applying the customizer
/// rules. Recursion keeps applying them at every depth.
pub(crate) fn merge_values(
    base: ThemeValue,
    overlay: ThemeValue,
) -> Result<ThemeValue, ThemeError> {
    use ThemeValue::{Mapping, Null, Number, Resolver, Sequence, String};

    match (base, overlay) {
        // Either side deferred: defer the merge itself.
        (base @ Resolver(_), overlay) | (base, overlay @ Resolver(_)) => {
            Ok(merged_resolver(base, overlay))
        }

        // Null is an inert leaf: last write wins, nothing is removed.
        (Null, overlay) => Ok(overlay),
        (_, Null) => Ok(Null),

        (Mapping(base), Mapping(overlay)) => Ok(Mapping(merge_mappings(base, overlay)?)),
        (Sequence(base), Sequence(overlay)) => Ok(Sequence(merge_sequences(base, overlay)?)),

        // Mixed structured shapes: re-key the sequence by index so both
        // sides live in mapping space (the paths come out identical).
        (Mapping(base), Sequence(overlay)) => {
            Ok(Mapping(merge_mappings(base, indexed(overlay))?))
        }
        (Sequence(base), Mapping(overlay)) => {
            Ok(Mapping(merge_mappings(indexed(base), overlay)?))
        }

        // Structured vs. primitive: the primitive collapses onto the
        // DEFAULT branch instead of erroring.
        (base @ (Mapping(_) | Sequence(_)), overlay @ (String(_) | Number(_)))
        | (base @ (String(_) | Number(_)), overlay @ (Mapping(_) | Sequence(_))) => {
            merge_values(wrap_default(base), wrap_default(overlay))
        }

        // Two primitives: last write wins.
        (_, overlay) => Ok(overlay),
    }
}

fn merge_mappings(
    base: IndexMap<String, ThemeValue>,
    overlay: IndexMap<String, ThemeValue>,
) -> Result<IndexMap<String, ThemeValue>, ThemeError> {
    let mut out = base;
    for (key, value) in overlay {
        match out.get_mut(&key) {
            Some(existing) => {
                let previous = std::mem::replace(existing, ThemeValue::Null);
                *existing = merge_values(previous, value)?;
            }
            None => {
                out.insert(key, value);
            }
        }
    }
    Ok(out)
}

fn merge_sequences(
    base: Vec<ThemeValue>,
    overlay: Vec<ThemeValue>,
) -> Result<Vec<ThemeValue>, ThemeError> {
    let mut out = Vec::with_capacity(base.len().max(overlay.len()));
    let mut base = base.into_iter();
    let mut overlay = overlay.into_iter();
    loop {
        match (base.next(), overlay.next()) {
            (Some(a), Some(b)) => out.push(merge_values(a, b)?),
            (Some(a), None) => out.push(a),
            (None, Some(b)) => out.push(b),
            (None, None) => return Ok(out),
        }
    }
}

/// Re-keys a sequence as a mapping by stringified index.
fn indexed(items: Vec<ThemeValue>) -> IndexMap<String, ThemeValue> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}

/// Wraps a bare primitive as `{ DEFAULT: primitive }`; structured values
/// pass through untouched.
fn wrap_default(value: ThemeValue) -> ThemeValue {
    match value {
        primitive @ (ThemeValue::String(_) | ThemeValue::Number(_)) => {
            let mut wrapped = IndexMap::new();
            wrapped.insert(DEFAULT_MARKER.to_string(), primitive);
            ThemeValue::Mapping(wrapped)
        }
        other => other,
    }
}

/// Builds the callback that merges two sides at resolution time. Each side
/// is forced to a plain value against the runtime store, checked for shape
/// compatibility, and deep-merged.
fn merged_resolver(base: ThemeValue, overlay: ThemeValue) -> ThemeValue {
    ThemeValue::resolver(move |store| {
        let base = force(&base, store)?;
        let overlay = force(&overlay, store)?;

        if shape_of(&base) == Shape::Callback || shape_of(&overlay) == Shape::Callback {
            return Err(ThemeError::config(
                "a callback resolved to another callback; callbacks must return plain values",
            ));
        }
        if shape_of(&base) != shape_of(&overlay) {
            return Err(ThemeError::config(format!(
                "callbacks must resolve to values mergeable across themes, got {} and {}",
                base.shape_name(),
                overlay.shape_name()
            )));
        }

        // A side that resolved to null as a whole contributes nothing;
        // nulls nested inside a structured output still overwrite.
        match (base, overlay) {
            (base, ThemeValue::Null) => Ok(base),
            (ThemeValue::Null, overlay) => Ok(overlay),
            (base, overlay) => Ok(deep_merge(base, overlay)),
        }
    })
}

fn force(value: &ThemeValue, store: &dyn ValueStore) -> Result<ThemeValue, ThemeError> {
    match value {
        ThemeValue::Resolver(resolve) => resolve(store),
        other => Ok(other.clone()),
    }
}

/// Plain structural merge with no shape reconciliation: mappings per key,
/// sequences per index, everything else last-write-wins. Used on the
/// already-shape-checked outputs of merged callbacks and on wrapped
/// primitives.
fn deep_merge(base: ThemeValue, overlay: ThemeValue) -> ThemeValue {
    use ThemeValue::{Mapping, Sequence};

    match (base, overlay) {
        (Mapping(base), Mapping(overlay)) => {
            let mut out = base;
            for (key, value) in overlay {
                match out.get_mut(&key) {
                    Some(existing) => {
                        let previous = std::mem::replace(existing, ThemeValue::Null);
                        *existing = deep_merge(previous, value);
                    }
                    None => {
                        out.insert(key, value);
                    }
                }
            }
            Mapping(out)
        }
        (Sequence(base), Sequence(overlay)) => {
            let mut out = Vec::with_capacity(base.len().max(overlay.len()));
            let mut base = base.into_iter();
            let mut overlay = overlay.into_iter();
            loop {
                match (base.next(), overlay.next()) {
                    (Some(a), Some(b)) => out.push(deep_merge(a, b)),
                    (Some(a), None) => out.push(a),
                    (None, Some(b)) => out.push(b),
                    (None, None) => break,
                }
            }
            Sequence(out)
        }
        (Mapping(base), Sequence(overlay)) => {
            deep_merge(Mapping(base), Mapping(indexed(overlay)))
        }
        (Sequence(base), Mapping(overlay)) => {
            deep_merge(Mapping(indexed(base)), Mapping(overlay))
        }
        (_, overlay) => overlay,
    }
}
