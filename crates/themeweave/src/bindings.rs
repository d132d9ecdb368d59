//! Per-theme binding blocks.
//!
//! While the resolved extension tree only ever mentions tokens, each theme
//! contributes a flat block of declarations binding those tokens to its own
//! concrete values. Consumers emit one block per scope of each theme, and
//! the cascade picks the winning binding at render time.

use indexmap::IndexMap;

use crate::error::ThemeError;
use crate::token::{custom_property_name, literal_number, literal_text, TokenPath};
use crate::value::{ExtensionTree, ThemeValue, ValueStore};

/// Flattens one theme's tree into `token -> value` declarations.
///
/// Null leaves contribute nothing; a theme that sets a path to null simply
/// leaves the token unbound under its scope. Callbacks are invoked here,
/// against `store`, since a declaration block cannot stay deferred.
pub fn resolve_bindings(
    tree: &ExtensionTree,
    store: &dyn ValueStore,
) -> Result<IndexMap<String, String>, ThemeError> {
    let mut out = IndexMap::new();
    let root = TokenPath::root();
    for (key, value) in tree {
        bind_value(value, root.child(key), store, &mut out)?;
    }
    Ok(out)
}

fn bind_value(
    value: &ThemeValue,
    path: TokenPath,
    store: &dyn ValueStore,
    out: &mut IndexMap<String, String>,
) -> Result<(), ThemeError> {
    match value {
        ThemeValue::Null => Ok(()),
        ThemeValue::String(text) => {
            out.insert(custom_property_name(&path)?, literal_text(text));
            Ok(())
        }
        ThemeValue::Number(number) => {
            out.insert(custom_property_name(&path)?, literal_number(*number));
            Ok(())
        }
        ThemeValue::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                bind_value(item, path.child(index.to_string()), store, out)?;
            }
            Ok(())
        }
        ThemeValue::Mapping(entries) => {
            for (key, item) in entries {
                bind_value(item, path.child(key), store, out)?;
            }
            Ok(())
        }
        ThemeValue::Resolver(resolve) => {
            if path.depth() != 1 {
                return Err(ThemeError::structural(format!(
                    "callback found at \"{}\"; callbacks may only appear directly under a top-level key",
                    path.dotted()
                )));
            }
            let produced = resolve(store)?;
            if matches!(produced, ThemeValue::Resolver(_)) {
                return Err(ThemeError::structural(format!(
                    "callback at \"{}\" returned another callback",
                    path.dotted()
                )));
            }
            bind_value(&produced, path, store, out)
        }
    }
}
