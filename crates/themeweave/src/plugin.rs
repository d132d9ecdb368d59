//! The top-level compilation pipeline.
//!
//! Validates options, merges every theme into the shared extension tree,
//! resolves the tree to token references, and flattens each theme into the
//! binding blocks for its activation scopes.

use indexmap::IndexMap;

use crate::bindings::resolve_bindings;
use crate::error::ThemeError;
use crate::merge::merge_themes;
use crate::options::{MultiThemeOptions, ThemeConfig};
use crate::resolve::{resolve_extension, ResolvedExtension};
use crate::scope::{scopes_for_theme, ThemeScope};
use crate::value::ValueStore;

/// One theme's contribution to the output: its scopes and the token
/// bindings to emit under each of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeRegistration {
    pub name: String,
    pub scopes: Vec<ThemeScope>,
    pub declarations: IndexMap<String, String>,
}

/// The full compilation result.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledThemes {
    /// The shared tree of token references. Identical regardless of which
    /// theme is active.
    pub extension: ResolvedExtension,
    /// Per-theme binding blocks, default theme first.
    pub themes: Vec<ThemeRegistration>,
}

/// Merges the given themes and resolves the combined tree to references.
///
/// This is the extension half of [`compile`], exposed separately for
/// consumers that build their binding emission elsewhere.
pub fn resolve_themes_as_extension(
    themes: &[ThemeConfig],
) -> Result<ResolvedExtension, ThemeError> {
    resolve_extension(&merge_themes(themes)?)
}

/// Runs the whole pipeline.
///
/// `store` backs any top-level callbacks while flattening declarations;
/// callbacks in the shared extension stay deferred so the consumer can
/// supply its own store later.
pub fn compile(
    options: &MultiThemeOptions,
    store: &dyn ValueStore,
) -> Result<CompiledThemes, ThemeError> {
    options.validate()?;
    let themes = options.evaluation_order();

    let extension = resolve_themes_as_extension(&themes)?;

    let mut registrations = Vec::with_capacity(themes.len());
    for theme in &themes {
        registrations.push(ThemeRegistration {
            name: theme.name.clone(),
            scopes: scopes_for_theme(theme),
            declarations: resolve_bindings(&theme.extend, store)?,
        });
    }

    Ok(CompiledThemes {
        extension,
        themes: registrations,
    })
}
