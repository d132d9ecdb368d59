//! Activation scopes: where each theme's binding block applies.

use std::fmt;

use crate::options::{ThemeConfig, DEFAULT_THEME_NAME, SCHEME_NAMES};
use crate::token::escape;

/// One place a theme's declarations are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThemeScope {
    /// The document root. Only the default theme lives here.
    Root,
    /// A CSS selector, emitted verbatim.
    Selector(String),
    /// A media query wrapping the theme's declarations.
    Media(String),
}

impl fmt::Display for ThemeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeScope::Root => f.write_str(":root"),
            ThemeScope::Selector(selector) | ThemeScope::Media(selector) => {
                f.write_str(selector)
            }
        }
    }
}

/// Derives the activation scopes for a theme.
///
/// The default theme is always `:root`. The `dark` and `light` themes get
/// a class scope plus the matching `prefers-color-scheme` media query. Any
/// other theme gets its configured selectors, falling back to a class
/// named after the theme only when no selector list was configured at all,
/// plus its configured media query if any.
pub fn scopes_for_theme(theme: &ThemeConfig) -> Vec<ThemeScope> {
    if theme.name == DEFAULT_THEME_NAME {
        return vec![ThemeScope::Root];
    }

    if SCHEME_NAMES.contains(&theme.name.as_str()) {
        return vec![
            ThemeScope::Selector(format!(".{}", theme.name)),
            ThemeScope::Media(format!("@media (prefers-color-scheme: {})", theme.name)),
        ];
    }

    let mut scopes = match &theme.selectors {
        Some(selectors) => selectors
            .iter()
            .map(|selector| ThemeScope::Selector(selector.clone()))
            .collect(),
        None => vec![ThemeScope::Selector(format!(".{}", escape(&theme.name)))],
    };
    if let Some(media_query) = &theme.media_query {
        scopes.push(ThemeScope::Media(media_query.clone()));
    }
    scopes
}
