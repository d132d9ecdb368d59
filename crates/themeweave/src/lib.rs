//! Multi-theme style compilation.
//!
//! Takes any number of partial theme trees and compiles them into two
//! artifacts:
//!
//! - a single **extension tree** whose leaves are custom-property
//!   references (`var(--colors-primary)`, or an `rgb(var(..) / ..)`
//!   recombination for colors), shared by every theme;
//! - one **binding block** per theme, mapping each custom property to that
//!   theme's concrete value under the theme's activation scopes (a class,
//!   configured selectors, a media query, or `:root` for the default
//!   theme).
//!
//! Styling utilities generated against the extension tree never mention a
//! theme; switching the active scope swaps every value at once through the
//! CSS cascade.
//!
//! # Example
//!
//! ```rust
//! use themeweave::{compile, MultiThemeOptions, NullStore, ThemeScope};
//!
//! let options = MultiThemeOptions::from_yaml(r##"
//! defaultTheme:
//!   extend:
//!     colors:
//!       primary: "#0000ff"
//! themes:
//!   - name: crimson
//!     extend:
//!       colors:
//!         primary: "#ff0000"
//! "##).unwrap();
//!
//! let compiled = compile(&options, &NullStore).unwrap();
//!
//! // Both themes share one token...
//! let colors = match &compiled.extension["colors"] {
//!     themeweave::ResolvedValue::Mapping(colors) => colors,
//!     other => panic!("expected a mapping, got {other:?}"),
//! };
//! assert_eq!(
//!     colors["primary"].to_owned(),
//!     themeweave::ResolvedValue::Reference(themeweave::ReferenceExpr::Color {
//!         token: "--colors-primary".to_string(),
//!         alpha: None,
//!     }),
//! );
//!
//! // ...and each binds its own value under its own scope.
//! assert_eq!(compiled.themes[0].scopes, [ThemeScope::Root]);
//! assert_eq!(compiled.themes[0].declarations["--colors-primary"], "0 0 255");
//! assert_eq!(compiled.themes[1].declarations["--colors-primary"], "255 0 0");
//! ```

pub mod bindings;
pub mod color;
pub mod error;
pub mod merge;
pub mod options;
pub mod plugin;
pub mod resolve;
pub mod scope;
pub mod token;
pub mod value;

pub use bindings::resolve_bindings;
pub use color::Rgba;
pub use error::ThemeError;
pub use merge::merge_themes;
pub use options::{
    DefaultThemeConfig, MultiThemeOptions, ThemeConfig, DEFAULT_THEME_NAME, SCHEME_NAMES,
};
pub use plugin::{compile, resolve_themes_as_extension, CompiledThemes, ThemeRegistration};
pub use resolve::{resolve_extension, ResolvedExtension, ResolvedValue};
pub use scope::{scopes_for_theme, ThemeScope};
pub use token::{custom_property_name, ReferenceExpr, TokenPath};
pub use value::{ExtensionTree, NullStore, ThemeValue, ValueStore};
