//! Token naming and reference expressions.
//!
//! Every leaf in a theme tree gets a stable custom-property name derived
//! from its path. The extension resolver then refers to the property
//! (`var(--colors-primary)`), while each theme's declaration block supplies
//! the concrete value under its own scope. Naming has one collapse rule: a
//! terminal `DEFAULT` segment is dropped, so `{ primary: { DEFAULT: x } }`
//! and a bare `{ primary: x }` declared by another theme converge on the
//! same token.
//!
//! # Example
//!
//! ```rust
//! use themeweave::token::{custom_property_name, ReferenceExpr, TokenPath};
//!
//! let path = TokenPath::root().child("colors").child("primary");
//! assert_eq!(custom_property_name(&path).unwrap(), "--colors-primary");
//!
//! // A terminal DEFAULT maps to the parent's token.
//! let with_default = path.child("DEFAULT");
//! assert_eq!(custom_property_name(&with_default).unwrap(), "--colors-primary");
//!
//! // Color values get an opacity slot; plain values a bare reference.
//! let color = ReferenceExpr::for_text("#ff0000", &path).unwrap();
//! assert_eq!(color.to_string(), "rgb(var(--colors-primary) / <alpha-value>)");
//! let plain = ReferenceExpr::for_text("1rem", &path).unwrap();
//! assert_eq!(plain.to_string(), "var(--colors-primary)");
//! ```

use std::fmt;

use crate::color::Rgba;
use crate::error::ThemeError;

/// The reserved mapping key meaning "the value of this branch itself".
pub const DEFAULT_MARKER: &str = "DEFAULT";

/// Characters that must be escaped in a custom-property name.
const SPECIAL: &str = "\\^$.*+?()[]{}|";

/// The path to a value inside a theme tree: object keys and stringified
/// sequence indices, outermost first.
///
/// Paths are immutable; [`child`](TokenPath::child) returns an extended
/// copy, so recursive walks can hand each branch its own path without
/// sharing a mutable accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenPath(Vec<String>);

impl TokenPath {
    /// The empty path at the root of a tree.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds a path from pre-collected segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns this path extended by one segment.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Dot-joined rendering for error messages.
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

/// Derives the custom-property name for a path.
///
/// Segments are joined with `-` under a `--` prefix. The final segment is
/// dropped iff it equals [`DEFAULT_MARKER`] exactly (case-sensitive,
/// terminal position only); a marker elsewhere in the path is preserved
/// verbatim. Characters special in CSS are backslash-escaped.
///
/// Fails with a validation error when any segment contains whitespace:
/// a token that crosses a structural boundary would silently corrupt every
/// declaration referring to it.
pub fn custom_property_name(path: &TokenPath) -> Result<String, ThemeError> {
    if let Some(segment) = path
        .segments()
        .iter()
        .find(|segment| segment.chars().any(char::is_whitespace))
    {
        return Err(ThemeError::validation(format!(
            "theme config keys cannot contain whitespace, found \"{segment}\""
        )));
    }

    let mut kept: Vec<&str> = path.segments().iter().map(String::as_str).collect();
    if kept.last().copied() == Some(DEFAULT_MARKER) {
        kept.pop();
    }

    Ok(escape(&format!("--{}", kept.join("-"))))
}

/// Backslash-escapes characters with special meaning in CSS identifiers.
pub fn escape(name: &str) -> String {
    if !name.chars().any(|c| SPECIAL.contains(c)) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if SPECIAL.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A reference to a token, as placed in the resolved extension tree.
///
/// Colors render as an `rgb()` recombination so consumers can apply an
/// opacity at use time: fully-opaque sources leave the `<alpha-value>`
/// placeholder open for substitution, while a source that already carried
/// transparency pins its own alpha.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceExpr {
    /// `var(--token)`
    Plain { token: String },
    /// `rgb(var(--token) / α)` where α is `<alpha-value>` or a literal.
    Color { token: String, alpha: Option<f64> },
}

impl ReferenceExpr {
    /// Builds the reference for a string leaf, classifying it as a color
    /// or plain text.
    pub fn for_text(text: &str, path: &TokenPath) -> Result<Self, ThemeError> {
        let token = custom_property_name(path)?;
        match Rgba::parse(text) {
            Ok(color) => Ok(ReferenceExpr::Color {
                token,
                alpha: if color.is_opaque() {
                    None
                } else {
                    Some(color.alpha)
                },
            }),
            Err(_) => Ok(ReferenceExpr::Plain { token }),
        }
    }

    /// Builds the reference for a non-string leaf (always plain).
    pub fn plain(path: &TokenPath) -> Result<Self, ThemeError> {
        Ok(ReferenceExpr::Plain {
            token: custom_property_name(path)?,
        })
    }

    /// The custom-property name this expression refers to.
    pub fn token(&self) -> &str {
        match self {
            ReferenceExpr::Plain { token } | ReferenceExpr::Color { token, .. } => token,
        }
    }
}

impl fmt::Display for ReferenceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceExpr::Plain { token } => write!(f, "var({token})"),
            ReferenceExpr::Color { token, alpha: None } => {
                write!(f, "rgb(var({token}) / <alpha-value>)")
            }
            ReferenceExpr::Color {
                token,
                alpha: Some(alpha),
            } => write!(f, "rgb(var({token}) / {alpha})"),
        }
    }
}

/// Renders a string leaf as a declaration value: colors become bare RGB
/// channel triples, anything else passes through unchanged.
pub fn literal_text(text: &str) -> String {
    match Rgba::parse(text) {
        Ok(color) => color.channels(),
        Err(_) => text.to_string(),
    }
}

/// Renders a numeric leaf as a declaration value.
pub fn literal_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Path tests
    // =========================================================================

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent = TokenPath::root().child("colors");
        let child = parent.child("primary");
        assert_eq!(parent.depth(), 1);
        assert_eq!(child.depth(), 2);
        assert_eq!(child.dotted(), "colors.primary");
    }

    // =========================================================================
    // Naming tests
    // =========================================================================

    #[test]
    fn test_name_joins_segments() {
        let path = TokenPath::from_segments(["colors", "primary", "500"]);
        assert_eq!(custom_property_name(&path).unwrap(), "--colors-primary-500");
    }

    #[test]
    fn test_name_drops_terminal_default() {
        let path = TokenPath::from_segments(["colors", "primary", "DEFAULT"]);
        assert_eq!(custom_property_name(&path).unwrap(), "--colors-primary");
    }

    #[test]
    fn test_name_keeps_non_terminal_default() {
        let path = TokenPath::from_segments(["colors", "DEFAULT", "500"]);
        assert_eq!(
            custom_property_name(&path).unwrap(),
            "--colors-DEFAULT-500"
        );
    }

    #[test]
    fn test_name_keeps_case_variant_default() {
        let path = TokenPath::from_segments(["colors", "default"]);
        assert_eq!(custom_property_name(&path).unwrap(), "--colors-default");
    }

    #[test]
    fn test_name_rejects_whitespace() {
        let path = TokenPath::from_segments(["colors", "primary color"]);
        let err = custom_property_name(&path).unwrap_err();
        assert!(matches!(err, ThemeError::Validation(_)));
        assert!(err.to_string().contains("primary color"));
    }

    #[test]
    fn test_name_escapes_special_characters() {
        let path = TokenPath::from_segments(["spacing", "1.5"]);
        assert_eq!(custom_property_name(&path).unwrap(), "--spacing-1\\.5");
    }

    // =========================================================================
    // Reference expression tests
    // =========================================================================

    #[test]
    fn test_plain_reference() {
        let path = TokenPath::from_segments(["spacing", "lg"]);
        let expr = ReferenceExpr::for_text("2rem", &path).unwrap();
        assert_eq!(expr.to_string(), "var(--spacing-lg)");
    }

    #[test]
    fn test_opaque_color_gets_placeholder() {
        let path = TokenPath::from_segments(["colors", "primary"]);
        let expr = ReferenceExpr::for_text("#ff0000", &path).unwrap();
        assert_eq!(
            expr.to_string(),
            "rgb(var(--colors-primary) / <alpha-value>)"
        );
    }

    #[test]
    fn test_transparent_color_pins_alpha() {
        let path = TokenPath::from_segments(["colors", "overlay"]);
        let expr = ReferenceExpr::for_text("rgba(0, 0, 0, 0.25)", &path).unwrap();
        assert_eq!(expr.to_string(), "rgb(var(--colors-overlay) / 0.25)");
    }

    #[test]
    fn test_number_reference_is_plain() {
        let path = TokenPath::from_segments(["zIndex", "modal"]);
        let expr = ReferenceExpr::plain(&path).unwrap();
        assert_eq!(expr.to_string(), "var(--zIndex-modal)");
    }

    // =========================================================================
    // Literal rendering tests
    // =========================================================================

    #[test]
    fn test_literal_text_color_becomes_channels() {
        assert_eq!(literal_text("blue"), "0 0 255");
        assert_eq!(literal_text("#ff6b35"), "255 107 53");
    }

    #[test]
    fn test_literal_text_passthrough() {
        assert_eq!(literal_text("1px solid black"), "1px solid black");
        assert_eq!(literal_text("thing"), "thing");
    }

    #[test]
    fn test_literal_number_formatting() {
        assert_eq!(literal_number(1.0), "1");
        assert_eq!(literal_number(0.25), "0.25");
        assert_eq!(literal_number(42.0), "42");
    }

    // =========================================================================
    // Properties
    // =========================================================================

    proptest! {
        #[test]
        fn naming_is_idempotent(segments in proptest::collection::vec("[A-Za-z][A-Za-z0-9_]{0,8}", 1..5)) {
            let path = TokenPath::from_segments(segments);
            let first = custom_property_name(&path).unwrap();
            let second = custom_property_name(&path).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn distinct_non_default_paths_get_distinct_names(
            a in proptest::collection::vec("[a-z]{1,6}", 1..4),
            b in proptest::collection::vec("[a-z]{1,6}", 1..4),
        ) {
            // Lowercase segments never hit the DEFAULT collapse, so distinct
            // paths must never collide.
            prop_assume!(a != b);
            let name_a = custom_property_name(&TokenPath::from_segments(a)).unwrap();
            let name_b = custom_property_name(&TokenPath::from_segments(b)).unwrap();
            prop_assert_ne!(name_a, name_b);
        }
    }
}
