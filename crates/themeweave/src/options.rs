//! User-facing configuration types and their validation.

use serde::Deserialize;

use crate::error::ThemeError;
use crate::value::ExtensionTree;

/// The name under which the default theme is registered internally. User
/// themes may not claim it.
pub const DEFAULT_THEME_NAME: &str = "__default";

/// Theme names with built-in color-scheme activation.
pub const SCHEME_NAMES: [&str; 2] = ["dark", "light"];

/// One named theme.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
    /// Selectors under which this theme's bindings apply. `None` means
    /// "use the default `.{name}` class"; an explicitly empty list means
    /// "no selector activation at all", so the two are distinct.
    #[serde(default)]
    pub selectors: Option<Vec<String>>,
    /// A media query under which this theme's bindings apply.
    #[serde(default, alias = "mediaQuery")]
    pub media_query: Option<String>,
    #[serde(default)]
    pub extend: ExtensionTree,
}

/// The default theme. It is always active at `:root`, so it takes no name
/// and no activation config; the scope fields exist only so that supplying
/// them can be rejected with a useful message instead of silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DefaultThemeConfig {
    #[serde(default)]
    pub selectors: Option<Vec<String>>,
    #[serde(default, alias = "mediaQuery")]
    pub media_query: Option<String>,
    #[serde(default)]
    pub extend: ExtensionTree,
}

/// The full configuration: a default theme plus any number of named ones.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MultiThemeOptions {
    #[serde(default, alias = "defaultTheme")]
    pub default_theme: DefaultThemeConfig,
    #[serde(default)]
    pub themes: Vec<ThemeConfig>,
}

impl MultiThemeOptions {
    /// Parses options from YAML and validates them.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let options: Self = serde_yaml::from_str(source)
            .map_err(|err| ThemeError::validation(err.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Parses options from JSON and validates them.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let options: Self = serde_json::from_str(source)
            .map_err(|err| ThemeError::validation(err.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Checks naming and activation rules without touching the trees.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.default_theme.selectors.is_some() {
            return Err(ThemeError::validation(
                "the default theme is always active and cannot be given selectors",
            ));
        }
        if self.default_theme.media_query.is_some() {
            return Err(ThemeError::validation(
                "the default theme is always active and cannot be given a media query",
            ));
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.themes.len());
        for theme in &self.themes {
            if theme.name.trim().is_empty() {
                return Err(ThemeError::validation("themes must have a non-empty name"));
            }
            if theme.name == DEFAULT_THEME_NAME {
                return Err(ThemeError::validation(format!(
                    "\"{DEFAULT_THEME_NAME}\" is reserved for the default theme"
                )));
            }
            if seen.contains(&theme.name.as_str()) {
                return Err(ThemeError::validation(format!(
                    "theme names must be unique, \"{}\" appears more than once",
                    theme.name
                )));
            }
            seen.push(&theme.name);

            if SCHEME_NAMES.contains(&theme.name.as_str()) {
                if theme.selectors.is_some() {
                    return Err(ThemeError::validation(format!(
                        "the \"{}\" theme activates by color scheme and cannot be given selectors",
                        theme.name
                    )));
                }
                if theme.media_query.is_some() {
                    return Err(ThemeError::validation(format!(
                        "the \"{}\" theme activates by color scheme and cannot be given a media query",
                        theme.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// The default theme first, then the named themes in declaration
    /// order. This is the evaluation order for merging.
    pub fn evaluation_order(&self) -> Vec<ThemeConfig> {
        let mut themes = Vec::with_capacity(self.themes.len() + 1);
        themes.push(ThemeConfig {
            name: DEFAULT_THEME_NAME.to_string(),
            selectors: None,
            media_query: None,
            extend: self.default_theme.extend.clone(),
        });
        themes.extend(self.themes.iter().cloned());
        themes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ThemeValue;

    fn named(name: &str) -> ThemeConfig {
        ThemeConfig {
            name: name.to_string(),
            selectors: None,
            media_query: None,
            extend: ExtensionTree::new(),
        }
    }

    #[test]
    fn test_empty_options_validate() {
        assert_eq!(MultiThemeOptions::default().validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let options = MultiThemeOptions {
            themes: vec![named("ocean"), named("ocean")],
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(ThemeError::Validation(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let options = MultiThemeOptions {
            themes: vec![named("  ")],
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(ThemeError::Validation(_))));
    }

    #[test]
    fn test_reserved_default_name_rejected() {
        let options = MultiThemeOptions {
            themes: vec![named(DEFAULT_THEME_NAME)],
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(ThemeError::Validation(_))));
    }

    #[test]
    fn test_default_theme_cannot_take_selectors() {
        let options = MultiThemeOptions {
            default_theme: DefaultThemeConfig {
                selectors: Some(vec![".root".to_string()]),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(ThemeError::Validation(_))));
    }

    #[test]
    fn test_default_theme_cannot_take_media_query() {
        let options = MultiThemeOptions {
            default_theme: DefaultThemeConfig {
                media_query: Some("@media print".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(ThemeError::Validation(_))));
    }

    #[test]
    fn test_scheme_theme_cannot_take_activation_config() {
        for name in SCHEME_NAMES {
            let with_selectors = MultiThemeOptions {
                themes: vec![ThemeConfig {
                    selectors: Some(vec![".x".to_string()]),
                    ..named(name)
                }],
                ..Default::default()
            };
            assert!(matches!(
                with_selectors.validate(),
                Err(ThemeError::Validation(_))
            ));

            let with_media = MultiThemeOptions {
                themes: vec![ThemeConfig {
                    media_query: Some("@media print".to_string()),
                    ..named(name)
                }],
                ..Default::default()
            };
            assert!(matches!(
                with_media.validate(),
                Err(ThemeError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_scheme_theme_without_activation_config_is_fine() {
        let options = MultiThemeOptions {
            themes: vec![named("dark"), named("light")],
            ..Default::default()
        };
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn test_evaluation_order_puts_default_first() {
        let options = MultiThemeOptions {
            themes: vec![named("ocean"), named("forest")],
            ..Default::default()
        };
        let names: Vec<String> = options
            .evaluation_order()
            .into_iter()
            .map(|theme| theme.name)
            .collect();
        assert_eq!(names, [DEFAULT_THEME_NAME, "ocean", "forest"]);
    }

    #[test]
    fn test_options_parse_from_yaml() {
        let options = MultiThemeOptions::from_yaml(
            r#"
defaultTheme:
  extend:
    colors:
      primary: blue
themes:
  - name: ocean
    mediaQuery: "@media (min-width: 600px)"
    extend:
      colors:
        primary: navy
"#,
        )
        .unwrap();

        assert_eq!(
            options.default_theme.extend["colors"],
            ThemeValue::Mapping(indexmap::indexmap! {
                "primary".to_string() => ThemeValue::from("blue"),
            })
        );
        assert_eq!(options.themes[0].name, "ocean");
        assert_eq!(
            options.themes[0].media_query.as_deref(),
            Some("@media (min-width: 600px)")
        );
    }

    #[test]
    fn test_options_parse_from_json() {
        let options = MultiThemeOptions::from_json(
            r#"{
                "themes": [
                    {"name": "ocean", "selectors": [], "extend": {}}
                ]
            }"#,
        )
        .unwrap();

        // An explicitly empty selector list is kept distinct from absent.
        assert_eq!(options.themes[0].selectors, Some(vec![]));
    }

    #[test]
    fn test_invalid_yaml_is_validation_error() {
        assert!(matches!(
            MultiThemeOptions::from_yaml("themes: 12"),
            Err(ThemeError::Validation(_))
        ));
    }
}
