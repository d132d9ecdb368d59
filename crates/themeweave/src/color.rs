//! Color value classification for theme leaves.
//!
//! A string leaf that parses as a CSS color gets special treatment from both
//! resolvers: its reference expression carries an opacity slot, and its
//! binding value is emitted as bare RGB channels so the declaration can be
//! recombined with an alpha at use time.
//!
//! Supported syntaxes:
//!
//! - RGB hex: `#f80`, `#f80c`, `#ff8800`, `#ff8800cc`
//! - Functional: `rgb(255, 136, 0)`, `rgba(255, 136, 0, 0.5)`,
//!   `rgb(255 136 0 / 50%)`
//! - HSL: `hsl(30, 100%, 50%)`, `hsla(30, 100%, 50%, 0.5)`,
//!   `hsl(30 100% 50% / 0.5)`
//! - The CSS named colors and `transparent`
//!
//! # Example
//!
//! ```rust
//! use themeweave::color::{get_alpha, is_color, Rgba};
//!
//! assert!(is_color("#ff6b35"));
//! assert!(!is_color("spacing-large"));
//!
//! assert_eq!(get_alpha("#fff").unwrap(), 1.0);
//! assert_eq!(get_alpha("rgba(0, 0, 0, 0.25)").unwrap(), 0.25);
//!
//! let orange = Rgba::parse("#ff6b35").unwrap();
//! assert_eq!(orange.channels(), "255 107 53");
//! ```

use crate::error::ThemeError;

/// A parsed color: RGB channels plus alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    /// Builds a color from channels and an alpha in `[0, 1]`.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// An opaque color.
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Parses any supported color syntax.
    pub fn parse(value: &str) -> Result<Self, ThemeError> {
        let trimmed = value.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::parse_hex(value, hex);
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, &["rgba", "rgb"]) {
            return Self::parse_rgb_function(value, args);
        }
        if let Some(args) = function_args(&lower, &["hsla", "hsl"]) {
            return Self::parse_hsl_function(value, args);
        }

        Self::parse_named(value, &lower)
    }

    /// True when the color has no transparency.
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Renders the RGB channels space-delimited with the alpha stripped,
    /// the form used for custom-property declaration values.
    pub fn channels(&self) -> String {
        format!("{} {} {}", self.red, self.green, self.blue)
    }

    /// Parses a hex color code (without the `#` prefix).
    fn parse_hex(original: &str, hex: &str) -> Result<Self, ThemeError> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ThemeError::parse(original, "invalid hex digit"));
        }
        let digit = |index: usize| -> Result<u8, ThemeError> {
            u8::from_str_radix(&hex[index..index + 1], 16)
                .map_err(|_| ThemeError::parse(original, "invalid hex digit"))
        };
        let pair = |index: usize| -> Result<u8, ThemeError> {
            u8::from_str_radix(&hex[index..index + 2], 16)
                .map_err(|_| ThemeError::parse(original, "invalid hex digit"))
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(Self::opaque(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            // #rgba
            4 => Ok(Self::new(
                digit(0)? * 17,
                digit(1)? * 17,
                digit(2)? * 17,
                f64::from(digit(3)? * 17) / 255.0,
            )),
            // #rrggbb
            6 => Ok(Self::opaque(pair(0)?, pair(2)?, pair(4)?)),
            // #rrggbbaa
            8 => Ok(Self::new(
                pair(0)?,
                pair(2)?,
                pair(4)?,
                f64::from(pair(6)?) / 255.0,
            )),
            _ => Err(ThemeError::parse(
                original,
                "hex colors must have 3, 4, 6, or 8 digits",
            )),
        }
    }

    /// Parses the argument list of `rgb()`/`rgba()`.
    fn parse_rgb_function(original: &str, args: &str) -> Result<Self, ThemeError> {
        let (components, alpha) = split_components(original, args)?;
        if components.len() != 3 {
            return Err(ThemeError::parse(
                original,
                format!("expected 3 color channels, got {}", components.len()),
            ));
        }

        let channel = |raw: &str| -> Result<u8, ThemeError> {
            let value = if let Some(percent) = raw.strip_suffix('%') {
                parse_float(original, percent)? / 100.0 * 255.0
            } else {
                parse_float(original, raw)?
            };
            Ok(value.round().clamp(0.0, 255.0) as u8)
        };

        Ok(Self::new(
            channel(components[0])?,
            channel(components[1])?,
            channel(components[2])?,
            match alpha {
                Some(raw) => parse_alpha(original, raw)?,
                None => 1.0,
            },
        ))
    }

    /// Parses the argument list of `hsl()`/`hsla()` and converts to RGB.
    fn parse_hsl_function(original: &str, args: &str) -> Result<Self, ThemeError> {
        let (components, alpha) = split_components(original, args)?;
        if components.len() != 3 {
            return Err(ThemeError::parse(
                original,
                format!("expected 3 color channels, got {}", components.len()),
            ));
        }

        let hue = parse_float(
            original,
            components[0].strip_suffix("deg").unwrap_or(components[0]),
        )?;
        let saturation =
            parse_float(original, components[1].strip_suffix('%').unwrap_or(components[1]))?
                / 100.0;
        let lightness =
            parse_float(original, components[2].strip_suffix('%').unwrap_or(components[2]))?
                / 100.0;

        let (red, green, blue) = hsl_to_rgb(
            hue,
            saturation.clamp(0.0, 1.0),
            lightness.clamp(0.0, 1.0),
        );
        Ok(Self::new(
            red,
            green,
            blue,
            match alpha {
                Some(raw) => parse_alpha(original, raw)?,
                None => 1.0,
            },
        ))
    }

    /// Looks up a CSS named color (or `transparent`).
    fn parse_named(original: &str, lower: &str) -> Result<Self, ThemeError> {
        if lower == "transparent" {
            return Ok(Self::new(0, 0, 0, 0.0));
        }
        NAMED_COLORS
            .binary_search_by(|(name, _)| name.cmp(&lower))
            .map(|index| {
                let [red, green, blue] = NAMED_COLORS[index].1;
                Self::opaque(red, green, blue)
            })
            .map_err(|_| ThemeError::parse(original, "not a recognized color"))
    }
}

/// Returns true iff `value` parses as a recognized color syntax.
///
/// Plain strings that happen to contain color words do not qualify; the
/// whole value must be a color.
pub fn is_color(value: &str) -> bool {
    Rgba::parse(value).is_ok()
}

/// Extracts the alpha channel of a color string.
///
/// Colors with no explicit alpha yield `1.0`. Non-color input is a parse
/// error.
pub fn get_alpha(value: &str) -> Result<f64, ThemeError> {
    Ok(Rgba::parse(value)?.alpha)
}

/// Strips a `name(...)` wrapper, trying the given function names longest
/// first, and returns the inner argument text.
fn function_args<'a>(lower: &'a str, names: &[&str]) -> Option<&'a str> {
    for name in names {
        if let Some(rest) = lower.strip_prefix(name) {
            let rest = rest.trim_start();
            if let Some(inner) = rest.strip_prefix('(') {
                return inner.trim_end().strip_suffix(')').map(str::trim);
            }
        }
    }
    None
}

/// Splits a functional argument list into channel components plus an
/// optional alpha, accepting both the comma syntax (`r, g, b, a`) and the
/// space syntax (`r g b / a`).
fn split_components<'a>(
    original: &str,
    args: &'a str,
) -> Result<(Vec<&'a str>, Option<&'a str>), ThemeError> {
    if let Some((main, alpha)) = args.split_once('/') {
        let components: Vec<&str> = main.split_whitespace().collect();
        let alpha = alpha.trim();
        if alpha.is_empty() {
            return Err(ThemeError::parse(original, "missing alpha after \"/\""));
        }
        return Ok((components, Some(alpha)));
    }

    if args.contains(',') {
        let mut parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(ThemeError::parse(original, "empty color component"));
        }
        let alpha = if parts.len() == 4 { parts.pop() } else { None };
        return Ok((parts, alpha));
    }

    Ok((args.split_whitespace().collect(), None))
}

fn parse_float(original: &str, raw: &str) -> Result<f64, ThemeError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ThemeError::parse(original, format!("\"{}\" is not a number", raw.trim())))
}

fn parse_alpha(original: &str, raw: &str) -> Result<f64, ThemeError> {
    let value = if let Some(percent) = raw.strip_suffix('%') {
        parse_float(original, percent)? / 100.0
    } else {
        parse_float(original, raw)?
    };
    Ok(value.clamp(0.0, 1.0))
}

/// Standard HSL to RGB conversion; hue in degrees, saturation and lightness
/// in `[0, 1]`.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let hue = (hue.rem_euclid(360.0)) / 360.0;

    if saturation == 0.0 {
        let level = (lightness * 255.0).round() as u8;
        return (level, level, level);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let channel = |offset: f64| -> u8 {
        let mut t = hue + offset;
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let value = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (value * 255.0).round() as u8
    };

    (channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}

/// The CSS named colors, sorted for binary search.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("aliceblue", [0xf0, 0xf8, 0xff]),
    ("antiquewhite", [0xfa, 0xeb, 0xd7]),
    ("aqua", [0x00, 0xff, 0xff]),
    ("aquamarine", [0x7f, 0xff, 0xd4]),
    ("azure", [0xf0, 0xff, 0xff]),
    ("beige", [0xf5, 0xf5, 0xdc]),
    ("bisque", [0xff, 0xe4, 0xc4]),
    ("black", [0x00, 0x00, 0x00]),
    ("blanchedalmond", [0xff, 0xeb, 0xcd]),
    ("blue", [0x00, 0x00, 0xff]),
    ("blueviolet", [0x8a, 0x2b, 0xe2]),
    ("brown", [0xa5, 0x2a, 0x2a]),
    ("burlywood", [0xde, 0xb8, 0x87]),
    ("cadetblue", [0x5f, 0x9e, 0xa0]),
    ("chartreuse", [0x7f, 0xff, 0x00]),
    ("chocolate", [0xd2, 0x69, 0x1e]),
    ("coral", [0xff, 0x7f, 0x50]),
    ("cornflowerblue", [0x64, 0x95, 0xed]),
    ("cornsilk", [0xff, 0xf8, 0xdc]),
    ("crimson", [0xdc, 0x14, 0x3c]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("darkblue", [0x00, 0x00, 0x8b]),
    ("darkcyan", [0x00, 0x8b, 0x8b]),
    ("darkgoldenrod", [0xb8, 0x86, 0x0b]),
    ("darkgray", [0xa9, 0xa9, 0xa9]),
    ("darkgreen", [0x00, 0x64, 0x00]),
    ("darkgrey", [0xa9, 0xa9, 0xa9]),
    ("darkkhaki", [0xbd, 0xb7, 0x6b]),
    ("darkmagenta", [0x8b, 0x00, 0x8b]),
    ("darkolivegreen", [0x55, 0x6b, 0x2f]),
    ("darkorange", [0xff, 0x8c, 0x00]),
    ("darkorchid", [0x99, 0x32, 0xcc]),
    ("darkred", [0x8b, 0x00, 0x00]),
    ("darksalmon", [0xe9, 0x96, 0x7a]),
    ("darkseagreen", [0x8f, 0xbc, 0x8f]),
    ("darkslateblue", [0x48, 0x3d, 0x8b]),
    ("darkslategray", [0x2f, 0x4f, 0x4f]),
    ("darkslategrey", [0x2f, 0x4f, 0x4f]),
    ("darkturquoise", [0x00, 0xce, 0xd1]),
    ("darkviolet", [0x94, 0x00, 0xd3]),
    ("deeppink", [0xff, 0x14, 0x93]),
    ("deepskyblue", [0x00, 0xbf, 0xff]),
    ("dimgray", [0x69, 0x69, 0x69]),
    ("dimgrey", [0x69, 0x69, 0x69]),
    ("dodgerblue", [0x1e, 0x90, 0xff]),
    ("firebrick", [0xb2, 0x22, 0x22]),
    ("floralwhite", [0xff, 0xfa, 0xf0]),
    ("forestgreen", [0x22, 0x8b, 0x22]),
    ("fuchsia", [0xff, 0x00, 0xff]),
    ("gainsboro", [0xdc, 0xdc, 0xdc]),
    ("ghostwhite", [0xf8, 0xf8, 0xff]),
    ("gold", [0xff, 0xd7, 0x00]),
    ("goldenrod", [0xda, 0xa5, 0x20]),
    ("gray", [0x80, 0x80, 0x80]),
    ("green", [0x00, 0x80, 0x00]),
    ("greenyellow", [0xad, 0xff, 0x2f]),
    ("grey", [0x80, 0x80, 0x80]),
    ("honeydew", [0xf0, 0xff, 0xf0]),
    ("hotpink", [0xff, 0x69, 0xb4]),
    ("indianred", [0xcd, 0x5c, 0x5c]),
    ("indigo", [0x4b, 0x00, 0x82]),
    ("ivory", [0xff, 0xff, 0xf0]),
    ("khaki", [0xf0, 0xe6, 0x8c]),
    ("lavender", [0xe6, 0xe6, 0xfa]),
    ("lavenderblush", [0xff, 0xf0, 0xf5]),
    ("lawngreen", [0x7c, 0xfc, 0x00]),
    ("lemonchiffon", [0xff, 0xfa, 0xcd]),
    ("lightblue", [0xad, 0xd8, 0xe6]),
    ("lightcoral", [0xf0, 0x80, 0x80]),
    ("lightcyan", [0xe0, 0xff, 0xff]),
    ("lightgoldenrodyellow", [0xfa, 0xfa, 0xd2]),
    ("lightgray", [0xd3, 0xd3, 0xd3]),
    ("lightgreen", [0x90, 0xee, 0x90]),
    ("lightgrey", [0xd3, 0xd3, 0xd3]),
    ("lightpink", [0xff, 0xb6, 0xc1]),
    ("lightsalmon", [0xff, 0xa0, 0x7a]),
    ("lightseagreen", [0x20, 0xb2, 0xaa]),
    ("lightskyblue", [0x87, 0xce, 0xfa]),
    ("lightslategray", [0x77, 0x88, 0x99]),
    ("lightslategrey", [0x77, 0x88, 0x99]),
    ("lightsteelblue", [0xb0, 0xc4, 0xde]),
    ("lightyellow", [0xff, 0xff, 0xe0]),
    ("lime", [0x00, 0xff, 0x00]),
    ("limegreen", [0x32, 0xcd, 0x32]),
    ("linen", [0xfa, 0xf0, 0xe6]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("maroon", [0x80, 0x00, 0x00]),
    ("mediumaquamarine", [0x66, 0xcd, 0xaa]),
    ("mediumblue", [0x00, 0x00, 0xcd]),
    ("mediumorchid", [0xba, 0x55, 0xd3]),
    ("mediumpurple", [0x93, 0x70, 0xdb]),
    ("mediumseagreen", [0x3c, 0xb3, 0x71]),
    ("mediumslateblue", [0x7b, 0x68, 0xee]),
    ("mediumspringgreen", [0x00, 0xfa, 0x9a]),
    ("mediumturquoise", [0x48, 0xd1, 0xcc]),
    ("mediumvioletred", [0xc7, 0x15, 0x85]),
    ("midnightblue", [0x19, 0x19, 0x70]),
    ("mintcream", [0xf5, 0xff, 0xfa]),
    ("mistyrose", [0xff, 0xe4, 0xe1]),
    ("moccasin", [0xff, 0xe4, 0xb5]),
    ("navajowhite", [0xff, 0xde, 0xad]),
    ("navy", [0x00, 0x00, 0x80]),
    ("oldlace", [0xfd, 0xf5, 0xe6]),
    ("olive", [0x80, 0x80, 0x00]),
    ("olivedrab", [0x6b, 0x8e, 0x23]),
    ("orange", [0xff, 0xa5, 0x00]),
    ("orangered", [0xff, 0x45, 0x00]),
    ("orchid", [0xda, 0x70, 0xd6]),
    ("palegoldenrod", [0xee, 0xe8, 0xaa]),
    ("palegreen", [0x98, 0xfb, 0x98]),
    ("paleturquoise", [0xaf, 0xee, 0xee]),
    ("palevioletred", [0xdb, 0x70, 0x93]),
    ("papayawhip", [0xff, 0xef, 0xd5]),
    ("peachpuff", [0xff, 0xda, 0xb9]),
    ("peru", [0xcd, 0x85, 0x3f]),
    ("pink", [0xff, 0xc0, 0xcb]),
    ("plum", [0xdd, 0xa0, 0xdd]),
    ("powderblue", [0xb0, 0xe0, 0xe6]),
    ("purple", [0x80, 0x00, 0x80]),
    ("rebeccapurple", [0x66, 0x33, 0x99]),
    ("red", [0xff, 0x00, 0x00]),
    ("rosybrown", [0xbc, 0x8f, 0x8f]),
    ("royalblue", [0x41, 0x69, 0xe1]),
    ("saddlebrown", [0x8b, 0x45, 0x13]),
    ("salmon", [0xfa, 0x80, 0x72]),
    ("sandybrown", [0xf4, 0xa4, 0x60]),
    ("seagreen", [0x2e, 0x8b, 0x57]),
    ("seashell", [0xff, 0xf5, 0xee]),
    ("sienna", [0xa0, 0x52, 0x2d]),
    ("silver", [0xc0, 0xc0, 0xc0]),
    ("skyblue", [0x87, 0xce, 0xeb]),
    ("slateblue", [0x6a, 0x5a, 0xcd]),
    ("slategray", [0x70, 0x80, 0x90]),
    ("slategrey", [0x70, 0x80, 0x90]),
    ("snow", [0xff, 0xfa, 0xfa]),
    ("springgreen", [0x00, 0xff, 0x7f]),
    ("steelblue", [0x46, 0x82, 0xb4]),
    ("tan", [0xd2, 0xb4, 0x8c]),
    ("teal", [0x00, 0x80, 0x80]),
    ("thistle", [0xd8, 0xbf, 0xd8]),
    ("tomato", [0xff, 0x63, 0x47]),
    ("turquoise", [0x40, 0xe0, 0xd0]),
    ("violet", [0xee, 0x82, 0xee]),
    ("wheat", [0xf5, 0xde, 0xb3]),
    ("white", [0xff, 0xff, 0xff]),
    ("whitesmoke", [0xf5, 0xf5, 0xf5]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("yellowgreen", [0x9a, 0xcd, 0x32]),
];

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Hex color tests
    // =========================================================================

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(Rgba::parse("#ff6b35").unwrap(), Rgba::opaque(255, 107, 53));
        assert_eq!(Rgba::parse("#000000").unwrap(), Rgba::opaque(0, 0, 0));
        assert_eq!(Rgba::parse("#ffffff").unwrap(), Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(Rgba::parse("#fff").unwrap(), Rgba::opaque(255, 255, 255));
        assert_eq!(Rgba::parse("#f80").unwrap(), Rgba::opaque(255, 136, 0));
    }

    #[test]
    fn test_parse_hex_8_digit_alpha() {
        let color = Rgba::parse("#ff000080").unwrap();
        assert_eq!((color.red, color.green, color.blue), (255, 0, 0));
        assert!((color.alpha - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_parse_hex_4_digit_alpha() {
        let color = Rgba::parse("#f008").unwrap();
        assert_eq!((color.red, color.green, color.blue), (255, 0, 0));
        assert!((color.alpha - 136.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_hex_case_insensitive() {
        assert_eq!(Rgba::parse("#FF6B35").unwrap(), Rgba::opaque(255, 107, 53));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(Rgba::parse("#ff").is_err());
        assert!(Rgba::parse("#fffff").is_err());
        assert!(Rgba::parse("#gggggg").is_err());
    }

    // =========================================================================
    // Functional syntax tests
    // =========================================================================

    #[test]
    fn test_parse_rgb_commas() {
        assert_eq!(
            Rgba::parse("rgb(255, 107, 53)").unwrap(),
            Rgba::opaque(255, 107, 53)
        );
    }

    #[test]
    fn test_parse_rgba_commas() {
        assert_eq!(
            Rgba::parse("rgba(0, 0, 0, 0.25)").unwrap(),
            Rgba::new(0, 0, 0, 0.25)
        );
    }

    #[test]
    fn test_parse_rgb_space_slash() {
        assert_eq!(
            Rgba::parse("rgb(255 0 0 / 0.5)").unwrap(),
            Rgba::new(255, 0, 0, 0.5)
        );
        assert_eq!(
            Rgba::parse("rgb(255 0 0 / 50%)").unwrap(),
            Rgba::new(255, 0, 0, 0.5)
        );
    }

    #[test]
    fn test_parse_rgb_percent_channels() {
        assert_eq!(
            Rgba::parse("rgb(100%, 0%, 0%)").unwrap(),
            Rgba::opaque(255, 0, 0)
        );
    }

    #[test]
    fn test_parse_rgb_wrong_arity() {
        assert!(Rgba::parse("rgb(255, 0)").is_err());
        assert!(Rgba::parse("rgb(255, 0, 0, 0.5, 1)").is_err());
    }

    #[test]
    fn test_parse_hsl() {
        // Pure red.
        assert_eq!(
            Rgba::parse("hsl(0, 100%, 50%)").unwrap(),
            Rgba::opaque(255, 0, 0)
        );
        // Pure green.
        assert_eq!(
            Rgba::parse("hsl(120, 100%, 50%)").unwrap(),
            Rgba::opaque(0, 255, 0)
        );
        // Achromatic gray.
        assert_eq!(
            Rgba::parse("hsl(0, 0%, 50%)").unwrap(),
            Rgba::opaque(128, 128, 128)
        );
    }

    #[test]
    fn test_parse_hsla_alpha() {
        let color = Rgba::parse("hsla(240, 100%, 50%, 0.5)").unwrap();
        assert_eq!((color.red, color.green, color.blue), (0, 0, 255));
        assert_eq!(color.alpha, 0.5);
    }

    #[test]
    fn test_parse_hsl_hue_wraps() {
        assert_eq!(
            Rgba::parse("hsl(360, 100%, 50%)").unwrap(),
            Rgba::parse("hsl(0, 100%, 50%)").unwrap()
        );
        assert_eq!(
            Rgba::parse("hsl(-120, 100%, 50%)").unwrap(),
            Rgba::parse("hsl(240, 100%, 50%)").unwrap()
        );
    }

    // =========================================================================
    // Named color tests
    // =========================================================================

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Rgba::parse("red").unwrap(), Rgba::opaque(255, 0, 0));
        assert_eq!(Rgba::parse("blue").unwrap(), Rgba::opaque(0, 0, 255));
        assert_eq!(Rgba::parse("rebeccapurple").unwrap(), Rgba::opaque(102, 51, 153));
        assert_eq!(Rgba::parse("White").unwrap(), Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn test_parse_transparent() {
        assert_eq!(Rgba::parse("transparent").unwrap(), Rgba::new(0, 0, 0, 0.0));
    }

    #[test]
    fn test_named_table_is_sorted() {
        for window in NAMED_COLORS.windows(2) {
            assert!(window[0].0 < window[1].0, "unsorted at {}", window[1].0);
        }
    }

    // =========================================================================
    // Classifier tests
    // =========================================================================

    #[test]
    fn test_is_color() {
        assert!(is_color("#fff"));
        assert!(is_color("rgb(0, 0, 0)"));
        assert!(is_color("hsl(0, 0%, 0%)"));
        assert!(is_color("tomato"));
        assert!(is_color("transparent"));
    }

    #[test]
    fn test_is_not_color() {
        assert!(!is_color("thing"));
        assert!(!is_color("1px solid red"));
        assert!(!is_color("1rem"));
        assert!(!is_color(""));
    }

    #[test]
    fn test_get_alpha() {
        assert_eq!(get_alpha("#fff").unwrap(), 1.0);
        assert_eq!(get_alpha("rgba(0, 0, 0, 0.25)").unwrap(), 0.25);
        assert!((get_alpha("#ff000080").unwrap() - 0.5).abs() < 0.01);
        assert_eq!(get_alpha("transparent").unwrap(), 0.0);
    }

    #[test]
    fn test_get_alpha_rejects_non_colors() {
        assert!(matches!(
            get_alpha("not-a-color"),
            Err(ThemeError::Parse { .. })
        ));
    }

    #[test]
    fn test_channels() {
        assert_eq!(Rgba::parse("blue").unwrap().channels(), "0 0 255");
        // Alpha is stripped from the channel triple.
        assert_eq!(
            Rgba::parse("rgba(1, 2, 3, 0.5)").unwrap().channels(),
            "1 2 3"
        );
    }
}
