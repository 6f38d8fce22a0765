//! Identifiers, query strings and color conversion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// An RGB color with an alpha channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity, clamped to `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// The color as a `[r, g, b, a]` array.
    #[must_use]
    pub fn to_array(self) -> [f64; 4] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b), self.a]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A random version 4 UUID in lower-case hyphenated form.
///
/// ```rust
/// let id = tacklebox_core::general::generate_uuid();
/// assert_eq!(id.len(), 36);
/// assert_eq!(id.as_bytes()[14], b'4');
/// ```
pub fn generate_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Decode an `application/x-www-form-urlencoded` query string.
///
/// A leading `?` is ignored, `+` decodes to a space and percent escapes are
/// decoded. When a key repeats, the last value wins.
pub fn parse_query_string(query: &str) -> BTreeMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Convert a hex color code to [`Rgba`].
///
/// The first character (normally `#`) is skipped and the rest is read the way
/// a script runtime's `parseInt(text, 16)` reads it: leading whitespace, an
/// optional sign and an optional `0x` prefix, then the longest run of hex
/// digits. The channels come from the low 24 bits of the two's-complement
/// result. Shorthand is not expanded, so `#fff` reads as `0x000fff`. Input
/// with no hex digits yields black.
///
/// ```rust
/// use tacklebox_core::general::hex_to_rgb;
///
/// let color = hex_to_rgb("#ff8000", 0.5);
/// assert_eq!((color.r, color.g, color.b, color.a), (255, 128, 0, 0.5));
/// ```
pub fn hex_to_rgb(hex: &str, opacity: f64) -> Rgba {
    let rest = hex.char_indices().nth(1).map_or("", |(i, _)| &hex[i..]);
    let [_, _, _, _, _, r, g, b] = parse_hex_prefix(rest).to_be_bytes();
    Rgba { r, g, b, a: clamp_opacity(opacity) }
}

fn parse_hex_prefix(text: &str) -> u64 {
    let text = text.trim_start();
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    let magnitude = text
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u64, |acc, digit| acc.wrapping_mul(16).wrapping_add(u64::from(digit)));
    if negative { magnitude.wrapping_neg() } else { magnitude }
}

/// Format channels as a lower-case `#rrggbb` code.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) }
}
