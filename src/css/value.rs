//! CSS value model: [`CssValue`], [`Rgba`], [`Declaration`].
//!
//! Value trees are transient: the parser (or an external cascade) builds them
//! fresh for every styling pass and the resolvers only borrow them.

use std::fmt;

/// An sRGB color with alpha. Colors coming from CSS are always opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque black, the documented fallback for unresolvable colors.
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Decode `#rrggbb`. Exactly six hex digits; every other form is `None`.
    pub fn from_hex6(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A parsed CSS property value.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// An identifier like `red`, `bold`, `widget-background`, `#org-theme-bg`.
    Ident(String),
    /// A quoted string, quotes removed.
    StringLiteral(String),
    /// `rgb(r, g, b)` or `#rrggbb`.
    RgbColor(u8, u8, u8),
    /// `N%`. Nominally 0-100, out-of-range values are kept as written.
    Percentage(i32),
    /// `url(...)`, contents only.
    Uri(String),
    /// A bare number like `9`.
    Number(f32),
    /// A number with a unit suffix like `9pt` or `2px`.
    Dimension(f32, String),
    /// Whitespace-separated values, in source order.
    ValueList(Vec<CssValue>),
}

impl CssValue {
    /// Shorthand for an identifier value.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// The textual payload of identifier and string values.
    pub fn string_value(&self) -> Option<&str> {
        match self {
            Self::Ident(s) | Self::StringLiteral(s) | Self::Uri(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload of numbers, dimensions and percentages.
    pub fn number_value(&self) -> Option<f32> {
        match self {
            Self::Number(n) | Self::Dimension(n, _) => Some(*n),
            Self::Percentage(p) => Some(*p as f32),
            _ => None,
        }
    }

    /// The members of a list, or the value itself as a one-element slice.
    pub fn items(&self) -> &[CssValue] {
        match self {
            Self::ValueList(items) => items,
            single => std::slice::from_ref(single),
        }
    }

    /// The value as CSS source text.
    pub fn css_text(&self) -> String {
        match self {
            Self::Ident(s) => s.clone(),
            Self::StringLiteral(s) => format!("\"{s}\""),
            Self::RgbColor(r, g, b) => format!("rgb({r}, {g}, {b})"),
            Self::Percentage(p) => format!("{p}%"),
            Self::Uri(s) => format!("url({s})"),
            Self::Number(n) => n.to_string(),
            Self::Dimension(n, unit) => format!("{n}{unit}"),
            Self::ValueList(items) => items
                .iter()
                .map(CssValue::css_text)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// A single property declaration, e.g. `color: red`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name, lower-case.
    pub property: String,
    /// The declared value. Multiple values arrive as a [`CssValue::ValueList`].
    pub value: CssValue,
}

impl Declaration {
    /// Create a new declaration.
    pub fn new(property: impl Into<String>, value: CssValue) -> Self {
        Self {
            property: property.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex6_decodes() {
        assert_eq!(Rgba::from_hex6("#ff8000"), Some(Rgba::rgb(255, 128, 0)));
        assert_eq!(Rgba::from_hex6("#FfA0b1"), Some(Rgba::rgb(255, 160, 177)));
    }

    #[test]
    fn hex6_rejects_other_forms() {
        assert_eq!(Rgba::from_hex6("#fff"), None);
        assert_eq!(Rgba::from_hex6("#ff8000ff"), None);
        assert_eq!(Rgba::from_hex6("ff8000"), None);
        assert_eq!(Rgba::from_hex6("#gg8000"), None);
    }

    #[test]
    fn css_text_of_list() {
        let value = CssValue::ValueList(vec![
            CssValue::ident("gradient"),
            CssValue::RgbColor(1, 2, 3),
            CssValue::Percentage(40),
        ]);
        assert_eq!(value.css_text(), "gradient rgb(1, 2, 3) 40%");
    }

    #[test]
    fn items_of_single_value() {
        let value = CssValue::ident("red");
        assert_eq!(value.items(), &[CssValue::ident("red")]);
    }

    #[test]
    fn string_value_only_for_text() {
        assert_eq!(CssValue::StringLiteral("Sans".into()).string_value(), Some("Sans"));
        assert_eq!(CssValue::Number(3.0).string_value(), None);
    }

    #[test]
    fn display_rgba() {
        assert_eq!(Rgba::rgb(10, 20, 30).to_string(), "rgb(10, 20, 30)");
    }
}
