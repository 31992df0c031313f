//! Font model and the CSS-over-native font merge.
//!
//! CSS font declarations are usually partial (`font-weight: bold` alone), so
//! they are merged onto whatever font the widget already has. Each
//! sub-property is decided independently:
//!
//! | field  | 1st choice                    | 2nd choice                 | 3rd choice        |
//! |--------|-------------------------------|----------------------------|-------------------|
//! | family | theme definition (`#id`)      | literal CSS family         | existing family   |
//! | style  | CSS `font-style`/`font-weight`| definition bits if neutral | existing bits     |
//! | height | CSS `font-size`               | definition height          | existing height   |

use std::ops::BitOr;

use crate::css::value::CssValue;
use crate::theme::{normalize_id, ThemeDefinitionProvider};

/// Native font style bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontStyleBits(u8);

impl FontStyleBits {
    pub const NORMAL: FontStyleBits = FontStyleBits(0);
    pub const BOLD: FontStyleBits = FontStyleBits(1);
    pub const ITALIC: FontStyleBits = FontStyleBits(1 << 1);

    /// Whether every bit of `other` is set.
    pub const fn contains(self, other: FontStyleBits) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set or clear the bits of `other`.
    pub const fn with(self, other: FontStyleBits, on: bool) -> FontStyleBits {
        if on {
            FontStyleBits(self.0 | other.0)
        } else {
            FontStyleBits(self.0 & !other.0)
        }
    }

    pub const fn is_normal(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for FontStyleBits {
    type Output = FontStyleBits;
    fn bitor(self, rhs: FontStyleBits) -> FontStyleBits {
        FontStyleBits(self.0 | rhs.0)
    }
}

/// Font weight as CSS sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font slant as CSS sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// A complete font as a theme defines it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub family: String,
    pub size_pt: i32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_pt: i32, weight: FontWeight, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            size_pt,
            weight,
            style,
        }
    }

    /// The native style bits for this spec's weight and slant.
    pub fn style_bits(&self) -> FontStyleBits {
        FontStyleBits::NORMAL
            .with(FontStyleBits::BOLD, self.weight == FontWeight::Bold)
            .with(FontStyleBits::ITALIC, self.style == FontStyle::Italic)
    }
}

/// Native font data: what a toolkit needs to allocate a font.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    pub family: String,
    /// Height in points.
    pub height: i32,
    pub style: FontStyleBits,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, height: i32, style: FontStyleBits) -> Self {
        Self {
            family: family.into(),
            height,
            style,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.style.contains(FontStyleBits::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.style.contains(FontStyleBits::ITALIC)
    }
}

impl From<&FontSpec> for FontDescriptor {
    fn from(spec: &FontSpec) -> Self {
        FontDescriptor::new(spec.family.clone(), spec.size_pt, spec.style_bits())
    }
}

impl From<&FontDescriptor> for FontSpec {
    fn from(font: &FontDescriptor) -> Self {
        FontSpec {
            family: font.family.clone(),
            size_pt: font.height,
            weight: if font.is_bold() {
                FontWeight::Bold
            } else {
                FontWeight::Normal
            },
            style: if font.is_italic() {
                FontStyle::Italic
            } else {
                FontStyle::Normal
            },
        }
    }
}

/// The font sub-properties one declaration block set. `None` means absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialFontSpec {
    /// Literal family name, or a `#`-prefixed theme font reference.
    pub family: Option<CssValue>,
    /// Size in points.
    pub size: Option<i32>,
    /// `font-style` text as written.
    pub style: Option<String>,
    /// `font-weight` text as written.
    pub weight: Option<String>,
}

impl PartialFontSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.family.is_none() && self.size.is_none() && self.style.is_none() && self.weight.is_none()
    }

    /// Set the family (builder).
    pub fn with_family(mut self, family: CssValue) -> Self {
        self.family = Some(family);
        self
    }

    /// Set the size in points (builder).
    pub fn with_size(mut self, size: i32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the style text (builder).
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the weight text (builder).
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    /// Fill from the `font` shorthand: `[style] [weight] [size] [family]` in
    /// any order. Sub-properties already set are overwritten.
    pub fn apply_shorthand(&mut self, value: &CssValue) {
        for item in value.items() {
            match item {
                CssValue::Ident(word) => match word.to_ascii_lowercase().as_str() {
                    "italic" | "oblique" => self.style = Some(word.clone()),
                    "bold" | "bolder" | "lighter" => self.weight = Some(word.clone()),
                    "normal" => {
                        // `normal` resets whichever of style/weight is still unset.
                        if self.style.is_none() {
                            self.style = Some(word.clone());
                        } else {
                            self.weight = Some(word.clone());
                        }
                    }
                    _ => self.family = Some(item.clone()),
                },
                CssValue::StringLiteral(_) => self.family = Some(item.clone()),
                other => {
                    if let Some(points) = font_size_points(other) {
                        self.size = Some(points);
                    }
                }
            }
        }
    }
}

/// Convert a `font-size` value to whole points. Pixels are treated as points.
pub fn font_size_points(value: &CssValue) -> Option<i32> {
    match value {
        CssValue::Number(n) => Some(n.round() as i32),
        CssValue::Dimension(n, unit) if matches!(unit.as_str(), "pt" | "px") => {
            Some(n.round() as i32)
        }
        _ => None,
    }
}

/// Merge partial CSS font properties onto an existing native font.
pub fn merge_font(
    css: &PartialFontSpec,
    existing: &FontDescriptor,
    theme: Option<&dyn ThemeDefinitionProvider>,
) -> FontDescriptor {
    let family_text = css.family.as_ref().and_then(CssValue::string_value);

    // A definition only counts when it yields at least one candidate.
    let definition = family_text
        .and_then(|family| family.strip_prefix('#'))
        .and_then(|id| {
            let candidates = theme?.font(&normalize_id(id));
            if candidates.is_none() {
                tracing::debug!(id, "font definition not found");
            }
            candidates
        })
        .and_then(|candidates| candidates.into_iter().next());

    let family = match (&definition, family_text) {
        (Some(candidate), _) => candidate.family.clone(),
        (None, Some(literal)) if !literal.is_empty() && !literal.starts_with('#') => {
            literal.to_string()
        }
        _ => existing.family.clone(),
    };

    let mut style = existing.style;
    if let Some(slant) = &css.style {
        style = style.with(FontStyleBits::ITALIC, slant == "italic");
    }
    if let Some(weight) = &css.weight {
        style = style.with(FontStyleBits::BOLD, weight.eq_ignore_ascii_case("bold"));
    }
    if let Some(candidate) = &definition {
        if style.is_normal() {
            style = candidate.style_bits();
        }
    }

    let height = match (css.size, &definition) {
        (Some(size), _) => size,
        (None, Some(candidate)) => candidate.size_pt,
        (None, None) => existing.height,
    };

    FontDescriptor {
        family,
        height,
        style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeRegistry;
    use pretty_assertions::assert_eq;

    fn existing() -> FontDescriptor {
        FontDescriptor::new("Existing", 10, FontStyleBits::NORMAL)
    }

    fn theme() -> ThemeRegistry {
        ThemeRegistry::new()
            .with_font(
                "org.theme.header",
                vec![
                    FontSpec::new("Theme Sans", 14, FontWeight::Bold, FontStyle::Normal),
                    FontSpec::new("Fallback", 8, FontWeight::Normal, FontStyle::Normal),
                ],
            )
            .with_font("org.theme.empty", Vec::new())
    }

    fn merge(css: &PartialFontSpec, existing: &FontDescriptor) -> FontDescriptor {
        let theme = theme();
        merge_font(css, existing, Some(&theme))
    }

    // ── family: definition / literal / existing × with / without size ──

    #[test]
    fn family_from_definition_without_size() {
        let css = PartialFontSpec::new().with_family(CssValue::ident("#org-theme-header"));
        let merged = merge(&css, &existing());
        assert_eq!(merged, FontDescriptor::new("Theme Sans", 14, FontStyleBits::BOLD));
    }

    #[test]
    fn family_from_definition_with_size() {
        let css = PartialFontSpec::new()
            .with_family(CssValue::ident("#org-theme-header"))
            .with_size(20);
        let merged = merge(&css, &existing());
        assert_eq!(merged.family, "Theme Sans");
        assert_eq!(merged.height, 20);
    }

    #[test]
    fn family_literal_without_size() {
        let css = PartialFontSpec::new().with_family(CssValue::StringLiteral("Courier".into()));
        let merged = merge(&css, &existing());
        assert_eq!(merged, FontDescriptor::new("Courier", 10, FontStyleBits::NORMAL));
    }

    #[test]
    fn family_literal_with_size() {
        let css = PartialFontSpec::new()
            .with_family(CssValue::ident("Courier"))
            .with_size(7);
        assert_eq!(
            merge(&css, &existing()),
            FontDescriptor::new("Courier", 7, FontStyleBits::NORMAL)
        );
    }

    #[test]
    fn family_existing_without_size() {
        let merged = merge(&PartialFontSpec::new(), &existing());
        assert_eq!(merged, existing());
    }

    #[test]
    fn family_existing_with_size() {
        let css = PartialFontSpec::new().with_size(16);
        assert_eq!(
            merge(&css, &existing()),
            FontDescriptor::new("Existing", 16, FontStyleBits::NORMAL)
        );
    }

    #[test]
    fn missing_definition_falls_back_to_existing() {
        let css = PartialFontSpec::new().with_family(CssValue::ident("#org-theme-nothing"));
        assert_eq!(merge(&css, &existing()), existing());

        let css = PartialFontSpec::new().with_family(CssValue::ident("#org-theme-empty"));
        assert_eq!(merge(&css, &existing()), existing());
    }

    #[test]
    fn definition_without_theme_provider() {
        let css = PartialFontSpec::new().with_family(CssValue::ident("#org-theme-header"));
        assert_eq!(merge_font(&css, &existing(), None), existing());
    }

    #[test]
    fn empty_literal_family_keeps_existing() {
        let css = PartialFontSpec::new().with_family(CssValue::StringLiteral(String::new()));
        assert_eq!(merge(&css, &existing()).family, "Existing");
    }

    // ── style bits ───────────────────────────────────────────────────

    #[test]
    fn italic_set_when_requested() {
        let css = PartialFontSpec::new().with_style("italic");
        assert!(merge(&css, &existing()).is_italic());
    }

    #[test]
    fn italic_cleared_by_other_style() {
        let current = FontDescriptor::new("Existing", 10, FontStyleBits::ITALIC);
        let css = PartialFontSpec::new().with_style("normal");
        assert!(!merge(&css, &current).is_italic());
    }

    #[test]
    fn italic_untouched_when_absent() {
        let current = FontDescriptor::new("Existing", 10, FontStyleBits::ITALIC);
        assert!(merge(&PartialFontSpec::new(), &current).is_italic());
    }

    #[test]
    fn italic_match_is_case_sensitive() {
        let css = PartialFontSpec::new().with_style("Italic");
        assert!(!merge(&css, &existing()).is_italic());
    }

    #[test]
    fn bold_is_case_insensitive() {
        let css = PartialFontSpec::new().with_weight("BOLD");
        assert!(merge(&css, &existing()).is_bold());
    }

    #[test]
    fn bold_cleared_by_other_weight() {
        let current = FontDescriptor::new("Existing", 10, FontStyleBits::BOLD);
        let css = PartialFontSpec::new().with_weight("normal");
        assert!(!merge(&css, &current).is_bold());
    }

    #[test]
    fn bold_untouched_when_absent() {
        let current = FontDescriptor::new("Existing", 10, FontStyleBits::BOLD);
        let css = PartialFontSpec::new().with_style("italic");
        let merged = merge(&css, &current);
        assert!(merged.is_bold());
        assert!(merged.is_italic());
    }

    #[test]
    fn weight_override_keeps_height_and_italic() {
        let current = FontDescriptor::new("Existing", 10, FontStyleBits::ITALIC);
        let css = PartialFontSpec::new().with_weight("bold");
        assert_eq!(
            merge(&css, &current),
            FontDescriptor::new("Existing", 10, FontStyleBits::ITALIC | FontStyleBits::BOLD)
        );
    }

    #[test]
    fn explicit_style_beats_definition_bits() {
        let css = PartialFontSpec::new()
            .with_family(CssValue::ident("#org-theme-header"))
            .with_style("italic");
        let merged = merge(&css, &existing());
        assert!(merged.is_italic());
        assert!(!merged.is_bold());
    }

    #[test]
    fn existing_bits_beat_definition_bits() {
        let current = FontDescriptor::new("Existing", 10, FontStyleBits::ITALIC);
        let css = PartialFontSpec::new().with_family(CssValue::ident("#org-theme-header"));
        let merged = merge(&css, &current);
        assert!(merged.is_italic());
        assert!(!merged.is_bold());
    }

    // ── shorthand & conversions ──────────────────────────────────────

    #[test]
    fn shorthand_fills_all_fields() {
        let mut css = PartialFontSpec::new();
        css.apply_shorthand(&CssValue::ValueList(vec![
            CssValue::ident("italic"),
            CssValue::ident("bold"),
            CssValue::Dimension(9.0, "pt".into()),
            CssValue::StringLiteral("Sans".into()),
        ]));
        assert_eq!(
            css,
            PartialFontSpec::new()
                .with_style("italic")
                .with_weight("bold")
                .with_size(9)
                .with_family(CssValue::StringLiteral("Sans".into()))
        );
    }

    #[test]
    fn font_size_units() {
        assert_eq!(font_size_points(&CssValue::Number(9.4)), Some(9));
        assert_eq!(font_size_points(&CssValue::Dimension(11.0, "px".into())), Some(11));
        assert_eq!(font_size_points(&CssValue::Dimension(2.0, "em".into())), None);
        assert_eq!(font_size_points(&CssValue::ident("large")), None);
    }

    #[test]
    fn spec_descriptor_round_trip_keeps_bits() {
        let spec = FontSpec::new("Mono", 12, FontWeight::Bold, FontStyle::Italic);
        let font = FontDescriptor::from(&spec);
        assert!(font.is_bold() && font.is_italic());
        assert_eq!(FontSpec::from(&font), spec);
    }
}
