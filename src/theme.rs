//! Theme definitions: symbolic `#`-prefixed color and font references.
//!
//! A stylesheet writes `#org-eclipse-ui-tab-bg`; the registry is keyed by the
//! normalized id `org.eclipse.ui.tab.bg`. [`normalize_id`] and [`escape_id`]
//! convert between the two spellings.

use std::collections::HashMap;

use crate::css::value::Rgba;
use crate::resolve::font::FontSpec;

/// Source of theme color and font definitions, looked up by normalized id.
pub trait ThemeDefinitionProvider {
    /// The color defined under `id`, if any.
    fn color(&self, id: &str) -> Option<Rgba>;

    /// The font candidates defined under `id`, best first.
    fn font(&self, id: &str) -> Option<Vec<FontSpec>>;
}

/// Convert a CSS-safe id (`a-b-c`) into registry form (`a.b.c`).
pub fn normalize_id(id: &str) -> String {
    id.replace('-', ".")
}

/// Convert a registry id (`a.b.c`) into its CSS-safe form (`a-b-c`).
pub fn escape_id(id: &str) -> String {
    id.replace('.', "-")
}

/// Whether a value names a theme definition rather than a literal.
///
/// Anything starting with `#` qualifies, except an exact `#rrggbb` hex color.
pub fn has_definition_value(value: &str) -> bool {
    value.starts_with('#') && Rgba::from_hex6(value).is_none()
}

/// A map-backed [`ThemeDefinitionProvider`].
///
/// Ids are normalized on insertion, so either spelling may be used to define.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    colors: HashMap<String, Rgba>,
    fonts: HashMap<String, Vec<FontSpec>>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a color (builder).
    pub fn with_color(mut self, id: &str, color: Rgba) -> Self {
        self.define_color(id, color);
        self
    }

    /// Define a font (builder).
    pub fn with_font(mut self, id: &str, candidates: Vec<FontSpec>) -> Self {
        self.define_font(id, candidates);
        self
    }

    /// Define or replace a color.
    pub fn define_color(&mut self, id: &str, color: Rgba) {
        self.colors.insert(normalize_id(id), color);
    }

    /// Define or replace a font candidate list.
    pub fn define_font(&mut self, id: &str, candidates: Vec<FontSpec>) {
        self.fonts.insert(normalize_id(id), candidates);
    }

    /// Number of color and font definitions.
    pub fn len(&self) -> usize {
        self.colors.len() + self.fonts.len()
    }

    /// Whether the registry defines nothing.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.fonts.is_empty()
    }
}

impl ThemeDefinitionProvider for ThemeRegistry {
    fn color(&self, id: &str) -> Option<Rgba> {
        self.colors.get(id).copied()
    }

    fn font(&self, id: &str) -> Option<Vec<FontSpec>> {
        self.fonts.get(id).cloned()
    }
}
