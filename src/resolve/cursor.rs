//! CSS `cursor` keywords mapped onto the platform cursor set.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::css::value::CssValue;

/// A platform cursor shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorKind {
    #[default]
    Arrow,
    Wait,
    Cross,
    AppStarting,
    Help,
    SizeAll,
    SizeNesw,
    SizeNs,
    SizeNwse,
    SizeWe,
    SizeN,
    SizeS,
    SizeE,
    SizeW,
    SizeNe,
    SizeSe,
    SizeSw,
    SizeNw,
    UpArrow,
    IBeam,
    No,
    Hand,
}

/// `(css keyword, cursor)`. The first keyword listed for a cursor is its
/// canonical CSS name.
static CSS_CURSORS: &[(&str, CursorKind)] = &[
    ("default", CursorKind::Arrow),
    ("auto", CursorKind::Arrow),
    ("wait", CursorKind::Wait),
    ("crosshair", CursorKind::Cross),
    ("progress", CursorKind::AppStarting),
    ("help", CursorKind::Help),
    ("move", CursorKind::SizeAll),
    ("nesw-resize", CursorKind::SizeNesw),
    ("ns-resize", CursorKind::SizeNs),
    ("nwse-resize", CursorKind::SizeNwse),
    ("ew-resize", CursorKind::SizeWe),
    ("n-resize", CursorKind::SizeN),
    ("s-resize", CursorKind::SizeS),
    ("e-resize", CursorKind::SizeE),
    ("w-resize", CursorKind::SizeW),
    ("ne-resize", CursorKind::SizeNe),
    ("se-resize", CursorKind::SizeSe),
    ("sw-resize", CursorKind::SizeSw),
    ("nw-resize", CursorKind::SizeNw),
    ("up-arrow", CursorKind::UpArrow),
    ("text", CursorKind::IBeam),
    ("not-allowed", CursorKind::No),
    ("no-drop", CursorKind::No),
    ("pointer", CursorKind::Hand),
];

static CSS_CURSOR_MAP: LazyLock<HashMap<&'static str, CursorKind>> =
    LazyLock::new(|| CSS_CURSORS.iter().copied().collect());

impl CursorKind {
    /// Look up a CSS cursor keyword (case-insensitive).
    pub fn from_css(name: &str) -> Option<CursorKind> {
        CSS_CURSOR_MAP.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// The canonical CSS keyword for this cursor.
    pub fn css_name(self) -> &'static str {
        CSS_CURSORS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("default")
    }
}

/// Resolve a `cursor` value. Unknown or non-keyword values give the arrow.
pub fn resolve_cursor(value: &CssValue) -> CursorKind {
    let resolved = value.string_value().and_then(CursorKind::from_css);
    if resolved.is_none() {
        tracing::debug!(value = %value.css_text(), "unknown cursor, using arrow");
    }
    resolved.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cursor_has_a_css_name() {
        let all = [
            CursorKind::Arrow,
            CursorKind::Wait,
            CursorKind::Cross,
            CursorKind::AppStarting,
            CursorKind::Help,
            CursorKind::SizeAll,
            CursorKind::SizeNesw,
            CursorKind::SizeNs,
            CursorKind::SizeNwse,
            CursorKind::SizeWe,
            CursorKind::SizeN,
            CursorKind::SizeS,
            CursorKind::SizeE,
            CursorKind::SizeW,
            CursorKind::SizeNe,
            CursorKind::SizeSe,
            CursorKind::SizeSw,
            CursorKind::SizeNw,
            CursorKind::UpArrow,
            CursorKind::IBeam,
            CursorKind::No,
            CursorKind::Hand,
        ];
        for kind in all {
            assert_eq!(CursorKind::from_css(kind.css_name()), Some(kind), "{kind:?}");
        }
    }

    #[test]
    fn keywords() {
        assert_eq!(resolve_cursor(&CssValue::ident("pointer")), CursorKind::Hand);
        assert_eq!(resolve_cursor(&CssValue::ident("TEXT")), CursorKind::IBeam);
        assert_eq!(resolve_cursor(&CssValue::ident("se-resize")), CursorKind::SizeSe);
    }

    #[test]
    fn unknown_falls_back_to_arrow() {
        assert_eq!(resolve_cursor(&CssValue::ident("grabbing-hand")), CursorKind::Arrow);
        assert_eq!(resolve_cursor(&CssValue::Number(3.0)), CursorKind::Arrow);
    }
}
