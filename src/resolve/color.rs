//! Color resolution with a fallback chain.
//!
//! 1. `rgb()` / `#rrggbb` values convert directly.
//! 2. Names are looked up in the CSS keyword table.
//! 3. `#`-prefixed names (other than hex literals) go to the theme registry.
//! 4. Dashed names are platform system colors (`widget-background`).
//! 5. Anything else is the fallback color. Never an error.

use crate::css::value::{CssValue, Rgba};
use crate::resolve::named;
use crate::resolve::system::SystemColor;
use crate::resolve::ResolveContext;
use crate::theme::{has_definition_value, normalize_id};

/// Resolve a color, returning `None` when no step of the chain matches.
pub fn try_resolve_color(value: &CssValue, ctx: &ResolveContext<'_>) -> Option<Rgba> {
    let name = match value {
        CssValue::RgbColor(r, g, b) => return Some(Rgba::rgb(*r, *g, *b)),
        CssValue::Ident(name) | CssValue::StringLiteral(name) => name.as_str(),
        _ => return None,
    };

    if let Some(rgba) = named::lookup(name) {
        return Some(rgba);
    }

    if has_definition_value(name) {
        let id = normalize_id(&name[1..]);
        let defined = ctx.theme.and_then(|theme| theme.color(&id));
        if defined.is_none() {
            tracing::debug!(%id, "color definition not found");
        }
        return defined;
    }

    if name.contains('-') {
        return SystemColor::from_symbolic(name).map(|color| ctx.platform.system_color(color));
    }

    None
}

/// Resolve a color, substituting the context's fallback on a miss.
pub fn resolve_color(value: &CssValue, ctx: &ResolveContext<'_>) -> Rgba {
    try_resolve_color(value, ctx).unwrap_or_else(|| {
        tracing::debug!(value = %value.css_text(), "unresolved color, using fallback");
        ctx.fallback_color()
    })
}

/// Render a color as CSS text.
pub fn color_to_css(color: Rgba) -> String {
    color.to_string()
}
