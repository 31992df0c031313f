//! Border painting.
//!
//! Native widgets have no CSS border of their own, so the border is drawn by
//! the parent on every paint callback: four lines just outside the widget's
//! bounds. Nothing is cached between callbacks; the color is resolved again
//! each time so theme changes show up on the next repaint.

use crate::css::value::{CssValue, Rgba};
use crate::geometry::Region;
use crate::resolve::color::resolve_color;
use crate::resolve::ResolveContext;

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// `dashed` and `dotted` map to themselves; every other keyword is solid.
    pub fn from_css(name: &str) -> LineStyle {
        match name.to_ascii_lowercase().as_str() {
            "dashed" => LineStyle::Dashed,
            "dotted" => LineStyle::Dotted,
            _ => LineStyle::Solid,
        }
    }
}

/// Keywords accepted by `border-style`.
const STYLE_KEYWORDS: &[&str] = &[
    "none", "hidden", "solid", "dashed", "dotted", "double", "groove", "ridge", "inset", "outset",
];

/// Widest border accepted, in pixels. Wider declarations are clamped.
pub const MAX_BORDER_WIDTH: i32 = 4096;

/// A widget's border as declared. `color: None` paints with the fallback color.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BorderDescriptor {
    pub width: i32,
    pub color: Option<CssValue>,
    pub style: String,
}

impl BorderDescriptor {
    pub fn new(width: i32, color: CssValue, style: impl Into<String>) -> Self {
        Self {
            width: width.clamp(0, MAX_BORDER_WIDTH),
            color: Some(color),
            style: style.into(),
        }
    }

    /// `border-width`. Non-numeric values leave the width unchanged; the
    /// rest is clamped to `0..=MAX_BORDER_WIDTH`.
    pub fn set_width(&mut self, value: &CssValue) -> bool {
        match value.number_value() {
            Some(width) => {
                self.width = width.round().clamp(0.0, MAX_BORDER_WIDTH as f32) as i32;
                true
            }
            None => false,
        }
    }

    pub fn set_color(&mut self, value: &CssValue) {
        self.color = Some(value.clone());
    }

    pub fn set_style(&mut self, value: &CssValue) {
        self.style = value.css_text();
    }

    /// `border: <width> <style> <color>`, any order, any subset.
    pub fn apply_shorthand(&mut self, value: &CssValue) {
        for item in value.items() {
            match item {
                CssValue::Number(_) | CssValue::Dimension(..) => {
                    self.set_width(item);
                }
                CssValue::Ident(word) if STYLE_KEYWORDS.contains(&word.to_ascii_lowercase().as_str()) => {
                    self.style = word.clone();
                }
                _ => self.set_color(item),
            }
        }
    }
}

/// Drawing surface for border painting.
pub trait Canvas {
    fn set_line_width(&mut self, width: i32);
    fn set_line_style(&mut self, style: LineStyle);
    fn set_foreground(&mut self, color: Rgba);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
}

/// Paint `border` around `bounds` (in the canvas's coordinate space).
/// Returns whether anything was drawn.
pub fn paint_border(
    border: &BorderDescriptor,
    bounds: Region,
    ctx: &ResolveContext<'_>,
    canvas: &mut dyn Canvas,
) -> bool {
    if border.width <= 0 {
        return false;
    }

    let color = match &border.color {
        Some(value) => resolve_color(value, ctx),
        None => ctx.fallback_color(),
    };

    canvas.set_line_width(border.width);
    canvas.set_line_style(LineStyle::from_css(&border.style));
    canvas.set_foreground(color);

    let outer = bounds.inflate(border.width);
    let (left, top, right, bottom) = (outer.x, outer.y, outer.right(), outer.bottom());
    canvas.draw_line(left, top, right, top);
    canvas.draw_line(right, top, right, bottom);
    canvas.draw_line(left, bottom, right, bottom);
    canvas.draw_line(left, top, left, bottom);
    true
}
