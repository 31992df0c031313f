//! Multi-stop gradients: `gradient linear red 30% orange 80% white`.

use crate::css::value::{CssValue, Rgba};
use crate::resolve::color::try_resolve_color;
use crate::resolve::ResolveContext;

/// Normalized gradient: stops left-to-right (or top-to-bottom) plus the
/// positions of every stop after the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientModel {
    pub linear: bool,
    pub vertical: bool,
    pub stops: Vec<Rgba>,
    pub percents: Vec<i32>,
}

impl Default for GradientModel {
    fn default() -> Self {
        Self {
            linear: true,
            vertical: true,
            stops: Vec::new(),
            percents: Vec::new(),
        }
    }
}

impl GradientModel {
    /// Stop positions, falling back to an even distribution when the
    /// declared percents are missing, miscounted or out of `[0, 100]`.
    pub fn percents(&self) -> Vec<i32> {
        let well_formed = !self.stops.is_empty()
            && self.percents.len() == self.stops.len() - 1
            && self.percents.iter().all(|p| (0..=100).contains(p));
        if well_formed {
            return self.percents.clone();
        }
        even_distribution(self.stops.len())
    }
}

/// `round_half_up((i + 1) * 100 / (stops - 1))` for each stop after the first.
fn even_distribution(stops: usize) -> Vec<i32> {
    if stops <= 1 {
        return Vec::new();
    }
    let intervals = (stops - 1) as f64;
    (0..stops - 1)
        .map(|i| ((i + 1) as f64 * 100.0 / intervals + 0.5).floor() as i32)
        .collect()
}

/// Whether a `background-color` value describes a gradient.
pub fn is_gradient(value: &CssValue) -> bool {
    matches!(value, CssValue::ValueList(items)
        if matches!(items.first(), Some(CssValue::Ident(head)) if head == "gradient"))
}

/// Build a gradient from its token list.
///
/// A color-like token that does not resolve is read as an orientation flag:
/// the css text `false` makes the gradient horizontal, any other text vertical.
/// A misspelled color therefore silently becomes `vertical = true` rather
/// than an error.
pub fn build_gradient(value: &CssValue, ctx: &ResolveContext<'_>) -> GradientModel {
    let mut gradient = GradientModel::default();

    for token in value.items() {
        match token {
            CssValue::Ident(word) if word == "gradient" => {}
            CssValue::Ident(word) if word == "linear" => gradient.linear = true,
            CssValue::Ident(word) if word == "radial" => gradient.linear = false,
            CssValue::Ident(_) | CssValue::StringLiteral(_) | CssValue::RgbColor(..) => {
                match try_resolve_color(token, ctx) {
                    Some(color) => gradient.stops.push(color),
                    None => gradient.vertical = token.css_text() != "false",
                }
            }
            CssValue::Percentage(percent) => gradient.percents.push(*percent),
            other => {
                tracing::debug!(token = %other.css_text(), "ignoring gradient token");
            }
        }
    }

    gradient
}
