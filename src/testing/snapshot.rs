//! Recording canvas and its plain-text rendering for snapshot tests.

use std::fmt::Write;

use crate::css::value::Rgba;
use crate::paint::border::{Canvas, LineStyle};

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    LineWidth(i32),
    LineStyle(LineStyle),
    Foreground(Rgba),
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
}

/// A [`Canvas`] that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// One line per op. Empty for no ops.
    ///
    /// ```text
    /// width 2
    /// style Dashed
    /// color rgb(255, 0, 0)
    /// line (8, 8) -> (32, 8)
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            if !out.is_empty() {
                out.push('\n');
            }
            // Writing to a String cannot fail.
            let _ = match op {
                DrawOp::LineWidth(width) => write!(out, "width {width}"),
                DrawOp::LineStyle(style) => write!(out, "style {style:?}"),
                DrawOp::Foreground(color) => write!(out, "color {color}"),
                DrawOp::Line { x1, y1, x2, y2 } => {
                    write!(out, "line ({x1}, {y1}) -> ({x2}, {y2})")
                }
            };
        }
        out
    }
}

impl Canvas for RecordingCanvas {
    fn set_line_width(&mut self, width: i32) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn set_line_style(&mut self, style: LineStyle) {
        self.ops.push(DrawOp::LineStyle(style));
    }

    fn set_foreground(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Foreground(color));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_empty() {
        assert_eq!(RecordingCanvas::new().render(), "");
    }

    #[test]
    fn records_in_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_line_width(1);
        canvas.draw_line(0, 0, 4, 0);
        assert_eq!(
            canvas.ops(),
            &[DrawOp::LineWidth(1), DrawOp::Line { x1: 0, y1: 0, x2: 4, y2: 0 }]
        );
        insta::assert_snapshot!(canvas.render(), @r"
        width 1
        line (0, 0) -> (4, 0)
        ");
        canvas.clear();
        assert!(canvas.ops().is_empty());
    }
}
