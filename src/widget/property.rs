//! Styleable widget properties and their typed values.

use std::fmt;

use crate::platform::{NativeWidget, PlatformContext, Toolkit};
use crate::resolve::cursor::CursorKind;
use crate::resolve::system::SystemColor;
use crate::resource::handle::{
    ColorResource, CursorResource, FontResource, GradientResource, ImageResource,
};
use crate::resource::registry::ResourceRegistry;

/// A native widget property the engine can override and restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Foreground,
    Background,
    BackgroundGradient,
    Font,
    Cursor,
    BackgroundImage,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 6] = [
        PropertyKind::Foreground,
        PropertyKind::Background,
        PropertyKind::BackgroundGradient,
        PropertyKind::Font,
        PropertyKind::Cursor,
        PropertyKind::BackgroundImage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PropertyKind::Foreground => "foreground",
            PropertyKind::Background => "background",
            PropertyKind::BackgroundGradient => "background-gradient",
            PropertyKind::Font => "font",
            PropertyKind::Cursor => "cursor",
            PropertyKind::BackgroundImage => "background-image",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of one widget property.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Color(ColorResource),
    Gradient(GradientResource),
    Font(FontResource),
    Cursor(CursorResource),
    Image(ImageResource),
}

impl StyleValue {
    /// Whether this value can be stored in a property of `kind`.
    pub fn fits(&self, kind: PropertyKind) -> bool {
        matches!(
            (self, kind),
            (StyleValue::Color(_), PropertyKind::Foreground | PropertyKind::Background)
                | (StyleValue::Gradient(_), PropertyKind::BackgroundGradient)
                | (StyleValue::Font(_), PropertyKind::Font)
                | (StyleValue::Cursor(_), PropertyKind::Cursor)
                | (StyleValue::Image(_), PropertyKind::BackgroundImage)
        )
    }

    /// Whether any native handle behind this value has been disposed.
    pub fn is_disposed(&self, toolkit: &dyn Toolkit) -> bool {
        match self {
            StyleValue::Color(c) => toolkit.is_disposed(c.handle()),
            StyleValue::Gradient(g) => g.handles().any(|h| toolkit.is_disposed(h)),
            StyleValue::Font(f) => toolkit.is_disposed(f.handle()),
            StyleValue::Cursor(c) => toolkit.is_disposed(c.handle()),
            StyleValue::Image(i) => toolkit.is_disposed(i.handle()),
        }
    }
}

/// Read the current value of a property.
pub fn read_property<W: NativeWidget + ?Sized>(widget: &W, kind: PropertyKind) -> Option<StyleValue> {
    match kind {
        PropertyKind::Foreground => widget.foreground().map(StyleValue::Color),
        PropertyKind::Background => widget.background().map(StyleValue::Color),
        PropertyKind::BackgroundGradient => widget.background_gradient().map(StyleValue::Gradient),
        PropertyKind::Font => widget.font().map(StyleValue::Font),
        PropertyKind::Cursor => widget.cursor().map(StyleValue::Cursor),
        PropertyKind::BackgroundImage => widget.image().map(StyleValue::Image),
    }
}

/// Write a property. A value of the wrong type for `kind` is dropped with a
/// warning and the widget is left untouched.
pub fn write_property<W: NativeWidget + ?Sized>(
    widget: &mut W,
    kind: PropertyKind,
    value: Option<StyleValue>,
) -> bool {
    match (kind, value) {
        (PropertyKind::Foreground, None) => widget.set_foreground(None),
        (PropertyKind::Foreground, Some(StyleValue::Color(c))) => widget.set_foreground(Some(c)),
        (PropertyKind::Background, None) => widget.set_background(None),
        (PropertyKind::Background, Some(StyleValue::Color(c))) => widget.set_background(Some(c)),
        (PropertyKind::BackgroundGradient, None) => widget.set_background_gradient(None),
        (PropertyKind::BackgroundGradient, Some(StyleValue::Gradient(g))) => {
            widget.set_background_gradient(Some(g))
        }
        (PropertyKind::Font, None) => widget.set_font(None),
        (PropertyKind::Font, Some(StyleValue::Font(f))) => widget.set_font(Some(f)),
        (PropertyKind::Cursor, None) => widget.set_cursor(None),
        (PropertyKind::Cursor, Some(StyleValue::Cursor(c))) => widget.set_cursor(Some(c)),
        (PropertyKind::BackgroundImage, None) => widget.set_image(None),
        (PropertyKind::BackgroundImage, Some(StyleValue::Image(i))) => widget.set_image(Some(i)),
        (kind, Some(value)) => {
            tracing::warn!(%kind, ?value, "value does not fit property");
            return false;
        }
    }
    true
}

/// The platform's own value for a property, used when a captured default
/// can no longer be restored.
pub fn platform_default(
    kind: PropertyKind,
    registry: &mut ResourceRegistry,
    toolkit: &mut dyn Toolkit,
) -> Option<StyleValue> {
    match kind {
        PropertyKind::Foreground => {
            let color = toolkit.system_color(SystemColor::WidgetForeground);
            Some(StyleValue::Color(registry.color(toolkit, color)))
        }
        PropertyKind::Background => {
            let color = toolkit.system_color(SystemColor::WidgetBackground);
            Some(StyleValue::Color(registry.color(toolkit, color)))
        }
        PropertyKind::Font => {
            let font = toolkit.system_font();
            Some(StyleValue::Font(registry.font(toolkit, &font)))
        }
        PropertyKind::Cursor => Some(StyleValue::Cursor(registry.cursor(toolkit, CursorKind::Arrow))),
        PropertyKind::BackgroundGradient | PropertyKind::BackgroundImage => None,
    }
}

impl From<ColorResource> for StyleValue {
    fn from(color: ColorResource) -> Self {
        StyleValue::Color(color)
    }
}

impl From<FontResource> for StyleValue {
    fn from(font: FontResource) -> Self {
        StyleValue::Font(font)
    }
}

impl From<CursorResource> for StyleValue {
    fn from(cursor: CursorResource) -> Self {
        StyleValue::Cursor(cursor)
    }
}

impl From<GradientResource> for StyleValue {
    fn from(gradient: GradientResource) -> Self {
        StyleValue::Gradient(gradient)
    }
}
