//! Host toolkit seams.
//!
//! The engine never talks to a windowing system directly. Hosts implement
//! [`PlatformContext`] (read-only platform defaults), [`Toolkit`] (native
//! resource creation and disposal) and [`NativeWidget`] (the styled surface
//! of one widget). All calls happen on the UI thread.

use crate::css::value::Rgba;
use crate::geometry::Region;
use crate::resolve::cursor::CursorKind;
use crate::resolve::font::FontDescriptor;
use crate::resolve::system::SystemColor;
use crate::resource::handle::{
    ColorResource, CursorResource, FontResource, GradientResource, ImageResource,
};
use crate::widget::style_bits::StyleBits;

/// Opaque id of a native resource issued by a [`Toolkit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NativeHandle(pub u64);

/// Read-only platform defaults used during resolution.
pub trait PlatformContext {
    /// The platform's value for a system color.
    fn system_color(&self, color: SystemColor) -> Rgba;

    /// The platform's default font.
    fn system_font(&self) -> FontDescriptor;
}

/// Creates and destroys native resources. Handles are thread-affine: create
/// and dispose them on the thread that owns the display connection.
pub trait Toolkit: PlatformContext {
    /// Allocate a native color.
    fn create_color(&mut self, color: Rgba) -> NativeHandle;

    /// Allocate a native font.
    fn create_font(&mut self, font: &FontDescriptor) -> NativeHandle;

    /// Allocate a native cursor.
    fn create_cursor(&mut self, cursor: CursorKind) -> NativeHandle;

    /// Decode image bytes into a native image. The error is the decoder's
    /// message.
    fn create_image(&mut self, bytes: &[u8]) -> Result<NativeHandle, String>;

    /// Whether a handle has been disposed, by us or out-of-band.
    fn is_disposed(&self, handle: NativeHandle) -> bool;

    /// Release a native handle.
    fn dispose(&mut self, handle: NativeHandle);
}

/// The styleable surface of one native widget.
pub trait NativeWidget {
    /// Whether the native widget has been destroyed. Checked before every
    /// mutation.
    fn is_disposed(&self) -> bool;

    /// Widget bounds in the parent's coordinate space.
    fn bounds(&self) -> Region;

    /// The native style bitmask (diagnostic only).
    fn style_bits(&self) -> StyleBits;

    fn foreground(&self) -> Option<ColorResource>;
    fn set_foreground(&mut self, color: Option<ColorResource>);

    fn background(&self) -> Option<ColorResource>;
    fn set_background(&mut self, color: Option<ColorResource>);

    fn background_gradient(&self) -> Option<GradientResource>;
    fn set_background_gradient(&mut self, gradient: Option<GradientResource>);

    fn font(&self) -> Option<FontResource>;
    fn set_font(&mut self, font: Option<FontResource>);

    fn cursor(&self) -> Option<CursorResource>;
    fn set_cursor(&mut self, cursor: Option<CursorResource>);

    fn image(&self) -> Option<ImageResource>;
    fn set_image(&mut self, image: Option<ImageResource>);
}
