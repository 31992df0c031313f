//! Headless toolkit, widget and locator.

use std::collections::{HashMap, HashSet};
use std::io;

use crate::css::value::Rgba;
use crate::geometry::Region;
use crate::platform::{NativeHandle, NativeWidget, PlatformContext, Toolkit};
use crate::resolve::cursor::CursorKind;
use crate::resolve::font::{FontDescriptor, FontStyleBits};
use crate::resolve::system::SystemColor;
use crate::resource::handle::{
    ColorResource, CursorResource, FontResource, GradientResource, ImageResource,
};
use crate::resource::locator::ResourceLocator;
use crate::widget::style_bits::StyleBits;

/// Magic prefix [`HeadlessToolkit::create_image`] accepts as a valid image.
pub const IMAGE_MAGIC: &[u8] = b"IMG";

// ---------------------------------------------------------------------------
// HeadlessToolkit
// ---------------------------------------------------------------------------

/// A [`Toolkit`] without a display. Handles are sequential integers.
#[derive(Debug)]
pub struct HeadlessToolkit {
    palette: HashMap<SystemColor, Rgba>,
    system_font: FontDescriptor,
    next_handle: u64,
    live: HashSet<NativeHandle>,
    created: usize,
    dispose_log: Vec<NativeHandle>,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self {
            palette: HashMap::new(),
            system_font: FontDescriptor::new("Sans", 9, FontStyleBits::NORMAL),
            next_handle: 1,
            live: HashSet::new(),
            created: 0,
            dispose_log: Vec::new(),
        }
    }

    /// Override one system color (builder).
    pub fn with_palette(mut self, color: SystemColor, rgba: Rgba) -> Self {
        self.palette.insert(color, rgba);
        self
    }

    /// Override the system font (builder).
    pub fn with_system_font(mut self, font: FontDescriptor) -> Self {
        self.system_font = font;
        self
    }

    /// The value this toolkit reports for a system color.
    pub fn palette(&self, color: SystemColor) -> Rgba {
        self.palette
            .get(&color)
            .copied()
            .unwrap_or_else(|| color.fallback_rgba())
    }

    /// Destroy a handle without going through [`Toolkit::dispose`], the way a
    /// widget toolkit frees resources it owns. Not recorded in the dispose log.
    pub fn dispose_out_of_band(&mut self, handle: NativeHandle) {
        self.live.remove(&handle);
    }

    /// Total handles ever created.
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Handles created and not yet disposed.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Every [`Toolkit::dispose`] call, in order.
    pub fn dispose_log(&self) -> &[NativeHandle] {
        &self.dispose_log
    }

    fn issue(&mut self) -> NativeHandle {
        let handle = NativeHandle(self.next_handle);
        self.next_handle += 1;
        self.created += 1;
        self.live.insert(handle);
        handle
    }
}

impl Default for HeadlessToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformContext for HeadlessToolkit {
    fn system_color(&self, color: SystemColor) -> Rgba {
        self.palette(color)
    }

    fn system_font(&self) -> FontDescriptor {
        self.system_font.clone()
    }
}

impl Toolkit for HeadlessToolkit {
    fn create_color(&mut self, _color: Rgba) -> NativeHandle {
        self.issue()
    }

    fn create_font(&mut self, _font: &FontDescriptor) -> NativeHandle {
        self.issue()
    }

    fn create_cursor(&mut self, _cursor: CursorKind) -> NativeHandle {
        self.issue()
    }

    /// Accepts any bytes starting with [`IMAGE_MAGIC`].
    fn create_image(&mut self, bytes: &[u8]) -> Result<NativeHandle, String> {
        if !bytes.starts_with(IMAGE_MAGIC) {
            return Err("unsupported image format".to_string());
        }
        Ok(self.issue())
    }

    /// Unknown handles count as disposed.
    fn is_disposed(&self, handle: NativeHandle) -> bool {
        !self.live.contains(&handle)
    }

    fn dispose(&mut self, handle: NativeHandle) {
        self.dispose_log.push(handle);
        self.live.remove(&handle);
    }
}

// ---------------------------------------------------------------------------
// HeadlessWidget
// ---------------------------------------------------------------------------

/// A [`NativeWidget`] that stores its properties and counts every setter call.
#[derive(Debug, Clone, Default)]
pub struct HeadlessWidget {
    bounds: Region,
    style_bits: StyleBits,
    disposed: bool,
    mutations: usize,
    foreground: Option<ColorResource>,
    background: Option<ColorResource>,
    gradient: Option<GradientResource>,
    font: Option<FontResource>,
    cursor: Option<CursorResource>,
    image: Option<ImageResource>,
}

impl HeadlessWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bounds: Region) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_style_bits(mut self, bits: StyleBits) -> Self {
        self.style_bits = bits;
        self
    }

    /// Initial foreground; not counted as a mutation.
    pub fn with_foreground(mut self, color: ColorResource) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Initial background; not counted as a mutation.
    pub fn with_background(mut self, color: ColorResource) -> Self {
        self.background = Some(color);
        self
    }

    /// Initial font; not counted as a mutation.
    pub fn with_font(mut self, font: FontResource) -> Self {
        self.font = Some(font);
        self
    }

    /// Initial cursor; not counted as a mutation.
    pub fn with_cursor(mut self, cursor: CursorResource) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Mark the native widget destroyed.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// Number of setter calls so far.
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }
}

impl NativeWidget for HeadlessWidget {
    fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn bounds(&self) -> Region {
        self.bounds
    }

    fn style_bits(&self) -> StyleBits {
        self.style_bits
    }

    fn foreground(&self) -> Option<ColorResource> {
        self.foreground.clone()
    }

    fn set_foreground(&mut self, color: Option<ColorResource>) {
        self.mutations += 1;
        self.foreground = color;
    }

    fn background(&self) -> Option<ColorResource> {
        self.background.clone()
    }

    fn set_background(&mut self, color: Option<ColorResource>) {
        self.mutations += 1;
        self.background = color;
    }

    fn background_gradient(&self) -> Option<GradientResource> {
        self.gradient.clone()
    }

    fn set_background_gradient(&mut self, gradient: Option<GradientResource>) {
        self.mutations += 1;
        self.gradient = gradient;
    }

    fn font(&self) -> Option<FontResource> {
        self.font.clone()
    }

    fn set_font(&mut self, font: Option<FontResource>) {
        self.mutations += 1;
        self.font = font;
    }

    fn cursor(&self) -> Option<CursorResource> {
        self.cursor.clone()
    }

    fn set_cursor(&mut self, cursor: Option<CursorResource>) {
        self.mutations += 1;
        self.cursor = cursor;
    }

    fn image(&self) -> Option<ImageResource> {
        self.image.clone()
    }

    fn set_image(&mut self, image: Option<ImageResource>) {
        self.mutations += 1;
        self.image = image;
    }
}

// ---------------------------------------------------------------------------
// MemoryLocator
// ---------------------------------------------------------------------------

/// Serves files from memory under `mem:` URIs.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocator {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file (builder).
    pub fn with_file(mut self, path: &str, bytes: Vec<u8>) -> Self {
        self.files.insert(path.to_string(), bytes);
        self
    }
}

impl ResourceLocator for MemoryLocator {
    fn resolve(&self, path: &str) -> Option<String> {
        self.files
            .contains_key(path)
            .then(|| format!("mem:{path}"))
    }

    fn read(&self, uri: &str) -> io::Result<Vec<u8>> {
        uri.strip_prefix("mem:")
            .and_then(|path| self.files.get(path))
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, uri.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_sequential_and_live() {
        let mut toolkit = HeadlessToolkit::new();
        let a = toolkit.create_color(Rgba::WHITE);
        let b = toolkit.create_cursor(CursorKind::Hand);
        assert_eq!((a, b), (NativeHandle(1), NativeHandle(2)));
        assert!(!toolkit.is_disposed(a));
        assert_eq!(toolkit.live_count(), 2);
    }

    #[test]
    fn dispose_is_logged_out_of_band_is_not() {
        let mut toolkit = HeadlessToolkit::new();
        let a = toolkit.create_color(Rgba::WHITE);
        let b = toolkit.create_color(Rgba::BLACK);
        toolkit.dispose(a);
        toolkit.dispose_out_of_band(b);
        assert!(toolkit.is_disposed(a));
        assert!(toolkit.is_disposed(b));
        assert_eq!(toolkit.dispose_log(), &[a]);
    }

    #[test]
    fn images_need_magic() {
        let mut toolkit = HeadlessToolkit::new();
        assert!(toolkit.create_image(b"IMG-data").is_ok());
        assert_eq!(
            toolkit.create_image(b"\x89PNG"),
            Err("unsupported image format".to_string())
        );
        assert_eq!(toolkit.created_count(), 1);
    }

    #[test]
    fn palette_overrides() {
        let toolkit = HeadlessToolkit::new().with_palette(SystemColor::Black, Rgba::rgb(1, 1, 1));
        assert_eq!(toolkit.system_color(SystemColor::Black), Rgba::rgb(1, 1, 1));
        assert_eq!(
            toolkit.system_color(SystemColor::White),
            SystemColor::White.fallback_rgba()
        );
    }

    #[test]
    fn widget_counts_setters_only() {
        let mut widget = HeadlessWidget::new()
            .with_foreground(ColorResource::new(NativeHandle(5), Rgba::WHITE));
        assert_eq!(widget.mutation_count(), 0);
        widget.set_foreground(None);
        widget.set_cursor(None);
        assert_eq!(widget.mutation_count(), 2);
        assert_eq!(widget.foreground(), None);
    }

    #[test]
    fn memory_locator() {
        let locator = MemoryLocator::new().with_file("a.img", b"IMG".to_vec());
        assert_eq!(locator.resolve("a.img").as_deref(), Some("mem:a.img"));
        assert_eq!(locator.resolve("b.img"), None);
        assert_eq!(locator.read("mem:a.img").unwrap(), b"IMG");
        assert!(locator.read("mem:b.img").is_err());
    }
}
