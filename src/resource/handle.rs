//! Typed native resources.

use crate::css::value::Rgba;
use crate::platform::NativeHandle;
use crate::resolve::cursor::CursorKind;
use crate::resolve::font::FontDescriptor;

/// A native handle paired with the value it was created from.
///
/// Equality compares the value only. Two handles for the same color are
/// interchangeable as far as styling is concerned.
#[derive(Debug, Clone)]
pub struct Resource<T> {
    handle: NativeHandle,
    value: T,
}

impl<T> Resource<T> {
    pub fn new(handle: NativeHandle, value: T) -> Self {
        Self { handle, value }
    }

    pub fn handle(&self) -> NativeHandle {
        self.handle
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> PartialEq for Resource<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

pub type ColorResource = Resource<Rgba>;
pub type FontResource = Resource<FontDescriptor>;
pub type CursorResource = Resource<CursorKind>;
/// An image resource; the value is the URI it was loaded from.
pub type ImageResource = Resource<String>;

/// A gradient ready to paint: native stop colors plus their positions.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientResource {
    pub colors: Vec<ColorResource>,
    pub percents: Vec<i32>,
    pub vertical: bool,
    pub linear: bool,
}

impl GradientResource {
    /// Handles of every stop color.
    pub fn handles(&self) -> impl Iterator<Item = NativeHandle> + '_ {
        self.colors.iter().map(Resource::handle)
    }
}
