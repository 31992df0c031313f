//! Value-keyed cache of native resources.
//!
//! Widgets styled with the same value share one native handle. Handles are
//! only released by [`ResourceRegistry::dispose`]; a handle the toolkit
//! disposed behind our back is recreated on the next request.

use std::collections::HashMap;
use std::hash::Hash;

use crate::css::value::Rgba;
use crate::platform::{NativeHandle, Toolkit};
use crate::resolve::cursor::CursorKind;
use crate::resolve::font::FontDescriptor;
use crate::resource::handle::{ColorResource, CursorResource, FontResource, ImageResource};
use crate::resource::locator::ResourceLocator;
use crate::resource::ResourceError;

/// Owner of every native resource the engine creates.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    colors: HashMap<Rgba, NativeHandle>,
    fonts: HashMap<FontDescriptor, NativeHandle>,
    cursors: HashMap<CursorKind, NativeHandle>,
    images: HashMap<String, NativeHandle>,
}

/// Cached handle for `key`, creating (or recreating) it when missing or dead.
fn cached<K: Hash + Eq>(
    cache: &mut HashMap<K, NativeHandle>,
    key: K,
    toolkit: &mut dyn Toolkit,
    create: impl FnOnce(&mut dyn Toolkit) -> NativeHandle,
) -> NativeHandle {
    if let Some(&handle) = cache.get(&key) {
        if !toolkit.is_disposed(handle) {
            tracing::trace!(?handle, "resource cache hit");
            return handle;
        }
        tracing::debug!(?handle, "cached resource was disposed, recreating");
    }
    let handle = create(toolkit);
    cache.insert(key, handle);
    handle
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&mut self, toolkit: &mut dyn Toolkit, color: Rgba) -> ColorResource {
        let handle = cached(&mut self.colors, color, toolkit, |tk| tk.create_color(color));
        ColorResource::new(handle, color)
    }

    pub fn font(&mut self, toolkit: &mut dyn Toolkit, font: &FontDescriptor) -> FontResource {
        let handle = cached(&mut self.fonts, font.clone(), toolkit, |tk| tk.create_font(font));
        FontResource::new(handle, font.clone())
    }

    pub fn cursor(&mut self, toolkit: &mut dyn Toolkit, cursor: CursorKind) -> CursorResource {
        let handle = cached(&mut self.cursors, cursor, toolkit, |tk| tk.create_cursor(cursor));
        CursorResource::new(handle, cursor)
    }

    /// Load an image through `locator`, cached by resolved URI.
    pub fn image(
        &mut self,
        toolkit: &mut dyn Toolkit,
        locator: &dyn ResourceLocator,
        path: &str,
    ) -> Result<ImageResource, ResourceError> {
        let uri = locator
            .resolve(path)
            .ok_or_else(|| ResourceError::Unresolved(path.to_string()))?;

        if let Some(&handle) = self.images.get(&uri) {
            if !toolkit.is_disposed(handle) {
                tracing::trace!(?handle, %uri, "image cache hit");
                return Ok(ImageResource::new(handle, uri));
            }
        }

        let bytes = locator.read(&uri).map_err(|source| ResourceError::Io {
            uri: uri.clone(),
            source,
        })?;
        let handle = toolkit
            .create_image(&bytes)
            .map_err(|message| ResourceError::Decode {
                uri: uri.clone(),
                message,
            })?;
        self.images.insert(uri.clone(), handle);
        Ok(ImageResource::new(handle, uri))
    }

    /// Number of cached handles.
    pub fn len(&self) -> usize {
        self.colors.len() + self.fonts.len() + self.cursors.len() + self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dispose every cached handle that is still alive and empty the cache.
    /// Returns how many handles were disposed.
    pub fn dispose(&mut self, toolkit: &mut dyn Toolkit) -> usize {
        let handles: Vec<NativeHandle> = self
            .colors
            .drain()
            .map(|(_, h)| h)
            .chain(self.fonts.drain().map(|(_, h)| h))
            .chain(self.cursors.drain().map(|(_, h)| h))
            .chain(self.images.drain().map(|(_, h)| h))
            .collect();

        let mut disposed = 0;
        for handle in handles {
            if !toolkit.is_disposed(handle) {
                toolkit.dispose(handle);
                disposed += 1;
            }
        }
        tracing::debug!(disposed, "resource registry disposed");
        disposed
    }
}
