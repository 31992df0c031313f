//! Value resolution: CSS values → colors, cursors, fonts, gradients.

pub mod color;
pub mod cursor;
pub mod font;
pub mod gradient;
pub mod named;
pub mod system;

use crate::css::value::Rgba;
use crate::platform::PlatformContext;
use crate::resolve::system::SystemColor;
use crate::theme::ThemeDefinitionProvider;

/// Everything a resolver may consult. Resolution is pure for a given context.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    pub platform: &'a dyn PlatformContext,
    pub theme: Option<&'a dyn ThemeDefinitionProvider>,
    /// Overrides the platform black used for unresolvable colors.
    pub default_color: Option<Rgba>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(platform: &'a dyn PlatformContext) -> Self {
        Self {
            platform,
            theme: None,
            default_color: None,
        }
    }

    /// Attach a theme definition provider (builder).
    pub fn with_theme(mut self, theme: &'a dyn ThemeDefinitionProvider) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Override the fallback color (builder).
    pub fn with_default_color(mut self, color: Rgba) -> Self {
        self.default_color = Some(color);
        self
    }

    /// The color substituted when resolution misses.
    pub fn fallback_color(&self) -> Rgba {
        self.default_color
            .unwrap_or_else(|| self.platform.system_color(SystemColor::Black))
    }
}
