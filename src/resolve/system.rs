//! Platform system colors addressed by symbolic name.
//!
//! CSS writes them dashed and lower-case (`widget-background`); the table is
//! keyed by the platform spelling (`WIDGET_BACKGROUND`).

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::css::value::Rgba;

/// A color owned by the platform rather than by the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemColor {
    White,
    Black,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    Gray,
    DarkGray,
    WidgetDarkShadow,
    WidgetNormalShadow,
    WidgetLightShadow,
    WidgetHighlightShadow,
    WidgetForeground,
    WidgetBackground,
    WidgetBorder,
    ListForeground,
    ListBackground,
    ListSelection,
    ListSelectionText,
    InfoForeground,
    InfoBackground,
    TitleForeground,
    TitleBackground,
    TitleBackgroundGradient,
    TitleInactiveForeground,
    TitleInactiveBackground,
    TitleInactiveBackgroundGradient,
    LinkForeground,
}

static SYSTEM_COLORS: &[(&str, SystemColor)] = &[
    ("WHITE", SystemColor::White),
    ("BLACK", SystemColor::Black),
    ("RED", SystemColor::Red),
    ("DARK_RED", SystemColor::DarkRed),
    ("GREEN", SystemColor::Green),
    ("DARK_GREEN", SystemColor::DarkGreen),
    ("YELLOW", SystemColor::Yellow),
    ("DARK_YELLOW", SystemColor::DarkYellow),
    ("BLUE", SystemColor::Blue),
    ("DARK_BLUE", SystemColor::DarkBlue),
    ("MAGENTA", SystemColor::Magenta),
    ("DARK_MAGENTA", SystemColor::DarkMagenta),
    ("CYAN", SystemColor::Cyan),
    ("DARK_CYAN", SystemColor::DarkCyan),
    ("GRAY", SystemColor::Gray),
    ("DARK_GRAY", SystemColor::DarkGray),
    ("WIDGET_DARK_SHADOW", SystemColor::WidgetDarkShadow),
    ("WIDGET_NORMAL_SHADOW", SystemColor::WidgetNormalShadow),
    ("WIDGET_LIGHT_SHADOW", SystemColor::WidgetLightShadow),
    ("WIDGET_HIGHLIGHT_SHADOW", SystemColor::WidgetHighlightShadow),
    ("WIDGET_FOREGROUND", SystemColor::WidgetForeground),
    ("WIDGET_BACKGROUND", SystemColor::WidgetBackground),
    ("WIDGET_BORDER", SystemColor::WidgetBorder),
    ("LIST_FOREGROUND", SystemColor::ListForeground),
    ("LIST_BACKGROUND", SystemColor::ListBackground),
    ("LIST_SELECTION", SystemColor::ListSelection),
    ("LIST_SELECTION_TEXT", SystemColor::ListSelectionText),
    ("INFO_FOREGROUND", SystemColor::InfoForeground),
    ("INFO_BACKGROUND", SystemColor::InfoBackground),
    ("TITLE_FOREGROUND", SystemColor::TitleForeground),
    ("TITLE_BACKGROUND", SystemColor::TitleBackground),
    ("TITLE_BACKGROUND_GRADIENT", SystemColor::TitleBackgroundGradient),
    ("TITLE_INACTIVE_FOREGROUND", SystemColor::TitleInactiveForeground),
    ("TITLE_INACTIVE_BACKGROUND", SystemColor::TitleInactiveBackground),
    (
        "TITLE_INACTIVE_BACKGROUND_GRADIENT",
        SystemColor::TitleInactiveBackgroundGradient,
    ),
    ("LINK_FOREGROUND", SystemColor::LinkForeground),
];

static SYSTEM_COLOR_MAP: LazyLock<HashMap<&'static str, SystemColor>> =
    LazyLock::new(|| SYSTEM_COLORS.iter().copied().collect());

impl SystemColor {
    /// Resolve a CSS spelling like `widget-background` (or the platform
    /// spelling `WIDGET_BACKGROUND`) to a system color.
    pub fn from_symbolic(name: &str) -> Option<SystemColor> {
        let key = name.replace('-', "_").to_ascii_uppercase();
        SYSTEM_COLOR_MAP.get(key.as_str()).copied()
    }

    /// The platform spelling of this color's name.
    pub fn platform_name(self) -> &'static str {
        SYSTEM_COLORS
            .iter()
            .find(|(_, color)| *color == self)
            .map(|(name, _)| *name)
            .unwrap_or("BLACK")
    }

    /// A neutral light palette for platforms that do not report their own.
    pub fn fallback_rgba(self) -> Rgba {
        match self {
            Self::White => Rgba::rgb(255, 255, 255),
            Self::Black => Rgba::rgb(0, 0, 0),
            Self::Red => Rgba::rgb(255, 0, 0),
            Self::DarkRed => Rgba::rgb(128, 0, 0),
            Self::Green => Rgba::rgb(0, 255, 0),
            Self::DarkGreen => Rgba::rgb(0, 128, 0),
            Self::Yellow => Rgba::rgb(255, 255, 0),
            Self::DarkYellow => Rgba::rgb(128, 128, 0),
            Self::Blue => Rgba::rgb(0, 0, 255),
            Self::DarkBlue => Rgba::rgb(0, 0, 128),
            Self::Magenta => Rgba::rgb(255, 0, 255),
            Self::DarkMagenta => Rgba::rgb(128, 0, 128),
            Self::Cyan => Rgba::rgb(0, 255, 255),
            Self::DarkCyan => Rgba::rgb(0, 128, 128),
            Self::Gray => Rgba::rgb(192, 192, 192),
            Self::DarkGray => Rgba::rgb(128, 128, 128),
            Self::WidgetDarkShadow => Rgba::rgb(0, 0, 0),
            Self::WidgetNormalShadow => Rgba::rgb(160, 160, 160),
            Self::WidgetLightShadow => Rgba::rgb(227, 227, 227),
            Self::WidgetHighlightShadow => Rgba::rgb(255, 255, 255),
            Self::WidgetForeground => Rgba::rgb(0, 0, 0),
            Self::WidgetBackground => Rgba::rgb(240, 240, 240),
            Self::WidgetBorder => Rgba::rgb(100, 100, 100),
            Self::ListForeground => Rgba::rgb(0, 0, 0),
            Self::ListBackground => Rgba::rgb(255, 255, 255),
            Self::ListSelection => Rgba::rgb(51, 153, 255),
            Self::ListSelectionText => Rgba::rgb(255, 255, 255),
            Self::InfoForeground => Rgba::rgb(0, 0, 0),
            Self::InfoBackground => Rgba::rgb(255, 255, 225),
            Self::TitleForeground => Rgba::rgb(255, 255, 255),
            Self::TitleBackground => Rgba::rgb(0, 84, 227),
            Self::TitleBackgroundGradient => Rgba::rgb(61, 149, 255),
            Self::TitleInactiveForeground => Rgba::rgb(216, 228, 248),
            Self::TitleInactiveBackground => Rgba::rgb(122, 150, 223),
            Self::TitleInactiveBackgroundGradient => Rgba::rgb(157, 185, 235),
            Self::LinkForeground => Rgba::rgb(0, 102, 204),
        }
    }
}
