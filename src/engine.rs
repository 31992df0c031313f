//! The style engine: applies matched declarations to native widgets.
//!
//! Selector matching happens elsewhere. The engine receives the declarations
//! that apply to a widget, routes each one to its property handler, resolves
//! values into cached native resources and sets them through the
//! [`ResourceLifecycleTracker`], so every override can later be undone with
//! [`StyleEngine::remove_styles`].

use std::collections::HashSet;

use slotmap::SecondaryMap;
use thiserror::Error;

use crate::css::parser::{parse_declarations, parse_declarations_lenient, ParseError};
use crate::css::value::{CssValue, Declaration, Rgba};
use crate::paint::border::{paint_border, BorderDescriptor, Canvas};
use crate::platform::{NativeWidget, Toolkit};
use crate::resolve::color::{color_to_css, resolve_color};
use crate::resolve::cursor::resolve_cursor;
use crate::resolve::font::{font_size_points, merge_font, PartialFontSpec};
use crate::resolve::gradient::{build_gradient, is_gradient};
use crate::resolve::ResolveContext;
use crate::resource::handle::GradientResource;
use crate::resource::locator::{FileLocator, ResourceLocator};
use crate::resource::registry::ResourceRegistry;
use crate::resource::ResourceError;
use crate::theme::ThemeDefinitionProvider;
use crate::widget::lifecycle::ResourceLifecycleTracker;
use crate::widget::property::{PropertyKind, StyleValue};
use crate::widget::tree::{WidgetId, WidgetTree};

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Configuration for the style engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Color used when a color value resolves to nothing. `None` means the
    /// platform's black.
    pub default_color: Option<Rgba>,
    /// Whether [`StyleEngine::apply_to_subtree`] descends into children.
    pub apply_to_children: bool,
    /// Return the first resource failure instead of logging it and moving on.
    pub fail_fast: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_color: None,
            apply_to_children: true,
            fail_fast: false,
        }
    }
}

impl EngineConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback color (builder).
    pub fn with_default_color(mut self, color: Rgba) -> Self {
        self.default_color = Some(color);
        self
    }

    /// Set whether subtree application descends (builder).
    pub fn with_apply_to_children(mut self, apply: bool) -> Self {
        self.apply_to_children = apply;
        self
    }

    /// Set fail-fast error handling (builder).
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

// ---------------------------------------------------------------------------
// Errors and reports
// ---------------------------------------------------------------------------

/// Errors surfaced by the engine.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("property '{property}': {source}")]
    Resource {
        property: String,
        #[source]
        source: ResourceError,
    },
}

/// A declaration that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFailure {
    pub property: String,
    pub message: String,
}

/// What one declaration block did to one widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Properties handled, in declaration order.
    pub applied: Vec<String>,
    /// Repeats of a property already applied in the same block.
    pub skipped: Vec<String>,
    /// Properties no handler knows.
    pub unsupported: Vec<String>,
    /// Properties whose value the handler could not use. A later
    /// declaration of the same property still gets its turn.
    pub ignored: Vec<String>,
    /// Properties whose resources failed to load.
    pub failures: Vec<PropertyFailure>,
    /// Declarations dropped by the parser, as error messages.
    pub malformed: Vec<String>,
    /// Native property writes performed.
    pub mutations: usize,
}

impl ApplyReport {
    /// Whether every declaration was applied.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
            && self.unsupported.is_empty()
            && self.ignored.is_empty()
            && self.failures.is_empty()
            && self.malformed.is_empty()
    }
}

enum Handled {
    Applied,
    Ignored,
    Unsupported,
}

// ---------------------------------------------------------------------------
// StyleEngine
// ---------------------------------------------------------------------------

/// Owns the toolkit, the resource cache and all per-widget style state.
pub struct StyleEngine<T: Toolkit> {
    toolkit: T,
    registry: ResourceRegistry,
    tracker: ResourceLifecycleTracker,
    theme: Option<Box<dyn ThemeDefinitionProvider>>,
    locator: Box<dyn ResourceLocator>,
    borders: SecondaryMap<WidgetId, BorderDescriptor>,
    config: EngineConfig,
}

impl<T: Toolkit> StyleEngine<T> {
    /// Create an engine. Images resolve relative to the working directory
    /// until [`set_locator`](Self::set_locator) is called.
    pub fn new(toolkit: T, config: EngineConfig) -> Self {
        Self {
            toolkit,
            registry: ResourceRegistry::new(),
            tracker: ResourceLifecycleTracker::new(),
            theme: None,
            locator: Box::new(FileLocator::new(".")),
            borders: SecondaryMap::new(),
            config,
        }
    }

    pub fn set_theme(&mut self, theme: impl ThemeDefinitionProvider + 'static) {
        self.theme = Some(Box::new(theme));
    }

    pub fn set_locator(&mut self, locator: impl ResourceLocator + 'static) {
        self.locator = Box::new(locator);
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn toolkit_mut(&mut self) -> &mut T {
        &mut self.toolkit
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub fn tracker(&self) -> &ResourceLifecycleTracker {
        &self.tracker
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The declared border of a widget.
    pub fn border(&self, id: WidgetId) -> Option<&BorderDescriptor> {
        self.borders.get(id)
    }

    fn resolve_context(&self) -> ResolveContext<'_> {
        ResolveContext {
            platform: &self.toolkit,
            theme: self.theme.as_deref(),
            default_color: self.config.default_color,
        }
    }

    // -- applying -----------------------------------------------------------

    /// Apply one declaration block to one widget.
    ///
    /// Only the first successfully applied declaration of each property
    /// counts; one that fails or is ignored leaves the property open. Font
    /// sub-properties are merged onto the widget's font once, after the whole
    /// block. A failing image does not stop the rest of the block unless
    /// [`EngineConfig::fail_fast`] is set.
    pub fn apply_declarations<W: NativeWidget>(
        &mut self,
        tree: &mut WidgetTree<W>,
        id: WidgetId,
        declarations: &[Declaration],
    ) -> Result<ApplyReport, StyleError> {
        let mut report = ApplyReport::default();
        let Some(widget) = tree.get_mut(id) else {
            tracing::debug!(?id, "apply skipped, widget not in tree");
            return Ok(report);
        };
        if widget.is_disposed() {
            tracing::debug!(?id, "apply skipped, widget disposed");
            return Ok(report);
        }

        let mut seen = HashSet::new();
        let mut font = PartialFontSpec::new();

        for declaration in declarations {
            let property = declaration.property.as_str();
            if seen.contains(property) {
                report.skipped.push(property.to_string());
                continue;
            }
            match self.apply_property(id, widget, declaration, &mut font, &mut report) {
                Ok(Handled::Applied) => {
                    seen.insert(property);
                    report.applied.push(property.to_string());
                }
                Ok(Handled::Ignored) => report.ignored.push(property.to_string()),
                Ok(Handled::Unsupported) => {
                    tracing::debug!(property, "unsupported property");
                    report.unsupported.push(property.to_string());
                }
                Err(source) => {
                    if self.config.fail_fast {
                        return Err(StyleError::Resource {
                            property: property.to_string(),
                            source,
                        });
                    }
                    tracing::warn!(property, error = %source, "failed to apply property");
                    report.failures.push(PropertyFailure {
                        property: property.to_string(),
                        message: source.to_string(),
                    });
                }
            }
        }

        if !font.is_empty() {
            let existing = widget
                .font()
                .map(|current| current.value().clone())
                .unwrap_or_else(|| self.toolkit.system_font());
            let merged = merge_font(&font, &existing, self.theme.as_deref());
            let resource = self.registry.font(&mut self.toolkit, &merged);
            if self
                .tracker
                .set_if_changed(id, PropertyKind::Font, widget, Some(StyleValue::Font(resource)))
            {
                report.mutations += 1;
            }
        }

        Ok(report)
    }

    fn apply_property<W: NativeWidget>(
        &mut self,
        id: WidgetId,
        widget: &mut W,
        declaration: &Declaration,
        font: &mut PartialFontSpec,
        report: &mut ApplyReport,
    ) -> Result<Handled, ResourceError> {
        let value = &declaration.value;
        let change = match declaration.property.as_str() {
            "color" => {
                let color = self.color_value(value);
                Some((PropertyKind::Foreground, Some(color)))
            }
            "background-color" if is_gradient(value) => {
                let gradient = self.gradient_value(value);
                Some((PropertyKind::BackgroundGradient, Some(gradient)))
            }
            "background-color" => {
                let color = self.color_value(value);
                Some((PropertyKind::Background, Some(color)))
            }
            "background-image" => match value {
                CssValue::Uri(path) => {
                    let image = self.registry.image(&mut self.toolkit, &*self.locator, path)?;
                    Some((PropertyKind::BackgroundImage, Some(StyleValue::Image(image))))
                }
                CssValue::Ident(none) if none.eq_ignore_ascii_case("none") => {
                    Some((PropertyKind::BackgroundImage, None))
                }
                other => {
                    tracing::debug!(value = %other.css_text(), "ignoring background-image value");
                    return Ok(Handled::Ignored);
                }
            },
            "cursor" => {
                let cursor = self.registry.cursor(&mut self.toolkit, resolve_cursor(value));
                Some((PropertyKind::Cursor, Some(StyleValue::Cursor(cursor))))
            }
            "font" => {
                font.apply_shorthand(value);
                None
            }
            "font-family" => {
                font.family = Some(value.clone());
                None
            }
            "font-size" => match font_size_points(value) {
                Some(points) => {
                    font.size = Some(points);
                    None
                }
                None => {
                    tracing::debug!(value = %value.css_text(), "ignoring font-size value");
                    return Ok(Handled::Ignored);
                }
            },
            "font-style" => {
                font.style = Some(value.css_text());
                None
            }
            "font-weight" => {
                font.weight = Some(value.css_text());
                None
            }
            "border" | "border-color" | "border-width" | "border-style" => {
                if !self.apply_border(id, &declaration.property, value) {
                    return Ok(Handled::Ignored);
                }
                None
            }
            _ => return Ok(Handled::Unsupported),
        };

        if let Some((kind, new)) = change {
            if self.tracker.set_if_changed(id, kind, widget, new) {
                report.mutations += 1;
            }
        }
        Ok(Handled::Applied)
    }

    fn color_value(&mut self, value: &CssValue) -> StyleValue {
        let rgba = resolve_color(value, &self.resolve_context());
        StyleValue::Color(self.registry.color(&mut self.toolkit, rgba))
    }

    fn gradient_value(&mut self, value: &CssValue) -> StyleValue {
        let model = build_gradient(value, &self.resolve_context());
        let colors = model
            .stops
            .iter()
            .map(|&stop| self.registry.color(&mut self.toolkit, stop))
            .collect();
        StyleValue::Gradient(GradientResource {
            colors,
            percents: model.percents(),
            vertical: model.vertical,
            linear: model.linear,
        })
    }

    /// Returns false when the value was not usable for `property`.
    fn apply_border(&mut self, id: WidgetId, property: &str, value: &CssValue) -> bool {
        let Some(entry) = self.borders.entry(id) else {
            return false;
        };
        let border = entry.or_default();
        match property {
            "border-color" => border.set_color(value),
            "border-style" => border.set_style(value),
            "border-width" => {
                if !border.set_width(value) {
                    tracing::debug!(value = %value.css_text(), "ignoring border-width value");
                    return false;
                }
            }
            _ => border.apply_shorthand(value),
        }
        true
    }

    /// Apply declarations to `root` and, when
    /// [`EngineConfig::apply_to_children`] is set, to every descendant in
    /// depth-first order. `lookup` supplies each widget's matched
    /// declarations.
    ///
    /// Failures on one widget never stop the walk; with `fail_fast` the first
    /// failure ends it.
    pub fn apply_to_subtree<W, F>(
        &mut self,
        tree: &mut WidgetTree<W>,
        root: WidgetId,
        mut lookup: F,
    ) -> Result<Vec<(WidgetId, ApplyReport)>, StyleError>
    where
        W: NativeWidget,
        F: FnMut(WidgetId) -> Vec<Declaration>,
    {
        let targets = if self.config.apply_to_children {
            tree.walk_depth_first(root)
        } else if tree.contains(root) {
            vec![root]
        } else {
            Vec::new()
        };

        let mut reports = Vec::with_capacity(targets.len());
        for id in targets {
            let declarations = lookup(id);
            if declarations.is_empty() {
                continue;
            }
            let report = self.apply_declarations(tree, id, &declarations)?;
            reports.push((id, report));
        }
        Ok(reports)
    }

    /// Parse a declaration block and apply it to one widget.
    ///
    /// Malformed declarations are dropped and listed in
    /// [`ApplyReport::malformed`]; the rest of the block still applies. With
    /// [`EngineConfig::fail_fast`] the first one is returned as an error
    /// instead and nothing is applied.
    pub fn parse_and_apply<W: NativeWidget>(
        &mut self,
        tree: &mut WidgetTree<W>,
        id: WidgetId,
        text: &str,
    ) -> Result<ApplyReport, StyleError> {
        if self.config.fail_fast {
            let declarations = parse_declarations(text)?;
            return self.apply_declarations(tree, id, &declarations);
        }
        let (declarations, errors) = parse_declarations_lenient(text);
        let mut report = self.apply_declarations(tree, id, &declarations)?;
        report.malformed = errors.iter().map(ToString::to_string).collect();
        Ok(report)
    }

    // -- removing -----------------------------------------------------------

    /// Restore every property of the widget to its captured default and drop
    /// its border. Returns the number of properties restored.
    pub fn remove_styles<W: NativeWidget>(&mut self, tree: &mut WidgetTree<W>, id: WidgetId) -> usize {
        self.borders.remove(id);
        let Some(widget) = tree.get_mut(id) else {
            return 0;
        };
        let mut restored = 0;
        for kind in PropertyKind::ALL {
            if self
                .tracker
                .restore_default(id, kind, widget, &mut self.registry, &mut self.toolkit)
            {
                restored += 1;
            }
        }
        restored
    }

    /// Drop all state of a destroyed widget. Cached resources stay in the
    /// registry; other widgets may share them.
    pub fn widget_disposed(&mut self, id: WidgetId) {
        self.tracker.forget(id);
        self.borders.remove(id);
        tracing::trace!(?id, "widget state forgotten");
    }

    /// Release every native resource the engine created. Returns how many
    /// handles were disposed.
    pub fn dispose(&mut self) -> usize {
        self.registry.dispose(&mut self.toolkit)
    }

    // -- reading ------------------------------------------------------------

    /// The current value of a property on a widget, as CSS text.
    pub fn retrieve_property<W: NativeWidget>(
        &self,
        tree: &WidgetTree<W>,
        id: WidgetId,
        property: &str,
    ) -> Option<String> {
        let widget = tree.get(id)?;
        match property {
            "color" => widget.foreground().map(|c| color_to_css(*c.value())),
            "background-color" => widget.background().map(|c| color_to_css(*c.value())),
            "background-image" => widget.image().map(|i| format!("url({})", i.value())),
            "cursor" => widget.cursor().map(|c| c.value().css_name().to_string()),
            "font-family" => widget.font().map(|f| f.value().family.clone()),
            "font-size" => widget.font().map(|f| f.value().height.to_string()),
            "font-style" => widget
                .font()
                .map(|f| (if f.value().is_italic() { "italic" } else { "normal" }).to_string()),
            "font-weight" => widget
                .font()
                .map(|f| (if f.value().is_bold() { "bold" } else { "normal" }).to_string()),
            "border-width" => self.borders.get(id).map(|b| b.width.to_string()),
            "border-style" => self.borders.get(id).map(|b| b.style.clone()),
            "border-color" => self
                .borders
                .get(id)
                .and_then(|b| b.color.as_ref())
                .map(CssValue::css_text),
            _ => None,
        }
    }

    // -- painting -----------------------------------------------------------

    /// Paint the widget's border onto its parent's canvas. Returns whether
    /// anything was drawn.
    pub fn paint<W: NativeWidget>(
        &self,
        tree: &WidgetTree<W>,
        id: WidgetId,
        canvas: &mut dyn Canvas,
    ) -> bool {
        let (Some(widget), Some(border)) = (tree.get(id), self.borders.get(id)) else {
            return false;
        };
        if widget.is_disposed() {
            return false;
        }
        paint_border(border, widget.bounds(), &self.resolve_context(), canvas)
    }
}
