//! # gilt-skin
//!
//! Resolves parsed CSS values into native widget resources and manages their
//! lifecycle.
//!
//! A cascade (not part of this crate) decides which declarations apply to
//! which widget. gilt-skin takes it from there: colors, fonts, gradients,
//! cursors and images are resolved through fallback chains, turned into
//! shared native handles and set on widgets in a way that can be undone
//! exactly. Borders are painted on demand.
//!
//! ## Core Systems
//!
//! - **[`css`]**: value model, logos tokenizer, declaration parser
//! - **[`resolve`]**: color, cursor, font and gradient resolution
//! - **[`theme`]**: `#`-prefixed theme definitions
//! - **[`platform`]**: traits the host toolkit implements
//! - **[`resource`]**: typed handles, value-keyed cache, image locators
//! - **[`widget`]**: slotmap widget tree, default capture and restore
//! - **[`paint`]**: border painting
//! - **[`engine`]**: applies declaration blocks to widgets
//! - **[`testing`]**: headless toolkit, widget and canvas
//! - **[`geometry`]**: widget bounds as a Region rectangle
//!
//! ```
//! use gilt_skin::engine::{EngineConfig, StyleEngine};
//! use gilt_skin::testing::{HeadlessToolkit, HeadlessWidget};
//! use gilt_skin::widget::WidgetTree;
//!
//! let mut engine = StyleEngine::new(HeadlessToolkit::new(), EngineConfig::new());
//! let mut tree = WidgetTree::new();
//! let button = tree.insert(HeadlessWidget::new());
//!
//! engine.parse_and_apply(&mut tree, button, "color: red; font-weight: bold").unwrap();
//! assert_eq!(
//!     engine.retrieve_property(&tree, button, "color").as_deref(),
//!     Some("rgb(255, 0, 0)")
//! );
//!
//! engine.remove_styles(&mut tree, button);
//! assert_eq!(engine.retrieve_property(&tree, button, "color"), None);
//! ```

// Foundation
pub mod geometry;

// Values and resolution
pub mod css;
pub mod resolve;
pub mod theme;

// Host seams and resources
pub mod platform;
pub mod resource;

// Widgets and styling
pub mod engine;
pub mod paint;
pub mod widget;

// Headless host
pub mod testing;

pub use engine::{ApplyReport, EngineConfig, StyleEngine, StyleError};
