//! Widgets as the engine sees them: the tree, style bits, styleable
//! properties and default-value tracking.

pub mod lifecycle;
pub mod property;
pub mod style_bits;
pub mod tree;

pub use lifecycle::{DefaultValueSlot, ResourceLifecycleTracker};
pub use property::{PropertyKind, StyleValue};
pub use style_bits::StyleBits;
pub use tree::{WidgetId, WidgetTree};
