//! Paint-time styling: borders drawn by the engine on each paint callback.

pub mod border;

pub use border::{paint_border, BorderDescriptor, Canvas, LineStyle};
