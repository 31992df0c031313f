//! Headless implementations of the host traits.
//!
//! [`HeadlessToolkit`] issues fake native handles and counts what it creates
//! and disposes, [`HeadlessWidget`] stores properties and counts mutations,
//! [`RecordingCanvas`] records draw calls for snapshot assertions and
//! [`MemoryLocator`] serves image bytes from memory.

pub mod headless;
pub mod snapshot;

pub use headless::{HeadlessToolkit, HeadlessWidget, MemoryLocator};
pub use snapshot::{DrawOp, RecordingCanvas};
