//! Default-value capture and restore for styled widgets.
//!
//! Before the engine overrides a native property it records the widget's
//! original value in a [`DefaultValueSlot`]. The first capture wins: later
//! overrides never replace the baseline, so removing styles always returns
//! the widget to what it looked like before it was first styled.

use std::collections::HashMap;

use slotmap::SecondaryMap;

use crate::platform::{NativeWidget, Toolkit};
use crate::resource::registry::ResourceRegistry;
use crate::widget::property::{platform_default, read_property, write_property, PropertyKind, StyleValue};
use crate::widget::tree::WidgetId;

// ---------------------------------------------------------------------------
// DefaultValueSlot
// ---------------------------------------------------------------------------

/// Captured pre-override values of one widget, by property.
///
/// A captured `None` means the widget had no value of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultValueSlot {
    captured: HashMap<PropertyKind, Option<StyleValue>>,
}

impl DefaultValueSlot {
    pub fn get(&self, kind: PropertyKind) -> Option<&Option<StyleValue>> {
        self.captured.get(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = PropertyKind> + '_ {
        self.captured.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.captured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captured.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ResourceLifecycleTracker
// ---------------------------------------------------------------------------

/// Per-widget default-value bookkeeping.
#[derive(Debug, Default)]
pub struct ResourceLifecycleTracker {
    slots: SecondaryMap<WidgetId, DefaultValueSlot>,
    captures: usize,
}

impl ResourceLifecycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `current` as the default of `(owner, kind)` unless one was
    /// already captured. Returns whether this call captured.
    pub fn store_default(
        &mut self,
        owner: WidgetId,
        kind: PropertyKind,
        current: Option<StyleValue>,
    ) -> bool {
        let Some(entry) = self.slots.entry(owner) else {
            return false;
        };
        let slot = entry.or_default();
        if slot.captured.contains_key(&kind) {
            return false;
        }
        slot.captured.insert(kind, current);
        self.captures += 1;
        true
    }

    /// Put the captured default of `(owner, kind)` back on the widget.
    ///
    /// A default whose native handle has since been disposed is replaced by
    /// the platform default. The slot is kept, so restoring twice is
    /// harmless. Returns `false` without touching the widget when it is
    /// disposed or nothing was captured.
    pub fn restore_default<W: NativeWidget + ?Sized>(
        &self,
        owner: WidgetId,
        kind: PropertyKind,
        widget: &mut W,
        registry: &mut ResourceRegistry,
        toolkit: &mut dyn Toolkit,
    ) -> bool {
        if widget.is_disposed() {
            tracing::debug!(?owner, %kind, "restore skipped, widget disposed");
            return false;
        }
        let Some(captured) = self.captured(owner, kind) else {
            return false;
        };

        let value = match captured {
            Some(value) if value.is_disposed(&*toolkit) => {
                tracing::debug!(?owner, %kind, "captured default was disposed, using platform default");
                platform_default(kind, registry, toolkit)
            }
            other => other.clone(),
        };
        write_property(widget, kind, value)
    }

    /// Set `(owner, kind)` to `new` unless the widget already holds an equal
    /// value or `new` is the wrong kind of value for `kind`. The current value
    /// is captured before the first mutation.
    /// Returns whether the widget was mutated.
    pub fn set_if_changed<W: NativeWidget + ?Sized>(
        &mut self,
        owner: WidgetId,
        kind: PropertyKind,
        widget: &mut W,
        new: Option<StyleValue>,
    ) -> bool {
        if widget.is_disposed() {
            tracing::debug!(?owner, %kind, "set skipped, widget disposed");
            return false;
        }
        if new.as_ref().is_some_and(|value| !value.fits(kind)) {
            tracing::warn!(?owner, %kind, "set skipped, value does not fit the property");
            return false;
        }
        let current = read_property(widget, kind);
        if current == new {
            return false;
        }
        self.store_default(owner, kind, current);
        write_property(widget, kind, new)
    }

    /// Drop every slot of a destroyed widget.
    pub fn forget(&mut self, owner: WidgetId) -> Option<DefaultValueSlot> {
        self.slots.remove(owner)
    }

    pub fn has_default(&self, owner: WidgetId, kind: PropertyKind) -> bool {
        self.captured(owner, kind).is_some()
    }

    /// The captured default, if one was captured. The inner `None` is a
    /// captured absence.
    pub fn captured(&self, owner: WidgetId, kind: PropertyKind) -> Option<&Option<StyleValue>> {
        self.slots.get(owner).and_then(|slot| slot.get(kind))
    }

    pub fn slot(&self, owner: WidgetId) -> Option<&DefaultValueSlot> {
        self.slots.get(owner)
    }

    /// Total number of captures since creation.
    pub fn capture_count(&self) -> usize {
        self.captures
    }

    /// Number of widgets with at least one slot.
    pub fn tracked_count(&self) -> usize {
        self.slots.len()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
