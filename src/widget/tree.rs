//! Widget arena: slotmap-backed tree of native widgets.

use std::collections::VecDeque;

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::platform::NativeWidget;

new_key_type! {
    /// Identity of a widget for the lifetime of the tree. Copy, lightweight.
    pub struct WidgetId;
}

const EMPTY_CHILDREN: &[WidgetId] = &[];

/// The styled widget tree.
///
/// Widgets live in a single `SlotMap`; parent/child links live in secondary
/// maps so removal is O(subtree size) and lookup is O(1).
pub struct WidgetTree<W> {
    widgets: SlotMap<WidgetId, W>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    root: Option<WidgetId>,
}

impl<W: NativeWidget> WidgetTree<W> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a parentless widget. The first one becomes the root.
    pub fn insert(&mut self, widget: W) -> WidgetId {
        let id = self.widgets.insert(widget);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a widget as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: WidgetId, widget: W) -> WidgetId {
        debug_assert!(self.widgets.contains_key(parent), "parent widget does not exist");
        let id = self.widgets.insert(widget);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        id
    }

    /// Remove a widget and all its descendants.
    ///
    /// Returns the ids that were removed, `id` first. Empty if `id` was not in
    /// the tree.
    pub fn remove(&mut self, id: WidgetId) -> Vec<WidgetId> {
        if !self.widgets.contains_key(id) {
            return Vec::new();
        }

        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        let mut removed = Vec::new();
        let mut queue = VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                queue.extend(kids);
            }
            self.parent.remove(current);
            if self.widgets.remove(current).is_some() {
                removed.push(current);
            }
        }

        removed
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// Children of a widget; empty if it has none or does not exist.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    pub fn get(&self, id: WidgetId) -> Option<&W> {
        self.widgets.get(id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut W> {
        self.widgets.get_mut(id)
    }

    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.widgets.contains_key(current) {
                continue;
            }
            result.push(current);
            // Reversed so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }
}

impl<W: NativeWidget> Default for WidgetTree<W> {
    fn default() -> Self {
        Self::new()
    }
}
