use slotmap::{new_key_type, SlotMap};
use std::fmt;

use super::widget::Widget;
use crate::ui::geom::{Pos, Rect};

new_key_type! { pub struct WidgetKey; }

#[derive(Debug)]
pub enum SceneError {
    InvalidParent,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidParent => write!(f, "parent widget is not mounted"),
        }
    }
}

impl std::error::Error for SceneError {}

struct Mounted {
    widget: Box<dyn Widget>,
    rect: Rect,
    parent: Option<WidgetKey>,
    children: Vec<WidgetKey>,
}

/// Read-only view of the mounted widget tree.
///
/// This is the seam between the jump resolver and the host layout system:
/// enumeration in tree order, position query, id lookup, and the liveness
/// check a possibly-stale handle must pass before use.
pub trait Screen {
    /// All mounted widgets, depth-first from the root, parents before
    /// children, siblings in mount order.
    fn walk(&self) -> Vec<WidgetKey>;

    fn widget(&self, key: WidgetKey) -> Option<&dyn Widget>;

    /// Current screen-relative offset (top-left cell) of a mounted widget.
    fn offset_of(&self, key: WidgetKey) -> Option<Pos>;

    /// First widget (in tree order) carrying the given stable id.
    fn find_by_id(&self, id: &str) -> Option<WidgetKey>;

    fn is_mounted(&self, key: WidgetKey) -> bool;
}

/// Retained tree of mounted widgets.
///
/// Widgets live in a generational arena: unmounting invalidates every handle
/// to the subtree, and slot reuse can never revive an old `WidgetKey`.
#[derive(Default)]
pub struct SceneTree {
    arena: SlotMap<WidgetKey, Mounted>,
    root: Option<WidgetKey>,
}

impl SceneTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<WidgetKey> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Mount the root widget, discarding any existing tree.
    pub fn mount_root(&mut self, widget: Box<dyn Widget>, rect: Rect) -> WidgetKey {
        self.arena.clear();
        let key = self.arena.insert(Mounted {
            widget,
            rect,
            parent: None,
            children: Vec::new(),
        });
        self.root = Some(key);
        key
    }

    pub fn mount(
        &mut self,
        parent: WidgetKey,
        widget: Box<dyn Widget>,
        rect: Rect,
    ) -> Result<WidgetKey, SceneError> {
        if !self.arena.contains_key(parent) {
            return Err(SceneError::InvalidParent);
        }
        let key = self.arena.insert(Mounted {
            widget,
            rect,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(node) = self.arena.get_mut(parent) {
            node.children.push(key);
        }
        Ok(key)
    }

    /// Unmount a widget and its whole subtree. Unknown keys are ignored.
    pub fn unmount(&mut self, key: WidgetKey) {
        if !self.arena.contains_key(key) {
            return;
        }
        if let Some(parent) = self.arena.get(key).and_then(|n| n.parent) {
            if let Some(node) = self.arena.get_mut(parent) {
                node.children.retain(|&c| c != key);
            }
        }
        for k in self.subtree(key) {
            self.arena.remove(k);
        }
        if self.root == Some(key) {
            self.root = None;
        }
    }

    /// Update a widget's layout rect. Unknown keys are ignored.
    pub fn set_rect(&mut self, key: WidgetKey, rect: Rect) {
        if let Some(node) = self.arena.get_mut(key) {
            node.rect = rect;
        }
    }

    pub fn rect(&self, key: WidgetKey) -> Option<Rect> {
        self.arena.get(key).map(|n| n.rect)
    }

    pub fn walk(&self) -> Vec<WidgetKey> {
        match self.root {
            Some(root) => self.subtree(root),
            None => Vec::new(),
        }
    }

    pub fn widget(&self, key: WidgetKey) -> Option<&dyn Widget> {
        self.arena.get(key).map(|n| n.widget.as_ref())
    }

    pub fn offset_of(&self, key: WidgetKey) -> Option<Pos> {
        self.arena.get(key).map(|n| n.rect.origin())
    }

    pub fn find_by_id(&self, id: &str) -> Option<WidgetKey> {
        self.walk()
            .into_iter()
            .find(|&key| self.arena.get(key).and_then(|n| n.widget.id()) == Some(id))
    }

    pub fn is_mounted(&self, key: WidgetKey) -> bool {
        self.arena.contains_key(key)
    }

    fn subtree(&self, key: WidgetKey) -> Vec<WidgetKey> {
        let mut out = Vec::new();
        let mut stack = vec![key];
        while let Some(key) = stack.pop() {
            out.push(key);
            if let Some(node) = self.arena.get(key) {
                for &child in node.children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        out
    }
}

impl Screen for SceneTree {
    fn walk(&self) -> Vec<WidgetKey> {
        SceneTree::walk(self)
    }

    fn widget(&self, key: WidgetKey) -> Option<&dyn Widget> {
        SceneTree::widget(self, key)
    }

    fn offset_of(&self, key: WidgetKey) -> Option<Pos> {
        SceneTree::offset_of(self, key)
    }

    fn find_by_id(&self, id: &str) -> Option<WidgetKey> {
        SceneTree::find_by_id(self, id)
    }

    fn is_mounted(&self, key: WidgetKey) -> bool {
        SceneTree::is_mounted(self, key)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/tree.rs"]
mod tests;
