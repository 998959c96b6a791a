//! Arena-backed widget tree
//!
//! Nodes live in a slot vector addressed by [`NodeId`]. Each node records its
//! parent and ordered children; freed slots are recycled through a free list
//! so handles stay small integers for the lifetime of a dialog.

use super::widget::{Direction, Element, Widget};

/// Handle to a node in a [`WidgetTree`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A tree node: name, links and payload
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub element: Element,
}

/// Owner of every layout and widget of a dialog
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetTree {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a detached node
    pub fn alloc(&mut self, name: impl Into<String>, element: Element) -> NodeId {
        let node = Node {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            element,
        };

        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId((self.slots.len() - 1) as u32)
            }
        }
    }

    /// Allocate a detached unnamed box layout
    pub fn alloc_layout(&mut self, direction: Direction) -> NodeId {
        self.alloc("", Element::Layout(direction))
    }

    /// Allocate a detached widget
    pub fn alloc_widget(&mut self, name: impl Into<String>, widget: Widget) -> NodeId {
        self.alloc(name, Element::Widget(widget))
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index()).and_then(|s| s.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.index()).and_then(|s| s.as_mut())
    }

    /// Node name, empty for unnamed or missing nodes
    pub fn name(&self, id: NodeId) -> &str {
        self.get(id).map(|n| n.name.as_str()).unwrap_or("")
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Ordered children, empty for missing nodes
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).get(index).copied()
    }

    pub fn widget(&self, id: NodeId) -> Option<&Widget> {
        match self.get(id).map(|n| &n.element) {
            Some(Element::Widget(w)) => Some(w),
            _ => None,
        }
    }

    pub fn widget_mut(&mut self, id: NodeId) -> Option<&mut Widget> {
        match self.get_mut(id).map(|n| &mut n.element) {
            Some(Element::Widget(w)) => Some(w),
            _ => None,
        }
    }

    /// Direction of a layout node, `None` for widgets
    pub fn direction(&self, id: NodeId) -> Option<Direction> {
        match self.get(id).map(|n| &n.element) {
            Some(Element::Layout(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn is_layout(&self, id: NodeId) -> bool {
        self.direction(id).is_some()
    }

    /// Insert `child` into `parent` at `index`, clamped to the child count.
    /// Returns the index actually used.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> usize {
        self.detach(child);
        let Some(node) = self.get_mut(parent) else {
            return 0;
        };
        let at = index.min(node.children.len());
        node.children.insert(at, child);
        if let Some(c) = self.get_mut(child) {
            c.parent = Some(parent);
        }
        at
    }

    /// Append `child` to `parent`
    pub fn push_child(&mut self, parent: NodeId, child: NodeId) -> usize {
        self.insert_child(parent, usize::MAX, child)
    }

    /// Position of `child` among its parent's children
    pub fn index_of(&self, child: NodeId) -> Option<usize> {
        let parent = self.parent(child)?;
        self.children(parent).iter().position(|&c| c == child)
    }

    /// Unlink `child` from its parent, returning its former index
    pub fn detach(&mut self, child: NodeId) -> Option<usize> {
        let parent = self.parent(child)?;
        let index = self.index_of(child)?;
        if let Some(p) = self.get_mut(parent) {
            p.children.remove(index);
        }
        if let Some(c) = self.get_mut(child) {
            c.parent = None;
        }
        Some(index)
    }

    /// Detach and free `root` with all its descendants; returns freed handles
    pub fn free_subtree(&mut self, root: NodeId) -> Vec<NodeId> {
        self.detach(root);
        let doomed = self.descendants(root);
        for &id in doomed.iter().rev() {
            if let Some(slot) = self.slots.get_mut(id.index()) {
                if slot.take().is_some() {
                    self.free.push(id);
                }
            }
        }
        doomed
    }

    /// Pre-order traversal of `root` and everything below it
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if !self.contains(root) {
            return out;
        }
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        out
    }

    /// True when `ancestor` is `node` or one of its ancestors
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.parent(id);
        }
        false
    }

    /// Nearest widget ancestor of a node (the node itself excluded)
    pub fn parent_widget(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = self.parent(id);
        while let Some(p) = cursor {
            if self.widget(p).is_some() {
                return Some(p);
            }
            cursor = self.parent(p);
        }
        None
    }

    /// The root dialog or tab page that contains `id` (itself included)
    pub fn owning_page(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = Some(id);
        while let Some(c) = cursor {
            if self.widget(c).is_some_and(|w| w.is_page()) {
                return Some(c);
            }
            cursor = self.parent(c);
        }
        None
    }

    /// The single layout owned by a page or container widget
    pub fn own_layout(&self, widget: NodeId) -> Option<NodeId> {
        self.children(widget)
            .iter()
            .copied()
            .find(|&c| self.is_layout(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::widget::WidgetData;

    fn label(tree: &mut WidgetTree, name: &str) -> NodeId {
        tree.alloc_widget(
            name,
            Widget::new(WidgetData::CheckBox {
                title: name.to_string(),
                checked: false,
            }),
        )
    }

    #[test]
    fn test_insert_clamps_and_links() {
        let mut tree = WidgetTree::new();
        let root = tree.alloc_layout(Direction::Vertical);
        let a = label(&mut tree, "a");
        let b = label(&mut tree, "b");
        let c = label(&mut tree, "c");

        assert_eq!(tree.insert_child(root, 5, a), 0);
        assert_eq!(tree.insert_child(root, 0, b), 0);
        assert_eq!(tree.push_child(root, c), 2);

        assert_eq!(tree.children(root), &[b, a, c]);
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.index_of(c), Some(2));
    }

    #[test]
    fn test_detach_and_reinsert() {
        let mut tree = WidgetTree::new();
        let root = tree.alloc_layout(Direction::Vertical);
        let other = tree.alloc_layout(Direction::Horizontal);
        let a = label(&mut tree, "a");
        tree.push_child(root, a);

        tree.insert_child(other, 0, a);
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.parent(a), Some(other));
        assert_eq!(tree.detach(a), Some(0));
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.detach(a), None);
    }

    #[test]
    fn test_free_subtree_recycles_slots() {
        let mut tree = WidgetTree::new();
        let root = tree.alloc_layout(Direction::Vertical);
        let row = tree.alloc_layout(Direction::Horizontal);
        let a = label(&mut tree, "a");
        let b = label(&mut tree, "b");
        tree.push_child(root, row);
        tree.push_child(row, a);
        tree.push_child(row, b);
        assert_eq!(tree.len(), 4);

        let freed = tree.free_subtree(row);
        assert_eq!(freed, vec![row, a, b]);
        assert_eq!(tree.len(), 1);
        assert!(!tree.contains(a));
        assert!(tree.children(root).is_empty());

        let reused = label(&mut tree, "c");
        assert!(freed.contains(&reused));
        assert_eq!(tree.name(reused), "c");
    }

    #[test]
    fn test_ancestry() {
        let mut tree = WidgetTree::new();
        let page = tree.alloc_widget(
            "p",
            Widget::new(WidgetData::Page {
                title: String::new(),
                icon: None,
            }),
        );
        let layout = tree.alloc_layout(Direction::Vertical);
        let a = label(&mut tree, "a");
        tree.push_child(page, layout);
        tree.push_child(layout, a);

        assert!(tree.is_ancestor(page, a));
        assert!(tree.is_ancestor(a, a));
        assert!(!tree.is_ancestor(a, page));
        assert_eq!(tree.owning_page(a), Some(page));
        assert_eq!(tree.parent_widget(a), Some(page));
        assert_eq!(tree.own_layout(page), Some(layout));
        assert_eq!(tree.descendants(page), vec![page, layout, a]);
    }
}
