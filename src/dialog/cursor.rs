//! Construction cursor state
//!
//! The cursor is a plain value: where the next widget lands, which group box
//! or frame is open, which list collects items, which tab widget receives
//! pages, the current default button, and the last lookup's resolved view and
//! row. Operations read and update it explicitly, which makes snapshots and
//! equality checks trivial.

use super::tree::NodeId;

/// Insertion point inside a layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutCursor {
    pub layout: NodeId,
    pub index: usize,
}

/// Insertion point inside a list, combo box or table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewCursor {
    pub widget: NodeId,
    pub index: usize,
}

/// Insertion point for pages of a tab widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabsCursor {
    pub widget: NodeId,
    pub index: usize,
}

/// Result of the last lookup that hit a list or combo box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chosen {
    pub view: NodeId,
    /// Addressed row, when the lookup named one
    pub row: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorState {
    pub current_layout: NodeId,
    pub current_index: usize,
    /// Open group box or frame layout
    pub group: Option<LayoutCursor>,
    /// Open list, combo box or table
    pub view: Option<ViewCursor>,
    /// Tab widget receiving new pages
    pub tabs: Option<TabsCursor>,
    pub default_button: Option<NodeId>,
    pub chosen: Option<Chosen>,
}

impl CursorState {
    pub fn new(layout: NodeId) -> Self {
        Self {
            current_layout: layout,
            current_index: 0,
            group: None,
            view: None,
            tabs: None,
            default_button: None,
            chosen: None,
        }
    }

    /// Page-level insertion point
    pub fn current(&self) -> LayoutCursor {
        LayoutCursor {
            layout: self.current_layout,
            index: self.current_index,
        }
    }

    pub fn set_current(&mut self, layout: NodeId, index: usize) {
        self.current_layout = layout;
        self.current_index = index;
    }

    /// Where the next plain widget goes: the open group, else the page
    pub fn target(&self) -> LayoutCursor {
        self.group.unwrap_or_else(|| self.current())
    }

    /// Step past a freshly inserted widget
    pub fn advance(&mut self) {
        match self.group.as_mut() {
            Some(group) => group.index += 1,
            None => self.current_index += 1,
        }
    }

    /// Row addressed by the last lookup on `view`, if any
    pub fn chosen_row(&self, view: NodeId) -> Option<usize> {
        self.chosen
            .filter(|c| c.view == view)
            .and_then(|c| c.row)
    }

    /// Whether `id` is referenced by any cursor field
    pub fn references(&self, id: NodeId) -> bool {
        self.current_layout == id
            || self.group.is_some_and(|g| g.layout == id)
            || self.view.is_some_and(|v| v.widget == id)
            || self.tabs.is_some_and(|t| t.widget == id)
            || self.default_button == Some(id)
            || self.chosen.is_some_and(|c| c.view == id)
    }

    /// Shift layout indices after the child at `index` of `layout` went away
    pub fn on_removed(&mut self, layout: NodeId, index: usize) {
        if self.current_layout == layout && self.current_index > index {
            self.current_index -= 1;
        }
        if let Some(group) = self.group.as_mut() {
            if group.layout == layout && group.index > index {
                group.index -= 1;
            }
        }
    }
}
