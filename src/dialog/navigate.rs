//! Cursor navigation: closing scopes, stepping to new rows and columns, and
//! repositioning relative to an existing widget.

use super::cursor::{LayoutCursor, TabsCursor, ViewCursor};
use super::kind::WidgetKind;
use super::tree::NodeId;
use super::widget::Direction;
use super::Dialog;

impl Dialog {
    /// Close the open group box or frame
    pub fn end_group(&mut self) {
        self.cursor.group = None;
    }

    /// Stop collecting items into the current list, combo box or table
    pub fn end_list(&mut self) {
        self.cursor.view = None;
    }

    /// Leave the current tab page; the cursor lands right after its tab
    /// widget. No-op on the root page or when the page does not belong to
    /// the current tab widget.
    pub fn end_page(&mut self) {
        let Some(page) = self.tree.owning_page(self.cursor.current_layout) else {
            return;
        };
        if page == self.root {
            return;
        }
        let Some(tabs) = self.cursor.tabs else {
            return;
        };
        if self.tree.parent(page) != Some(tabs.widget) {
            return;
        }
        self.place_near(tabs.widget, true);
    }

    /// Leave the current tab widget. The enclosing tab widget (if the cursor
    /// is now on a tab page) becomes current again, appending new pages.
    pub fn end_tabs(&mut self) {
        self.end_page();

        let page = self.tree.owning_page(self.cursor.current_layout);
        self.cursor.tabs = match page {
            Some(page) if page != self.root => self.tree.parent(page).map(|tabs| TabsCursor {
                widget: tabs,
                index: self.tree.child_count(tabs),
            }),
            _ => None,
        };
    }

    /// Close the innermost open scope: list, then group, then page, then tabs
    pub fn end_current(&mut self) {
        if self.cursor.view.is_some() {
            self.end_list();
        } else if self.cursor.group.is_some() {
            self.end_group();
        } else if self.cursor_on_tabs_page() {
            self.end_page();
        } else {
            self.end_tabs();
        }
    }

    /// Whether the cursor sits on a page of the current tab widget
    fn cursor_on_tabs_page(&self) -> bool {
        let Some(tabs) = self.cursor.tabs else {
            return false;
        };
        self.tree
            .owning_page(self.cursor.current_layout)
            .is_some_and(|page| page != self.root && self.tree.parent(page) == Some(tabs.widget))
    }

    /// Start a new column to the right of the current one
    pub fn step_horizontal(&mut self) {
        let old = self.cursor.current_layout;
        let Some(row) = self.tree.parent(old) else {
            return;
        };
        let index = self.tree.index_of(old).map_or(0, |i| i + 1);

        let column = self.tree.alloc_layout(Direction::Vertical);
        self.tree.insert_child(row, index, column);
        self.cursor.set_current(column, 0);
        self.end_group();
        self.sanitize_layout(old);
    }

    /// Start a new row below the current one
    pub fn step_vertical(&mut self) {
        let old = self.cursor.current_layout;
        let Some(row) = self.tree.parent(old) else {
            return;
        };
        let Some(outer) = self.tree.parent(row) else {
            return;
        };
        let index = self.tree.index_of(row).map_or(0, |i| i + 1);

        let new_row = self.tree.alloc_layout(Direction::Horizontal);
        let column = self.tree.alloc_layout(Direction::Vertical);
        self.tree.push_child(new_row, column);
        self.tree.insert_child(outer, index, new_row);
        self.cursor.set_current(column, 0);
        self.end_group();
        self.sanitize_layout(old);
    }

    /// Place the page-level cursor at `node` (or right after it). When
    /// `node` sits inside a group box or frame, that container is reopened at
    /// the node and the page-level cursor goes after the container.
    pub(crate) fn place_near(&mut self, node: NodeId, after: bool) {
        self.end_group();
        let Some(layout) = self.tree.parent(node) else {
            return;
        };
        let index = self.tree.index_of(node).unwrap_or(0) + usize::from(after);

        match self.container_of_layout(layout) {
            Some(container) => {
                self.cursor.group = Some(LayoutCursor { layout, index });
                if let Some(outer) = self.tree.parent(container) {
                    let at = self.tree.index_of(container).map_or(0, |i| i + 1);
                    self.cursor.set_current(outer, at);
                }
            }
            None => self.cursor.set_current(layout, index),
        }
    }

    /// The group box or frame owning `layout` as its group layout
    pub(crate) fn container_of_layout(&self, layout: NodeId) -> Option<NodeId> {
        self.tree
            .parent(layout)
            .filter(|&p| self.tree.widget(p).is_some_and(|w| !w.is_page()))
    }

    /// Move the cursor relative to a named widget or page.
    ///
    /// Without flags the cursor lands on the widget's position, so the next
    /// widget is inserted before it; `behind` lands after it. `onto` enters
    /// group boxes, frames, lists, combo boxes, tab widgets and pages so that
    /// new content is appended inside them. A list row target (`name#row`,
    /// `name:text`) positions the item cursor at that row.
    pub fn position(&mut self, name: &str, behind: bool, onto: bool) {
        let Some(mut widget) = self.find_widget(name) else {
            crate::log!("position: no widget '{}'", name);
            return;
        };
        crate::log_fn!("position", "{} behind={} onto={}", name, behind, onto);

        let mut behind = behind;
        let mut tabs_set = false;

        if self.tree.widget(widget).is_some_and(|w| w.is_page()) {
            let Some(tabs) = self.tree.parent(widget) else {
                return;
            };
            let mut index = self.tree.index_of(widget).unwrap_or(0);
            if behind {
                index += 1;
                behind = false;
            }
            self.cursor.tabs = Some(TabsCursor { widget: tabs, index });

            if onto {
                self.end_group();
                let column = self
                    .tree
                    .own_layout(widget)
                    .and_then(|outer| self.tree.children(outer).last().copied())
                    .and_then(|row| self.tree.children(row).last().copied());
                if let Some(column) = column {
                    let count = self.tree.child_count(column);
                    self.cursor.set_current(column, count);
                }
                return;
            }

            widget = tabs;
            tabs_set = true;
        }

        let kind = self.kind_of(widget);
        let Some(parent) = self.tree.parent(widget) else {
            return;
        };

        // Composite controls move as their whole joint box
        let is_joint = self.tree.widget(widget).is_some_and(|w| w.buddy().is_some());
        let (layout, index) = if is_joint {
            match self.tree.parent(parent) {
                Some(outer) => (outer, self.tree.index_of(parent).unwrap_or(0)),
                None => return,
            }
        } else {
            (parent, self.tree.index_of(widget).unwrap_or(0))
        };

        if onto && matches!(kind, WidgetKind::ListBox | WidgetKind::ComboBox) {
            if let Some(chosen) = self.cursor.chosen {
                let count = self.row_count(chosen.view);
                self.cursor.view = Some(ViewCursor {
                    widget: chosen.view,
                    index: count,
                });
            }
        }
        if kind == WidgetKind::Item {
            if let Some(chosen) = self.cursor.chosen {
                let count = self.row_count(chosen.view);
                let mut row = chosen.row.unwrap_or(count).min(count);
                if behind {
                    row = (row + 1).min(count);
                    behind = false;
                }
                self.cursor.view = Some(ViewCursor {
                    widget: chosen.view,
                    index: row,
                });
            }
        }

        let page = match self.container_of_layout(layout) {
            Some(container) => {
                self.cursor.group = Some(LayoutCursor {
                    layout,
                    index: index + usize::from(behind),
                });
                if let Some(outer) = self.tree.parent(container) {
                    let at = self.tree.index_of(container).map_or(0, |i| i + 1);
                    self.cursor.set_current(outer, at);
                }
                self.tree.owning_page(container)
            }
            None => {
                self.end_group();
                self.cursor
                    .set_current(layout, index + usize::from(behind));
                if onto && kind.is_container() {
                    if let Some(own) = self.tree.own_layout(widget) {
                        let count = self.tree.child_count(own);
                        self.cursor.group = Some(LayoutCursor {
                            layout: own,
                            index: count,
                        });
                    }
                }
                self.tree.owning_page(layout)
            }
        };

        if !tabs_set {
            if onto && kind == WidgetKind::Tabs {
                self.cursor.tabs = Some(TabsCursor {
                    widget,
                    index: self.tree.child_count(widget),
                });
            } else {
                self.cursor.tabs = match page {
                    Some(page) if page != self.root => {
                        self.tree.parent(page).map(|tabs| TabsCursor {
                            widget: tabs,
                            index: self.tree.index_of(page).unwrap_or(0),
                        })
                    }
                    _ => None,
                };
            }
        }
    }

    /// Rows held by a list, combo box or table
    pub(crate) fn row_count(&self, view: NodeId) -> usize {
        self.tree
            .widget(view)
            .and_then(|w| w.row_count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use crate::dialog::options::{GroupBoxOptions, PageOptions, TabsOptions};
    use crate::dialog::Dialog;

    fn dialog() -> Dialog {
        Dialog::new("Test", None, false)
    }

    #[test]
    fn test_end_page_on_root_is_noop() {
        let mut d = dialog();
        let before = d.clone();
        d.end_page();
        d.end_group();
        d.end_list();
        assert_eq!(d, before);
    }

    #[test]
    fn test_step_horizontal_prunes_empty_column() {
        let mut d = dialog();
        let root_column = d.cursor().current_layout;
        let row = d.tree().parent(root_column).unwrap();

        d.step_horizontal();
        assert_ne!(d.cursor().current_layout, root_column);
        assert_eq!(d.tree().child_count(row), 1);
        assert!(!d.tree().contains(root_column));
    }

    #[test]
    fn test_step_vertical_adds_row() {
        let mut d = dialog();
        d.add_check_box(crate::dialog::options::CheckBoxOptions {
            title: "a".into(),
            name: "a".into(),
            checked: false,
        });
        let column = d.cursor().current_layout;
        let row = d.tree().parent(column).unwrap();
        let outer = d.tree().parent(row).unwrap();

        d.step_vertical();
        assert_eq!(d.tree().child_count(outer), 2);
        assert_eq!(d.cursor().current_index, 0);
        assert_eq!(
            d.tree().parent(d.tree().parent(d.cursor().current_layout).unwrap()),
            Some(outer)
        );
        // old column still holds its checkbox
        assert!(d.tree().contains(column));
    }

    #[test]
    fn test_end_current_priority() {
        let mut d = dialog();
        d.add_tabs(TabsOptions {
            name: "tabs".into(),
            ..Default::default()
        });
        d.add_page(PageOptions {
            title: "One".into(),
            name: "p1".into(),
            ..Default::default()
        });
        d.add_group_box(GroupBoxOptions {
            title: "G".into(),
            name: "g".into(),
            ..Default::default()
        });

        d.end_current();
        assert!(d.cursor().group.is_none());
        let page = d.tree().owning_page(d.cursor().current_layout).unwrap();
        assert_ne!(page, d.root());

        d.end_current();
        let page = d.tree().owning_page(d.cursor().current_layout).unwrap();
        assert_eq!(page, d.root());
        assert!(d.cursor().tabs.is_some());

        d.end_current();
        assert!(d.cursor().tabs.is_none());
    }
}
