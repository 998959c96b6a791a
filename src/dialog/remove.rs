//! Removal: single widgets, list rows, pages, and the bulk clear operations.
//!
//! Every removal first moves cursors out of the doomed subtree, then frees
//! it, then sweeps any remaining references and prunes layouts that became
//! empty. The cursor never refers to a freed node afterwards.

use std::collections::HashSet;

use super::kind::WidgetKind;
use super::tree::NodeId;
use super::widget::WidgetData;
use super::Dialog;

impl Dialog {
    /// Remove a named widget, page or list row (`name#row`, `name:text`)
    pub fn remove_widget(&mut self, name: &str) {
        let Some(widget) = self.find_widget(name) else {
            crate::log!("remove_widget: no widget '{}'", name);
            return;
        };
        let kind = self.kind_of(widget);
        crate::log_fn!("remove_widget", "{} ({})", name, kind);

        match kind {
            WidgetKind::Item => {
                self.remove_chosen_row();
                return;
            }
            WidgetKind::Page => {
                self.remove_page(widget);
                return;
            }
            WidgetKind::Dialog => return,
            _ => {}
        }

        // Composite controls are removed as their whole joint box
        let unit = if self.tree.widget(widget).is_some_and(|w| w.buddy().is_some()) {
            self.tree.parent(widget).unwrap_or(widget)
        } else {
            widget
        };
        let Some(layout) = self.tree.parent(unit) else {
            return;
        };

        match kind {
            WidgetKind::Tabs => {
                let pages: Vec<NodeId> = self.tree.children(widget).to_vec();
                for page in pages {
                    self.evacuate(page);
                    if self.cursor.tabs.is_some_and(|t| t.widget == widget) {
                        self.end_tabs();
                    }
                    if self.tree.is_ancestor(page, self.cursor.current_layout) {
                        self.place_near(widget, false);
                    }
                }
            }
            WidgetKind::GroupBox | WidgetKind::Frame => {
                self.evacuate(widget);
                if self.tree.is_ancestor(widget, self.cursor.current_layout) {
                    self.place_near(widget, false);
                }
                if self
                    .cursor
                    .group
                    .is_some_and(|g| self.tree.parent(g.layout) == Some(widget))
                {
                    self.end_group();
                }
            }
            WidgetKind::ListBox | WidgetKind::ComboBox => {
                let chosen = self.cursor.chosen.map(|c| c.view);
                if self.cursor.view.is_some_and(|v| Some(v.widget) == chosen) {
                    self.end_list();
                }
            }
            WidgetKind::Table => {
                if self.cursor.view.is_some_and(|v| v.widget == widget) {
                    self.end_list();
                }
            }
            WidgetKind::PushButton => {
                if self.cursor.default_button == Some(widget) {
                    self.cursor.default_button = None;
                }
            }
            _ => {}
        }

        if let Some(index) = self.tree.index_of(unit) {
            self.cursor.on_removed(layout, index);
        }
        self.free(unit);
        self.sanitize_layout(layout);
    }

    /// Remove the row addressed by the last lookup
    fn remove_chosen_row(&mut self) {
        let Some(chosen) = self.cursor.chosen else {
            return;
        };
        if let Some(row) = chosen.row {
            if let Some(view) = self.cursor.view.as_mut() {
                if view.widget == chosen.view && row < view.index {
                    view.index -= 1;
                }
            }
            if let Some((items, current)) = self
                .tree
                .widget_mut(chosen.view)
                .and_then(|w| w.items_mut())
            {
                if row < items.len() {
                    items.remove(row);
                    *current = shift_after_removal(*current, row, items.len());
                }
            }
        }
        if let Some(c) = self.cursor.chosen.as_mut() {
            c.row = None;
        }
    }

    /// Remove a tab page, moving the cursor behind its tab widget first
    fn remove_page(&mut self, page: NodeId) {
        let Some(tabs) = self.tree.parent(page) else {
            return;
        };
        self.evacuate(page);
        if self.tree.is_ancestor(page, self.cursor.current_layout) {
            self.place_near(tabs, true);
        }
        self.drop_page(tabs, page);
    }

    /// Free a page and fix the tab widget's current page and the tabs cursor
    fn drop_page(&mut self, tabs: NodeId, page: NodeId) {
        let Some(index) = self.tree.index_of(page) else {
            return;
        };
        self.free(page);

        let remaining = self.tree.child_count(tabs);
        if let Some(WidgetData::Tabs { current, .. }) =
            self.tree.widget_mut(tabs).map(|w| &mut w.data)
        {
            *current = shift_after_removal(*current, index, remaining);
        }
        if let Some(t) = self.cursor.tabs.as_mut() {
            if t.widget == tabs && t.index > index {
                t.index -= 1;
            }
        }
    }

    /// Clear the whole dialog, a collection's rows, a page or a tab widget.
    /// An empty name clears the dialog.
    pub fn clear(&mut self, name: &str) {
        if name.is_empty() {
            self.clear_dialog();
            return;
        }
        let Some(widget) = self.find_widget(name) else {
            crate::log!("clear: no widget '{}'", name);
            return;
        };

        match self.kind_of(widget) {
            WidgetKind::ListBox | WidgetKind::ComboBox => self.clear_chosen_list(),
            WidgetKind::Page => self.clear_page(widget),
            WidgetKind::Tabs => self.clear_tabs(widget),
            WidgetKind::Table => self.clear_table(widget),
            kind => crate::log!("clear: nothing to clear on {} '{}'", kind, name),
        }
    }

    /// Remove every row of the collection found by the last lookup, unless
    /// the lookup addressed a single row
    pub fn clear_chosen_list(&mut self) {
        let Some(chosen) = self.cursor.chosen else {
            return;
        };
        if chosen.row.is_some() {
            return;
        }
        if let Some((items, current)) = self
            .tree
            .widget_mut(chosen.view)
            .and_then(|w| w.items_mut())
        {
            items.clear();
            *current = None;
        }
        if let Some(view) = self.cursor.view.as_mut() {
            if view.widget == chosen.view {
                view.index = 0;
            }
        }
    }

    fn clear_table(&mut self, table: NodeId) {
        if let Some(WidgetData::Table { rows, current, .. }) =
            self.tree.widget_mut(table).map(|w| &mut w.data)
        {
            rows.clear();
            *current = None;
        }
        if let Some(view) = self.cursor.view.as_mut() {
            if view.widget == table {
                view.index = 0;
            }
        }
    }

    /// Delete every page of a tab widget, last first
    pub fn clear_tabs(&mut self, tabs: NodeId) {
        crate::log_fn!("clear_tabs", "{}", self.tree.name(tabs));
        let pages: Vec<NodeId> = self.tree.children(tabs).to_vec();
        for &page in pages.iter().rev() {
            self.evacuate(page);
            if self.tree.is_ancestor(page, self.cursor.current_layout) {
                self.place_near(tabs, true);
            }
            self.drop_page(tabs, page);
        }
        if let Some(t) = self.cursor.tabs.as_mut() {
            if t.widget == tabs {
                t.index = 0;
            }
        }
    }

    /// Delete everything on a page, leaving an empty first column
    pub fn clear_page(&mut self, page: NodeId) {
        crate::log_fn!("clear_page", "{}", self.tree.name(page));
        let Some(outer) = self.tree.own_layout(page) else {
            return;
        };
        let Some(column) = self.content_layout(page) else {
            return;
        };
        let Some(first_row) = self.tree.parent(column) else {
            return;
        };

        self.evacuate(page);
        if self.tree.is_ancestor(page, self.cursor.current_layout) {
            self.end_group();
            self.cursor.set_current(column, 0);
        }

        let mut doomed: Vec<NodeId> = self.tree.children(column).to_vec();
        doomed.extend(
            self.tree
                .children(first_row)
                .iter()
                .copied()
                .filter(|&c| c != column),
        );
        doomed.extend(
            self.tree
                .children(outer)
                .iter()
                .copied()
                .filter(|&r| r != first_row),
        );
        for unit in doomed.into_iter().rev() {
            self.free(unit);
        }
    }

    /// Reset the dialog to its initial empty state
    pub fn clear_dialog(&mut self) {
        crate::log_fn!("clear_dialog");
        let Some(column) = self.content_layout(self.root) else {
            return;
        };
        self.cursor.default_button = None;
        self.cursor.view = None;
        self.cursor.tabs = None;
        self.cursor.group = None;
        self.cursor.chosen = None;
        self.cursor.set_current(column, 0);

        self.clear_page(self.root);
        self.pages.truncate(1);
    }

    /// Move tab, list and default-button references out of `scope`
    fn evacuate(&mut self, scope: NodeId) {
        while let Some(tabs) = self.cursor.tabs {
            if !self.tree.is_ancestor(scope, tabs.widget) {
                break;
            }
            self.end_tabs();
            if self.cursor.tabs == Some(tabs) {
                self.cursor.tabs = None;
            }
        }
        if self
            .cursor
            .view
            .is_some_and(|v| self.tree.is_ancestor(scope, v.widget))
        {
            self.end_list();
        }
        if self
            .cursor
            .default_button
            .is_some_and(|b| self.tree.is_ancestor(scope, b))
        {
            self.cursor.default_button = None;
        }
    }

    /// Free a subtree and drop every cursor or page reference into it
    fn free(&mut self, unit: NodeId) {
        let doomed: HashSet<NodeId> = self.tree.free_subtree(unit).into_iter().collect();
        if doomed.is_empty() {
            return;
        }
        self.pages.retain(|p| !doomed.contains(p));

        let cursor = &mut self.cursor;
        if cursor.group.is_some_and(|g| doomed.contains(&g.layout)) {
            cursor.group = None;
        }
        if cursor.view.is_some_and(|v| doomed.contains(&v.widget)) {
            cursor.view = None;
        }
        if cursor.tabs.is_some_and(|t| doomed.contains(&t.widget)) {
            cursor.tabs = None;
        }
        if cursor.default_button.is_some_and(|b| doomed.contains(&b)) {
            cursor.default_button = None;
        }
        if cursor.chosen.is_some_and(|c| doomed.contains(&c.view)) {
            cursor.chosen = None;
        }
        if doomed.contains(&cursor.current_layout) {
            crate::log!("free: current layout removed, resetting to root");
            if let Some(column) = self.content_layout(self.root) {
                self.cursor.group = None;
                self.cursor.set_current(column, 0);
            }
        }
    }

    /// Prune `layout` if it became empty and nothing points into it. Joint
    /// boxes always go; an empty column goes if its row has other columns,
    /// else the whole row goes if the page has other rows. Outer and group
    /// layouts are never pruned.
    pub(crate) fn sanitize_layout(&mut self, layout: NodeId) {
        if !self.tree.is_layout(layout) || self.tree.child_count(layout) > 0 {
            return;
        }
        if self.cursor.references(layout) {
            return;
        }
        let Some(parent) = self.tree.parent(layout) else {
            return;
        };
        if !self.tree.is_layout(parent) || self.is_outer_layout(parent) {
            return;
        }

        let is_column = self
            .tree
            .parent(parent)
            .is_some_and(|outer| self.is_outer_layout(outer));

        let unit = if !is_column {
            layout
        } else if self.tree.child_count(parent) > 1 {
            layout
        } else {
            let Some(outer) = self.tree.parent(parent) else {
                return;
            };
            if self.tree.child_count(outer) < 2 {
                return;
            }
            parent
        };

        let Some(holder) = self.tree.parent(unit) else {
            return;
        };
        if let Some(index) = self.tree.index_of(unit) {
            self.cursor.on_removed(holder, index);
        }
        self.free(unit);
        if !is_column {
            self.sanitize_layout(holder);
        }
    }

    /// Whether `layout` is the top layout of a page
    fn is_outer_layout(&self, layout: NodeId) -> bool {
        self.tree
            .parent(layout)
            .and_then(|p| self.tree.widget(p))
            .is_some_and(|w| w.is_page())
    }
}

/// Current index after removing `removed`, given `remaining` entries
fn shift_after_removal(current: Option<usize>, removed: usize, remaining: usize) -> Option<usize> {
    match current {
        Some(c) if c > removed => Some(c - 1),
        Some(c) if c == removed => {
            if remaining == 0 {
                None
            } else {
                Some(c.min(remaining - 1))
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::cursor::TabsCursor;

    #[test]
    fn test_shift_after_removal() {
        assert_eq!(shift_after_removal(Some(3), 1, 4), Some(2));
        assert_eq!(shift_after_removal(Some(1), 1, 4), Some(1));
        assert_eq!(shift_after_removal(Some(4), 4, 4), Some(3));
        assert_eq!(shift_after_removal(Some(0), 0, 0), None);
        assert_eq!(shift_after_removal(Some(0), 2, 4), Some(0));
        assert_eq!(shift_after_removal(None, 0, 3), None);
    }

    #[test]
    fn test_tabs_cursor_index_shifts() {
        let mut d = Dialog::new("t", None, false);
        d.add_tabs(crate::dialog::options::TabsOptions {
            name: "tabs".into(),
            ..Default::default()
        });
        for name in ["a", "b", "c"] {
            d.add_page(crate::dialog::options::PageOptions {
                title: name.into(),
                name: name.into(),
                ..Default::default()
            });
        }
        d.end_page();
        let tabs = d.cursor().tabs.unwrap();
        assert_eq!(tabs.index, 3);

        d.remove_widget("a");
        assert_eq!(
            d.cursor().tabs,
            Some(TabsCursor {
                widget: tabs.widget,
                index: 2
            })
        );
        assert_eq!(d.pages().len(), 3);
    }
}
