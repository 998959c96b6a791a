//! Dialog construction engine
//!
//! A [`Dialog`] owns the widget tree, the cursor state and the ordered list of
//! pages (the root dialog first, then tab pages in creation order). Widgets
//! are inserted where the cursor points; navigation, removal and lookup
//! operations live in the sibling modules and keep the cursor consistent with
//! the tree at all times.

pub mod cursor;
pub mod find;
pub mod kind;
pub mod navigate;
pub mod options;
pub mod properties;
pub mod remove;
pub mod report;
pub mod tree;
pub mod widget;


use std::path::Path;

use chrono::NaiveDate;

pub use cursor::{Chosen, CursorState, LayoutCursor, TabsCursor, ViewCursor};
pub use kind::{classify, WidgetKind};
pub use properties::{Activation, Outcome};
pub use report::ReportEntry;
pub use tree::{NodeId, WidgetTree};
pub use widget::{Direction, Element, Item, Widget, WidgetData};

use options::{
    CalendarOptions, ChartOptions, CheckBoxOptions, ComboBoxOptions, FrameOptions,
    GroupBoxOptions, ItemOptions, LabelOptions, ListBoxOptions, PageOptions, ProgressBarOptions,
    PushButtonOptions, RadioButtonOptions, SeparatorOptions, SliderOptions, TableOptions,
    TabsOptions, TextBoxOptions, TextViewOptions,
};
use widget::FrameShape;

/// Name of the button added for `about` text
pub const ABOUT_BUTTON: &str = "_dbabout_";

/// A dialog under construction
#[derive(Clone, Debug, PartialEq)]
pub struct Dialog {
    tree: WidgetTree,
    root: NodeId,
    pages: Vec<NodeId>,
    cursor: CursorState,
}

impl Dialog {
    /// Create an empty dialog. With `about` text an "About" button is placed
    /// first in the root page.
    pub fn new(title: &str, about: Option<&str>, resizable: bool) -> Self {
        let mut tree = WidgetTree::new();
        let root = tree.alloc_widget(
            "",
            Widget::new(WidgetData::Dialog {
                title: title.to_string(),
                about: about.map(str::to_string),
                resizable,
            }),
        );
        let column = page_skeleton(&mut tree, root);

        let mut dialog = Self {
            tree,
            root,
            pages: vec![root],
            cursor: CursorState::new(column),
        };

        if about.is_some() {
            let button = dialog.tree.alloc_widget(
                ABOUT_BUTTON,
                Widget::new(WidgetData::PushButton {
                    title: "About".to_string(),
                    icon: None,
                    apply: false,
                    exit: false,
                    default: false,
                    checkable: false,
                    checked: false,
                }),
            );
            let row = dialog.tree.alloc_layout(Direction::Horizontal);
            dialog.tree.push_child(row, button);
            dialog.tree.insert_child(column, 0, row);
            dialog.cursor.current_index += 1;
        }

        dialog
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Root dialog followed by every live tab page
    pub fn pages(&self) -> &[NodeId] {
        &self.pages
    }

    pub fn title(&self) -> &str {
        match self.tree.widget(self.root).map(|w| &w.data) {
            Some(WidgetData::Dialog { title, .. }) => title,
            _ => "",
        }
    }

    /// Classify a node against the current lookup state
    pub fn kind_of(&self, id: NodeId) -> WidgetKind {
        classify(&self.tree, self.cursor.chosen, id)
    }

    /// First column of the first row of a page
    pub fn content_layout(&self, page: NodeId) -> Option<NodeId> {
        let outer = self.tree.own_layout(page)?;
        let row = self.tree.child(outer, 0)?;
        self.tree.child(row, 0)
    }

    /// Keyboard traversal order: focusable widgets in tree order, composite
    /// labels represented by their companion
    pub fn focus_chain(&self) -> Vec<NodeId> {
        self.tree
            .descendants(self.root)
            .into_iter()
            .filter(|&id| self.tree.widget(id).is_some_and(|w| w.takes_focus()))
            .collect()
    }

    // ------------------------------------------------------------------
    // Insertion
    // ------------------------------------------------------------------

    /// Insert a unit (widget or joint box) at the active cursor
    fn insert_unit(&mut self, unit: NodeId) {
        let target = self.cursor.target();
        self.tree.insert_child(target.layout, target.index, unit);
        self.cursor.advance();
    }

    fn insert_widget(&mut self, name: &str, data: WidgetData) -> NodeId {
        let id = self.tree.alloc_widget(name, Widget::new(data));
        self.insert_unit(id);
        id
    }

    /// Insert `[label, companion]` as one box layout; the label takes the name
    fn insert_composite(
        &mut self,
        direction: Direction,
        title: &str,
        name: &str,
        companion: WidgetData,
    ) -> NodeId {
        let companion = self.tree.alloc_widget("", Widget::new(companion));
        let label = self.tree.alloc_widget(
            name,
            Widget::new(WidgetData::Label {
                title: title.to_string(),
                content: widget::LabelContent::Text,
                buddy: Some(companion),
            }),
        );
        let joint = self.tree.alloc_layout(direction);
        self.tree.push_child(joint, label);
        self.tree.push_child(joint, companion);
        self.insert_unit(joint);
        companion
    }

    /// Insert a group box or frame at the page-level cursor and open it
    fn insert_container(&mut self, name: &str, data: WidgetData, horizontal: bool) {
        let container = self.tree.alloc_widget(name, Widget::new(data));
        let layout = self
            .tree
            .alloc_layout(Direction::from_vertical(!horizontal));
        self.tree.push_child(container, layout);

        let current = self.cursor.current();
        self.tree.insert_child(current.layout, current.index, container);
        self.cursor.current_index += 1;
        self.cursor.group = Some(LayoutCursor { layout, index: 0 });
    }

    pub fn add_push_button(&mut self, opts: PushButtonOptions) {
        crate::log_fn!("add_push_button", "{}", opts.name);
        let id = self.insert_widget(
            &opts.name,
            WidgetData::PushButton {
                title: opts.title,
                icon: opts.icon,
                apply: opts.apply,
                exit: opts.exit,
                default: false,
                checkable: opts.checkable || opts.checked,
                checked: opts.checked,
            },
        );
        if opts.default {
            self.make_default(id);
        }
    }

    pub fn add_check_box(&mut self, opts: CheckBoxOptions) {
        self.insert_widget(
            &opts.name,
            WidgetData::CheckBox {
                title: opts.title,
                checked: opts.checked,
            },
        );
    }

    pub fn add_radio_button(&mut self, opts: RadioButtonOptions) {
        let id = self.insert_widget(
            &opts.name,
            WidgetData::RadioButton {
                title: opts.title,
                checked: opts.checked,
            },
        );
        if opts.checked {
            self.uncheck_other_radios(id);
        }
    }

    pub fn add_label(&mut self, opts: LabelOptions) {
        self.insert_widget(
            &opts.name,
            WidgetData::Label {
                title: opts.title,
                content: opts.content,
                buddy: None,
            },
        );
    }

    pub fn add_group_box(&mut self, opts: GroupBoxOptions) {
        crate::log_fn!("add_group_box", "{}", opts.name);
        self.insert_container(
            &opts.name,
            WidgetData::GroupBox {
                title: opts.title,
                checkable: opts.checkable,
                checked: opts.checkable && opts.checked,
            },
            opts.horizontal,
        );
    }

    pub fn add_frame(&mut self, opts: FrameOptions) {
        crate::log_fn!("add_frame", "{}", opts.name);
        let shape = if opts.shape.is_line() {
            FrameShape::Box
        } else {
            opts.shape
        };
        self.insert_container(
            &opts.name,
            WidgetData::Frame {
                shape,
                shadow: opts.shadow,
            },
            opts.horizontal,
        );
    }

    pub fn add_text_box(&mut self, opts: TextBoxOptions) {
        self.insert_composite(
            Direction::Horizontal,
            &opts.title,
            &opts.name,
            WidgetData::LineEdit {
                text: opts.text,
                placeholder: opts.placeholder,
                password: opts.password,
            },
        );
    }

    /// Add a list box and make it the current collection
    pub fn add_list_box(&mut self, opts: ListBoxOptions) {
        crate::log_fn!("add_list_box", "{}", opts.name);
        let list = self.insert_composite(
            Direction::Vertical,
            &opts.title,
            &opts.name,
            WidgetData::ListBox {
                items: Vec::new(),
                current: None,
                activation: opts.activation,
                selection: opts.selection,
            },
        );
        self.cursor.view = Some(ViewCursor {
            widget: list,
            index: 0,
        });
    }

    /// Add a combo box and make it the current collection
    pub fn add_combo_box(&mut self, opts: ComboBoxOptions) {
        crate::log_fn!("add_combo_box", "{}", opts.name);
        let combo = self.insert_composite(
            Direction::Horizontal,
            &opts.title,
            &opts.name,
            WidgetData::ComboBox {
                items: Vec::new(),
                current: None,
                editable: opts.editable,
                text: String::new(),
                selection: opts.selection,
            },
        );
        self.cursor.view = Some(ViewCursor {
            widget: combo,
            index: 0,
        });
    }

    /// Add a row to the current collection. Tables take `;`-separated
    /// cells and always append.
    pub fn add_item(&mut self, opts: ItemOptions) {
        let Some(view) = self.cursor.view else {
            crate::log!("add_item: no current list for '{}'", opts.title);
            return;
        };
        let Some(widget) = self.tree.widget_mut(view.widget) else {
            return;
        };

        if let WidgetData::Table { rows, .. } = &mut widget.data {
            rows.push(split_cells(&opts.title));
            let count = rows.len();
            if let Some(v) = self.cursor.view.as_mut() {
                v.index = count;
            }
            return;
        }

        let Some((items, current)) = widget.items_mut() else {
            return;
        };
        let at = view.index.min(items.len());
        items.insert(at, Item::new(opts.title).with_icon(opts.icon));
        match current {
            Some(c) if *c >= at => *c += 1,
            _ => {}
        }
        if opts.current || items.len() == 1 {
            *current = Some(at);
        }
        if let Some(v) = self.cursor.view.as_mut() {
            v.index = at + 1;
        }
    }

    pub fn add_separator(&mut self, opts: SeparatorOptions) {
        self.insert_widget(
            &opts.name,
            WidgetData::Frame {
                shape: if opts.vertical {
                    FrameShape::VLine
                } else {
                    FrameShape::HLine
                },
                shadow: opts.shadow,
            },
        );
    }

    pub fn add_progress_bar(&mut self, opts: ProgressBarOptions) {
        self.insert_widget(
            &opts.name,
            WidgetData::ProgressBar {
                value: 0,
                min: 0,
                max: if opts.busy { 0 } else { 100 },
                vertical: opts.vertical,
                busy: opts.busy,
            },
        );
    }

    pub fn add_slider(&mut self, opts: SliderOptions) {
        let (min, max) = if opts.min <= opts.max {
            (opts.min, opts.max)
        } else {
            (opts.min, opts.min)
        };
        self.insert_widget(
            &opts.name,
            WidgetData::Slider {
                value: min,
                min,
                max,
                vertical: opts.vertical,
            },
        );
    }

    /// Add a read-only text viewer, optionally filled from a file. An
    /// unreadable file leaves the viewer empty.
    pub fn add_text_view(&mut self, opts: TextViewOptions) {
        let text = match &opts.file {
            Some(path) => read_or_empty(path),
            None => String::new(),
        };
        self.insert_widget(
            &opts.name,
            WidgetData::TextView {
                text,
                file: opts.file,
            },
        );
    }

    /// Add a tab widget and make it the target for new pages
    pub fn add_tabs(&mut self, opts: TabsOptions) {
        crate::log_fn!("add_tabs", "{}", opts.name);
        let tabs = self.insert_widget(
            &opts.name,
            WidgetData::Tabs {
                position: opts.position,
                current: None,
            },
        );
        self.cursor.tabs = Some(TabsCursor {
            widget: tabs,
            index: 0,
        });
    }

    /// Add a page to the current tab widget and move the cursor into it
    pub fn add_page(&mut self, opts: PageOptions) {
        let Some(tabs) = self.cursor.tabs else {
            crate::log!("add_page: no current tabs for '{}'", opts.name);
            return;
        };
        crate::log_fn!("add_page", "{}", opts.name);
        self.end_group();

        let page = self.tree.alloc_widget(
            &opts.name,
            Widget::new(WidgetData::Page {
                title: opts.title,
                icon: opts.icon.filter(|i| !i.is_empty()),
            }),
        );
        let column = page_skeleton(&mut self.tree, page);
        self.cursor.set_current(column, 0);
        self.pages.push(page);

        let at = self.tree.insert_child(tabs.widget, tabs.index, page);
        if let Some(WidgetData::Tabs { current, .. }) =
            self.tree.widget_mut(tabs.widget).map(|w| &mut w.data)
        {
            match current {
                Some(c) if *c >= at => *c += 1,
                _ => {}
            }
            if opts.current || current.is_none() {
                *current = Some(at);
            }
        }
        if let Some(t) = self.cursor.tabs.as_mut() {
            t.index = at + 1;
        }
    }

    /// Add a calendar. Dates are ISO `YYYY-MM-DD`; invalid dates are ignored.
    pub fn add_calendar(&mut self, opts: CalendarOptions) {
        let min = opts.min.as_deref().and_then(parse_date);
        let max = opts.max.as_deref().and_then(parse_date);
        let date = opts
            .date
            .as_deref()
            .and_then(parse_date)
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        self.insert_widget(
            &opts.name,
            WidgetData::Calendar {
                date: clamp_date(date, min, max),
                min,
                max,
                selection: opts.selection,
            },
        );
    }

    /// Add a table and make it the current collection
    pub fn add_table(&mut self, opts: TableOptions) {
        crate::log_fn!("add_table", "{}", opts.name);
        let headers = if opts.headers.is_empty() {
            Vec::new()
        } else {
            split_cells(&opts.headers)
        };
        let rows: Vec<Vec<String>> = match &opts.file {
            Some(path) => read_or_empty(path)
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(split_cells)
                .collect(),
            None => Vec::new(),
        };
        let count = rows.len();

        let table = self.insert_widget(
            &opts.name,
            WidgetData::Table {
                headers,
                rows,
                current: None,
                readonly: opts.readonly,
                selection: opts.selection,
                search: opts.search,
            },
        );
        self.cursor.view = Some(ViewCursor {
            widget: table,
            index: count,
        });
    }

    pub fn add_chart(&mut self, opts: ChartOptions) {
        self.insert_widget(&opts.name, WidgetData::Chart { title: opts.title });
    }

    // ------------------------------------------------------------------
    // Shared state helpers
    // ------------------------------------------------------------------

    /// Make `id` the single default push button
    fn make_default(&mut self, id: NodeId) {
        if let Some(previous) = self.cursor.default_button.take() {
            if let Some(WidgetData::PushButton { default, .. }) =
                self.tree.widget_mut(previous).map(|w| &mut w.data)
            {
                *default = false;
            }
        }
        if let Some(WidgetData::PushButton { default, .. }) =
            self.tree.widget_mut(id).map(|w| &mut w.data)
        {
            *default = true;
            self.cursor.default_button = Some(id);
        }
    }

    /// Radio buttons are exclusive among those owned by the same widget
    fn uncheck_other_radios(&mut self, id: NodeId) {
        let Some(owner) = self.tree.parent_widget(id) else {
            return;
        };
        let others: Vec<NodeId> = self
            .tree
            .descendants(owner)
            .into_iter()
            .filter(|&other| other != id && self.tree.parent_widget(other) == Some(owner))
            .collect();
        for other in others {
            if let Some(WidgetData::RadioButton { checked, .. }) =
                self.tree.widget_mut(other).map(|w| &mut w.data)
            {
                *checked = false;
            }
        }
    }
}

/// Build `page -> outer (vertical) -> row -> column` and return the column
fn page_skeleton(tree: &mut WidgetTree, page: NodeId) -> NodeId {
    let outer = tree.alloc_layout(Direction::Vertical);
    let row = tree.alloc_layout(Direction::Horizontal);
    let column = tree.alloc_layout(Direction::Vertical);
    tree.push_child(page, outer);
    tree.push_child(outer, row);
    tree.push_child(row, column);
    column
}

fn split_cells(line: &str) -> Vec<String> {
    line.split(';').map(str::to_string).collect()
}

fn read_or_empty(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        crate::log!("Failed to read {:?}: {}", path, e);
        String::new()
    })
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub(crate) fn clamp_date(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> NaiveDate {
    let date = min.map_or(date, |m| date.max(m));
    max.map_or(date, |m| date.min(m))
}
