//! Widget variants stored in the dialog tree
//!
//! Every constructed widget carries a closed variant describing what it is
//! together with its live state (checked flag, text, rows, value...). The
//! classifier and the report read these directly.

use std::path::PathBuf;

use chrono::NaiveDate;

use super::tree::NodeId;

/// Box layout direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
}

impl Direction {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Direction::Vertical
        } else {
            Direction::Horizontal
        }
    }
}

/// What a tree node is
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Box layout holding widgets and nested layouts
    Layout(Direction),
    /// A widget
    Widget(Widget),
}

/// Label content interpretation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelContent {
    #[default]
    Text,
    /// Title is an image path
    Picture,
    /// Title is an animation path
    Animation,
}

/// Frame outline shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameShape {
    NoFrame,
    #[default]
    Box,
    Panel,
    StyledPanel,
    HLine,
    VLine,
}

impl FrameShape {
    /// Line shapes turn a frame into a separator
    pub fn is_line(&self) -> bool {
        matches!(self, FrameShape::HLine | FrameShape::VLine)
    }
}

/// Frame shadow
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameShadow {
    Plain,
    Raised,
    #[default]
    Sunken,
}

/// Where the tab bar sits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// One row of a list or combo box
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Item {
    pub text: String,
    pub icon: Option<String>,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon.filter(|i| !i.is_empty());
        self
    }
}

/// Per-kind widget state
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetData {
    Dialog {
        title: String,
        about: Option<String>,
        resizable: bool,
    },
    Page {
        title: String,
        icon: Option<String>,
    },
    PushButton {
        title: String,
        icon: Option<String>,
        apply: bool,
        exit: bool,
        default: bool,
        checkable: bool,
        checked: bool,
    },
    CheckBox {
        title: String,
        checked: bool,
    },
    RadioButton {
        title: String,
        checked: bool,
    },
    Label {
        title: String,
        content: LabelContent,
        /// Interactive companion of a composite control
        buddy: Option<NodeId>,
    },
    LineEdit {
        text: String,
        placeholder: String,
        password: bool,
    },
    ListBox {
        items: Vec<Item>,
        current: Option<usize>,
        activation: bool,
        selection: bool,
    },
    ComboBox {
        items: Vec<Item>,
        current: Option<usize>,
        editable: bool,
        /// Edit text of an editable combo box
        text: String,
        selection: bool,
    },
    GroupBox {
        title: String,
        checkable: bool,
        checked: bool,
    },
    Frame {
        shape: FrameShape,
        shadow: FrameShadow,
    },
    Tabs {
        position: TabPosition,
        current: Option<usize>,
    },
    ProgressBar {
        value: i32,
        min: i32,
        max: i32,
        vertical: bool,
        /// Indeterminate, no range
        busy: bool,
    },
    Slider {
        value: i32,
        min: i32,
        max: i32,
        vertical: bool,
    },
    TextView {
        text: String,
        file: Option<PathBuf>,
    },
    Calendar {
        date: NaiveDate,
        min: Option<NaiveDate>,
        max: Option<NaiveDate>,
        selection: bool,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        current: Option<usize>,
        readonly: bool,
        selection: bool,
        search: bool,
    },
    Chart {
        title: String,
    },
}

/// A widget node payload
#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub enabled: bool,
    pub visible: bool,
    pub data: WidgetData,
}

impl Widget {
    pub fn new(data: WidgetData) -> Self {
        Self {
            enabled: true,
            visible: true,
            data,
        }
    }

    /// Focus-proxy companion of a composite label
    pub fn buddy(&self) -> Option<NodeId> {
        match self.data {
            WidgetData::Label { buddy, .. } => buddy,
            _ => None,
        }
    }

    /// Root dialog or tab page
    pub fn is_page(&self) -> bool {
        matches!(
            self.data,
            WidgetData::Dialog { .. } | WidgetData::Page { .. }
        )
    }

    /// Number of rows held by a list, combo box or table
    pub fn row_count(&self) -> Option<usize> {
        match &self.data {
            WidgetData::ListBox { items, .. } | WidgetData::ComboBox { items, .. } => {
                Some(items.len())
            }
            WidgetData::Table { rows, .. } => Some(rows.len()),
            _ => None,
        }
    }

    /// Mutable rows of a list or combo box
    pub fn items_mut(&mut self) -> Option<(&mut Vec<Item>, &mut Option<usize>)> {
        match &mut self.data {
            WidgetData::ListBox { items, current, .. }
            | WidgetData::ComboBox { items, current, .. } => Some((items, current)),
            _ => None,
        }
    }

    /// Rows of a list or combo box
    pub fn items(&self) -> Option<&[Item]> {
        match &self.data {
            WidgetData::ListBox { items, .. } | WidgetData::ComboBox { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Whether the widget takes part in keyboard focus traversal
    pub fn takes_focus(&self) -> bool {
        !matches!(
            self.data,
            WidgetData::Dialog { .. }
                | WidgetData::Page { .. }
                | WidgetData::Label { .. }
                | WidgetData::Frame { .. }
                | WidgetData::ProgressBar { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count() {
        let list = Widget::new(WidgetData::ListBox {
            items: vec![Item::new("a"), Item::new("b")],
            current: None,
            activation: false,
            selection: false,
        });
        assert_eq!(list.row_count(), Some(2));

        let table = Widget::new(WidgetData::Table {
            headers: vec!["h".to_string()],
            rows: vec![vec!["x".to_string()]],
            current: None,
            readonly: true,
            selection: false,
            search: false,
        });
        assert_eq!(table.row_count(), Some(1));

        let label = Widget::new(WidgetData::Label {
            title: "t".to_string(),
            content: LabelContent::Text,
            buddy: None,
        });
        assert_eq!(label.row_count(), None);
        assert!(!label.takes_focus());
    }

    #[test]
    fn test_item_icon_filter() {
        assert_eq!(Item::new("x").with_icon(Some(String::new())).icon, None);
        assert_eq!(
            Item::new("x").with_icon(Some("a.png".to_string())).icon.as_deref(),
            Some("a.png")
        );
    }
}
