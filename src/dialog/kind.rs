//! Widget classification

use std::fmt;

use super::cursor::Chosen;
use super::tree::{NodeId, WidgetTree};
use super::widget::WidgetData;

/// Semantic kind of a resolved widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Dialog,
    Page,
    PushButton,
    CheckBox,
    RadioButton,
    Label,
    TextBox,
    ListBox,
    ComboBox,
    /// A row addressed inside a list or combo box
    Item,
    GroupBox,
    Frame,
    Separator,
    Tabs,
    ProgressBar,
    Slider,
    TextView,
    Calendar,
    Table,
    Chart,
    None,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Dialog => "dialog",
            WidgetKind::Page => "page",
            WidgetKind::PushButton => "pushbutton",
            WidgetKind::CheckBox => "checkbox",
            WidgetKind::RadioButton => "radiobutton",
            WidgetKind::Label => "label",
            WidgetKind::TextBox => "textbox",
            WidgetKind::ListBox => "listbox",
            WidgetKind::ComboBox => "combobox",
            WidgetKind::Item => "item",
            WidgetKind::GroupBox => "groupbox",
            WidgetKind::Frame => "frame",
            WidgetKind::Separator => "separator",
            WidgetKind::Tabs => "tabs",
            WidgetKind::ProgressBar => "progressbar",
            WidgetKind::Slider => "slider",
            WidgetKind::TextView => "textview",
            WidgetKind::Calendar => "calendar",
            WidgetKind::Table => "table",
            WidgetKind::Chart => "chart",
            WidgetKind::None => "none",
        }
    }

    /// Group box or frame: owns a group layout
    pub fn is_container(&self) -> bool {
        matches!(self, WidgetKind::GroupBox | WidgetKind::Frame)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a node. A label with a companion classifies as its companion;
/// a list or combo box addressed with a row classifies as `Item`.
pub fn classify(tree: &WidgetTree, chosen: Option<Chosen>, id: NodeId) -> WidgetKind {
    let Some(widget) = tree.widget(id) else {
        return WidgetKind::None;
    };

    let collection = |view: NodeId, own: WidgetKind| match chosen {
        Some(c) if c.view == view && c.row.is_some() => WidgetKind::Item,
        _ => own,
    };

    match &widget.data {
        WidgetData::Dialog { .. } => WidgetKind::Dialog,
        WidgetData::Page { .. } => WidgetKind::Page,
        WidgetData::PushButton { .. } => WidgetKind::PushButton,
        WidgetData::CheckBox { .. } => WidgetKind::CheckBox,
        WidgetData::RadioButton { .. } => WidgetKind::RadioButton,
        WidgetData::Label { buddy: None, .. } => WidgetKind::Label,
        WidgetData::Label {
            buddy: Some(buddy), ..
        } => match tree.widget(*buddy).map(|b| &b.data) {
            Some(WidgetData::LineEdit { .. }) => WidgetKind::TextBox,
            Some(WidgetData::ListBox { .. }) => collection(*buddy, WidgetKind::ListBox),
            Some(WidgetData::ComboBox { .. }) => collection(*buddy, WidgetKind::ComboBox),
            _ => WidgetKind::Label,
        },
        WidgetData::LineEdit { .. } => WidgetKind::TextBox,
        WidgetData::ListBox { .. } => collection(id, WidgetKind::ListBox),
        WidgetData::ComboBox { .. } => collection(id, WidgetKind::ComboBox),
        WidgetData::GroupBox { .. } => WidgetKind::GroupBox,
        WidgetData::Frame { shape, .. } if shape.is_line() => WidgetKind::Separator,
        WidgetData::Frame { .. } => WidgetKind::Frame,
        WidgetData::Tabs { .. } => WidgetKind::Tabs,
        WidgetData::ProgressBar { .. } => WidgetKind::ProgressBar,
        WidgetData::Slider { .. } => WidgetKind::Slider,
        WidgetData::TextView { .. } => WidgetKind::TextView,
        WidgetData::Calendar { .. } => WidgetKind::Calendar,
        WidgetData::Table { .. } => WidgetKind::Table,
        WidgetData::Chart { .. } => WidgetKind::Chart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::widget::{Direction, FrameShadow, FrameShape, Item, LabelContent, Widget};

    fn composite(tree: &mut WidgetTree, companion: WidgetData) -> (NodeId, NodeId) {
        let companion = tree.alloc_widget("", Widget::new(companion));
        let label = tree.alloc_widget(
            "lbl",
            Widget::new(WidgetData::Label {
                title: "Title".to_string(),
                content: LabelContent::Text,
                buddy: Some(companion),
            }),
        );
        (label, companion)
    }

    #[test]
    fn test_label_classifies_through_buddy() {
        let mut tree = WidgetTree::new();
        let (label, _) = composite(
            &mut tree,
            WidgetData::LineEdit {
                text: String::new(),
                placeholder: String::new(),
                password: false,
            },
        );
        assert_eq!(classify(&tree, None, label), WidgetKind::TextBox);

        let plain = tree.alloc_widget(
            "plain",
            Widget::new(WidgetData::Label {
                title: String::new(),
                content: LabelContent::Text,
                buddy: None,
            }),
        );
        assert_eq!(classify(&tree, None, plain), WidgetKind::Label);
    }

    #[test]
    fn test_chosen_row_makes_item() {
        let mut tree = WidgetTree::new();
        let (label, list) = composite(
            &mut tree,
            WidgetData::ListBox {
                items: vec![Item::new("a")],
                current: None,
                activation: false,
                selection: false,
            },
        );

        assert_eq!(classify(&tree, None, label), WidgetKind::ListBox);
        let no_row = Some(Chosen { view: list, row: None });
        assert_eq!(classify(&tree, no_row, label), WidgetKind::ListBox);
        let row = Some(Chosen { view: list, row: Some(0) });
        assert_eq!(classify(&tree, row, label), WidgetKind::Item);
        assert_eq!(classify(&tree, row, list), WidgetKind::Item);
        let other = Some(Chosen { view: label, row: Some(0) });
        assert_eq!(classify(&tree, other, label), WidgetKind::ListBox);
    }

    #[test]
    fn test_line_frame_is_separator() {
        let mut tree = WidgetTree::new();
        let line = tree.alloc_widget(
            "sep",
            Widget::new(WidgetData::Frame {
                shape: FrameShape::HLine,
                shadow: FrameShadow::Sunken,
            }),
        );
        let boxed = tree.alloc_widget(
            "frm",
            Widget::new(WidgetData::Frame {
                shape: FrameShape::Box,
                shadow: FrameShadow::Raised,
            }),
        );
        let layout = tree.alloc_layout(Direction::Vertical);

        assert_eq!(classify(&tree, None, line), WidgetKind::Separator);
        assert_eq!(classify(&tree, None, boxed), WidgetKind::Frame);
        assert_eq!(classify(&tree, None, layout), WidgetKind::None);
        assert!(WidgetKind::Frame.is_container());
        assert_eq!(WidgetKind::Item.to_string(), "item");
    }
}
