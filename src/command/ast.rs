//! Typed command model
//!
//! A parsed command line. Names are kept as raw strings (including any
//! `#row` / `:text` suffix); resolution happens against the live dialog.

use crate::dialog::options::{
    CalendarOptions, ChartOptions, CheckBoxOptions, ComboBoxOptions, FrameOptions,
    GroupBoxOptions, ItemOptions, LabelOptions, ListBoxOptions, PageOptions, ProgressBarOptions,
    PushButtonOptions, RadioButtonOptions, SeparatorOptions, SliderOptions, TableOptions,
    TabsOptions, TextBoxOptions, TextViewOptions,
};

/// A single dialog command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Set {
        property: Property,
        name: String,
        value: Option<String>,
    },
    Unset {
        property: Property,
        name: String,
    },
    /// `end [kind]`; no kind closes whatever is innermost
    End(Option<EndKind>),
    Step {
        vertical: bool,
    },
    /// `clear [name]`; no name clears the whole dialog
    Clear(Option<String>),
    Remove(String),
    Position {
        name: String,
        behind: bool,
        onto: bool,
    },
    Show(Option<String>),
    Hide(Option<String>),
    Enable(Option<String>),
    Disable(Option<String>),
    /// Write a report of all widget values
    Query,
    /// Activate a push button
    Press(String),
}

/// `add <kind> ...`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddCommand {
    PushButton(PushButtonOptions),
    CheckBox(CheckBoxOptions),
    RadioButton(RadioButtonOptions),
    Label(LabelOptions),
    GroupBox(GroupBoxOptions),
    Frame(FrameOptions),
    TextBox(TextBoxOptions),
    ListBox(ListBoxOptions),
    ComboBox(ComboBoxOptions),
    Item(ItemOptions),
    Separator(SeparatorOptions),
    ProgressBar(ProgressBarOptions),
    Slider(SliderOptions),
    TextView(TextViewOptions),
    Tabs(TabsOptions),
    Page(PageOptions),
    Calendar(CalendarOptions),
    Table(TableOptions),
    Chart(ChartOptions),
}

/// What an `end` closes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndKind {
    /// Group box or frame
    Group,
    /// List box, combo box or table
    List,
    Page,
    Tabs,
}

impl EndKind {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "group" | "groupbox" | "frame" => Some(EndKind::Group),
            "list" | "listbox" | "combobox" | "combo" | "table" => Some(EndKind::List),
            "page" => Some(EndKind::Page),
            "tabs" => Some(EndKind::Tabs),
            _ => None,
        }
    }
}

/// Widget properties addressable by `set` / `unset`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Checked,
    Enabled,
    Visible,
    Default,
    Current,
    Text,
    Title,
    Value,
    Minimum,
    Maximum,
    Placeholder,
    Password,
    Checkable,
    Icon,
    ReadOnly,
}

impl Property {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "checked" => Some(Property::Checked),
            "enabled" => Some(Property::Enabled),
            "visible" => Some(Property::Visible),
            "default" => Some(Property::Default),
            "current" => Some(Property::Current),
            "text" => Some(Property::Text),
            "title" => Some(Property::Title),
            "value" => Some(Property::Value),
            "minimum" => Some(Property::Minimum),
            "maximum" => Some(Property::Maximum),
            "placeholder" => Some(Property::Placeholder),
            "password" => Some(Property::Password),
            "checkable" => Some(Property::Checkable),
            "icon" => Some(Property::Icon),
            "readonly" => Some(Property::ReadOnly),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(EndKind::from_keyword("GroupBox"), Some(EndKind::Group));
        assert_eq!(EndKind::from_keyword("table"), Some(EndKind::List));
        assert_eq!(EndKind::from_keyword("window"), None);
        assert_eq!(Property::from_keyword("READONLY"), Some(Property::ReadOnly));
        assert_eq!(Property::from_keyword("colour"), None);
    }
}
