//! Construction options for each widget kind
//!
//! One plain struct per `add_*` operation. The command parser fills these in
//! from a command line; library users may build them directly.

use std::path::PathBuf;

use super::widget::{FrameShadow, FrameShape, LabelContent, TabPosition};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PushButtonOptions {
    pub title: String,
    pub name: String,
    pub icon: Option<String>,
    /// Pressing produces a report
    pub apply: bool,
    /// Pressing closes the dialog
    pub exit: bool,
    pub default: bool,
    pub checkable: bool,
    pub checked: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckBoxOptions {
    pub title: String,
    pub name: String,
    pub checked: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RadioButtonOptions {
    pub title: String,
    pub name: String,
    pub checked: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelOptions {
    pub title: String,
    pub name: String,
    pub content: LabelContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupBoxOptions {
    pub title: String,
    pub name: String,
    /// Lay children out left to right instead of top to bottom
    pub horizontal: bool,
    pub checkable: bool,
    pub checked: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameOptions {
    pub name: String,
    pub horizontal: bool,
    pub shape: FrameShape,
    pub shadow: FrameShadow,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBoxOptions {
    pub title: String,
    pub name: String,
    pub text: String,
    pub placeholder: String,
    pub password: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListBoxOptions {
    pub title: String,
    pub name: String,
    /// Double-click activation reports immediately
    pub activation: bool,
    /// Report on every selection change
    pub selection: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboBoxOptions {
    pub title: String,
    pub name: String,
    pub editable: bool,
    pub selection: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemOptions {
    pub title: String,
    pub icon: Option<String>,
    pub current: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeparatorOptions {
    pub name: String,
    pub vertical: bool,
    pub shadow: FrameShadow,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressBarOptions {
    pub name: String,
    pub vertical: bool,
    /// Indeterminate progress (no range)
    pub busy: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliderOptions {
    pub name: String,
    pub vertical: bool,
    pub min: i32,
    pub max: i32,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            vertical: false,
            min: 0,
            max: 100,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextViewOptions {
    pub name: String,
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabsOptions {
    pub name: String,
    pub position: TabPosition,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub name: String,
    pub icon: Option<String>,
    pub current: bool,
}

/// Dates are ISO `YYYY-MM-DD`; unparsable dates are ignored
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalendarOptions {
    pub name: String,
    pub date: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub selection: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Column headers separated by `;`
    pub headers: String,
    pub name: String,
    /// File of `;`-separated rows, one per line
    pub file: Option<PathBuf>,
    pub readonly: bool,
    pub selection: bool,
    pub search: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartOptions {
    pub title: String,
    pub name: String,
}
