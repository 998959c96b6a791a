//! Value report
//!
//! Every named interactive widget contributes one `name=value` entry, in
//! depth-first tree order with tab pages in tab order.

use std::io::Write;

use serde::Serialize;

use super::tree::NodeId;
use super::widget::WidgetData;
use super::Dialog;
use crate::domain::Result;
use crate::shared::config::ReportFormat;

/// One reported widget value
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub value: String,
}

impl Dialog {
    /// Collect the current values of all reportable widgets
    pub fn report_entries(&self) -> Vec<ReportEntry> {
        self.tree
            .descendants(self.root)
            .into_iter()
            .filter_map(|id| self.entry(id))
            .collect()
    }

    fn entry(&self, id: NodeId) -> Option<ReportEntry> {
        let name = self.tree.name(id);
        if name.is_empty() {
            return None;
        }
        let widget = self.tree.widget(id)?;
        let flag = |on: bool| (if on { "1" } else { "0" }).to_string();

        let value = match &widget.data {
            WidgetData::CheckBox { checked, .. } | WidgetData::RadioButton { checked, .. } => {
                flag(*checked)
            }
            WidgetData::PushButton {
                checkable: true,
                checked,
                ..
            }
            | WidgetData::GroupBox {
                checkable: true,
                checked,
                ..
            } => flag(*checked),
            WidgetData::Label {
                buddy: Some(buddy), ..
            } => self.companion_value(*buddy)?,
            WidgetData::Slider { value, .. } => value.to_string(),
            WidgetData::ProgressBar { value, busy: false, .. } => value.to_string(),
            WidgetData::Calendar { date, .. } => date.format("%Y-%m-%d").to_string(),
            WidgetData::Table { current, .. } => current.map(|c| c.to_string()).unwrap_or_default(),
            WidgetData::Tabs { current, .. } => current
                .and_then(|c| self.tree.child(id, c))
                .map(|page| self.tree.name(page).to_string())
                .unwrap_or_default(),
            _ => return None,
        };

        Some(ReportEntry {
            name: name.to_string(),
            value,
        })
    }

    /// Value of a composite control's companion widget
    fn companion_value(&self, buddy: NodeId) -> Option<String> {
        let current_text = |items: &[super::widget::Item], current: &Option<usize>| {
            current
                .and_then(|c| items.get(c))
                .map(|item| item.text.clone())
                .unwrap_or_default()
        };

        match &self.tree.widget(buddy)?.data {
            WidgetData::LineEdit { text, .. } => Some(text.clone()),
            WidgetData::ListBox { items, current, .. } => Some(current_text(items, current)),
            WidgetData::ComboBox {
                editable: true,
                text,
                ..
            } => Some(text.clone()),
            WidgetData::ComboBox { items, current, .. } => Some(current_text(items, current)),
            _ => None,
        }
    }

    /// Write the report in the requested format
    pub fn write_report<W: Write>(&self, out: &mut W, format: ReportFormat) -> Result<()> {
        let entries = self.report_entries();
        match format {
            ReportFormat::Lines => {
                for entry in &entries {
                    writeln!(out, "{}={}", entry.name, entry.value)?;
                }
            }
            ReportFormat::Json => {
                serde_json::to_writer(&mut *out, &entries)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Property;
    use crate::dialog::options::{
        CheckBoxOptions, ComboBoxOptions, GroupBoxOptions, ItemOptions, LabelOptions,
        PageOptions, TabsOptions, TextBoxOptions,
    };

    fn sample() -> Dialog {
        let mut d = Dialog::new("t", None, false);
        d.add_label(LabelOptions {
            title: "Hello".into(),
            name: "lbl".into(),
            ..Default::default()
        });
        d.add_check_box(CheckBoxOptions {
            title: "Turbo".into(),
            name: "turbo".into(),
            checked: true,
        });
        d.add_text_box(TextBoxOptions {
            title: "Name".into(),
            name: "nm".into(),
            text: "Ada".into(),
            ..Default::default()
        });
        d.add_combo_box(ComboBoxOptions {
            title: "Color".into(),
            name: "color".into(),
            ..Default::default()
        });
        for c in ["red", "green"] {
            d.add_item(ItemOptions {
                title: c.into(),
                ..Default::default()
            });
        }
        d.end_list();
        d
    }

    #[test]
    fn test_report_lines() {
        let d = sample();
        let mut out = Vec::new();
        d.write_report(&mut out, ReportFormat::Lines).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "turbo=1\nnm=Ada\ncolor=red\n"
        );
    }

    #[test]
    fn test_report_json() {
        let d = sample();
        let mut out = Vec::new();
        d.write_report(&mut out, ReportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["name"], "turbo");
        assert_eq!(parsed[2]["value"], "red");
    }

    #[test]
    fn test_report_groups_and_tabs() {
        let mut d = Dialog::new("t", None, false);
        d.add_group_box(GroupBoxOptions {
            title: "Opt".into(),
            name: "grp".into(),
            checkable: true,
            ..Default::default()
        });
        d.add_check_box(CheckBoxOptions {
            title: "inner".into(),
            name: "inner".into(),
            checked: false,
        });
        d.end_group();
        d.add_tabs(TabsOptions {
            name: "tabs".into(),
            ..Default::default()
        });
        for p in ["one", "two"] {
            d.add_page(PageOptions {
                title: p.into(),
                name: p.into(),
                ..Default::default()
            });
        }
        d.set_property(Property::Current, "two", None);

        let entries = d.report_entries();
        let pairs: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.value.as_str()))
            .collect();
        assert_eq!(pairs, vec![("grp", "0"), ("inner", "0"), ("tabs", "two")]);
    }
}
