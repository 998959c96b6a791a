//! Property changes, visibility/enablement and button activation

use super::kind::WidgetKind;
use super::tree::NodeId;
use super::widget::WidgetData;
use super::{clamp_date, parse_date, Dialog, ABOUT_BUTTON};
use crate::command::Property;

/// How the dialog was closed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
}

/// Effect of pressing a push button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Activation {
    /// Values should be reported
    pub report: bool,
    /// The dialog closes
    pub outcome: Option<Outcome>,
}

impl Dialog {
    /// Resolve a property target; the empty name is the dialog itself
    fn target(&mut self, name: &str) -> Option<NodeId> {
        if name.is_empty() {
            self.cursor.chosen = None;
            return Some(self.root);
        }
        let found = self.find_widget(name);
        if found.is_none() {
            crate::log!("no widget '{}'", name);
        }
        found
    }

    /// Set (enable) a property, with an optional value
    pub fn set_property(&mut self, property: Property, name: &str, value: Option<&str>) {
        let Some(id) = self.target(name) else {
            return;
        };
        if !self.apply(id, property, true, value) {
            crate::log!("set: {:?} does not apply to '{}'", property, name);
        }
    }

    /// Unset (disable or clear) a property
    pub fn unset_property(&mut self, property: Property, name: &str) {
        let Some(id) = self.target(name) else {
            return;
        };
        if !self.apply(id, property, false, None) {
            crate::log!("unset: {:?} does not apply to '{}'", property, name);
        }
    }

    pub fn set_visible(&mut self, name: &str, visible: bool) {
        if let Some(id) = self.target(name) {
            self.apply(id, Property::Visible, visible, None);
        }
    }

    pub fn set_enabled(&mut self, name: &str, enabled: bool) {
        if let Some(id) = self.target(name) {
            self.apply(id, Property::Enabled, enabled, None);
        }
    }

    /// Apply a property change; returns false when it does not apply
    fn apply(&mut self, id: NodeId, property: Property, on: bool, value: Option<&str>) -> bool {
        let kind = self.kind_of(id);
        let chosen_row = self.cursor.chosen.and_then(|c| c.row);
        let buddy = self.tree.widget(id).and_then(|w| w.buddy());
        // Composite labels forward value properties to their companion
        let target = buddy.unwrap_or(id);
        let text = value.unwrap_or_default().to_string();

        match property {
            Property::Enabled | Property::Visible => {
                for node in std::iter::once(id).chain(buddy) {
                    if let Some(w) = self.tree.widget_mut(node) {
                        if property == Property::Enabled {
                            w.enabled = on;
                        } else {
                            w.visible = on;
                        }
                    }
                }
                true
            }
            Property::Checked => {
                let applied = match self.data_mut(id) {
                    Some(WidgetData::CheckBox { checked, .. })
                    | Some(WidgetData::RadioButton { checked, .. }) => {
                        *checked = on;
                        true
                    }
                    Some(WidgetData::PushButton {
                        checkable: true,
                        checked,
                        ..
                    })
                    | Some(WidgetData::GroupBox {
                        checkable: true,
                        checked,
                        ..
                    }) => {
                        *checked = on;
                        true
                    }
                    _ => false,
                };
                if applied && on && kind == WidgetKind::RadioButton {
                    self.uncheck_other_radios(id);
                }
                applied
            }
            Property::Checkable => match self.data_mut(id) {
                Some(WidgetData::PushButton {
                    checkable, checked, ..
                })
                | Some(WidgetData::GroupBox {
                    checkable, checked, ..
                }) => {
                    *checkable = on;
                    if !on {
                        *checked = false;
                    }
                    true
                }
                _ => false,
            },
            Property::Default => {
                if kind != WidgetKind::PushButton {
                    return false;
                }
                if on {
                    self.make_default(id);
                } else if self.cursor.default_button == Some(id) {
                    self.cursor.default_button = None;
                    if let Some(WidgetData::PushButton { default, .. }) = self.data_mut(id) {
                        *default = false;
                    }
                }
                true
            }
            Property::Current => self.apply_current(id, kind, chosen_row, on),
            Property::Text => match self.data_mut(target) {
                Some(WidgetData::LineEdit { text: t, .. })
                | Some(WidgetData::TextView { text: t, .. })
                | Some(WidgetData::ComboBox {
                    editable: true,
                    text: t,
                    ..
                }) => {
                    *t = text;
                    true
                }
                Some(WidgetData::Label { title, .. }) => {
                    *title = text;
                    true
                }
                _ => false,
            },
            Property::Title => {
                if kind == WidgetKind::Item {
                    return self.apply_item(target, chosen_row, |item| item.text = text);
                }
                match self.data_mut(id) {
                    Some(WidgetData::Dialog { title, .. })
                    | Some(WidgetData::Page { title, .. })
                    | Some(WidgetData::PushButton { title, .. })
                    | Some(WidgetData::CheckBox { title, .. })
                    | Some(WidgetData::RadioButton { title, .. })
                    | Some(WidgetData::Label { title, .. })
                    | Some(WidgetData::GroupBox { title, .. })
                    | Some(WidgetData::Chart { title }) => {
                        *title = text;
                        true
                    }
                    _ => false,
                }
            }
            Property::Icon => {
                let icon = value.filter(|v| on && !v.is_empty()).map(str::to_string);
                if kind == WidgetKind::Item {
                    return self.apply_item(target, chosen_row, |item| item.icon = icon);
                }
                match self.data_mut(id) {
                    Some(WidgetData::PushButton { icon: i, .. })
                    | Some(WidgetData::Page { icon: i, .. }) => {
                        *i = icon;
                        true
                    }
                    _ => false,
                }
            }
            Property::Placeholder => match self.data_mut(target) {
                Some(WidgetData::LineEdit { placeholder, .. }) => {
                    *placeholder = text;
                    true
                }
                _ => false,
            },
            Property::Password => match self.data_mut(target) {
                Some(WidgetData::LineEdit { password, .. }) => {
                    *password = on;
                    true
                }
                _ => false,
            },
            Property::ReadOnly => match self.data_mut(id) {
                Some(WidgetData::Table { readonly, .. }) => {
                    *readonly = on;
                    true
                }
                _ => false,
            },
            Property::Value | Property::Minimum | Property::Maximum => {
                self.apply_range(id, property, on, value)
            }
        }
    }

    /// Make a row, page or table row current
    fn apply_current(
        &mut self,
        id: NodeId,
        kind: WidgetKind,
        chosen_row: Option<usize>,
        on: bool,
    ) -> bool {
        match kind {
            WidgetKind::Item => {
                let Some(view) = self.cursor.chosen.map(|c| c.view) else {
                    return false;
                };
                let Some(row) = chosen_row else {
                    return false;
                };
                match self.tree.widget_mut(view).and_then(|w| w.items_mut()) {
                    Some((items, current)) if row < items.len() => {
                        if on {
                            *current = Some(row);
                        } else if *current == Some(row) {
                            *current = None;
                        }
                        true
                    }
                    _ => false,
                }
            }
            WidgetKind::Page => {
                let Some(tabs) = self.tree.parent(id) else {
                    return false;
                };
                let index = self.tree.index_of(id);
                match self.data_mut(tabs) {
                    Some(WidgetData::Tabs { current, .. }) => {
                        if on {
                            *current = index;
                        }
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Change the list row addressed by the last lookup
    fn apply_item(
        &mut self,
        view: NodeId,
        row: Option<usize>,
        change: impl FnOnce(&mut super::widget::Item),
    ) -> bool {
        let Some(row) = row else {
            return false;
        };
        match self
            .tree
            .widget_mut(view)
            .and_then(|w| w.items_mut())
            .and_then(|(items, _)| items.get_mut(row))
        {
            Some(item) => {
                change(item);
                true
            }
            None => false,
        }
    }

    /// Numeric or date value and range of sliders, progress bars and
    /// calendars. Values are clamped into the range.
    fn apply_range(
        &mut self,
        id: NodeId,
        property: Property,
        on: bool,
        value: Option<&str>,
    ) -> bool {
        if !on {
            return false;
        }
        let Some(value) = value else {
            return false;
        };

        match self.data_mut(id) {
            Some(WidgetData::Slider {
                value: v, min, max, ..
            })
            | Some(WidgetData::ProgressBar {
                value: v,
                min,
                max,
                busy: false,
                ..
            }) => {
                let Ok(n) = value.trim().parse::<i32>() else {
                    return false;
                };
                match property {
                    Property::Minimum => {
                        *min = n;
                        *max = (*max).max(n);
                    }
                    Property::Maximum => {
                        *max = n;
                        *min = (*min).min(n);
                    }
                    _ => *v = n,
                }
                *v = (*v).clamp(*min, *max);
                true
            }
            Some(WidgetData::Calendar { date, min, max, .. }) => {
                let Some(d) = parse_date(value) else {
                    return false;
                };
                match property {
                    Property::Minimum => {
                        *min = Some(d);
                        if max.is_some_and(|m| m < d) {
                            *max = Some(d);
                        }
                    }
                    Property::Maximum => {
                        *max = Some(d);
                        if min.is_some_and(|m| m > d) {
                            *min = Some(d);
                        }
                    }
                    _ => *date = d,
                }
                *date = clamp_date(*date, *min, *max);
                true
            }
            _ => false,
        }
    }

    fn data_mut(&mut self, id: NodeId) -> Option<&mut WidgetData> {
        self.tree.widget_mut(id).map(|w| &mut w.data)
    }

    /// Activate a push button. Checkable buttons toggle; `apply` buttons ask
    /// for a report; `exit` buttons close the dialog, accepted when combined
    /// with `apply`, rejected otherwise. Disabled or hidden buttons do nothing.
    pub fn press(&mut self, name: &str) -> Activation {
        let Some(id) = self.target(name) else {
            return Activation::default();
        };
        let Some(widget) = self.tree.widget_mut(id) else {
            return Activation::default();
        };
        if !widget.enabled || !widget.visible {
            crate::log!("press: '{}' is not active", name);
            return Activation::default();
        }

        let WidgetData::PushButton {
            apply,
            exit,
            checkable,
            checked,
            ..
        } = &mut widget.data
        else {
            crate::log!("press: '{}' is not a push button", name);
            return Activation::default();
        };

        if *checkable {
            *checked = !*checked;
        }
        let activation = Activation {
            report: *apply,
            outcome: match (*exit, *apply) {
                (true, true) => Some(Outcome::Accepted),
                (true, false) => Some(Outcome::Rejected),
                _ => None,
            },
        };

        if self.tree.name(id) == ABOUT_BUTTON {
            if let Some(WidgetData::Dialog {
                about: Some(about), ..
            }) = self.tree.widget(self.root).map(|w| &w.data)
            {
                crate::log!("about: {}", about);
            }
        }
        crate::log_fn!("press", "{} -> {:?}", name, activation);
        activation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::options::{
        CheckBoxOptions, PushButtonOptions, RadioButtonOptions, SliderOptions, TextBoxOptions,
    };

    fn checked(d: &Dialog, id: NodeId) -> bool {
        match d.tree().widget(id).map(|w| &w.data) {
            Some(WidgetData::CheckBox { checked, .. })
            | Some(WidgetData::RadioButton { checked, .. })
            | Some(WidgetData::PushButton { checked, .. }) => *checked,
            _ => panic!("not checkable"),
        }
    }

    #[test]
    fn test_checked_and_radio_exclusivity() {
        let mut d = Dialog::new("t", None, false);
        for name in ["r1", "r2"] {
            d.add_radio_button(RadioButtonOptions {
                title: name.into(),
                name: name.into(),
                checked: true,
            });
        }
        let r1 = d.find_widget("r1").unwrap();
        let r2 = d.find_widget("r2").unwrap();
        assert!(!checked(&d, r1));
        assert!(checked(&d, r2));

        d.set_property(Property::Checked, "r1", None);
        assert!(checked(&d, r1));
        assert!(!checked(&d, r2));

        d.add_check_box(CheckBoxOptions {
            title: "c".into(),
            name: "c".into(),
            checked: true,
        });
        d.unset_property(Property::Checked, "c");
        let c = d.find_widget("c").unwrap();
        assert!(!checked(&d, c));
    }

    #[test]
    fn test_text_goes_to_companion() {
        let mut d = Dialog::new("t", None, false);
        d.add_text_box(TextBoxOptions {
            title: "Name".into(),
            name: "nm".into(),
            ..Default::default()
        });
        d.set_property(Property::Text, "nm", Some("Ada"));
        let label = d.find_widget("nm").unwrap();
        let edit = d.tree().widget(label).unwrap().buddy().unwrap();
        assert!(matches!(
            &d.tree().widget(edit).unwrap().data,
            WidgetData::LineEdit { text, .. } if text == "Ada"
        ));

        d.set_enabled("nm", false);
        assert!(!d.tree().widget(edit).unwrap().enabled);
        assert!(!d.tree().widget(label).unwrap().enabled);
    }

    #[test]
    fn test_slider_range_clamps() {
        let mut d = Dialog::new("t", None, false);
        d.add_slider(SliderOptions {
            name: "sl".into(),
            ..Default::default()
        });
        d.set_property(Property::Value, "sl", Some("150"));
        d.set_property(Property::Minimum, "sl", Some("bogus"));
        let sl = d.find_widget("sl").unwrap();
        assert!(matches!(
            d.tree().widget(sl).unwrap().data,
            WidgetData::Slider { value: 100, min: 0, max: 100, .. }
        ));

        d.set_property(Property::Maximum, "sl", Some("50"));
        assert!(matches!(
            d.tree().widget(sl).unwrap().data,
            WidgetData::Slider { value: 50, max: 50, .. }
        ));
    }

    #[test]
    fn test_default_button_is_unique() {
        let mut d = Dialog::new("t", None, false);
        for name in ["a", "b"] {
            d.add_push_button(PushButtonOptions {
                title: name.into(),
                name: name.into(),
                default: true,
                ..Default::default()
            });
        }
        let b = d.find_widget("b").unwrap();
        assert_eq!(d.cursor().default_button, Some(b));

        d.set_property(Property::Default, "a", None);
        let a = d.find_widget("a").unwrap();
        assert_eq!(d.cursor().default_button, Some(a));
        assert!(matches!(
            d.tree().widget(b).unwrap().data,
            WidgetData::PushButton { default: false, .. }
        ));
    }

    #[test]
    fn test_press_outcomes() {
        let mut d = Dialog::new("t", None, false);
        d.add_push_button(PushButtonOptions {
            title: "Ok".into(),
            name: "ok".into(),
            apply: true,
            exit: true,
            ..Default::default()
        });
        d.add_push_button(PushButtonOptions {
            title: "Cancel".into(),
            name: "cancel".into(),
            exit: true,
            ..Default::default()
        });
        d.add_push_button(PushButtonOptions {
            title: "Mode".into(),
            name: "mode".into(),
            checkable: true,
            ..Default::default()
        });

        assert_eq!(
            d.press("ok"),
            Activation {
                report: true,
                outcome: Some(Outcome::Accepted)
            }
        );
        assert_eq!(d.press("cancel").outcome, Some(Outcome::Rejected));

        assert_eq!(d.press("mode"), Activation::default());
        let mode = d.find_widget("mode").unwrap();
        assert!(checked(&d, mode));

        d.set_enabled("ok", false);
        assert_eq!(d.press("ok"), Activation::default());
        assert_eq!(d.press("missing"), Activation::default());
    }
}
