//! Name resolution
//!
//! `name` finds a widget or page; `name#N` and `name:text` additionally
//! address a row of a list or combo box. The resolved collection and row are
//! recorded in the cursor for the following classify or remove.

use super::cursor::Chosen;
use super::kind::{classify, WidgetKind};
use super::tree::NodeId;
use super::Dialog;

impl Dialog {
    /// Resolve a name. Resets and then records the chosen collection/row.
    pub fn find_widget(&mut self, name: &str) -> Option<NodeId> {
        self.cursor.chosen = None;

        let (base, suffix) = split_name(name);
        if base.is_empty() {
            return None;
        }

        let widget = self
            .pages
            .iter()
            .find_map(|&page| {
                if self.tree.name(page) == base {
                    Some(page)
                } else {
                    self.tree
                        .own_layout(page)
                        .and_then(|layout| self.search(layout, base))
                }
            })?;

        let view = match classify(&self.tree, None, widget) {
            WidgetKind::ListBox | WidgetKind::ComboBox => self
                .tree
                .widget(widget)
                .and_then(|w| w.buddy())
                .or(Some(widget)),
            _ => None,
        };

        if let Some(view) = view {
            let row = match suffix {
                Suffix::Row(row) => row,
                Suffix::Text(text) => {
                    let items = self.tree.widget(view).and_then(|w| w.items()).unwrap_or(&[]);
                    Some(
                        items
                            .iter()
                            .position(|item| item.text == text)
                            .unwrap_or(items.len()),
                    )
                }
                Suffix::None => None,
            };
            self.cursor.chosen = Some(Chosen { view, row });
        }

        Some(widget)
    }

    /// Depth-first search below a layout. Descends into group boxes and
    /// frames but not into tab widgets; tab pages are searched on their own.
    fn search(&self, node: NodeId, name: &str) -> Option<NodeId> {
        if self.tree.is_layout(node) {
            return self
                .tree
                .children(node)
                .iter()
                .find_map(|&child| self.search(child, name));
        }
        if self.tree.name(node) == name {
            return Some(node);
        }
        self.tree
            .own_layout(node)
            .and_then(|layout| self.search(layout, name))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Suffix<'a> {
    None,
    /// `#N`; a negative or missing number addresses no row
    Row(Option<usize>),
    /// `:text`
    Text(&'a str),
}

/// Split at the first `#` or `:`
fn split_name(name: &str) -> (&str, Suffix<'_>) {
    match name.find(&['#', ':'][..]) {
        Some(at) => {
            let (base, rest) = name.split_at(at);
            let suffix = if rest.starts_with('#') {
                Suffix::Row(leading_int(&rest[1..]).and_then(|n| usize::try_from(n).ok()))
            } else {
                Suffix::Text(&rest[1..])
            };
            (base, suffix)
        }
        None => (name, Suffix::None),
    }
}

/// Parse a leading, optionally signed, decimal integer
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let digits_start = usize::from(s.starts_with(&['-', '+'][..]));
    let end = s[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + digits_start);
    if end == digits_start {
        return None;
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::options::{ItemOptions, ListBoxOptions};

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("lst"), ("lst", Suffix::None));
        assert_eq!(split_name("lst#2"), ("lst", Suffix::Row(Some(2))));
        assert_eq!(split_name("lst#-1"), ("lst", Suffix::Row(None)));
        assert_eq!(split_name("lst#"), ("lst", Suffix::Row(None)));
        assert_eq!(split_name("lst#3x"), ("lst", Suffix::Row(Some(3))));
        assert_eq!(split_name("lst:a#b"), ("lst", Suffix::Text("a#b")));
        assert_eq!(split_name("#1"), ("", Suffix::Row(Some(1))));
    }

    fn with_list() -> Dialog {
        let mut d = Dialog::new("t", None, false);
        d.add_list_box(ListBoxOptions {
            title: "Fruit".into(),
            name: "lst".into(),
            ..Default::default()
        });
        for t in ["apple", "pear"] {
            d.add_item(ItemOptions {
                title: t.into(),
                ..Default::default()
            });
        }
        d
    }

    #[test]
    fn test_find_resolves_rows() {
        let mut d = with_list();
        let label = d.find_widget("lst").unwrap();
        let list = d.tree().widget(label).unwrap().buddy().unwrap();
        assert_eq!(d.cursor().chosen, Some(Chosen { view: list, row: None }));
        assert_eq!(d.kind_of(label), WidgetKind::ListBox);

        d.find_widget("lst#1").unwrap();
        assert_eq!(d.cursor().chosen.unwrap().row, Some(1));
        assert_eq!(d.kind_of(label), WidgetKind::Item);

        d.find_widget("lst:pear").unwrap();
        assert_eq!(d.cursor().chosen.unwrap().row, Some(1));

        // unmatched text falls back to the append position
        d.find_widget("lst:plum").unwrap();
        assert_eq!(d.cursor().chosen.unwrap().row, Some(2));
    }

    #[test]
    fn test_find_misses_reset_chosen() {
        let mut d = with_list();
        d.find_widget("lst#0");
        assert!(d.cursor().chosen.is_some());

        assert_eq!(d.find_widget("nope"), None);
        assert_eq!(d.cursor().chosen, None);
        assert_eq!(d.find_widget(""), None);
        assert_eq!(d.find_widget("#0"), None);
    }
}
