//! CommandHandler - Applies parsed commands to a dialog
//!
//! Every command maps onto one or more engine operations. Nothing here
//! fails: unresolved names are no-ops inside the engine, and a report that
//! cannot be written is logged and dropped.

use std::io::Write;

use crate::command::{AddCommand, Command, EndKind};
use crate::dialog::{Dialog, Outcome};
use crate::shared::config::ReportFormat;

/// Handler for dialog commands
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandHandler {
    format: ReportFormat,
}

impl CommandHandler {
    /// Create a handler writing reports in `format`
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Handle a command. Returns the outcome when the command closes the
    /// dialog.
    pub fn handle<W: Write>(
        &self,
        dialog: &mut Dialog,
        command: Command,
        out: &mut W,
    ) -> Option<Outcome> {
        match command {
            Command::Add(add) => self.add(dialog, add),
            Command::Set {
                property,
                name,
                value,
            } => dialog.set_property(property, &name, value.as_deref()),
            Command::Unset { property, name } => dialog.unset_property(property, &name),
            Command::End(kind) => match kind {
                Some(EndKind::Group) => dialog.end_group(),
                Some(EndKind::List) => dialog.end_list(),
                Some(EndKind::Page) => dialog.end_page(),
                Some(EndKind::Tabs) => dialog.end_tabs(),
                None => dialog.end_current(),
            },
            Command::Step { vertical: true } => dialog.step_vertical(),
            Command::Step { vertical: false } => dialog.step_horizontal(),
            Command::Clear(name) => dialog.clear(name.as_deref().unwrap_or("")),
            Command::Remove(name) => dialog.remove_widget(&name),
            Command::Position { name, behind, onto } => dialog.position(&name, behind, onto),
            Command::Show(name) => dialog.set_visible(name.as_deref().unwrap_or(""), true),
            Command::Hide(name) => dialog.set_visible(name.as_deref().unwrap_or(""), false),
            Command::Enable(name) => dialog.set_enabled(name.as_deref().unwrap_or(""), true),
            Command::Disable(name) => dialog.set_enabled(name.as_deref().unwrap_or(""), false),
            Command::Query => self.report(dialog, out),
            Command::Press(name) => {
                let activation = dialog.press(&name);
                if activation.report {
                    self.report(dialog, out);
                }
                return activation.outcome;
            }
        }
        None
    }

    fn add(&self, dialog: &mut Dialog, add: AddCommand) {
        match add {
            AddCommand::PushButton(opts) => dialog.add_push_button(opts),
            AddCommand::CheckBox(opts) => dialog.add_check_box(opts),
            AddCommand::RadioButton(opts) => dialog.add_radio_button(opts),
            AddCommand::Label(opts) => dialog.add_label(opts),
            AddCommand::GroupBox(opts) => dialog.add_group_box(opts),
            AddCommand::Frame(opts) => dialog.add_frame(opts),
            AddCommand::TextBox(opts) => dialog.add_text_box(opts),
            AddCommand::ListBox(opts) => dialog.add_list_box(opts),
            AddCommand::ComboBox(opts) => dialog.add_combo_box(opts),
            AddCommand::Item(opts) => dialog.add_item(opts),
            AddCommand::Separator(opts) => dialog.add_separator(opts),
            AddCommand::ProgressBar(opts) => dialog.add_progress_bar(opts),
            AddCommand::Slider(opts) => dialog.add_slider(opts),
            AddCommand::TextView(opts) => dialog.add_text_view(opts),
            AddCommand::Tabs(opts) => dialog.add_tabs(opts),
            AddCommand::Page(opts) => dialog.add_page(opts),
            AddCommand::Calendar(opts) => dialog.add_calendar(opts),
            AddCommand::Table(opts) => dialog.add_table(opts),
            AddCommand::Chart(opts) => dialog.add_chart(opts),
        }
    }

    fn report<W: Write>(&self, dialog: &Dialog, out: &mut W) {
        if let Err(e) = dialog.write_report(out, self.format) {
            crate::log!("Failed to write report: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse_line;

    fn run(handler: &CommandHandler, dialog: &mut Dialog, script: &str) -> (Option<Outcome>, String) {
        let mut out = Vec::new();
        let mut outcome = None;
        for line in script.lines() {
            if let Some(command) = parse_line(line) {
                outcome = handler.handle(dialog, command, &mut out);
                if outcome.is_some() {
                    break;
                }
            }
        }
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_script_with_apply_exit() {
        let handler = CommandHandler::default();
        let mut dialog = Dialog::new("t", None, false);
        let (outcome, out) = run(
            &handler,
            &mut dialog,
            r#"
            add checkbox "Fast mode" fast checked
            add textbox "Name:" who "Ada Lovelace"
            add combobox "Colour:" colour
            add item red
            add item green current
            end
            add pushbutton Ok ok apply exit default
            set text who "Grace Hopper"
            unset checked fast
            press ok
            add label "never reached"
            "#,
        );
        assert_eq!(outcome, Some(Outcome::Accepted));
        assert_eq!(out, "fast=0\nwho=Grace Hopper\ncolour=green\n");
    }

    #[test]
    fn test_cancel_and_query() {
        let handler = CommandHandler::default();
        let mut dialog = Dialog::new("t", None, false);
        let (outcome, out) = run(
            &handler,
            &mut dialog,
            "add slider volume minimum 0 maximum 10\nset value volume 7\nquery\nadd button Cancel cancel exit\npress cancel\n",
        );
        assert_eq!(outcome, Some(Outcome::Rejected));
        assert_eq!(out, "volume=7\n");
    }

    #[test]
    fn test_structure_commands() {
        let handler = CommandHandler::default();
        let mut dialog = Dialog::new("t", None, false);
        let (outcome, _) = run(
            &handler,
            &mut dialog,
            "add groupbox Options opts\nadd checkbox A a\nend group\nadd tabs tabs\nadd page One one\nadd checkbox B b\nend page\nend tabs\nstep horizontal\nremove a\nposition b behind\nadd checkbox C c\nhide c\n",
        );
        assert_eq!(outcome, None);
        // positioning on a tab page re-targets its tab widget
        let tabs = dialog.find_widget("tabs").unwrap();
        assert_eq!(dialog.cursor().tabs.map(|t| t.widget), Some(tabs));

        let b = dialog.find_widget("b").unwrap();
        let c = dialog.find_widget("c").unwrap();
        assert_eq!(dialog.tree().parent(b), dialog.tree().parent(c));
        assert!(!dialog.tree().widget(c).unwrap().visible);
        assert_eq!(dialog.find_widget("a"), None);

        run(&handler, &mut dialog, "clear\n");
        assert_eq!(dialog.find_widget("opts"), None);
        assert_eq!(dialog.pages().len(), 1);
    }

    #[test]
    fn test_json_report() {
        let handler = CommandHandler::new(ReportFormat::Json);
        let mut dialog = Dialog::new("t", None, false);
        let (_, out) = run(&handler, &mut dialog, "add checkbox A a checked\nquery\n");
        assert_eq!(out, "[{\"name\":\"a\",\"value\":\"1\"}]\n");
    }

    #[test]
    fn test_calendar_query_reports_clamped_date() {
        let handler = CommandHandler::default();
        let mut dialog = Dialog::new("t", None, false);
        let (_, out) = run(
            &handler,
            &mut dialog,
            "add calendar cal 2024-13-40 minimum 2030-01-01\nquery\nset maximum cal 2029-06-01\nquery\n",
        );
        assert_eq!(out, "cal=2030-01-01\ncal=2029-06-01\n");
    }

    #[test]
    fn test_disabled_button_does_nothing() {
        let handler = CommandHandler::default();
        let mut dialog = Dialog::new("t", None, false);
        let (outcome, out) = run(
            &handler,
            &mut dialog,
            "add button Ok ok apply exit\ndisable ok\npress ok\n",
        );
        assert_eq!(outcome, None);
        assert!(out.is_empty());
    }
}
