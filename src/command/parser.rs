//! Command line parser
//!
//! Turns one line of input into a [`Command`]. Lines that are blank,
//! comments, unknown or short of required arguments yield `None` and are
//! logged; the caller simply moves on to the next line.

use std::collections::HashMap;
use std::path::PathBuf;

use super::ast::{AddCommand, Command, EndKind, Property};
use super::lexer::{tokenize, Token};
use crate::dialog::options::{
    CalendarOptions, ChartOptions, CheckBoxOptions, ComboBoxOptions, FrameOptions,
    GroupBoxOptions, ItemOptions, LabelOptions, ListBoxOptions, PageOptions, ProgressBarOptions,
    PushButtonOptions, RadioButtonOptions, SeparatorOptions, SliderOptions, TableOptions,
    TabsOptions, TextBoxOptions, TextViewOptions,
};
use crate::dialog::widget::{FrameShadow, FrameShape, LabelContent, TabPosition};

/// Parse a single command line
pub fn parse_line(line: &str) -> Option<Command> {
    let mut tokens = tokenize(line).into_iter();
    let verb = match tokens.next()? {
        Token::Word(w) if w.starts_with('#') => return None,
        tok => tok.into_string().to_ascii_lowercase(),
    };
    let args: Vec<Token> = tokens.collect();

    let command = match verb.as_str() {
        "add" => parse_add(args),
        "set" => parse_set(args),
        "unset" => parse_unset(args),
        "end" => parse_end(&args),
        "step" => Some(Command::Step {
            vertical: args.first().is_some_and(|t| t.is_keyword("vertical")),
        }),
        "clear" => Some(Command::Clear(first_string(args))),
        "remove" => first_string(args).map(Command::Remove),
        "position" => parse_position(args),
        "show" => Some(Command::Show(first_string(args))),
        "hide" => Some(Command::Hide(first_string(args))),
        "enable" => Some(Command::Enable(first_string(args))),
        "disable" => Some(Command::Disable(first_string(args))),
        "query" => Some(Command::Query),
        "press" => first_string(args).map(Command::Press),
        _ => {
            crate::log!("parse_line: unknown command '{}'", verb);
            return None;
        }
    };

    if command.is_none() {
        crate::log!("parse_line: not enough arguments in '{}'", line.trim());
    }
    command
}

fn first_string(args: Vec<Token>) -> Option<String> {
    args.into_iter().next().map(Token::into_string)
}

/// `set <property> <name> [value]`
fn parse_set(args: Vec<Token>) -> Option<Command> {
    let mut iter = args.into_iter();
    let property = property(iter.next()?)?;
    let name = iter.next()?.into_string();
    let value = iter.next().map(Token::into_string);
    Some(Command::Set {
        property,
        name,
        value,
    })
}

/// `unset <property> <name>`
fn parse_unset(args: Vec<Token>) -> Option<Command> {
    let mut iter = args.into_iter();
    let property = property(iter.next()?)?;
    let name = iter.next()?.into_string();
    Some(Command::Unset { property, name })
}

fn property(token: Token) -> Option<Property> {
    let property = Property::from_keyword(token.as_str());
    if property.is_none() {
        crate::log!("parse_line: unknown property '{}'", token.as_str());
    }
    property
}

fn parse_end(args: &[Token]) -> Option<Command> {
    match args.first() {
        None => Some(Command::End(None)),
        Some(tok) => match EndKind::from_keyword(tok.as_str()) {
            Some(kind) => Some(Command::End(Some(kind))),
            None => {
                crate::log!("parse_line: cannot end '{}'", tok.as_str());
                None
            }
        },
    }
}

/// `position [behind] [onto] <name>`, flags in any order
fn parse_position(args: Vec<Token>) -> Option<Command> {
    let mut behind = false;
    let mut onto = false;
    let mut name = None;
    for tok in args {
        if tok.is_keyword("behind") {
            behind = true;
        } else if tok.is_keyword("onto") {
            onto = true;
        } else if name.is_none() {
            name = Some(tok.into_string());
        }
    }
    Some(Command::Position {
        name: name?,
        behind,
        onto,
    })
}

/// Arguments of an `add`, split into positionals, flags and keyed values
struct AddArgs {
    positionals: Vec<String>,
    flags: Vec<String>,
    values: HashMap<String, String>,
}

impl AddArgs {
    fn split(args: Vec<Token>, flags: &[&str], keyed: &[&str]) -> Self {
        let mut out = AddArgs {
            positionals: Vec::new(),
            flags: Vec::new(),
            values: HashMap::new(),
        };

        let mut iter = args.into_iter();
        while let Some(tok) = iter.next() {
            if let Some(key) = keyed.iter().find(|k| tok.is_keyword(k)) {
                if let Some(value) = iter.next() {
                    out.values.insert(key.to_string(), value.into_string());
                    continue;
                }
            }
            if let Some(flag) = flags.iter().find(|f| tok.is_keyword(f)) {
                out.flags.push(flag.to_string());
                continue;
            }
            out.positionals.push(tok.into_string());
        }
        out
    }

    fn pos(&self, index: usize) -> String {
        self.positionals.get(index).cloned().unwrap_or_default()
    }

    fn has(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn number(&self, key: &str) -> Option<i32> {
        self.values.get(key).and_then(|v| v.parse().ok())
    }

    fn shadow(&self) -> FrameShadow {
        if self.has("plain") {
            FrameShadow::Plain
        } else if self.has("raised") {
            FrameShadow::Raised
        } else {
            FrameShadow::Sunken
        }
    }
}

const SHADOWS: [&str; 3] = ["plain", "raised", "sunken"];

fn parse_add(mut args: Vec<Token>) -> Option<Command> {
    if args.is_empty() {
        return None;
    }
    let kind = args.remove(0).into_string().to_ascii_lowercase();

    let add = match kind.as_str() {
        "pushbutton" | "button" => {
            let a = AddArgs::split(
                args,
                &["apply", "exit", "default", "checkable", "checked"],
                &["icon"],
            );
            AddCommand::PushButton(PushButtonOptions {
                title: a.pos(0),
                name: a.pos(1),
                icon: a.value("icon"),
                apply: a.has("apply"),
                exit: a.has("exit"),
                default: a.has("default"),
                checkable: a.has("checkable"),
                checked: a.has("checked"),
            })
        }
        "checkbox" => {
            let a = AddArgs::split(args, &["checked"], &[]);
            AddCommand::CheckBox(CheckBoxOptions {
                title: a.pos(0),
                name: a.pos(1),
                checked: a.has("checked"),
            })
        }
        "radiobutton" | "radio" => {
            let a = AddArgs::split(args, &["checked"], &[]);
            AddCommand::RadioButton(RadioButtonOptions {
                title: a.pos(0),
                name: a.pos(1),
                checked: a.has("checked"),
            })
        }
        "label" => {
            let a = AddArgs::split(args, &["picture", "animation"], &[]);
            let content = if a.has("picture") {
                LabelContent::Picture
            } else if a.has("animation") {
                LabelContent::Animation
            } else {
                LabelContent::Text
            };
            AddCommand::Label(LabelOptions {
                title: a.pos(0),
                name: a.pos(1),
                content,
            })
        }
        "groupbox" | "group" => {
            let a = AddArgs::split(args, &["horizontal", "vertical", "checkable", "checked"], &[]);
            AddCommand::GroupBox(GroupBoxOptions {
                title: a.pos(0),
                name: a.pos(1),
                horizontal: a.has("horizontal"),
                checkable: a.has("checkable") || a.has("checked"),
                checked: a.has("checked"),
            })
        }
        "frame" => {
            let mut flags = vec![
                "horizontal",
                "vertical",
                "noframe",
                "box",
                "panel",
                "styled",
            ];
            flags.extend(SHADOWS);
            let a = AddArgs::split(args, &flags, &[]);
            let shape = if a.has("noframe") {
                FrameShape::NoFrame
            } else if a.has("panel") {
                FrameShape::Panel
            } else if a.has("styled") {
                FrameShape::StyledPanel
            } else {
                FrameShape::Box
            };
            AddCommand::Frame(FrameOptions {
                name: a.pos(0),
                horizontal: a.has("horizontal"),
                shape,
                shadow: a.shadow(),
            })
        }
        "textbox" => {
            let a = AddArgs::split(args, &["password"], &["text", "placeholder"]);
            AddCommand::TextBox(TextBoxOptions {
                title: a.pos(0),
                name: a.pos(1),
                text: a.value("text").unwrap_or_else(|| a.pos(2)),
                placeholder: a.value("placeholder").unwrap_or_else(|| a.pos(3)),
                password: a.has("password"),
            })
        }
        "listbox" | "list" => {
            let a = AddArgs::split(args, &["activation", "selection"], &[]);
            AddCommand::ListBox(ListBoxOptions {
                title: a.pos(0),
                name: a.pos(1),
                activation: a.has("activation"),
                selection: a.has("selection"),
            })
        }
        "combobox" | "combo" => {
            let a = AddArgs::split(args, &["editable", "selection"], &[]);
            AddCommand::ComboBox(ComboBoxOptions {
                title: a.pos(0),
                name: a.pos(1),
                editable: a.has("editable"),
                selection: a.has("selection"),
            })
        }
        "item" => {
            let a = AddArgs::split(args, &["current"], &["icon"]);
            AddCommand::Item(ItemOptions {
                title: a.pos(0),
                icon: a.value("icon").or_else(|| a.positionals.get(1).cloned()),
                current: a.has("current"),
            })
        }
        "separator" => {
            let mut flags = vec!["vertical", "horizontal"];
            flags.extend(SHADOWS);
            let a = AddArgs::split(args, &flags, &[]);
            AddCommand::Separator(SeparatorOptions {
                name: a.pos(0),
                vertical: a.has("vertical"),
                shadow: a.shadow(),
            })
        }
        "progressbar" | "progress" => {
            let a = AddArgs::split(args, &["vertical", "horizontal", "busy"], &[]);
            AddCommand::ProgressBar(ProgressBarOptions {
                name: a.pos(0),
                vertical: a.has("vertical"),
                busy: a.has("busy"),
            })
        }
        "slider" => {
            let a = AddArgs::split(args, &["vertical", "horizontal"], &["minimum", "maximum"]);
            let defaults = SliderOptions::default();
            AddCommand::Slider(SliderOptions {
                name: a.pos(0),
                vertical: a.has("vertical"),
                min: a.number("minimum").unwrap_or(defaults.min),
                max: a.number("maximum").unwrap_or(defaults.max),
            })
        }
        "textview" => {
            let a = AddArgs::split(args, &[], &[]);
            AddCommand::TextView(TextViewOptions {
                name: a.pos(0),
                file: a.positionals.get(1).map(PathBuf::from),
            })
        }
        "tabs" => {
            let a = AddArgs::split(args, &["top", "bottom", "left", "right"], &[]);
            let position = if a.has("bottom") {
                TabPosition::Bottom
            } else if a.has("left") {
                TabPosition::Left
            } else if a.has("right") {
                TabPosition::Right
            } else {
                TabPosition::Top
            };
            AddCommand::Tabs(TabsOptions {
                name: a.pos(0),
                position,
            })
        }
        "page" => {
            let a = AddArgs::split(args, &["current"], &["icon"]);
            AddCommand::Page(PageOptions {
                title: a.pos(0),
                name: a.pos(1),
                icon: a.value("icon").or_else(|| a.positionals.get(2).cloned()),
                current: a.has("current"),
            })
        }
        "calendar" => {
            let a = AddArgs::split(args, &["selection"], &["date", "minimum", "maximum"]);
            AddCommand::Calendar(CalendarOptions {
                name: a.pos(0),
                date: a.value("date").or_else(|| a.positionals.get(1).cloned()),
                min: a.value("minimum"),
                max: a.value("maximum"),
                selection: a.has("selection"),
            })
        }
        "table" => {
            let a = AddArgs::split(args, &["readonly", "selection", "search"], &["file"]);
            AddCommand::Table(TableOptions {
                headers: a.pos(0),
                name: a.pos(1),
                file: a
                    .value("file")
                    .or_else(|| a.positionals.get(2).cloned())
                    .map(PathBuf::from),
                readonly: a.has("readonly"),
                selection: a.has("selection"),
                search: a.has("search"),
            })
        }
        "chart" => {
            let a = AddArgs::split(args, &[], &[]);
            AddCommand::Chart(ChartOptions {
                title: a.pos(0),
                name: a.pos(1),
            })
        }
        _ => {
            crate::log!("parse_add: unknown widget kind '{}'", kind);
            return None;
        }
    };

    Some(Command::Add(add))
}
