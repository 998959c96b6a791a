//! Showbox - build dialogs from a shell script
//!
//! Commands are read from stdin, one per line. The dialog lives on the main
//! thread; a reader thread parses input and hands every command over,
//! waiting for it to finish before reading on. Exit status: 0 accepted,
//! 1 rejected or input ended, 2 bad arguments or configuration.

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::thread;

use showbox::application::{CommandHandler, GuiExecutor, GuiHandle};
use showbox::command::parse_line;
use showbox::dialog::{Dialog, Outcome};
use showbox::domain::Result;
use showbox::shared::config::{config_path_from_args, ShowboxConfig};
use showbox::{log, log_fn};

const EXIT_ACCEPTED: u8 = 0;
const EXIT_REJECTED: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("showbox: {}", e);
            eprintln!(
                "usage: showbox [--config PATH] [--title T] [--about T] [--resizable] [--json] [--log PATH]"
            );
            return ExitCode::from(EXIT_USAGE);
        }
    };

    if let Some(path) = config.log_path() {
        showbox::log::init(&path);
    }
    log!("main() starting with {:?}", config);

    let dialog = Dialog::new(
        &config.dialog.title,
        config.dialog.about.as_deref(),
        config.dialog.resizable,
    );
    let (executor, handle) = GuiExecutor::new(dialog);
    let handler = CommandHandler::new(config.output.format);

    let reader = thread::spawn(move || read_commands(handle, handler));
    executor.run();

    let outcome = reader.join().unwrap_or_else(|_| {
        log!("Reader thread panicked");
        None
    });
    log!("Finished with {:?}", outcome);
    showbox::log::shutdown();

    ExitCode::from(match outcome {
        Some(Outcome::Accepted) => EXIT_ACCEPTED,
        Some(Outcome::Rejected) | None => EXIT_REJECTED,
    })
}

/// `--config PATH` first, then the standard locations; flags override the file
fn load_config(args: &[String]) -> Result<ShowboxConfig> {
    let config = match config_path_from_args(args) {
        Some(path) => ShowboxConfig::load_from_path(&path)?,
        None => ShowboxConfig::load(),
    };
    config.with_args(args)
}

/// Reader loop: parse stdin line by line and run each command on the GUI
/// thread until a command closes the dialog or input ends
fn read_commands(handle: GuiHandle, handler: CommandHandler) -> Option<Outcome> {
    log_fn!("read_commands");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log!("Failed to read stdin: {}", e);
                break;
            }
        };
        let Some(command) = parse_line(&line) else {
            continue;
        };

        let outcome = handle.execute_on_gui(move |dialog| {
            handler.handle(dialog, command, &mut io::stdout().lock())
        })?;
        if outcome.is_some() {
            return outcome;
        }
    }
    log!("Input ended without a decision");
    None
}
