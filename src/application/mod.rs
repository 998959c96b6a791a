//! Application Layer - Command dispatch and thread marshalling
//!
//! - **CommandHandler**: maps parsed commands onto dialog operations
//! - **Executor**: keeps the dialog on its owning thread and runs work
//!   handed over from the input reader

pub mod command_handler;
pub mod executor;

pub use command_handler::CommandHandler;
pub use executor::{GuiExecutor, GuiHandle};
