//! Showbox - scriptable dialog construction
//!
//! Commands read line by line build and mutate a dialog's widget tree. The
//! binary in main.rs wires stdin to the engine; the library exposes every
//! layer so the engine can be driven and tested directly.

// Include the log module first so the log! macro is visible everywhere
#[macro_use]
pub mod log;

pub mod application;
pub mod command;
pub mod dialog;
pub mod domain;
pub mod shared;
