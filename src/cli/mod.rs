//! CLI module - command-line interface
//!
//! Contains argument parsing, the confirmation gate, output formatting and
//! the command dispatcher.

pub mod args;
pub mod commands;
pub mod confirm;
pub mod output;

pub use args::{error_report, usage_outcome, usage_text, Cli, CloseArgs, Options, Verb};
pub use commands::{Dispatcher, Outcome};
pub use confirm::{ConfirmationGate, Console, Decision};
