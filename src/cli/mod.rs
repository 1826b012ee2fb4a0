//! Terminal front end: a small shell over the expense store.

pub mod commands;
pub mod context;
pub mod io;
pub mod output;
pub mod render;
pub mod shell;

pub use context::{CliError, CliMode, CommandError, ShellContext};
pub use shell::run_cli;
