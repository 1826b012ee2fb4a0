//! Shell state, command dispatch, and error reporting.

use std::io;

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    errors::{ConfigError, ExpenseError, StorageError},
    expense::ExpenseRecord,
    storage::{JsonStorage, KeyValueBackend},
    store::{ChangeEvent, ExpenseStore},
    utils,
};

use super::commands;
use super::io as cli_io;
use super::output::{self, OutputPreferences};

/// Store type driven by the shell; boxed so tests can swap in a memory backend.
pub type ShellStore = ExpenseStore<Box<dyn KeyValueBackend>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Failures that abort the shell.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Failures of a single command; reported and the shell keeps running.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Expense(#[from] ExpenseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type CommandResult = Result<(), CommandError>;

/// Names accepted by [`ShellContext::dispatch`].
pub const COMMAND_NAMES: [&str; 8] = [
    "add", "config", "delete", "exit", "help", "list", "quit", "remove",
];

pub struct ShellContext {
    pub mode: CliMode,
    pub config: Config,
    /// Where `config` changes are saved; `None` keeps them for this session only.
    pub config_manager: Option<ConfigManager>,
    pub store: ShellStore,
    pub running: bool,
}

impl ShellContext {
    /// Loads configuration and stored expenses from the application data directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let home = utils::app_data_dir();
        let manager = ConfigManager::with_base_dir(&home)?;
        let config = manager.load()?;
        let storage = JsonStorage::new(config.resolve_storage_root(&home))?;
        tracing::debug!(root = %storage.base_dir().display(), "opening expense storage");
        let backend: Box<dyn KeyValueBackend> = Box::new(storage);
        let mut context = Self::with_store(mode, config, ExpenseStore::initialize(backend));
        context.config_manager = Some(manager);
        Ok(context)
    }

    pub fn with_store(mode: CliMode, config: Config, mut store: ShellStore) -> Self {
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });
        store.subscribe(|event: &ChangeEvent, _: &[ExpenseRecord]| {
            if !event.persisted {
                output::warning("Changes could not be saved and will be lost when the shell exits.");
            }
        });
        Self {
            mode,
            config,
            config_manager: None,
            store,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        format!("expenses ({})> ", self.store.len())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match command {
            "list" => commands::list(self, args)?,
            "add" => commands::add(self, args)?,
            "remove" | "delete" => commands::remove(self, args)?,
            "config" => commands::config(self, args)?,
            "help" => commands::help(self, args)?,
            "exit" | "quit" => return Ok(LoopControl::Exit),
            _ => self.suggest_command(raw),
        }
        Ok(LoopControl::Continue)
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        if let Some(manager) = &self.config_manager {
            manager.save(&self.config)?;
            tracing::debug!(path = %manager.path().display(), "saved configuration");
        }
        Ok(())
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = COMMAND_NAMES
            .iter()
            .map(|name| (levenshtein(name, &needle), *name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action("Exit shell?")?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::info("Use `help` for usage details.");
                Ok(())
            }
            CommandError::Io(err) => Err(CliError::Io(err)),
            other => {
                output::error(other);
                Ok(())
            }
        }
    }
}

/// Script-mode context over an in-memory backend with color disabled.
#[cfg(test)]
pub(crate) fn script_context() -> ShellContext {
    let config = Config {
        ui_color_enabled: false,
        ..Config::default()
    };
    let backend: Box<dyn KeyValueBackend> = Box::new(crate::storage::MemoryStorage::new());
    ShellContext::with_store(CliMode::Script, config, ExpenseStore::initialize(backend))
}
