//! Handlers for the shell commands.

use crate::{
    errors::ExpenseError,
    expense::NamedEntity,
    presentation::ExpenseDraft,
};

use super::context::{CliMode, CommandError, CommandResult, ShellContext};
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::render::render_rows;

const ADD_USAGE: &str = "usage: add <name> <type> <amount>";
const REMOVE_USAGE: &str = "usage: remove <row> [row...]";
const CONFIG_USAGE: &str = "usage: config [currency <symbol> | color <on|off>]";

pub(crate) fn list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Expenses");
    if context.store.is_empty() {
        output::info("No expenses recorded.");
        return Ok(());
    }
    let color = output::preferences().color_enabled;
    for row in render_rows(
        context.store.snapshot(),
        &context.config.currency_symbol,
        color,
    ) {
        println!("{}", row);
    }
    Ok(())
}

pub(crate) fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = match args {
        [name, category, amount] => ExpenseDraft::new(*name, *category, *amount),
        _ if args.len() > 3 => return Err(CommandError::InvalidArguments(ADD_USAGE.into())),
        _ if context.mode == CliMode::Interactive => prompt_draft(context, args)?,
        _ => return Err(CommandError::InvalidArguments(ADD_USAGE.into())),
    };

    match draft.into_record() {
        Ok(record) => {
            let name = record.name().to_string();
            context.store.add(record);
            output::success(format!("Added `{}`.", name));
            Ok(())
        }
        Err(err @ ExpenseError::InvalidAmount(_)) => {
            output::warning(err);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(REMOVE_USAGE.into()));
    }
    let indices = args
        .iter()
        .map(|raw| parse_row(raw))
        .collect::<Result<Vec<_>, _>>()?;

    match context.store.remove_at(indices) {
        Ok(removed) => {
            let names: Vec<&str> = removed.iter().map(|record| record.name()).collect();
            output::success(format!(
                "Removed {} expense(s): {}",
                removed.len(),
                names.join(", ")
            ));
            Ok(())
        }
        Err(ExpenseError::IndexOutOfRange { index, len }) => {
            Err(CommandError::InvalidArguments(format!(
                "Row {} does not exist; there are {} expense(s).",
                index + 1,
                len
            )))
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) fn config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let config = &context.config;
            output::section("Settings");
            output::info(format!("currency  {}", config.currency_symbol));
            output::info(format!(
                "color     {}",
                if config.ui_color_enabled { "on" } else { "off" }
            ));
            output::info(format!("types     {}", config.categories.join(", ")));
            return Ok(());
        }
        ["currency", symbol] => context.config.currency_symbol = symbol.to_string(),
        ["color", "on"] => context.config.ui_color_enabled = true,
        ["color", "off"] => context.config.ui_color_enabled = false,
        _ => return Err(CommandError::InvalidArguments(CONFIG_USAGE.into())),
    }

    output::set_preferences(OutputPreferences {
        color_enabled: context.config.ui_color_enabled,
    });
    context.persist_config()?;
    output::success("Settings saved.");
    Ok(())
}

pub(crate) fn help(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Available commands");
    output::info("list                           Show all expenses");
    output::info("add <name> <type> <amount>     Record a new expense");
    output::info("remove <row> [row...]          Delete expenses by row number");
    output::info("config [<key> <value>]         Show or change currency/color settings");
    output::info("help                           Show this overview");
    output::info("exit                           Leave the shell");
    Ok(())
}

fn parse_row(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row - 1),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` is not a valid row number.",
            raw
        ))),
    }
}

fn prompt_draft(context: &ShellContext, args: &[&str]) -> Result<ExpenseDraft, CommandError> {
    let name = match args.first() {
        Some(name) => name.to_string(),
        None => cli_io::prompt_text("Name", true)?,
    };
    let category = match args.get(1) {
        Some(category) => category.to_string(),
        None if context.config.categories.is_empty() => cli_io::prompt_text("Type", true)?,
        None => {
            let choice = cli_io::prompt_choice(
                "Type",
                &context.config.categories,
                context.config.default_category_index(),
            )?;
            context.config.categories[choice].clone()
        }
    };
    let amount = cli_io::prompt_text("Amount", true)?;
    Ok(ExpenseDraft::new(name, category, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::context::script_context;
    use crate::config::{Config, ConfigManager};
    use crate::expense::Amounted;

    #[test]
    fn add_with_arguments_appends_record() {
        let mut context = script_context();
        add(&mut context, &["Coffee", "Personal", "4"]).expect("add");
        let snapshot = context.store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name(), "Coffee");
        assert_eq!(snapshot[0].amount(), 4);
    }

    #[test]
    fn add_with_bad_amount_leaves_store_alone() {
        let mut context = script_context();
        add(&mut context, &["Coffee", "Personal", "four"]).expect("warning only");
        assert!(context.store.is_empty());
        assert_eq!(context.store.revision(), 0);
    }

    #[test]
    fn add_without_arguments_in_script_mode_is_usage_error() {
        let mut context = script_context();
        let err = add(&mut context, &["Coffee"]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }

    #[test]
    fn remove_uses_one_based_rows_in_one_batch() {
        let mut context = script_context();
        for name in ["A", "B", "C", "D"] {
            add(&mut context, &[name, "Personal", "1"]).expect("add");
        }
        remove(&mut context, &["2", "4"]).expect("remove");
        let names: Vec<&str> = context.store.snapshot().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(context.store.revision(), 5);
    }

    #[test]
    fn remove_rejects_missing_and_invalid_rows() {
        let mut context = script_context();
        add(&mut context, &["A", "Personal", "1"]).expect("add");

        let err = remove(&mut context, &["3"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 3 does not exist; there are 1 expense(s)."
        );
        assert!(matches!(
            remove(&mut context, &["0"]),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(matches!(
            remove(&mut context, &[]),
            Err(CommandError::InvalidArguments(_))
        ));
        assert_eq!(context.store.len(), 1);
    }

    #[test]
    fn config_changes_are_saved_through_the_manager() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");
        let mut context = script_context();
        context.config_manager = Some(manager.clone());

        config(&mut context, &["currency", "€"]).expect("set currency");
        config(&mut context, &["color", "off"]).expect("set color");

        let saved = manager.load().expect("load");
        assert_eq!(saved.currency_symbol, "€");
        assert!(!saved.ui_color_enabled);
        assert_eq!(saved, context.config);
    }

    #[test]
    fn config_rejects_unknown_settings() {
        let mut context = script_context();
        let err = config(&mut context, &["color", "purple"]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
        assert!(!context.config.ui_color_enabled);
        assert_eq!(context.config.currency_symbol, Config::default().currency_symbol);
    }
}
