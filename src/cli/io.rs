use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::context::CommandError;

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(prompt: &str) -> Result<bool, CommandError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt the user for free-form text input, optionally accepting an empty answer.
pub fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String, CommandError> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(CommandError::from)
}

/// Prompt the user to pick one of `items`, returning the chosen position.
pub fn prompt_choice(
    prompt: &str,
    items: &[String],
    default: Option<usize>,
) -> Result<usize, CommandError> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(default.unwrap_or(0))
        .interact()
        .map_err(CommandError::from)
}
