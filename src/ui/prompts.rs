use anyhow::Result;
use dialoguer::{Input, Select};

/// Yes/No toggle answered with the arrow keys
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let choice = Select::new()
        .with_prompt(prompt)
        .items(&["Yes", "No"])
        .default(if default_yes { 0 } else { 1 })
        .interact()?;

    Ok(choice == 0)
}

/// Path or text entry; an empty answer takes `default` when one is offered
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<String> {
    let input = Input::<String>::new().with_prompt(prompt);
    let input = match default {
        Some(value) => input.default(value.to_string()),
        None => input,
    };

    Ok(input.interact_text()?)
}
