use eyre::{eyre, Context, Result};

/// Prompt the user to choose one of `items`, returning its index.
///
/// The first item is highlighted initially. Escaping the prompt is an error so the caller never
/// proceeds with a guess.
pub fn user_select<S: ToString>(prompt: &str, items: &[S]) -> Result<usize> {
    let selection = dialoguer::Select::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(items)
        .interact_opt()
        .wrap_err_with(|| eyre!("User selection cancelled"))?;

    selection.ok_or_else(|| eyre!("No selection made - cancelling operation"))
}
