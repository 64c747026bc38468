//! Terminal prompts backed by dialoguer.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::{CradleError, Result};

use super::{Prompt, PromptOption, PromptResult, PromptType};

/// Ask `prompt` on `term` and return the answer.
///
/// A select prompt answers with the chosen option's value, not its label.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let theme = ColorfulTheme {
        prompt_prefix: style(String::new()),
        ..ColorfulTheme::default()
    };

    let answer = match &prompt.prompt_type {
        PromptType::Input => {
            let mut input = Input::<String>::with_theme(&theme)
                .with_prompt(&prompt.question)
                .allow_empty(true);
            if let Some(default) = &prompt.default {
                input = input.default(default.clone());
            }
            input.interact_text_on(term)
        }
        PromptType::Select { options } => {
            let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
            Select::with_theme(&theme)
                .with_prompt(&prompt.question)
                .items(&labels)
                .default(default_index(options, prompt.default.as_deref()))
                .interact_on(term)
                .map(|index| options[index].value.clone())
        }
    };

    answer
        .map(PromptResult)
        .map_err(|e| CradleError::Io(e.into()))
}

/// Position of the option whose value is `default`, or the first option.
fn default_index(options: &[PromptOption], default: Option<&str>) -> usize {
    default
        .and_then(|d| options.iter().position(|o| o.value == d))
        .unwrap_or(0)
}
