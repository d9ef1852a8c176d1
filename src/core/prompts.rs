//! The interactive prompt sequence.
//!
//! A strictly ordered run of four prompts: environment, execution mode,
//! projects, tags. Single-choice prompts are mandatory; the multi-choice
//! prompts accept zero or more selections. Every choice set is the full
//! enumeration of its domain, so free-text input never enters the
//! configuration.

use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};
use rust_i18n::t;

use crate::core::models::{Environment, Mode, Project, RunOptions, TestTag};
use crate::error::Result;

/// Drives all four prompts, in order, and assembles the run options.
/// Blocks awaiting user input at each step; no timeout is enforced here.
pub fn prompt_all_options() -> Result<RunOptions> {
    let theme = ColorfulTheme::default();

    let environment = prompt_environment(&theme)?;
    let mode = prompt_mode(&theme)?;
    let projects = prompt_projects(&theme)?;
    let tags = prompt_tags(&theme)?;

    Ok(RunOptions {
        environment,
        mode,
        projects,
        tags,
    })
}

fn prompt_environment(theme: &ColorfulTheme) -> Result<Environment> {
    let labels: Vec<&str> = Environment::ALL.iter().map(|env| env.as_str()).collect();
    let index = Select::with_theme(theme)
        .with_prompt(t!("prompt_env").to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Environment::ALL[index])
}

fn prompt_mode(theme: &ColorfulTheme) -> Result<Mode> {
    let labels: Vec<&str> = Mode::ALL.iter().map(|mode| mode.as_str()).collect();
    let index = Select::with_theme(theme)
        .with_prompt(t!("prompt_mode").to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Mode::ALL[index])
}

fn prompt_projects(theme: &ColorfulTheme) -> Result<Vec<Project>> {
    let labels: Vec<&str> = Project::ALL.iter().map(|project| project.as_str()).collect();
    let selection = MultiSelect::with_theme(theme)
        .with_prompt(t!("prompt_projects").to_string())
        .items(&labels)
        .interact()?;
    Ok(selection.into_iter().map(|i| Project::ALL[i]).collect())
}

fn prompt_tags(theme: &ColorfulTheme) -> Result<Vec<TestTag>> {
    let labels: Vec<&str> = TestTag::ALL.iter().map(|tag| tag.as_str()).collect();
    let selection = MultiSelect::with_theme(theme)
        .with_prompt(t!("prompt_tags").to_string())
        .items(&labels)
        .interact()?;
    Ok(selection.into_iter().map(|i| TestTag::ALL[i]).collect())
}
