//! Option resolution: CLI flags or the interactive prompt sequence.
//!
//! Exactly one source is used per invocation. The `--cli` switch selects
//! flag mode, where the environment is mandatory and the execution mode is
//! fixed to headless; without it the resolver drives the four interactive
//! prompts. Either way the result is a fully validated `RunOptions`.

use std::str::FromStr;

use crate::core::models::{Environment, Mode, Project, RunOptions, TestTag};
use crate::core::prompts;
use crate::error::Result;

/// Raw values gathered from the command line, before validation.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// `--cli` switch: use flag mode instead of the prompts.
    pub cli: bool,
    pub env: Option<String>,
    pub projects: Option<String>,
    pub tags: Option<String>,
}

/// Produces the complete run configuration for this invocation.
///
/// Flag mode validates every value case-sensitively against its
/// enumeration and fails with `Error::InvalidConfiguration` before any
/// command is compiled. Interactive mode blocks on each prompt; the
/// choice sets are the full enumerations, so no validation is needed
/// afterwards.
pub fn resolve(args: &CliArgs) -> Result<RunOptions> {
    if args.cli {
        resolve_from_flags(args)
    } else {
        prompts::prompt_all_options()
    }
}

fn resolve_from_flags(args: &CliArgs) -> Result<RunOptions> {
    let environment = Environment::from_str(args.env.as_deref().unwrap_or(""))?;

    let projects = parse_list(args.projects.as_deref(), Project::from_str)?;
    let tags = parse_list(args.tags.as_deref(), TestTag::from_str)?;

    Ok(RunOptions {
        environment,
        // Flag mode always runs headless; the UI runner only makes sense
        // on an interactive terminal.
        mode: Mode::Headless,
        projects,
        tags,
    })
}

/// Splits a comma-separated flag value, trims each entry, and parses the
/// survivors. A missing or blank flag yields an empty list (engine
/// defaults for projects, no filter for tags).
fn parse_list<T>(raw: Option<&str>, parse: fn(&str) -> Result<T>) -> Result<Vec<T>> {
    raw.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse)
        .collect()
}
