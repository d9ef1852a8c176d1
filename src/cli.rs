// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use rust_i18n::t;
use std::env;

use crate::core::options::{self, CliArgs};
use crate::core::settings::SettingsCell;
use crate::core::command;
use crate::infra::process;
use crate::reporting::console;
use crate::reporting::recorder::Recorder;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("suite-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("arg_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("cli")
                .short('c')
                .long("cli")
                .help(t!("arg_cli", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("env")
                .short('e')
                .long("env")
                .help(t!("arg_env", locale = locale).to_string())
                .value_name("ENV")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("projects")
                .short('p')
                .long("projects")
                .help(t!("arg_projects", locale = locale).to_string())
                .value_name("PROJECTS")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("tags")
                .short('t')
                .long("tags")
                .help(t!("arg_tags", locale = locale).to_string())
                .value_name("TAGS")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("record-events")
                .long("record-events")
                .help(t!("arg_record_events", locale = locale).to_string())
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["cli", "env", "projects", "tags", "print-setup"]),
        )
        .arg(
            Arg::new("print-setup")
                .long("print-setup")
                .help(t!("arg_print_setup", locale = locale).to_string())
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["cli", "env", "projects", "tags"]),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    // Engine-side entry points: the event bridge and the setup banner.
    // Both run inside the reporting/setup process, not the orchestrator.
    if matches.get_flag("record-events") {
        let recorder = Recorder::new();
        let recorded = recorder.record_events(std::io::stdin().lock())?;
        println!(
            "{}",
            t!(
                "record_done",
                count = recorded,
                path = recorder.output_file().display()
            )
        );
        return Ok(());
    }

    if matches.get_flag("print-setup") {
        let settings = SettingsCell::new();
        console::print_setup_banner(settings.get()?);
        return Ok(());
    }

    let args = CliArgs {
        cli: matches.get_flag("cli"),
        env: matches.get_one::<String>("env").cloned(),
        projects: matches.get_one::<String>("projects").cloned(),
        tags: matches.get_one::<String>("tags").cloned(),
    };

    let run_options = options::resolve(&args)?;
    let compiled = command::compile(&run_options);

    console::print_launch_banner(&compiled);
    process::execute(&compiled).await?;

    Ok(())
}
