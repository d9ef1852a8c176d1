//! Console banners around the run.
//!
//! The setup banner echoes the validated configuration the way the
//! engine-side global setup always has; the launch banner echoes the
//! exact command handed to the shell, so a failing invocation can be
//! replayed by hand.

use colored::Colorize;
use rust_i18n::t;

use crate::core::settings::Settings;

/// Draws a single-line box around `lines`, with `title` above it.
///
/// The box grows to the longest line, the title, or `min_width`,
/// whichever wins.
pub fn create_box(title: &str, lines: &[String], min_width: usize) -> String {
    let mut result: Vec<String> = Vec::new();

    let max_line_length = lines
        .iter()
        .map(|line| line.chars().count())
        .chain([title.chars().count() + 2, min_width.saturating_sub(4)])
        .max()
        .unwrap_or(0);

    let box_width = max_line_length + 4;

    result.push(format!("\n{title}:"));
    result.push(format!("   ┌{}┐", "─".repeat(box_width - 2)));

    for line in lines {
        let padding = " ".repeat(box_width - line.chars().count() - 4);
        result.push(format!("   │ {line}{padding} │"));
    }
    result.push(format!("   └{}┘\n", "─".repeat(box_width - 2)));

    result.join("\n")
}

/// Prints the "global test setup" banner with the boxed configuration of
/// the resolved environment.
pub fn print_setup_banner(settings: &Settings) {
    let header_line = "=".repeat(60);
    println!("\n🔧 {header_line}");
    println!("🔧  {}", t!("setup_banner_title").bold());
    println!("🔧 {header_line}");

    let lines = vec![
        format!("Env:  {}", settings.environment),
        format!("Url:  {}", settings.portal_url),
        format!("Api:  {}", settings.api_url),
    ];
    println!(
        "{}",
        create_box(&format!("📋 {}", t!("setup_box_title")), &lines, 60)
    );
}

/// Echoes the compiled command right before it is executed.
pub fn print_launch_banner(command: &str) {
    println!("\n🚀 {}", t!("launching_tests").bold());
    println!("🔧 {}\n", command.cyan());
}
