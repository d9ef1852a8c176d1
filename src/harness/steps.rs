//! Named-step wrapping for harness operations.
//!
//! An explicit higher-order wrapper instead of method decoration:
//! callers name the step, interpolate argument values into the name with
//! `format_step_name`, and hand the operation over. The wrapper logs the
//! step and its duration around the awaited operation.

use std::fmt::Display;
use std::future::Future;

use colored::Colorize;

use tokio::time::Instant;

/// Interpolates `{param}` placeholders in a step-name template from an
/// explicit list of (name, value) pairs. Placeholders without a matching
/// pair are left intact.
pub fn format_step_name(template: &str, values: &[(&str, &dyn Display)]) -> String {
    let mut name = template.to_string();
    for (param, value) in values {
        name = name.replace(&format!("{{{param}}}"), &value.to_string());
    }
    name
}

/// Runs `operation` as a named step, logging it and its duration.
pub async fn step<T>(name: &str, operation: impl Future<Output = T>) -> T {
    println!("{} {name}", "▸".blue());
    let start = Instant::now();
    let result = operation.await;
    println!("{}", format!("  {name} ({:.2?})", start.elapsed()).dimmed());
    result
}
