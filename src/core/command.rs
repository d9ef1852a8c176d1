//! Command compilation: `RunOptions` → the engine invocation string.
//!
//! `compile` is a pure function with a fixed token order. Every clause is
//! appended only when its data is non-empty, so an empty project list or
//! tag set leaves no trace in the compiled command.
//!
//! 命令编译：将 `RunOptions` 编译为引擎调用字符串。
//! `compile` 是一个纯函数，token 顺序固定。每个子句仅在其数据非空时追加，
//! 因此空的项目列表或标签集合不会在编译出的命令中留下任何痕迹。

use std::fmt::Write;

use crate::core::models::{Mode, RunOptions};

/// Environment variable carrying the chosen environment into the engine
/// process and everything it spawns.
pub const ENV_VAR: &str = "ENV";

/// Base invocation of the underlying test engine, including its
/// configuration file reference.
pub const ENGINE_INVOCATION: &str = "npx playwright test --config=playwright.config.ts";

/// Compiles a validated run configuration into a single shell command.
///
/// Token order:
/// 1. `ENV=<environment>` assignment prefix
/// 2. the engine invocation with its config file
/// 3. `--ui` when the mode is interactive
/// 4. one `--project=<name>` per target project, in the order supplied
/// 5. `--grep="tag1|tag2"` when tag filters are present, join order
///    preserved
///
/// Deterministic and side-effect free: equal options always compile to an
/// identical string.
pub fn compile(options: &RunOptions) -> String {
    let mut command = format!(
        "{}={} {}",
        ENV_VAR, options.environment, ENGINE_INVOCATION
    );

    if options.mode == Mode::Ui {
        command.push_str(" --ui");
    }

    for project in &options.projects {
        // Repeatable flag semantics: one flag per project, never a
        // combined value.
        let _ = write!(command, " --project={project}");
    }

    if !options.tags.is_empty() {
        let expression = options
            .tags
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join("|");
        let _ = write!(command, " --grep=\"{expression}\"");
    }

    command
}
