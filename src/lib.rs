//! # Suite Runner Library / Suite Runner 库
//!
//! This library provides the core functionality of suite-runner, a
//! command-driven orchestrator for browser end-to-end test suites: it
//! resolves a run configuration from flags or prompts, compiles it into
//! a test-engine invocation, executes it, and records per-test outcomes
//! into a plain-text report.
//!
//! 此库提供 suite-runner 的核心功能。suite-runner 是一个命令驱动的浏览器
//! 端到端测试套件编排器：它从命令行标志或交互式提示解析运行配置，将其
//! 编译为测试引擎调用，执行该调用，并把每个测试的结果记录到纯文本报告中。
//!
//! ## Modules / 模块
//!
//! - `core` - Run data model, option resolution, command compilation,
//!   settings validation
//! - `infra` - Infrastructure services: process execution, file system
//!   helpers
//! - `reporting` - Result recording and console banners
//! - `harness` - Test-harness utilities: translations, steps, polling
//! - `cli` - Command-line interface and dispatch
//!
//! - `core` - 运行数据模型、选项解析、命令编译、设置校验
//! - `infra` - 基础设施服务：进程执行、文件系统辅助
//! - `reporting` - 结果记录和控制台横幅
//! - `harness` - 测试装备工具：翻译、步骤、轮询
//! - `cli` - 命令行接口和调度

pub mod cli;
pub mod core;
pub mod error;
pub mod harness;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use self::core::command;
pub use self::core::models;
pub use self::core::options;
pub use self::core::settings;
pub use self::error::{Error, Result};
pub use self::reporting::recorder::Recorder;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
