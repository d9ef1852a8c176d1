//! # Core Module / 核心模块
//!
//! This module contains the core functionality of suite-runner:
//! the run data model, option resolution, command compilation, and
//! settings validation.
//!
//! 此模块包含 suite-runner 的核心功能：
//! 运行数据模型、选项解析、命令编译和设置校验。

pub mod command;
pub mod models;
pub mod options;
pub mod prompts;
pub mod settings;

// Re-exports
pub use command::compile;
pub use models::RunOptions;
pub use settings::{Settings, SettingsCell};
