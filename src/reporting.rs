//! # Reporting Module / 报告模块
//!
//! This module handles everything the runner shows or persists about a
//! run: the plain-text result recorder and the console banners.
//!
//! 此模块处理运行器展示或持久化的关于一次运行的所有内容：
//! 纯文本结果记录器和控制台横幅。

pub mod console;
pub mod recorder;

// Re-export common reporting items
pub use recorder::{Recorder, TestEvent, TestStatus};
