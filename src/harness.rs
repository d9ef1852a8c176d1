//! # Harness Module / 测试装备模块
//!
//! Support utilities for the test-harness side of the system: typed
//! translation maps with a deterministic fallback, the named-step
//! wrapper, and the bounded polling loop page objects build on.
//!
//! 系统测试装备侧的支持工具：带确定性回退的类型化翻译映射、具名步骤
//! 包装器，以及页面对象所依赖的有界轮询循环。

pub mod language;
pub mod poll;
pub mod steps;

pub use language::{Language, LanguageContext, Translation};
pub use poll::wait_until;
pub use steps::{format_step_name, step};
