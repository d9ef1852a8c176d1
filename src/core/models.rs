//! Data model for a single orchestration run.
//!
//! The enumerations here are the fixed vocabularies of the runner: the
//! deployment environments, the browser/device projects the engine can
//! target, the classification tags test cases carry, and the execution
//! mode. Parsing is case-sensitive exact-match; anything outside an
//! enumeration is rejected with `Error::InvalidConfiguration`.
//!
//! 单次编排运行的数据模型。
//! 这里的枚举是运行器的固定词汇表：部署环境、引擎可以定位的浏览器/设备
//! 项目、测试用例携带的分类标签以及执行模式。解析是大小写敏感的精确匹配；
//! 枚举之外的任何值都会以 `Error::InvalidConfiguration` 被拒绝。

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A named deployment target with its own URLs and timeouts.
/// 一个具名的部署目标，拥有自己的 URL 和超时配置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Local,
    Stage,
    Prod,
}

impl Environment {
    /// The full enumeration, in prompt display order.
    pub const ALL: [Environment; 3] = [Environment::Local, Environment::Stage, Environment::Prod];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Stage => "stage",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == value)
            .ok_or_else(|| invalid_value("environment", value, &Environment::ALL))
    }
}

/// Execution mode of the engine: headless for automation, interactive UI
/// for a visual runner session.
/// 引擎的执行模式：headless 用于自动化，interactive UI 用于可视化运行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Headless,
    Ui,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Headless, Mode::Ui];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Headless => "headless",
            Mode::Ui => "ui",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A browser/device configuration profile the engine can target.
/// 引擎可以定位的浏览器/设备配置档案。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Project {
    Chrome,
    Safari,
    MobileChrome,
    MobileSafari,
}

impl Project {
    pub const ALL: [Project; 4] = [
        Project::Chrome,
        Project::Safari,
        Project::MobileChrome,
        Project::MobileSafari,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Project::Chrome => "chrome",
            Project::Safari => "safari",
            Project::MobileChrome => "mobile_chrome",
            Project::MobileSafari => "mobile_safari",
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Project {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Project::ALL
            .into_iter()
            .find(|project| project.as_str() == value)
            .ok_or_else(|| invalid_value("project", value, &Project::ALL))
    }
}

/// A classification label attached to test cases, matched by the engine's
/// title filter.
/// 附加在测试用例上的分类标签，由引擎的标题过滤器进行匹配。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestTag {
    Login,
    Smoke,
    Regression,
    Api,
    Mobile,
}

impl TestTag {
    pub const ALL: [TestTag; 5] = [
        TestTag::Login,
        TestTag::Smoke,
        TestTag::Regression,
        TestTag::Api,
        TestTag::Mobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestTag::Login => "LOGIN",
            TestTag::Smoke => "SMOKE",
            TestTag::Regression => "REGRESSION",
            TestTag::Api => "API",
            TestTag::Mobile => "MOBILE",
        }
    }
}

impl fmt::Display for TestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestTag {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TestTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == value)
            .ok_or_else(|| invalid_value("tag", value, &TestTag::ALL))
    }
}

/// The complete, validated configuration of one run.
///
/// Built exactly once per invocation by the option resolver, immutable
/// afterwards, consumed by the command compiler and never persisted.
///
/// 一次运行的完整且已校验的配置。
/// 每次调用由选项解析器构建一次，之后不可变，由命令编译器消费，绝不持久化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub environment: Environment,
    pub mode: Mode,
    /// Target projects, in the order supplied. Empty means the engine's
    /// own default project set.
    pub projects: Vec<Project>,
    /// Tag filters, in the order supplied. Empty means no filtering.
    pub tags: Vec<TestTag>,
}

/// Formats the rejection message for a value outside its enumeration,
/// naming the rejected value and listing every valid option.
fn invalid_value<T: fmt::Display>(kind: &str, value: &str, valid: &[T]) -> Error {
    let options = valid
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let shown = if value.is_empty() { "<none>" } else { value };
    Error::InvalidConfiguration(format!(
        "Invalid {kind}: {shown}. Valid options: {options}"
    ))
}
