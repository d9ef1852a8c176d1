//! The plain-text result recorder.
//!
//! Observes per-test completion events from the engine and appends one
//! line per non-skipped outcome to `custom-report/<env>-report.txt`,
//! writing a box-drawn header exactly once per recorder lifetime. Engine
//! workers may deliver events concurrently and out of chronological
//! order; each event carries its own timestamp, and appends are
//! serialized by the same mutex that guards the header flag. A write
//! failure is logged and swallowed so one bad write can never lose the
//! results that follow it.
//!
//! 纯文本结果记录器。
//! 观察引擎的每个测试完成事件，为每个非跳过的结果向
//! `custom-report/<env>-report.txt` 追加一行，并在记录器生命周期内恰好
//! 写入一次框线表头。引擎的 worker 可能并发地、乱序地投递事件；每个事件
//! 携带自己的时间戳，追加操作由守护表头标志的同一把互斥锁串行化。写入
//! 失败会被记录并吞掉，因此一次坏写入绝不会丢失后续结果。

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Local, SecondsFormat, Utc};
use colored::Colorize;
use rust_i18n::t;
use serde::Deserialize;

use crate::core::command::ENV_VAR;
use crate::error::{Error, Result};
use crate::infra::fs;

/// Directory the report files live in, relative to the working directory
/// of the reporting process.
pub const REPORT_DIR: &str = "custom-report";

/// Environment name used when the `ENV` variable is absent.
const DEFAULT_ENV_VALUE: &str = "unknown";

const REPORT_TITLE: &str = "PLAYWRIGHT TEST EXECUTION REPORT";

/// Terminal status of one executed test case, as the engine reports it.
/// 引擎报告的单个已执行测试用例的最终状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestStatus {
    Passed,
    Failed,
    TimedOut,
    Interrupted,
    Skipped,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::TimedOut => "timedOut",
            TestStatus::Interrupted => "interrupted",
            TestStatus::Skipped => "skipped",
        }
    }
}

/// One completed test case, delivered by the engine at the end of the
/// case. Read-only once created; written immediately, never retained.
///
/// 引擎在用例结束时投递的一个已完成测试用例。创建后只读；立即写出，绝不
/// 留存在内存中。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestEvent {
    pub title: String,
    pub status: TestStatus,
    /// Hierarchical title path: browser project first, then the spec
    /// file, then the enclosing describe blocks, then the title itself.
    #[serde(default)]
    pub title_path: Vec<String>,
    /// UTC completion time stamped by the engine. Absent on in-process
    /// events, which are stamped at write time instead.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Appends test outcomes to the per-environment report file.
///
/// One recorder instance per reporting process; the header-once flag is
/// scoped to the instance and shared state never crosses processes.
pub struct Recorder {
    output_file: PathBuf,
    environment: String,
    /// `true` once the boxed header has been written. Guarded together
    /// with the appends so concurrent events cannot double-write it.
    header_written: Mutex<bool>,
}

impl Recorder {
    /// Builds a recorder for the environment named by the `ENV` variable
    /// (falling back to `"unknown"`), writing under `custom-report/` in
    /// the working directory.
    pub fn new() -> Self {
        let environment =
            std::env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENV_VALUE.to_string());
        Self::with_report_dir(REPORT_DIR, environment)
    }

    /// Builds a recorder with an explicit report directory and
    /// environment name.
    pub fn with_report_dir(dir: impl Into<PathBuf>, environment: impl Into<String>) -> Self {
        let environment = environment.into();
        let output_file = dir.into().join(format!("{environment}-report.txt"));
        Recorder {
            output_file,
            environment,
            header_written: Mutex::new(false),
        }
    }

    /// Path of the report file this recorder appends to.
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Observer hook: records one completed test case.
    ///
    /// Skipped cases are not recorded at all. Write failures are logged
    /// to stderr and swallowed; this never fails and never panics, so a
    /// bad disk cannot abort the test run in progress.
    pub fn on_test_end(&self, event: &TestEvent) {
        if event.status == TestStatus::Skipped {
            return;
        }

        if let Err(e) = self.record(event) {
            eprintln!("{} {e}", t!("report_write_failed").red());
        }
    }

    /// Reads newline-delimited JSON test events and records each one.
    /// A malformed line is reported and skipped; it never interrupts the
    /// stream. Returns the number of events handed to the recorder.
    ///
    /// 读取按行分隔的 JSON 测试事件并逐个记录。格式错误的行会被报告并
    /// 跳过，绝不中断流。返回交给记录器处理的事件数量。
    pub fn record_events<R: BufRead>(&self, reader: R) -> std::io::Result<usize> {
        let mut recorded = 0;
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<TestEvent>(&line) {
                Ok(event) => {
                    self.on_test_end(&event);
                    recorded += 1;
                }
                Err(e) => {
                    eprintln!("{}", t!("record_parse_failed", error = e).yellow());
                }
            }
        }
        Ok(recorded)
    }

    fn record(&self, event: &TestEvent) -> Result<()> {
        let mut header_written = self
            .header_written
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !*header_written {
            self.write_header().map_err(Error::ReportWrite)?;
            *header_written = true;
        }

        fs::append(&self.output_file, &self.format_entry(event)).map_err(Error::ReportWrite)
    }

    /// One report line: ISO-8601 UTC timestamp, bracketed uppercase
    /// status, the bracketed non-empty title-path fields, then the test
    /// title.
    fn format_entry(&self, event: &TestEvent) -> String {
        let timestamp = event
            .timestamp
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        let browser = browser_name(event);
        let test_path = test_file_path(event);
        let describe = describe_title(event);

        let path_parts = [browser, test_path, describe]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("] [");

        format!(
            "{timestamp} [{status}] [{path_parts}] {title}\n",
            status = event.status.as_str().to_uppercase(),
            title = event.title,
        )
    }

    /// Appends the boxed header, creating the report directory first.
    /// An existing file keeps its content; the header lands at the end.
    fn write_header(&self) -> std::io::Result<()> {
        if let Some(dir) = self.output_file.parent() {
            fs::ensure_dir(dir)?;
        }

        let timestamp = Local::now().format("%B %-d, %Y %H:%M:%S").to_string();
        let title_line = REPORT_TITLE.to_string();
        let env_line = format!("Environment: {}", self.environment.to_uppercase());
        let time_line = format!("Timestamp:   {timestamp}");

        let content_width = title_line
            .len()
            .max(env_line.len())
            .max(time_line.len());
        let horizontal = "═".repeat(content_width + 6);

        let header = format!(
            "{separator}\n\n\
             ╔{horizontal}╗\n\
             ║   {title_line:<content_width$}   ║\n\
             ╠{horizontal}╣\n\
             ║   {env_line:<content_width$}   ║\n\
             ║   {time_line:<content_width$}   ║\n\
             ╚{horizontal}╝\n\n",
            separator = "=".repeat(80),
        );

        fs::append(&self.output_file, &header)
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

/// First title-path segment: the browser/project name. An out-of-range
/// index yields an empty string; nothing here ever panics, whatever the
/// engine sends.
fn browser_name(event: &TestEvent) -> String {
    event.title_path.first().cloned().unwrap_or_default()
}

/// Second title-path segment: the spec file path.
fn test_file_path(event: &TestEvent) -> String {
    if event.title_path.len() > 1 {
        event.title_path[1].clone()
    } else {
        String::new()
    }
}

/// Second-to-last title-path segment: the enclosing describe title.
fn describe_title(event: &TestEvent) -> String {
    if event.title_path.len() > 1 {
        event.title_path[event.title_path.len() - 2].clone()
    } else {
        String::new()
    }
}
