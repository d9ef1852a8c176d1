//! Execution of the compiled engine command.
//!
//! The compiled command is a single shell line (environment assignment
//! prefix, quoted filter expression), so it is handed to the platform
//! shell as-is rather than tokenized here. While the child runs, its
//! stdout and stderr are relayed chunk-by-chunk to the host streams,
//! interleaved as produced.
//!
//! 执行编译出的引擎命令。
//! 编译出的命令是一行完整的 shell 命令（环境变量赋值前缀、带引号的过滤
//! 表达式），因此原样交给平台 shell，而不在这里做分词。子进程运行期间，
//! 其 stdout 和 stderr 按产生顺序逐块转发到宿主流。

use std::process::Stdio;

use tokio::process::Command;

use crate::error::{Error, Result};

/// Runs the compiled command and suspends until the child exits.
///
/// Resolves with no payload on a zero exit status: the live output and
/// the report file are the only products. A spawn failure or a non-zero
/// exit fails with `Error::ProcessExecution`; there is no retry, no
/// timeout and no way to abort a started run.
pub async fn execute(command: &str) -> Result<()> {
    let mut child = shell_command(command)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| Error::process_io(format!("failed to launch `{command}`"), e))?;

    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::process("failed to capture engine stdout"))?;
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| Error::process("failed to capture engine stderr"))?;

    // Relay both streams concurrently, without buffering or reordering.
    // 并发转发两个流，不缓冲、不重排。
    let stdout_handle = tokio::spawn(async move {
        let _ = tokio::io::copy(&mut stdout, &mut tokio::io::stdout()).await;
    });
    let stderr_handle = tokio::spawn(async move {
        let _ = tokio::io::copy(&mut stderr, &mut tokio::io::stderr()).await;
    });

    let status = child
        .wait()
        .await
        .map_err(|e| Error::process_io("failed to wait for the test engine", e))?;

    // Drain the relay tasks so no trailing output is lost.
    // 等待转发任务结束，避免丢失末尾输出。
    if let Err(e) = stdout_handle.await {
        eprintln!("Failed to join stdout relay task: {e}");
    }
    if let Err(e) = stderr_handle.await {
        eprintln!("Failed to join stderr relay task: {e}");
    }

    if status.success() {
        Ok(())
    } else {
        Err(Error::process(format!("test engine exited with {status}")))
    }
}

/// Wraps the command line in the platform shell.
fn shell_command(command: &str) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    }
    #[cfg(not(target_os = "windows"))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}
