//! # Command Execution Module / 命令执行模块
//!
//! This module launches a single external process, streams its stdout and
//! stderr line by line to caller-supplied sinks, and resolves to a
//! [`CommandOutcome`] once the process has exited.
//!
//! 此模块启动单个外部进程，将其 stdout 和 stderr 逐行流式传递给调用方提供的回调，
//! 并在进程退出后返回一个 [`CommandOutcome`]。
//!
//! A non-zero exit code is a *reported* failure (`success == false`), not an
//! error. Only a process that cannot be started at all produces
//! [`CommandError::Launch`].
//!
//! 非零退出码是一个*报告的*失败（`success == false`），而不是错误。
//! 只有完全无法启动的进程才会产生 [`CommandError::Launch`]。

use std::collections::HashMap;
use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tokio_stream::wrappers::SplitStream;
use tokio_stream::StreamExt;
use tracing::{debug, warn};

/// A callback receiving one trimmed line of process output.
/// `Send` so that the [`run_command`] future can be spawned onto a runtime.
///
/// 接收一行已修剪的进程输出的回调。
/// 要求 `Send`，以便 [`run_command`] 返回的 future 可以被派生到运行时上。
pub type OutputSink<'a> = Box<dyn FnMut(&str) + Send + 'a>;

/// Options describing one process launch.
/// 描述一次进程启动的选项。
///
/// Each launch owns its options; they are consumed by [`run_command`].
/// 每次启动拥有自己的选项；它们由 [`run_command`] 消费。
#[derive(Default)]
pub struct CommandOptions<'a> {
    /// Variables merged over the ambient environment of the child.
    /// 合并到子进程环境变量之上的变量。
    pub env: Option<HashMap<String, String>>,
    /// The working directory of the child. Inherited when `None`.
    /// 子进程的工作目录。为 `None` 时继承。
    pub working_directory: Option<PathBuf>,
    /// Receives stdout lines. Stdout is discarded when `None`.
    /// 接收 stdout 行。为 `None` 时丢弃 stdout。
    pub on_stdout: Option<OutputSink<'a>>,
    /// Receives stderr lines. Stderr is discarded when `None`.
    /// 接收 stderr 行。为 `None` 时丢弃 stderr。
    pub on_stderr: Option<OutputSink<'a>>,
}

impl<'a> CommandOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    pub fn working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn on_stdout(mut self, sink: impl FnMut(&str) + Send + 'a) -> Self {
        self.on_stdout = Some(Box::new(sink));
        self
    }

    pub fn on_stderr(mut self, sink: impl FnMut(&str) + Send + 'a) -> Self {
        self.on_stderr = Some(Box::new(sink));
        self
    }
}

impl std::fmt::Debug for CommandOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandOptions")
            .field("env", &self.env)
            .field("working_directory", &self.working_directory)
            .field("on_stdout", &self.on_stdout.is_some())
            .field("on_stderr", &self.on_stderr.is_some())
            .finish()
    }
}

/// The single result of a process run.
/// 一次进程运行的唯一结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// `true` if and only if the process exited with code 0.
    /// 当且仅当进程以退出码 0 退出时为 `true`。
    pub success: bool,
}

/// Hard failures of [`run_command`]. A failing process is never one of these.
/// [`run_command`] 的硬性失败。失败的进程永远不属于此类。
#[derive(Debug, Error)]
pub enum CommandError {
    /// The process could not be started (not found, permission denied, ...).
    /// 无法启动进程（未找到、权限被拒绝等）。
    #[error("failed to launch `{program}`: {source}")]
    Launch { program: String, source: io::Error },
    /// The process was started but its exit status could not be collected.
    /// 进程已启动，但无法获取其退出状态。
    #[error("failed to wait for `{program}`: {source}")]
    Wait { program: String, source: io::Error },
}

/// A line read from one of the child's output streams.
#[derive(Debug)]
enum OutputEvent {
    Stdout(String),
    Stderr(String),
}

/// How long buffered output is still delivered after the process has exited.
/// A descendant that inherited the pipes can keep them open indefinitely.
pub const OUTPUT_DRAIN_TIMEOUT: Duration = Duration::from_millis(500);

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// The caller's sinks for one invocation.
struct Sinks<'a> {
    stdout: Option<OutputSink<'a>>,
    stderr: Option<OutputSink<'a>>,
}

impl Sinks<'_> {
    fn deliver(&mut self, event: OutputEvent) {
        match event {
            OutputEvent::Stdout(line) => {
                if let Some(sink) = self.stdout.as_mut() {
                    sink(&line);
                }
            }
            OutputEvent::Stderr(line) => {
                if let Some(sink) = self.stderr.as_mut() {
                    sink(&line);
                }
            }
        }
    }
}

/// Launches `program` with `args`, streams its output to the sinks in
/// `options`, and resolves once the process exits.
///
/// Stdout and stderr are read by two reader tasks feeding one tagged event
/// channel; lines of a single stream keep their order, lines of different
/// streams may interleave. Resolution follows the process exit, not the end of
/// its pipes: once the exit status is known, output still in flight is
/// delivered for at most [`OUTPUT_DRAIN_TIMEOUT`], then the readers are
/// stopped. No sink is called after this function resolves.
///
/// 使用 `args` 启动 `program`，将其输出流式传递给 `options` 中的回调，并在进程退出时返回。
/// stdout 和 stderr 由两个读取任务读取并送入同一个带标签的事件通道；同一流中的行保持顺序，
/// 不同流的行可能交错。返回时机取决于进程退出，而不是管道关闭：
/// 一旦得到退出状态，仍在传输中的输出最多再传递 [`OUTPUT_DRAIN_TIMEOUT`]，然后停止读取任务。
/// 此函数返回后不会再调用任何回调。
///
/// # Errors / 错误
/// * [`CommandError::Launch`] if the process cannot be spawned.
/// * [`CommandError::Wait`] if the exit status cannot be collected.
pub async fn run_command<'a, I, S>(
    program: &str,
    args: I,
    options: CommandOptions<'a>,
) -> Result<CommandOutcome, CommandError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let CommandOptions {
        env,
        working_directory,
        on_stdout,
        on_stderr,
    } = options;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(piped_if(on_stdout.is_some()))
        .stderr(piped_if(on_stderr.is_some()))
        .kill_on_drop(true);
    if let Some(env) = env {
        cmd.envs(env);
    }
    if let Some(dir) = working_directory {
        cmd.current_dir(dir);
    }

    let mut child = cmd.spawn().map_err(|source| CommandError::Launch {
        program: program.to_string(),
        source,
    })?;
    debug!(program, pid = child.id(), "process spawned");

    let mut sinks = Sinks {
        stdout: on_stdout,
        stderr: on_stderr,
    };
    let (tx, mut events) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let mut readers = Vec::new();
    if let Some(stdout) = child.stdout.take() {
        readers.push(tokio::spawn(forward_lines(
            stdout,
            OutputEvent::Stdout,
            tx.clone(),
        )));
    }
    if let Some(stderr) = child.stderr.take() {
        readers.push(tokio::spawn(forward_lines(
            stderr,
            OutputEvent::Stderr,
            tx.clone(),
        )));
    }
    drop(tx);

    let mut streams_open = !readers.is_empty();
    let status = loop {
        tokio::select! {
            event = events.recv(), if streams_open => match event {
                Some(event) => sinks.deliver(event),
                None => streams_open = false,
            },
            status = child.wait() => break status,
        }
    };

    if streams_open {
        let drained = tokio::time::timeout(OUTPUT_DRAIN_TIMEOUT, async {
            while let Some(event) = events.recv().await {
                sinks.deliver(event);
            }
        })
        .await;
        if drained.is_err() {
            debug!(program, "output pipes still open after exit, closing them");
        }
    }
    for reader in &readers {
        reader.abort();
    }
    drop(events);

    let status = status.map_err(|source| CommandError::Wait {
        program: program.to_string(),
        source,
    })?;
    debug!(program, %status, "process exited");

    Ok(CommandOutcome {
        success: status.success(),
    })
}

/// Renders a command line for display, quoting arguments where needed.
/// 渲染用于显示的命令行，必要时为参数加引号。
pub fn display_command<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    let parts = std::iter::once(program).chain(args.iter().map(|arg| arg.as_ref()));
    shlex::try_join(parts.clone()).unwrap_or_else(|_| parts.collect::<Vec<_>>().join(" "))
}

fn piped_if(capture: bool) -> Stdio {
    if capture { Stdio::piped() } else { Stdio::null() }
}

/// Reads `reader` line by line and forwards trimmed lines into `tx`.
///
/// Returns, dropping the reader, on EOF, on a read error, or once the
/// receiving side is gone. Invalid UTF-8 is replaced rather than ending the
/// stream.
async fn forward_lines<R>(
    reader: R,
    wrap: fn(String) -> OutputEvent,
    tx: mpsc::Sender<OutputEvent>,
) where
    R: AsyncRead + Unpin,
{
    let mut lines = SplitStream::new(BufReader::new(reader).split(b'\n'));
    while let Some(res) = lines.next().await {
        let bytes = match res {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("stopped reading process output: {}", e);
                break;
            }
        };
        let line = String::from_utf8_lossy(&bytes).trim_end().to_string();
        if tx.send(wrap(line)).await.is_err() {
            break;
        }
    }
}
