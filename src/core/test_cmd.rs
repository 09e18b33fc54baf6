//! # Test Command Module / 测试命令模块
//!
//! Maps [`TestOptions`] onto the argument vector understood by
//! `playwright test`, and wraps the result into a runnable [`TestCommand`].
//!
//! 将 [`TestOptions`] 映射为 `playwright test` 能理解的参数向量，
//! 并将结果包装为可运行的 [`TestCommand`]。
//!
//! The flag order is fixed: `--headed`, `--browser`, `--debug`, `--reporter`,
//! `--config`, `--output`, `--workers`, then the target path.
//!
//! 标志顺序是固定的：`--headed`、`--browser`、`--debug`、`--reporter`、
//! `--config`、`--output`、`--workers`，然后是目标路径。


use crate::infra::command::{self, CommandError, CommandOptions, CommandOutcome};

/// The launcher used to resolve the locally installed Playwright CLI.
pub const TEST_RUNNER_PROGRAM: &str = "npx";
/// Arguments placed before the built flags.
pub const TEST_RUNNER_SUBCOMMAND: [&str; 2] = ["playwright", "test"];

/// Options for one `playwright test` invocation.
/// 一次 `playwright test` 调用的选项。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestOptions {
    /// Path of the Playwright config file, passed to `--config`.
    /// Playwright 配置文件的路径，传递给 `--config`。
    pub config: String,
    /// Directory for test artifacts, passed to `--output`.
    /// 测试产物目录，传递给 `--output`。
    pub output: String,
    pub headed: bool,
    pub browser: Option<String>,
    pub debug: bool,
    pub reporter: Option<String>,
    pub workers: Option<u32>,
}

/// Builds the argument vector for `playwright test` from `options`.
///
/// Absent or `false` options contribute nothing; an empty `browser` or
/// `reporter` counts as absent. Values are passed through unvalidated.
///
/// 根据 `options` 构建 `playwright test` 的参数向量。
/// 缺失或为 `false` 的选项不产生任何参数；空的 `browser` 或 `reporter` 视为缺失。
/// 值不经校验直接传递。
pub fn build_arguments(options: &TestOptions, target_path: &str) -> Vec<String> {
    let mut args = Vec::new();

    if options.headed {
        args.push("--headed".to_string());
    }
    if let Some(browser) = non_empty(&options.browser) {
        args.push("--browser".to_string());
        args.push(browser.to_string());
    }
    if options.debug {
        args.push("--debug".to_string());
    }
    if let Some(reporter) = non_empty(&options.reporter) {
        args.push("--reporter".to_string());
        args.push(reporter.to_string());
    }

    args.push("--config".to_string());
    args.push(options.config.clone());
    args.push("--output".to_string());
    args.push(options.output.clone());

    if let Some(workers) = options.workers {
        args.push("--workers".to_string());
        args.push(workers.to_string());
    }

    args.push(target_path.to_string());
    args
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A fully built `npx playwright test ...` invocation.
/// 一个完整构建的 `npx playwright test ...` 调用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl TestCommand {
    /// Runs the command through [`command::run_command`].
    /// 通过 [`command::run_command`] 运行此命令。
    pub async fn run(&self, options: CommandOptions<'_>) -> Result<CommandOutcome, CommandError> {
        command::run_command(&self.program, &self.args, options).await
    }

    /// The command line as it would be typed in a shell.
    pub fn display(&self) -> String {
        command::display_command(&self.program, &self.args)
    }
}

/// Builds the complete test command for `options` and `target_path`.
/// 为 `options` 和 `target_path` 构建完整的测试命令。
pub fn build_test_command(options: &TestOptions, target_path: &str) -> TestCommand {
    let args = TEST_RUNNER_SUBCOMMAND
        .iter()
        .map(|s| s.to_string())
        .chain(build_arguments(options, target_path))
        .collect();

    TestCommand {
        program: TEST_RUNNER_PROGRAM.to_string(),
        args,
    }
}
