//! # Test Execution Module / 测试执行模块
//!
//! Runs a Playwright suite described by an [`ExecutorConfig`]: builds the
//! `npx playwright test` command, launches it from the Playwright config's
//! directory and echoes its output to the console.
//!
//! 运行由 [`ExecutorConfig`] 描述的 Playwright 测试套件：构建
//! `npx playwright test` 命令，在 Playwright 配置文件所在目录中启动它，并将其输出回显到控制台。
//!
//! Unlike [`run_command`](crate::infra::command::run_command), this layer
//! reports a launch error as a failed run after logging it.
//!
//! 与 [`run_command`](crate::infra::command::run_command) 不同，
//! 此层在记录启动错误后将其报告为失败的运行。

use colored::*;
use std::time::{Duration, Instant};

use crate::{
    core::{
        config::ExecutorConfig,
        test_cmd::{build_test_command, TestCommand},
    },
    infra::{
        command::{CommandError, CommandOptions},
        t,
    },
};

/// The outcome of one executor run.
/// 一次执行器运行的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub success: bool,
    pub duration: Duration,
}

/// Runs the test suite described by `config` and reports whether it passed.
///
/// Launch errors are printed and reported as a failure.
///
/// 运行 `config` 描述的测试套件并报告其是否通过。
/// 启动错误会被打印并报告为失败。
pub async fn run_test_executor(config: &ExecutorConfig) -> ExecutionSummary {
    let command = build_test_command(&config.to_test_options(), &config.target);
    run_with_command(config, &command).await
}

/// Runs an already built `command` with the working directory and environment
/// taken from `config`.
/// 使用 `config` 中的工作目录和环境变量运行已构建的 `command`。
pub async fn run_with_command(config: &ExecutorConfig, command: &TestCommand) -> ExecutionSummary {
    let start_time = Instant::now();
    let result = execute_command(config, command).await;
    let duration = start_time.elapsed();
    let secs = format!("{:.2}", duration.as_secs_f64());

    let success = match result {
        Ok(true) => {
            println!("{}", t!("run.tests_passed", duration = secs).green());
            true
        }
        Ok(false) => {
            println!("{}", t!("run.tests_failed", duration = secs).red());
            false
        }
        Err(e) => {
            eprintln!("{} {}", t!("run.launch_failed").red(), e);
            false
        }
    };

    ExecutionSummary { success, duration }
}

/// Launches `command` and streams its output, without translating launch
/// errors.
/// 启动 `command` 并流式输出，不转换启动错误。
pub async fn execute_command(
    config: &ExecutorConfig,
    command: &TestCommand,
) -> Result<bool, CommandError> {
    let project_folder = config.project_folder();

    println!(
        "{}",
        t!("run.running_tests", path = project_folder.display()).blue()
    );
    println!("{} {}", t!("run.command_prefix").blue(), command.display());

    let options = CommandOptions::new()
        .env(config.env.clone())
        .working_directory(project_folder)
        .on_stdout(|line| println!("{line}"))
        .on_stderr(|line| eprintln!("{line}"));

    let outcome = command.run(options).await?;
    Ok(outcome.success)
}
