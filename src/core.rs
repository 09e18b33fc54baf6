//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Playwright Runner:
//! version parsing, test command construction, executor configuration
//! and test execution.
//!
//! 此模块包含 Playwright Runner 的核心功能：
//! 版本解析、测试命令构建、执行器配置和测试执行。

pub mod config;
pub mod execution;
pub mod test_cmd;
pub mod version;

// Re-exports
pub use config::ExecutorConfig;
pub use execution::run_test_executor;
pub use test_cmd::{build_arguments, build_test_command, TestOptions};
pub use version::{parse_version, Version, VersionError};
