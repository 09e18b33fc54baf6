//! # Executor Configuration Module / 执行器配置模块
//!
//! Defines [`ExecutorConfig`], the TOML document that describes how a
//! Playwright suite is run, and its normalization into [`TestOptions`].
//!
//! 定义 [`ExecutorConfig`]（描述如何运行 Playwright 测试套件的 TOML 文档），
//! 以及将其规范化为 [`TestOptions`] 的逻辑。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::test_cmd::TestOptions;

/// Default name of the executor configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "playwright-runner.toml";

/// The executor configuration, loaded from a TOML file.
/// 从 TOML 文件加载的执行器配置。
///
/// ```toml
/// playwright_config = "apps/web-e2e/playwright.config.ts"
/// output_dir = "dist/playwright/apps/web-e2e/test-results"
/// browser = "chromium"
/// parallel = false
///
/// [env]
/// BASE_URL = "http://localhost:4200"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExecutorConfig {
    /// Path of the Playwright config file. Its directory becomes the working
    /// directory of the test run.
    /// Playwright 配置文件的路径。其所在目录将成为测试运行的工作目录。
    pub playwright_config: String,
    /// Directory for test artifacts.
    /// 测试产物目录。
    pub output_dir: String,
    #[serde(default)]
    pub headed: Option<bool>,
    /// `false` forces a single worker. Unset leaves the worker count to Playwright.
    /// `false` 强制使用单个 worker。未设置时由 Playwright 决定 worker 数量。
    #[serde(default)]
    pub parallel: Option<bool>,
    #[serde(default)]
    pub browser: Option<String>,
    #[serde(default)]
    pub debug: Option<bool>,
    #[serde(default)]
    pub reporter: Option<String>,
    /// Extra environment variables for the test process.
    /// 测试进程的额外环境变量。
    #[serde(default)]
    pub env: HashMap<String, String>,
    /// The positional path handed to `playwright test`.
    /// 传递给 `playwright test` 的位置参数路径。
    #[serde(default = "default_target")]
    pub target: String,
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_target() -> String {
    "src".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Command-line overrides applied on top of a loaded [`ExecutorConfig`].
/// 应用于已加载的 [`ExecutorConfig`] 之上的命令行覆盖项。
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub headed: bool,
    pub debug: bool,
    pub no_parallel: bool,
    pub browser: Option<String>,
    pub reporter: Option<String>,
}

impl ExecutorConfig {
    /// Applies command-line overrides. Switches only ever turn options on.
    /// 应用命令行覆盖项。开关只会启用选项。
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if overrides.headed {
            self.headed = Some(true);
        }
        if overrides.debug {
            self.debug = Some(true);
        }
        if overrides.no_parallel {
            self.parallel = Some(false);
        }
        if overrides.browser.is_some() {
            self.browser = overrides.browser;
        }
        if overrides.reporter.is_some() {
            self.reporter = overrides.reporter;
        }
    }

    /// Normalizes this configuration into [`TestOptions`].
    ///
    /// The run happens inside the config file's directory, so only the file
    /// name is passed to `--config`.
    ///
    /// 将此配置规范化为 [`TestOptions`]。
    /// 运行发生在配置文件所在目录中，因此只将文件名传递给 `--config`。
    pub fn to_test_options(&self) -> TestOptions {
        let config = Path::new(&self.playwright_config)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.playwright_config.clone());

        TestOptions {
            config,
            output: self.output_dir.clone(),
            headed: self.headed.unwrap_or(false),
            browser: self.browser.clone(),
            debug: self.debug.unwrap_or(false),
            reporter: self.reporter.clone(),
            workers: (self.parallel == Some(false)).then_some(1),
        }
    }

    /// The directory the test process runs in: the Playwright config's parent.
    /// 测试进程运行的目录：Playwright 配置文件的父目录。
    pub fn project_folder(&self) -> PathBuf {
        match Path::new(&self.playwright_config).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Expands `~` and environment variables in the path fields.
    /// 展开路径字段中的 `~` 和环境变量。
    pub fn expand_paths(&mut self) -> Result<()> {
        self.playwright_config = expand(&self.playwright_config)?;
        self.output_dir = expand(&self.output_dir)?;
        Ok(())
    }
}

fn expand(path: &str) -> Result<String> {
    Ok(shellexpand::full(path)
        .with_context(|| format!("Failed to expand path: {path}"))?
        .into_owned())
}

/// Parses an executor configuration from TOML text.
pub fn parse_executor_config(content: &str) -> Result<ExecutorConfig> {
    let mut config: ExecutorConfig =
        toml::from_str(content).context("Failed to parse executor configuration")?;
    config.expand_paths()?;
    Ok(config)
}

/// Loads an executor configuration file.
/// 加载执行器配置文件。
pub fn load_executor_config(path: &Path) -> Result<ExecutorConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_executor_config(&content)
}
