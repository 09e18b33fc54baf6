//! # Command-Line Interface Module / 命令行接口模块
//!
//! Builds the `playwright-runner` command line and dispatches to the
//! subcommand implementations in [`commands`].
//!
//! 构建 `playwright-runner` 命令行，并分派到 [`commands`] 中的子命令实现。

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::core::config::{ConfigOverrides, DEFAULT_CONFIG_FILE};
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

/// Builds the clap command tree, with help texts in the active locale.
/// 构建 clap 命令树，帮助文本使用当前区域设置。
pub fn build_cli() -> Command {
    Command::new("playwright-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about").to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang").to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("test")
                .about(t!("cli.test_about").to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("cli.arg_config").to_string())
                        .value_name("CONFIG")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("headed")
                        .long("headed")
                        .help(t!("cli.arg_headed").to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("debug")
                        .long("debug")
                        .help(t!("cli.arg_debug").to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-parallel")
                        .long("no-parallel")
                        .help(t!("cli.arg_no_parallel").to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("browser")
                        .long("browser")
                        .help(t!("cli.arg_browser").to_string())
                        .value_name("BROWSER")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("reporter")
                        .long("reporter")
                        .help(t!("cli.arg_reporter").to_string())
                        .value_name("REPORTER")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("version")
                .about(t!("cli.version_about").to_string())
                .arg(
                    Arg::new("project-dir")
                        .long("project-dir")
                        .help(t!("cli.arg_project_dir").to_string())
                        .value_name("PROJECT_DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
}

/// Parses the process arguments and runs the selected subcommand.
/// Returns `Ok(false)` when the subcommand ran but reported a failure.
///
/// 解析进程参数并运行所选子命令。
/// 当子命令运行但报告失败时返回 `Ok(false)`。
pub async fn run() -> Result<bool> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    crate::init(language.as_deref());

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("test", test_matches)) => {
            let config = test_matches
                .get_one::<PathBuf>("config")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            commands::test::execute(&config, overrides_from(test_matches), language.is_some())
                .await
        }
        Some(("version", version_matches)) => {
            let project_dir = version_matches
                .get_one::<PathBuf>("project-dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("."));
            commands::version::execute(&project_dir)?;
            Ok(true)
        }
        _ => {
            build_cli().print_help()?;
            Ok(true)
        }
    }
}

fn overrides_from(matches: &ArgMatches) -> ConfigOverrides {
    ConfigOverrides {
        headed: matches.get_flag("headed"),
        debug: matches.get_flag("debug"),
        no_parallel: matches.get_flag("no-parallel"),
        browser: matches.get_one::<String>("browser").cloned(),
        reporter: matches.get_one::<String>("reporter").cloned(),
    }
}
