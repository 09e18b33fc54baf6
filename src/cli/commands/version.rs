//! # Version Command Module / 版本命令模块
//!
//! Prints the version of Playwright installed in a project.
//! 打印项目中安装的 Playwright 版本。

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::Path};

use crate::infra::{manifest::installed_playwright_version, t};

pub fn execute(project_dir: &Path) -> Result<()> {
    let project_root = fs::canonicalize(project_dir)
        .with_context(|| t!("project_dir_not_found", path = project_dir.display()))?;

    match installed_playwright_version(&project_root) {
        Some(version) => {
            println!(
                "{}",
                t!("version.installed", version = version.to_string().yellow())
            );
            if version.is_prerelease() {
                println!("{}", t!("version.prerelease_notice").cyan());
            }
        }
        None => println!("{}", t!("version.not_installed").yellow()),
    }
    Ok(())
}
