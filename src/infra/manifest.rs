//! # Package Manifest Module / 包清单模块
//!
//! Reads `package.json` files and resolves the version of the Playwright
//! package installed under a project's `node_modules`.
//!
//! 读取 `package.json` 文件，并解析项目 `node_modules` 下安装的 Playwright 包的版本。

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::version::{parse_version, Version};

/// The npm package whose installed version is probed.
pub const PLAYWRIGHT_PACKAGE: &str = "playwright";

/// The subset of `package.json` this crate cares about.
/// 本 crate 关心的 `package.json` 字段子集。
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    pub version: Option<String>,
}

/// Reads and parses a `package.json` file.
pub fn read_package_manifest(path: &Path) -> Result<PackageManifest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read package manifest: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse package manifest: {}", path.display()))
}

/// Path of an installed package's manifest below `project_root`.
pub fn installed_manifest_path(project_root: &Path, package: &str) -> PathBuf {
    project_root
        .join("node_modules")
        .join(package)
        .join("package.json")
}

/// Returns the version of Playwright installed under `project_root`.
///
/// Yields `None` when the package is not installed, its manifest is
/// unreadable, or its version field is missing or malformed.
///
/// 返回 `project_root` 下安装的 Playwright 版本。
/// 当包未安装、清单不可读或版本字段缺失或格式错误时返回 `None`。
pub fn installed_playwright_version(project_root: &Path) -> Option<Version> {
    let path = installed_manifest_path(project_root, PLAYWRIGHT_PACKAGE);
    let manifest = match read_package_manifest(&path) {
        Ok(manifest) => manifest,
        Err(e) => {
            debug!("no installed playwright version: {:#}", e);
            return None;
        }
    };

    match parse_version(manifest.version.as_deref()) {
        Ok(version) => Some(version),
        Err(e) => {
            debug!(path = %path.display(), "unusable playwright version: {}", e);
            None
        }
    }
}
