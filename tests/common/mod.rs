// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Creates a project directory with `node_modules/playwright/package.json`
/// carrying the given manifest body.
pub fn setup_project_with_playwright(manifest: &str) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let package_dir = temp_dir.path().join("node_modules").join("playwright");
    fs::create_dir_all(&package_dir).expect("Failed to create package directory");
    fs::write(package_dir.join("package.json"), manifest).expect("Failed to write package.json");
    temp_dir
}

/// Creates an e2e project folder holding an empty Playwright config, and
/// returns the config's path.
pub fn setup_e2e_project(root: &Path) -> PathBuf {
    let project = root.join("apps").join("web-e2e");
    fs::create_dir_all(&project).expect("Failed to create e2e project directory");
    let config = project.join("playwright.config.ts");
    fs::write(&config, "export default {};\n").expect("Failed to write playwright config");
    config
}

/// Writes an executor config file and returns its path.
pub fn write_executor_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("playwright-runner.toml");
    fs::write(&path, content).expect("Failed to write executor config");
    path
}

/// Helper function to create an invalid TOML configuration
pub fn create_invalid_toml(temp_dir: &TempDir) -> PathBuf {
    write_executor_config(
        temp_dir.path(),
        r#"
playwright_config = "apps/web-e2e/playwright.config.ts
output_dir = "dist"
"#,
    )
}
