//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Tests for `ExecutorConfig`: deserialization, defaults, command-line
//! overrides and normalization into `TestOptions`.
//!
//! `ExecutorConfig` 的测试：反序列化、默认值、命令行覆盖以及规范化为 `TestOptions`。

use playwright_runner::config::{
    load_executor_config, parse_executor_config, ConfigOverrides, ExecutorConfig,
};
use playwright_runner::core::test_cmd::TestOptions;
use std::path::PathBuf;

mod common;

fn minimal() -> ExecutorConfig {
    parse_executor_config(
        r#"
playwright_config = "apps/web-e2e/playwright.config.ts"
output_dir = "../../dist/playwright/apps/web-e2e/test-results"
"#,
    )
    .unwrap()
}

#[cfg(test)]
mod deserialization_tests {
    use super::*;

    #[test]
    fn test_minimal_config_defaults() {
        let config = minimal();

        assert_eq!(config.target, "src");
        assert_eq!(config.language, "en");
        assert!(config.env.is_empty());
        assert_eq!(config.headed, None);
        assert_eq!(config.parallel, None);
        assert_eq!(config.browser, None);
    }

    #[test]
    fn test_full_config() {
        let config = parse_executor_config(
            r#"
playwright_config = "e2e/playwright.config.ts"
output_dir = "out"
headed = true
parallel = false
browser = "webkit"
debug = true
reporter = "dot"
target = "tests"
language = "zh-CN"

[env]
BASE_URL = "http://localhost:4200"
"#,
        )
        .unwrap();

        assert_eq!(config.headed, Some(true));
        assert_eq!(config.parallel, Some(false));
        assert_eq!(config.browser.as_deref(), Some("webkit"));
        assert_eq!(config.reporter.as_deref(), Some("dot"));
        assert_eq!(config.target, "tests");
        assert_eq!(config.language, "zh-CN");
        assert_eq!(
            config.env.get("BASE_URL").map(String::as_str),
            Some("http://localhost:4200")
        );
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result = parse_executor_config(r#"playwright_config = "playwright.config.ts""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_environment_variables_are_expanded_in_paths() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("PW_RUNNER_CONFIG_TEST_ROOT", "/work/repo") };
        let config = parse_executor_config(
            r#"
playwright_config = "$PW_RUNNER_CONFIG_TEST_ROOT/e2e/playwright.config.ts"
output_dir = "${PW_RUNNER_CONFIG_TEST_ROOT}/dist"
"#,
        )
        .unwrap();

        assert_eq!(config.playwright_config, "/work/repo/e2e/playwright.config.ts");
        assert_eq!(config.output_dir, "/work/repo/dist");
    }

    #[test]
    fn test_undefined_variable_is_an_error() {
        let result = parse_executor_config(
            r#"
playwright_config = "$PW_RUNNER_UNDEFINED_VARIABLE_12345/playwright.config.ts"
output_dir = "dist"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = common::create_invalid_toml(&temp_dir);
        assert!(load_executor_config(&path).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = load_executor_config(&temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}

#[cfg(test)]
mod normalization_tests {
    use super::*;

    #[test]
    fn test_config_is_reduced_to_file_name() {
        let options = minimal().to_test_options();

        assert_eq!(
            options,
            TestOptions {
                config: "playwright.config.ts".to_string(),
                output: "../../dist/playwright/apps/web-e2e/test-results".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_parallel_false_forces_one_worker() {
        let mut config = minimal();
        config.parallel = Some(false);
        assert_eq!(config.to_test_options().workers, Some(1));

        config.parallel = Some(true);
        assert_eq!(config.to_test_options().workers, None);
    }

    #[test]
    fn test_project_folder_is_config_parent() {
        assert_eq!(minimal().project_folder(), PathBuf::from("apps/web-e2e"));

        let mut config = minimal();
        config.playwright_config = "playwright.config.ts".to_string();
        assert_eq!(config.project_folder(), PathBuf::from("."));
    }

    #[test]
    fn test_overrides_only_enable_options() {
        let mut config = minimal();
        config.browser = Some("chromium".to_string());
        config.debug = Some(true);

        config.apply_overrides(ConfigOverrides {
            headed: true,
            no_parallel: true,
            reporter: Some("line".to_string()),
            ..Default::default()
        });

        let options = config.to_test_options();
        assert!(options.headed);
        assert!(options.debug);
        assert_eq!(options.browser.as_deref(), Some("chromium"));
        assert_eq!(options.reporter.as_deref(), Some("line"));
        assert_eq!(options.workers, Some(1));
    }
}
