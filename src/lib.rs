//! # Playwright Runner Library / Playwright Runner 库
//!
//! This library runs the Playwright test runner as an external process,
//! streams its output, and reports a single pass/fail outcome. It also
//! parses the loose version strings found in npm package manifests.
//!
//! 此库将 Playwright 测试运行器作为外部进程运行，流式传输其输出，
//! 并报告单一的通过/失败结果。它还能解析 npm 包清单中宽松格式的版本字符串。
//!
//! ## Modules / 模块
//!
//! - `core` - Version parsing, test command construction and execution
//! - `infra` - Process execution and package manifest access
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 版本解析、测试命令构建和执行
//! - `infra` - 进程执行和包清单访问
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::version;
pub use crate::infra::command;

/// Initializes the application's internationalization (i18n).
///
/// An explicit `language` wins. Otherwise the system locale is detected; the
/// full locale (e.g., "zh-CN") is tried first, then just the language code
/// (e.g., "en"), and finally the default language ("en").
///
/// 初始化应用程序的国际化（i18n）。
/// 显式指定的 `language` 优先。否则检测系统区域设置；先尝试完整区域设置（例如 "zh-CN"），
/// 然后仅尝试语言代码（例如 "en"），最后回退到默认语言（"en"）。
pub fn init(language: Option<&str>) {
    let locale = language
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
