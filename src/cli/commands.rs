//! # CLI Commands / CLI 命令
//!
//! - `test` - Runs the Playwright suite described by an executor config
//! - `version` - Prints the installed Playwright version
//!
//! - `test` - 运行执行器配置描述的 Playwright 测试套件
//! - `version` - 打印已安装的 Playwright 版本

pub mod version;
