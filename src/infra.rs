//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Playwright Runner,
//! including process execution, package manifest access, and i18n support.
//!
//! 此模块为 Playwright Runner 提供基础设施服务，
//! 包括进程执行、包清单访问和国际化支持。

pub mod command;
pub mod manifest;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
