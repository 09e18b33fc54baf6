//! # Version Parsing Module / 版本解析模块
//!
//! This module parses dotted version strings such as `1.2.3` or `1.2.3-alpha.1`
//! into a structured [`Version`]. The accepted grammar is deliberately looser
//! than full semantic versioning: a pre-release suffix may separate its
//! increment with either `.` or `-` (`1.2.3-alpha-1`).
//!
//! 此模块将 `1.2.3` 或 `1.2.3-alpha.1` 这样的点分版本字符串解析为结构化的 [`Version`]。
//! 接受的语法比完整的语义化版本更宽松：预发布后缀的序号可以用 `.` 或 `-` 分隔
//! （`1.2.3-alpha-1`）。
//!
//! The match is not anchored: the first `<digits>.<digits>.<digits>` found
//! anywhere in the input is used, so `v1.2.3` parses and trailing text is ignored.
//!
//! 匹配不是锚定的：使用输入中任意位置出现的第一个 `<digits>.<digits>.<digits>`，
//! 因此 `v1.2.3` 可以被解析，尾随文本会被忽略。

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced by [`parse_version`].
/// [`parse_version`] 产生的错误。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The input was absent or empty.
    /// 输入缺失或为空。
    #[error("invalid version string")]
    InvalidVersion,
    /// The input was present but did not contain a recognizable version.
    /// 输入存在但不包含可识别的版本。
    #[error("invalid version format")]
    InvalidFormat,
}

/// A parsed version with an optional pre-release suffix.
/// 解析后的版本，带有可选的预发布后缀。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// The whole suffix after `-`, verbatim (e.g. `alpha.1`).
    /// `-` 之后的完整后缀，原样保留（例如 `alpha.1`）。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_release_label: Option<String>,
    /// The leading alphabetic run of the label (e.g. `alpha`).
    /// 标签开头的字母部分（例如 `alpha`）。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_release_type: Option<String>,
    /// The numeric run after the separator, if the label has one.
    /// 分隔符之后的数字部分（如果标签包含）。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_release_increment: Option<u64>,
}

impl Version {
    /// Returns `true` if this version carries a pre-release label.
    /// 如果此版本带有预发布标签，则返回 `true`。
    pub fn is_prerelease(&self) -> bool {
        self.pre_release_label.is_some()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(label) = &self.pre_release_label {
            write!(f, "-{label}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Parses a version string into a [`Version`].
///
/// Accepts either a `&str` or an `Option<&str>`; `None` and `""` both fail with
/// [`VersionError::InvalidVersion`]. Input without a `<digits>.<digits>.<digits>`
/// sequence fails with [`VersionError::InvalidFormat`].
///
/// 将版本字符串解析为 [`Version`]。
/// 接受 `&str` 或 `Option<&str>`；`None` 和 `""` 都会以 [`VersionError::InvalidVersion`] 失败。
/// 不包含 `<digits>.<digits>.<digits>` 序列的输入会以 [`VersionError::InvalidFormat`] 失败。
///
/// # Examples / 示例
/// ```
/// use playwright_runner::core::version::parse_version;
///
/// let v = parse_version("1.2.3-alpha.1").unwrap();
/// assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
/// assert_eq!(v.pre_release_type.as_deref(), Some("alpha"));
/// assert_eq!(v.pre_release_increment, Some(1));
/// ```
pub fn parse_version<'a>(input: impl Into<Option<&'a str>>) -> Result<Version, VersionError> {
    let input = match input.into() {
        Some(s) if !s.is_empty() => s,
        _ => return Err(VersionError::InvalidVersion),
    };

    let bytes = input.as_bytes();
    (0..bytes.len())
        .find_map(|start| match_at(bytes, start))
        .ok_or(VersionError::InvalidFormat)?
}

/// Attempts to match the version grammar starting exactly at `start`.
/// Returns `None` when there is no match at this position, so the caller can
/// move on to the next one.
fn match_at(bytes: &[u8], start: usize) -> Option<Result<Version, VersionError>> {
    let mut cursor = Cursor { bytes, pos: start };

    let major = cursor.digits()?;
    cursor.eat(b'.')?;
    let minor = cursor.digits()?;
    cursor.eat(b'.')?;
    let patch = cursor.digits()?;

    let mut version = match (to_number(major), to_number(minor), to_number(patch)) {
        (Some(major), Some(minor), Some(patch)) => Version {
            major,
            minor,
            patch,
            pre_release_label: None,
            pre_release_type: None,
            pre_release_increment: None,
        },
        _ => return Some(Err(VersionError::InvalidFormat)),
    };

    // A `-` not followed by a lowercase letter still matches, but yields no label.
    if cursor.eat(b'-').is_none() {
        return Some(Ok(version));
    }
    let label_start = cursor.pos;
    let Some(kind) = cursor.lowercase() else {
        return Some(Ok(version));
    };

    let mut increment = None;
    let before_separator = cursor.pos;
    if cursor.eat(b'.').or_else(|| cursor.eat(b'-')).is_some() {
        match cursor.digits() {
            Some(digits) => match to_number(digits) {
                Some(n) => increment = Some(n),
                None => return Some(Err(VersionError::InvalidFormat)),
            },
            None => cursor.pos = before_separator,
        }
    }

    version.pre_release_label = Some(cursor.text_from(label_start));
    version.pre_release_type = Some(kind.to_string());
    version.pre_release_increment = increment;
    Some(Ok(version))
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn eat(&mut self, expected: u8) -> Option<()> {
        if self.bytes.get(self.pos) == Some(&expected) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> Option<&'a str> {
        let start = self.pos;
        while self.bytes.get(self.pos).is_some_and(|b| pred(*b)) {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        // ASCII-only runs are always valid UTF-8 boundaries.
        let bytes: &'a [u8] = self.bytes;
        std::str::from_utf8(&bytes[start..self.pos]).ok()
    }

    fn digits(&mut self) -> Option<&'a str> {
        self.take_while(|b| b.is_ascii_digit())
    }

    fn lowercase(&mut self) -> Option<&'a str> {
        self.take_while(|b| b.is_ascii_lowercase())
    }

    fn text_from(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned()
    }
}

/// Parses a run of ASCII digits; leading zeros are accepted and stripped.
fn to_number(digits: &str) -> Option<u64> {
    digits.parse().ok()
}
