//! # Version Module Unit Tests / Version 模块单元测试
//!
//! Tests for `parse_version`, covering plain versions, pre-release suffixes
//! and the two error kinds.
//!
//! `parse_version` 的测试，涵盖普通版本、预发布后缀以及两种错误类型。

use playwright_runner::version::{parse_version, Version, VersionError};

fn version(major: u64, minor: u64, patch: u64) -> Version {
    Version {
        major,
        minor,
        patch,
        pre_release_label: None,
        pre_release_type: None,
        pre_release_increment: None,
    }
}

#[test]
fn test_parses_1_2_3() {
    assert_eq!(parse_version("1.2.3").unwrap(), version(1, 2, 3));
}

#[test]
fn test_parses_10_2_03() {
    assert_eq!(parse_version("10.2.03").unwrap(), version(10, 2, 3));
}

#[test]
fn test_parses_1_2_3_alpha() {
    assert_eq!(
        parse_version("1.2.3-alpha").unwrap(),
        Version {
            pre_release_label: Some("alpha".to_string()),
            pre_release_type: Some("alpha".to_string()),
            ..version(1, 2, 3)
        }
    );
}

#[test]
fn test_parses_1_2_3_alpha_dot_1() {
    assert_eq!(
        parse_version("1.2.3-alpha.1").unwrap(),
        Version {
            pre_release_label: Some("alpha.1".to_string()),
            pre_release_type: Some("alpha".to_string()),
            pre_release_increment: Some(1),
            ..version(1, 2, 3)
        }
    );
}

#[test]
fn test_parses_1_2_3_alpha_dash_1() {
    assert_eq!(
        parse_version("1.2.3-alpha-1").unwrap(),
        Version {
            pre_release_label: Some("alpha-1".to_string()),
            pre_release_type: Some("alpha".to_string()),
            pre_release_increment: Some(1),
            ..version(1, 2, 3)
        }
    );
}

#[test]
fn test_multi_digit_increment() {
    let v = parse_version("1.41.0-beta.1700000000").unwrap();
    assert_eq!(v.pre_release_type.as_deref(), Some("beta"));
    assert_eq!(v.pre_release_increment, Some(1_700_000_000));
}

#[test]
fn test_fails_on_empty_string() {
    let err = parse_version("").unwrap_err();
    assert_eq!(err, VersionError::InvalidVersion);
    assert_eq!(err.to_string(), "invalid version string");
}

#[test]
fn test_fails_on_absent_input() {
    let absent: Option<&str> = None;
    assert_eq!(parse_version(absent), Err(VersionError::InvalidVersion));
}

#[test]
fn test_fails_on_invalid_format() {
    let err = parse_version("invalid").unwrap_err();
    assert_eq!(err, VersionError::InvalidFormat);
    assert_eq!(err.to_string(), "invalid version format");
}

#[test]
fn test_from_str_uses_the_same_grammar() {
    assert_eq!("1.2.3".parse::<Version>(), Ok(version(1, 2, 3)));
    assert_eq!("".parse::<Version>(), Err(VersionError::InvalidVersion));
}
