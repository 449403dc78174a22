//! Key and group key validation
//!
//! Checks run in a fixed order: type, then length, then character class.
//! The first failing check is reported.

use serde_json::Value;

use crate::error::{HelperError, Result};
use crate::types::ValueKind;

pub use crate::limits::{DEFAULT_GROUP_KEY_MAX_LENGTH, DEFAULT_KEY_MAX_LENGTH};

/// Validate a general key: `[A-Za-z0-9_.-]+`, shorter than `max_length` characters.
pub fn validate_key(key: &str, max_length: usize) -> Result<()> {
    check_length(key, max_length)?;
    if !is_valid_charset(key, is_key_char) {
        tracing::debug!(key, "rejected key with invalid characters");
        return Err(HelperError::InvalidKeyCharacters {
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Validate a group key: `[A-Za-z0-9_-]+`, shorter than `max_length` characters.
///
/// Unlike [`validate_key`], dots are rejected.
pub fn validate_group_key(key: &str, max_length: usize) -> Result<()> {
    check_length(key, max_length)?;
    if !is_valid_charset(key, is_group_key_char) {
        tracing::debug!(key, "rejected group key with invalid characters");
        return Err(HelperError::InvalidGroupKeyCharacters {
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Validate a dynamically typed key with [`validate_key`].
///
/// Non-string values fail with [`HelperError::KeyNotString`].
pub fn validate_key_value(key: &Value, max_length: usize) -> Result<()> {
    validate_key(expect_str(key)?, max_length)
}

/// Validate a dynamically typed key with [`validate_group_key`].
pub fn validate_group_key_value(key: &Value, max_length: usize) -> Result<()> {
    validate_group_key(expect_str(key)?, max_length)
}

fn expect_str(key: &Value) -> Result<&str> {
    match key {
        Value::String(s) => Ok(s),
        other => Err(HelperError::KeyNotString {
            type_name: ValueKind::of(other).name(),
            value: other.to_string(),
        }),
    }
}

fn check_length(key: &str, max_length: usize) -> Result<()> {
    // Length is counted in characters, not bytes.
    if key.chars().count() >= max_length {
        tracing::debug!(max_length, "rejected key exceeding length limit");
        return Err(HelperError::KeyTooLong { max_length });
    }
    Ok(())
}

fn is_valid_charset(key: &str, allowed: fn(char) -> bool) -> bool {
    !key.is_empty() && key.chars().all(allowed)
}

fn is_key_char(c: char) -> bool {
    is_group_key_char(c) || c == '.'
}

fn is_group_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
