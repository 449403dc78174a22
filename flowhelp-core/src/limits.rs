//! Key length limits and configuration

use serde::Deserialize;

use crate::error::Result;
use crate::key;

/// Default maximum length for general keys
pub const DEFAULT_KEY_MAX_LENGTH: usize = 250;

/// Default maximum length for group keys
pub const DEFAULT_GROUP_KEY_MAX_LENGTH: usize = 200;

/// Length limits applied by the key validators
///
/// A key is rejected once its length in characters reaches the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyLimits {
    /// Maximum length for general keys (default: 250)
    pub max_key_length: usize,
    /// Maximum length for group keys (default: 200)
    pub max_group_key_length: usize,
}

impl Default for KeyLimits {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_KEY_MAX_LENGTH,
            max_group_key_length: DEFAULT_GROUP_KEY_MAX_LENGTH,
        }
    }
}

impl KeyLimits {
    /// Validate a general key against these limits
    pub fn validate_key(&self, k: &str) -> Result<()> {
        key::validate_key(k, self.max_key_length)
    }

    /// Validate a group key against these limits
    pub fn validate_group_key(&self, k: &str) -> Result<()> {
        key::validate_group_key(k, self.max_group_key_length)
    }
}
