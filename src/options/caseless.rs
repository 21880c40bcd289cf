//! Case-insensitive ordering used for option names and combo choices
//!
//! The UCI protocol treats option names as case-insensitive, and the same
//! folding applies when a combo value is matched against its choices. Both
//! go through [`cmp_caseless`] so lookup and validation can never disagree.

use std::cmp::Ordering;
use std::fmt;

/// Compare two strings with ASCII case folding.
///
/// Letters compare equal regardless of case; every other character is
/// compared by code point. A proper prefix orders before the longer string.
pub fn cmp_caseless(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()))
}

/// Equivalence induced by [`cmp_caseless`]
pub fn eq_caseless(a: &str, b: &str) -> bool {
    cmp_caseless(a, b) == Ordering::Equal
}

/// Map key that keeps its original spelling but orders case-insensitively
#[derive(Debug, Clone)]
pub struct CaselessKey(String);

impl CaselessKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as it was first spelled
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for CaselessKey {
    fn eq(&self, other: &Self) -> bool {
        eq_caseless(&self.0, &other.0)
    }
}

impl Eq for CaselessKey {}

impl PartialOrd for CaselessKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CaselessKey {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_caseless(&self.0, &other.0)
    }
}

impl From<&str> for CaselessKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for CaselessKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for CaselessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
