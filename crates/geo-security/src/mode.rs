//! # Access Modes
//!
//! Defines the modes an access rule can grant on catalog resources.

use serde::{Deserialize, Serialize};

/// Modes of access to catalog resources.
///
/// - **Read**: View the resource
/// - **Write**: Modify the resource
/// - **Admin**: Administer the resource's workspace through the admin surface
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Read/view resource.
    Read,

    /// Modify resource.
    Write,

    /// Administer resources in a workspace.
    ///
    /// Grants access to the workspace's resources on the admin surface.
    Admin,
}

impl AccessMode {
    /// Get the string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessMode::Read => "read",
            AccessMode::Write => "write",
            AccessMode::Admin => "admin",
        }
    }

    /// Single-letter code used in rule files (`r`, `w`, `a`).
    pub fn code(&self) -> char {
        match self {
            AccessMode::Read => 'r',
            AccessMode::Write => 'w',
            AccessMode::Admin => 'a',
        }
    }

    /// Parse mode from a word or rule-file code.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(AccessMode)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use geo_security::AccessMode;
    ///
    /// assert_eq!(AccessMode::parse("read"), Some(AccessMode::Read));
    /// assert_eq!(AccessMode::parse("w"), Some(AccessMode::Write));
    /// assert_eq!(AccessMode::parse("ADMIN"), Some(AccessMode::Admin));
    /// assert_eq!(AccessMode::parse("delete"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "r" | "read" => Some(AccessMode::Read),
            "w" | "write" => Some(AccessMode::Write),
            "a" | "admin" => Some(AccessMode::Admin),
            _ => None,
        }
    }

    /// Get all modes.
    pub fn all() -> Vec<Self> {
        vec![AccessMode::Read, AccessMode::Write, AccessMode::Admin]
    }
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
