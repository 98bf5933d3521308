//! # Access Rules
//!
//! An access rule grants one access mode on a `workspace.layer` pattern to
//! a list of role patterns. Patterns are shell-style globs.
//!
//! ```text
//! AccessRule = workspace_glob . layer_glob . mode = role_glob[, role_glob...]
//!
//! Examples:
//!   *.*.r    = *                    - everybody reads everything
//!   *.*.a    = ROLE_ADMINISTRATOR   - administrators administer everything
//!   cite.*.a = ROLE_CITE_ADMIN      - cite admins administer cite
//! ```

use globset::{Glob, GlobMatcher};
use serde::{Deserialize, Serialize};

use crate::error::{SecurityError, SecurityResult};
use crate::mode::AccessMode;

/// The pattern that matches anything.
pub const ANY: &str = "*";

/// A compiled glob pattern that remembers its source text.
///
/// Matching is case-sensitive and `*` matches any string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern {
    source: String,
    /// `None` for the bare wildcard.
    matcher: Option<GlobMatcher>,
}

impl Pattern {
    /// Compile a pattern.
    ///
    /// # Errors
    ///
    /// `InvalidPattern` if the text is empty or not a valid glob.
    pub fn new(source: impl Into<String>) -> SecurityResult<Self> {
        let source = source.into().trim().to_string();
        if source.is_empty() {
            return Err(SecurityError::InvalidPattern {
                pattern: source,
                message: "pattern is empty".to_string(),
            });
        }
        if source == ANY {
            return Ok(Self::any());
        }

        let matcher = Glob::new(&source)
            .map_err(|e| SecurityError::InvalidPattern {
                pattern: source.clone(),
                message: e.to_string(),
            })?
            .compile_matcher();

        Ok(Self {
            source,
            matcher: Some(matcher),
        })
    }

    /// Pattern that matches anything.
    pub fn any() -> Self {
        Self {
            source: ANY.to_string(),
            matcher: None,
        }
    }

    /// Check if this is the bare wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.matcher.is_none()
    }

    /// Check if the pattern matches a value.
    pub fn matches(&self, value: &str) -> bool {
        match &self.matcher {
            None => true,
            Some(matcher) => matcher.is_match(value),
        }
    }

    /// The pattern text.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl TryFrom<String> for Pattern {
    type Error = SecurityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Pattern::new(value)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// A policy tuple granting one access mode on matching resources to
/// matching roles.
///
/// # Example
///
/// ```
/// use geo_security::{AccessMode, AccessRule};
///
/// let rule = AccessRule::new("cite", "*", AccessMode::Admin, ["ROLE_CITE_ADMIN"]).unwrap();
/// assert!(rule.matches_resource("cite", "*", AccessMode::Admin));
/// assert!(!rule.matches_resource("sf", "*", AccessMode::Admin));
/// assert!(rule.grants_role("ROLE_CITE_ADMIN"));
/// assert_eq!(rule.key(), "cite.*.a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRule {
    /// Workspace pattern.
    pub workspace: Pattern,
    /// Layer pattern within the workspace.
    pub layer: Pattern,
    /// Mode granted by this rule.
    pub mode: AccessMode,
    /// Roles the rule applies to.
    pub roles: Vec<Pattern>,
}

impl AccessRule {
    /// Create a rule, compiling every pattern.
    ///
    /// # Errors
    ///
    /// `InvalidPattern` if any pattern fails to compile.
    pub fn new<I, S>(
        workspace: &str,
        layer: &str,
        mode: AccessMode,
        roles: I,
    ) -> SecurityResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = roles
            .into_iter()
            .map(Pattern::new)
            .collect::<SecurityResult<Vec<_>>>()?;

        Ok(Self {
            workspace: Pattern::new(workspace)?,
            layer: Pattern::new(layer)?,
            mode,
            roles,
        })
    }

    /// Check if the rule covers a resource for the requested mode.
    ///
    /// Modes must match exactly; no mode implies another.
    pub fn matches_resource(&self, workspace: &str, layer: &str, mode: AccessMode) -> bool {
        self.mode == mode && self.workspace.matches(workspace) && self.layer.matches(layer)
    }

    /// Check if the rule grants access to a single role.
    pub fn grants_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.matches(role))
    }

    /// Check if the rule grants access to any of the given roles.
    ///
    /// A wildcard role pattern grants access regardless of the roles held.
    pub fn grants_any<'a, I>(&self, roles: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        if self.roles.iter().any(Pattern::is_wildcard) {
            return true;
        }
        roles.into_iter().any(|role| self.grants_role(role))
    }

    /// Rule-file key (`workspace.layer.code`).
    pub fn key(&self) -> String {
        format!("{}.{}.{}", self.workspace, self.layer, self.mode.code())
    }

    /// Rule-file value (comma-separated role patterns).
    pub fn roles_value(&self) -> String {
        self.roles
            .iter()
            .map(Pattern::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for AccessRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key(), self.roles_value())
    }
}
