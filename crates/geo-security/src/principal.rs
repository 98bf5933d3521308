//! Principals
//!
//! A principal is the actor an access decision is made for: a username,
//! the roles resolved for it, and whether it authenticated at all.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An actor with a set of role names.
///
/// # Examples
///
/// ```
/// use geo_security::Principal;
///
/// let cite = Principal::new("cite", ["ROLE_CITE_ADMIN"]);
/// assert!(cite.is_authenticated());
/// assert!(cite.has_role("ROLE_CITE_ADMIN"));
///
/// let anonymous = Principal::anonymous();
/// assert!(!anonymous.is_authenticated());
/// assert!(anonymous.roles().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Username
    pub username: String,

    /// Role names (unique, unordered)
    #[serde(default)]
    roles: BTreeSet<String>,

    /// Whether the principal authenticated
    authenticated: bool,
}

impl Principal {
    /// Creates an authenticated principal with the given roles.
    pub fn new<I, S>(username: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username: username.into(),
            roles: roles.into_iter().map(Into::into).collect(),
            authenticated: true,
        }
    }

    /// The unauthenticated principal. It holds no roles.
    pub fn anonymous() -> Self {
        Self {
            username: "anonymous".to_string(),
            roles: BTreeSet::new(),
            authenticated: false,
        }
    }

    /// Check if the principal authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Check if the principal holds a role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Roles held by the principal.
    pub fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }
}
