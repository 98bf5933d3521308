//! # Rule Sets
//!
//! An ordered collection of access rules with any-match-wins evaluation,
//! plus loading from `layers.properties`-style rule files:
//!
//! ```text
//! # comment
//! *.*.r=*
//! *.*.a=ROLE_ADMINISTRATOR
//! cite.*.a=ROLE_CITE_ADMIN,ROLE_SF_ADMIN
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{SecurityError, SecurityResult};
use crate::mode::AccessMode;
use crate::rule::AccessRule;

/// Ordered collection of access rules.
///
/// A request is permitted iff some rule matches the resource and mode and
/// grants one of the requesting roles. Rule order never changes a decision.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use geo_security::{AccessMode, RuleSet};
///
/// let rules = RuleSet::from_properties("cite.*.a=ROLE_CITE_ADMIN").unwrap();
/// let roles: BTreeSet<String> = ["ROLE_CITE_ADMIN".to_string()].into();
///
/// assert!(rules.permits(&roles, "cite", "*", AccessMode::Admin));
/// assert!(!rules.permits(&roles, "sf", "*", AccessMode::Admin));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<AccessRule>,
}

impl RuleSet {
    /// Create an empty rule set. Every request is denied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn add(&mut self, rule: AccessRule) {
        self.rules.push(rule);
    }

    /// Append a rule, builder style.
    pub fn with_rule(mut self, rule: AccessRule) -> Self {
        self.add(rule);
        self
    }

    /// All rules in insertion order.
    pub fn rules(&self) -> &[AccessRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check if the roles may access `workspace.layer` in the given mode.
    pub fn permits(
        &self,
        roles: &BTreeSet<String>,
        workspace: &str,
        layer: &str,
        mode: AccessMode,
    ) -> bool {
        let granted = self
            .rules
            .iter()
            .find(|rule| rule.matches_resource(workspace, layer, mode) && rule.grants_any(roles));

        match granted {
            Some(rule) => {
                trace!(workspace, layer, %mode, rule = %rule, "Access granted");
                true
            }
            None => {
                trace!(workspace, layer, %mode, "No rule grants access");
                false
            }
        }
    }

    /// Check if the roles administer a whole workspace.
    ///
    /// Only ADMIN rules whose layer pattern is the bare `*` count. A rule
    /// scoped to some layers never grants the workspace.
    pub fn administers(&self, roles: &BTreeSet<String>, workspace: &str) -> bool {
        let granted = self.rules.iter().find(|rule| {
            rule.mode == AccessMode::Admin
                && rule.layer.is_wildcard()
                && rule.workspace.matches(workspace)
                && rule.grants_any(roles)
        });

        match granted {
            Some(rule) => {
                trace!(workspace, rule = %rule, "Workspace administration granted");
                true
            }
            None => {
                trace!(workspace, "No workspace-wide admin rule");
                false
            }
        }
    }

    /// Workspaces, out of `candidates`, the roles administer.
    ///
    /// Candidate order is preserved.
    pub fn admin_workspaces<'a, I>(&self, roles: &BTreeSet<String>, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .filter(|ws| self.administers(roles, ws))
            .map(str::to_string)
            .collect()
    }

    /// Parse a rule file.
    ///
    /// Blank lines and lines starting with `#` or `!` are skipped. The
    /// catalog `mode` entry is accepted and ignored. A key that repeats
    /// adds its roles to the rule declared first.
    ///
    /// # Errors
    ///
    /// `MalformedRule` with the 1-based line number for any line that is
    /// not `workspace.layer.mode=role[,role...]`.
    pub fn from_properties(text: &str) -> SecurityResult<Self> {
        let mut set = RuleSet::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let entry = raw.trim();
            if entry.is_empty() || entry.starts_with('#') || entry.starts_with('!') {
                continue;
            }

            let malformed = |message: String| SecurityError::MalformedRule { line, message };

            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| malformed("expected 'key=value'".to_string()))?;
            let key = key.trim();

            if key == "mode" {
                debug!(value = value.trim(), "Ignoring catalog mode entry");
                continue;
            }

            let parts: Vec<&str> = key.split('.').map(str::trim).collect();
            let [workspace, layer, code] = parts.as_slice() else {
                return Err(malformed(format!(
                    "key {key:?} must be workspace.layer.mode"
                )));
            };
            let mode = AccessMode::parse(code)
                .ok_or_else(|| malformed(format!("unknown access mode {code:?}")))?;

            let roles: Vec<&str> = value
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .collect();
            if roles.is_empty() {
                return Err(malformed(format!("no roles for {key:?}")));
            }

            let rule = AccessRule::new(workspace, layer, mode, roles)
                .map_err(|e| malformed(e.to_string()))?;

            match set.rules.iter_mut().find(|r| r.key() == rule.key()) {
                Some(existing) => {
                    for role in rule.roles {
                        if !existing.roles.contains(&role) {
                            existing.roles.push(role);
                        }
                    }
                }
                None => set.add(rule),
            }
        }

        debug!(rules = set.len(), "Parsed access rules");
        Ok(set)
    }

    /// Load a rule file from disk.
    pub fn load(path: impl AsRef<Path>) -> SecurityResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loading access rules");
        Self::from_properties(&text)
    }

    /// Render the rule set in rule-file form, one rule per line.
    ///
    /// Rules sharing a key are merged onto one line.
    pub fn to_properties(&self) -> String {
        let mut lines: Vec<(String, Vec<&str>)> = Vec::new();
        for rule in &self.rules {
            let roles = rule.roles.iter().map(|r| r.as_str());
            match lines.iter_mut().find(|(key, _)| *key == rule.key()) {
                Some((_, existing)) => {
                    for role in roles {
                        if !existing.contains(&role) {
                            existing.push(role);
                        }
                    }
                }
                None => lines.push((rule.key(), roles.collect())),
            }
        }

        lines
            .into_iter()
            .map(|(key, roles)| format!("{}={}\n", key, roles.join(",")))
            .collect()
    }
}

impl FromIterator<AccessRule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = AccessRule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
