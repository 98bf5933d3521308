//! # Geo Security
//!
//! Rule-based, workspace-scoped access control for the administrative
//! surface of a geospatial catalog.
//!
//! ## Overview
//!
//! The geo-security crate handles:
//! - **Modes**: READ, WRITE and ADMIN access
//! - **Rules**: Glob patterns over workspace, layer and role
//! - **Rule Sets**: Any-match-wins evaluation and rule-file loading
//! - **Principals**: Users with their resolved roles
//! - **Access Filter**: Style visibility and editable fields per principal
//!
//! ## Architecture
//!
//! ```text
//! AccessRule = workspace_glob . layer_glob . mode = role_glob, ...
//!
//! Examples:
//!   "*.*.a=ROLE_ADMINISTRATOR"   - administrators administer everything
//!   "cite.*.a=ROLE_CITE_ADMIN"   - cite admins administer the cite workspace
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use geo_catalog::StyleResource;
//! use geo_security::{AccessFilter, MemoryUserStore, RuleSet, StyleField};
//!
//! let rules = RuleSet::from_properties("\
//! *.*.a=ROLE_ADMINISTRATOR
//! cite.*.a=ROLE_CITE_ADMIN
//! ").unwrap();
//!
//! let mut users = MemoryUserStore::new();
//! users.add_user("cite", "cite", ["ROLE_CITE_ADMIN"]).unwrap();
//! let cite = users.authenticate("cite", "cite").unwrap();
//!
//! let filter = AccessFilter::new(&rules, "ROLE_ADMINISTRATOR");
//! let point = StyleResource::global("point", "point.sld");
//!
//! // Global styles are visible but locked for workspace administrators
//! assert!(filter.is_visible(&cite, &point));
//! let fields = filter.editable_fields(&cite, &point);
//! assert!(!fields.is_enabled(StyleField::Name));
//! assert!(fields.cancel_enabled());
//! ```
//!
//! ## Failing closed
//!
//! Access decisions never return errors. Unknown roles, missing rules,
//! unknown workspaces and unauthenticated principals all resolve to
//! "not visible" and "not editable".

pub mod config;
pub mod error;
pub mod filter;
pub mod mode;
pub mod principal;
pub mod rule;
pub mod ruleset;
pub mod users;

// Re-export main types for convenience
pub use config::{ConfigError, SecurityConfig, DEFAULT_SUPERUSER_ROLE};
pub use error::{SecurityError, SecurityResult};
pub use filter::{AccessFilter, EditableFields, StyleField};
pub use mode::AccessMode;
pub use principal::Principal;
pub use rule::{AccessRule, Pattern};
pub use ruleset::RuleSet;
pub use users::{MemoryUserStore, RoleService};
