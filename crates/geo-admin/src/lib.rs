//! # Geo Admin
//!
//! Per-principal views of the style administration pages.
//!
//! ## Overview
//!
//! The geo-admin crate handles:
//! - **Style list**: Styles a principal may administer
//! - **New style form**: Workspace preselection and whether a workspace is required
//! - **Edit style form**: Which fields a principal may change
//!
//! ## Architecture
//!
//! ```text
//! Catalog ──┐
//!           ├─ StyleAdmin ─→ StyleListView / NewStyleForm / EditStyleForm
//! RuleSet ──┘       │
//!                   └─ AccessFilter (geo-security)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use geo_admin::StyleAdmin;
//! use geo_catalog::{MemoryCatalog, StyleResource};
//! use geo_security::{Principal, SecurityConfig, StyleField};
//!
//! let mut catalog = MemoryCatalog::new();
//! catalog.add_style(StyleResource::global("point", "point.sld")).unwrap();
//!
//! let admin = StyleAdmin::from_config(&catalog, &SecurityConfig::default()).unwrap();
//! let superuser = Principal::new("admin", ["ROLE_ADMINISTRATOR"]);
//!
//! let form = admin.edit_style_form(&superuser, "point").unwrap();
//! assert!(form.is_enabled(StyleField::Workspace));
//! ```

pub mod admin;
pub mod error;
pub mod views;

// Re-export main types for convenience
pub use admin::StyleAdmin;
pub use error::{AdminError, AdminResult};
pub use views::{EditStyleForm, NewStyleForm, StyleListView};
