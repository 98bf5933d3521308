//! # Geo Catalog
//!
//! This crate provides the catalog of workspaces and styles that the
//! administrative surface operates on.
//!
//! ## Overview
//!
//! The geo-catalog crate handles:
//! - **Workspaces**: Namespaces that partition resources for scoped administration
//! - **Styles**: Named styling definitions, either global or owned by one workspace
//! - **Catalog**: Lookup contract plus an in-memory implementation
//!
//! ## Architecture
//!
//! ```text
//! MemoryCatalog
//!   ├─ Workspace ("cite", "sf", ...)
//!   └─ StyleResource
//!         ├─ global           (workspace = None)
//!         └─ workspace-owned  (workspace = Some("cite"))
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use geo_catalog::{Catalog, MemoryCatalog, StyleResource, Workspace};
//!
//! let mut catalog = MemoryCatalog::new();
//! catalog.add_workspace(Workspace::new("cite")).unwrap();
//! catalog.add_style(StyleResource::global("point", "point.sld")).unwrap();
//! catalog
//!     .add_style(StyleResource::in_workspace("cite_style", "cite", "cite.sld"))
//!     .unwrap();
//!
//! assert_eq!(catalog.list_styles(None).len(), 2);
//! assert_eq!(catalog.list_styles(Some("cite")).len(), 1);
//! ```
//!
//! ## Integration with geo-security
//!
//! Catalog contents are plain values; `geo-security` filters them per
//! principal and `geo-admin` projects the result onto the admin forms.

pub mod catalog;
pub mod error;
pub mod style;
pub mod workspace;

// Re-export main types for convenience
pub use catalog::{Catalog, MemoryCatalog};
pub use error::{CatalogError, CatalogResult};
pub use style::StyleResource;
pub use workspace::Workspace;
