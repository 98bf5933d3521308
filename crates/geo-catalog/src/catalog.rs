//! Catalog contract and in-memory implementation
//!
//! The `Catalog` trait is the read side consumed by the admin surface.
//! `MemoryCatalog` keeps everything in insertion order, which is also
//! the order listings are returned in.

use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::style::StyleResource;
use crate::workspace::Workspace;

/// Read access to workspaces and styles.
pub trait Catalog {
    /// List styles in insertion order.
    ///
    /// `None` returns every style in the catalog; `Some(ws)` returns only
    /// the styles owned by `ws`.
    fn list_styles(&self, workspace: Option<&str>) -> Vec<StyleResource>;

    /// Styles that are not owned by any workspace.
    fn global_styles(&self) -> Vec<StyleResource>;

    /// Look up a style within exactly one scope.
    fn style_by_name(&self, workspace: Option<&str>, name: &str) -> Option<StyleResource>;

    /// Look up a style by name across all scopes, preferring the global one.
    fn find_style(&self, name: &str) -> Option<StyleResource>;

    /// All workspaces in insertion order.
    fn workspaces(&self) -> Vec<Workspace>;

    /// Look up a workspace by name.
    fn workspace_by_name(&self, name: &str) -> Option<Workspace>;
}

/// In-memory catalog.
///
/// # Example
///
/// ```
/// use geo_catalog::{Catalog, CatalogError, MemoryCatalog, StyleResource, Workspace};
///
/// let mut catalog = MemoryCatalog::new();
/// catalog.add_workspace(Workspace::new("sf")).unwrap();
/// catalog
///     .add_style(StyleResource::in_workspace("sf_style", "sf", "sf.sld"))
///     .unwrap();
///
/// let err = catalog
///     .add_style(StyleResource::in_workspace("sf_style", "sf", "other.sld"))
///     .unwrap_err();
/// assert_eq!(err, CatalogError::DuplicateStyle("sf:sf_style".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    workspaces: Vec<Workspace>,
    styles: Vec<StyleResource>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a workspace.
    ///
    /// # Errors
    ///
    /// * `InvalidName` if the name is empty
    /// * `DuplicateWorkspace` if a workspace with the same name exists
    pub fn add_workspace(&mut self, workspace: Workspace) -> CatalogResult<()> {
        if workspace.name.trim().is_empty() {
            return Err(CatalogError::InvalidName(workspace.name));
        }
        if self.workspace_by_name(&workspace.name).is_some() {
            return Err(CatalogError::DuplicateWorkspace(workspace.name));
        }

        debug!(workspace = %workspace.name, "Added workspace");
        self.workspaces.push(workspace);
        Ok(())
    }

    /// Add a style to the catalog.
    ///
    /// # Errors
    ///
    /// * `InvalidName` if the style name is empty
    /// * `UnknownWorkspace` if the owning workspace is not registered
    /// * `DuplicateStyle` if the scope already holds a style with this name
    pub fn add_style(&mut self, style: StyleResource) -> CatalogResult<()> {
        if style.name.trim().is_empty() {
            return Err(CatalogError::InvalidName(style.qualified_name()));
        }
        if let Some(ws) = style.workspace.as_deref() {
            if self.workspace_by_name(ws).is_none() {
                return Err(CatalogError::UnknownWorkspace(ws.to_string()));
            }
        }
        if self
            .style_by_name(style.workspace.as_deref(), &style.name)
            .is_some()
        {
            return Err(CatalogError::DuplicateStyle(style.qualified_name()));
        }

        debug!(style = %style.qualified_name(), "Added style");
        self.styles.push(style);
        Ok(())
    }

    /// Remove a style from one scope, returning it.
    pub fn remove_style(
        &mut self,
        workspace: Option<&str>,
        name: &str,
    ) -> CatalogResult<StyleResource> {
        let index = self
            .styles
            .iter()
            .position(|s| s.in_scope(workspace) && s.name == name)
            .ok_or_else(|| {
                CatalogError::StyleNotFound(match workspace {
                    Some(ws) => format!("{}:{}", ws, name),
                    None => name.to_string(),
                })
            })?;

        let removed = self.styles.remove(index);
        debug!(style = %removed.qualified_name(), "Removed style");
        Ok(removed)
    }

    /// Number of styles in the catalog.
    pub fn style_count(&self) -> usize {
        self.styles.len()
    }
}

impl Catalog for MemoryCatalog {
    fn list_styles(&self, workspace: Option<&str>) -> Vec<StyleResource> {
        match workspace {
            None => self.styles.clone(),
            Some(ws) => self
                .styles
                .iter()
                .filter(|s| s.in_scope(Some(ws)))
                .cloned()
                .collect(),
        }
    }

    fn global_styles(&self) -> Vec<StyleResource> {
        self.styles.iter().filter(|s| s.is_global()).cloned().collect()
    }

    fn style_by_name(&self, workspace: Option<&str>, name: &str) -> Option<StyleResource> {
        self.styles
            .iter()
            .find(|s| s.in_scope(workspace) && s.name == name)
            .cloned()
    }

    fn find_style(&self, name: &str) -> Option<StyleResource> {
        self.style_by_name(None, name)
            .or_else(|| self.styles.iter().find(|s| s.name == name).cloned())
    }

    fn workspaces(&self) -> Vec<Workspace> {
        self.workspaces.clone()
    }

    fn workspace_by_name(&self, name: &str) -> Option<Workspace> {
        self.workspaces.iter().find(|w| w.name == name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        catalog.add_workspace(Workspace::new("cite")).unwrap();
        catalog.add_workspace(Workspace::new("sf")).unwrap();
        catalog
            .add_style(StyleResource::global("point", "point.sld"))
            .unwrap();
        catalog
            .add_style(StyleResource::in_workspace("sf_style", "sf", "sf.sld"))
            .unwrap();
        catalog
            .add_style(StyleResource::in_workspace("cite_style", "cite", "cite.sld"))
            .unwrap();
        catalog
    }

    #[test]
    fn test_list_styles_preserves_order() {
        let catalog = catalog();
        let names: Vec<_> = catalog
            .list_styles(None)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["point", "sf_style", "cite_style"]);
    }

    #[test]
    fn test_list_styles_by_workspace() {
        let catalog = catalog();
        let sf = catalog.list_styles(Some("sf"));
        assert_eq!(sf.len(), 1);
        assert_eq!(sf[0].name, "sf_style");
        assert!(catalog.list_styles(Some("topp")).is_empty());
        assert_eq!(catalog.global_styles().len(), 1);
    }

    #[test]
    fn test_same_name_in_different_scopes() {
        let mut catalog = catalog();
        catalog
            .add_style(StyleResource::in_workspace("point", "cite", "cite_point.sld"))
            .unwrap();

        assert_eq!(
            catalog.style_by_name(Some("cite"), "point").unwrap().filename,
            "cite_point.sld"
        );
        // Global scope wins for unqualified lookups
        assert_eq!(catalog.find_style("point").unwrap().filename, "point.sld");
        assert_eq!(
            catalog.find_style("cite_style").unwrap().workspace.as_deref(),
            Some("cite")
        );
    }

    #[test]
    fn test_add_style_rejects_unknown_workspace() {
        let mut catalog = catalog();
        let err = catalog
            .add_style(StyleResource::in_workspace("x", "topp", "x.sld"))
            .unwrap_err();
        assert_eq!(err, CatalogError::UnknownWorkspace("topp".into()));
    }

    #[test]
    fn test_add_rejects_duplicates_and_empty_names() {
        let mut catalog = catalog();
        assert_eq!(
            catalog.add_workspace(Workspace::new("sf")).unwrap_err(),
            CatalogError::DuplicateWorkspace("sf".into())
        );
        assert_eq!(
            catalog
                .add_style(StyleResource::global("point", "again.sld"))
                .unwrap_err(),
            CatalogError::DuplicateStyle("point".into())
        );
        assert!(matches!(
            catalog.add_style(StyleResource::global("  ", "blank.sld")),
            Err(CatalogError::InvalidName(_))
        ));
        assert!(matches!(
            catalog.add_workspace(Workspace::new("")),
            Err(CatalogError::InvalidName(_))
        ));
    }

    #[test]
    fn test_remove_style() {
        let mut catalog = catalog();
        let removed = catalog.remove_style(Some("sf"), "sf_style").unwrap();
        assert_eq!(removed.name, "sf_style");
        assert_eq!(catalog.style_count(), 2);
        assert_eq!(
            catalog.remove_style(Some("sf"), "sf_style").unwrap_err(),
            CatalogError::StyleNotFound("sf:sf_style".into())
        );
    }
}
