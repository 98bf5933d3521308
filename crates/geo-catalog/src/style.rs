//! Style domain model
//!
//! A style is a named styling definition backed by a file. Styles are
//! either global or owned by exactly one workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named styling definition.
///
/// The pair `(workspace, name)` is the style's scope key: names are unique
/// within a scope, so a global style and a workspace style may share a name.
///
/// # Examples
///
/// ```
/// use geo_catalog::StyleResource;
///
/// let global = StyleResource::global("point", "point.sld");
/// assert!(global.is_global());
/// assert_eq!(global.qualified_name(), "point");
///
/// let scoped = StyleResource::in_workspace("cite_style", "cite", "cite.sld");
/// assert_eq!(scoped.workspace.as_deref(), Some("cite"));
/// assert_eq!(scoped.qualified_name(), "cite:cite_style");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleResource {
    /// Unique identifier for the style
    pub id: Uuid,

    /// Style name (unique within its owning scope)
    pub name: String,

    /// Owning workspace; `None` for global styles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,

    /// File holding the style definition
    pub filename: String,

    /// When the style was created
    pub created_at: DateTime<Utc>,
}

impl StyleResource {
    /// Creates a new style.
    ///
    /// # Arguments
    ///
    /// * `name` - Style name
    /// * `workspace` - Owning workspace, or `None` for a global style
    /// * `filename` - File holding the definition
    pub fn new(
        name: impl Into<String>,
        workspace: Option<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            workspace,
            filename: filename.into(),
            created_at: Utc::now(),
        }
    }

    /// Creates a global style.
    pub fn global(name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self::new(name, None, filename)
    }

    /// Creates a style owned by a workspace.
    pub fn in_workspace(
        name: impl Into<String>,
        workspace: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self::new(name, Some(workspace.into()), filename)
    }

    /// Check if this style is global (not owned by any workspace).
    pub fn is_global(&self) -> bool {
        self.workspace.is_none()
    }

    /// Check if this style lives in the given scope.
    pub fn in_scope(&self, workspace: Option<&str>) -> bool {
        self.workspace.as_deref() == workspace
    }

    /// Name prefixed with the owning workspace (`ws:name`), or the bare
    /// name for global styles.
    pub fn qualified_name(&self) -> String {
        match &self.workspace {
            Some(ws) => format!("{}:{}", ws, self.name),
            None => self.name.clone(),
        }
    }
}
