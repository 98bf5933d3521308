//! Workspace domain model
//!
//! Workspaces are namespaces that partition catalog resources. Scoped
//! administrators are granted rights per workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog workspace.
///
/// # Examples
///
/// ```
/// use geo_catalog::Workspace;
///
/// let ws = Workspace::new("cite");
/// assert_eq!(ws.name, "cite");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workspace {
    /// Unique identifier for the workspace
    pub id: Uuid,

    /// Workspace name (unique within the catalog)
    pub name: String,

    /// When the workspace was created
    pub created_at: DateTime<Utc>,
}

impl Workspace {
    /// Creates a new workspace with a fresh UUID v7 ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_ids_are_unique() {
        let a = Workspace::new("cite");
        let b = Workspace::new("cite");
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }
}
