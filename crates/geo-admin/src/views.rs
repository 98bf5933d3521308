//! View models for the style admin pages
//!
//! Each view is the data a page renders for one principal: which styles
//! are listed, how the workspace selector behaves on the new-style form,
//! and which edit-form fields are enabled.

use geo_catalog::StyleResource;
use geo_security::{EditableFields, StyleField};
use serde::{Deserialize, Serialize};

/// Styles listed on the style page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleListView {
    items: Vec<StyleResource>,
}

impl StyleListView {
    /// Create a view over already-filtered styles.
    pub fn new(items: Vec<StyleResource>) -> Self {
        Self { items }
    }

    /// Number of listed styles.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Listed styles in catalog order.
    pub fn items(&self) -> &[StyleResource] {
        &self.items
    }

    /// Names of the listed styles in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|s| s.name.as_str()).collect()
    }

    /// Check if a style with this name is listed.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|s| s.name == name)
    }
}

/// Workspace selector state of the new-style form.
///
/// # Examples
///
/// ```
/// use geo_admin::NewStyleForm;
///
/// let form = NewStyleForm::unrestricted(vec!["cite".into(), "sf".into()]);
/// assert!(form.workspace.is_none());
/// assert!(form.null_valid);
/// assert!(!form.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStyleForm {
    /// Preselected workspace; `None` means a global style.
    pub workspace: Option<String>,

    /// Workspaces offered by the selector, in catalog order.
    pub choices: Vec<String>,

    /// Whether "no workspace" may be chosen.
    pub null_valid: bool,

    /// Whether a workspace must be chosen.
    pub required: bool,
}

impl NewStyleForm {
    /// Form for principals that may create global styles.
    pub fn unrestricted(choices: Vec<String>) -> Self {
        Self {
            workspace: None,
            choices,
            null_valid: true,
            required: false,
        }
    }

    /// Form for principals limited to the workspaces they administer.
    ///
    /// The first choice is preselected. With no choices nothing is
    /// selected and the form cannot be submitted.
    pub fn scoped(choices: Vec<String>) -> Self {
        Self {
            workspace: choices.first().cloned(),
            choices,
            null_valid: false,
            required: true,
        }
    }

    /// Check if the form can produce a style in `workspace`.
    pub fn accepts(&self, workspace: Option<&str>) -> bool {
        match workspace {
            None => self.null_valid,
            Some(ws) => self.choices.iter().any(|c| c == ws),
        }
    }
}

/// Edit form for a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditStyleForm {
    /// The style being edited.
    pub style: StyleResource,

    /// Fields the principal may change.
    pub fields: EditableFields,
}

impl EditStyleForm {
    /// Check if a form field is enabled.
    pub fn is_enabled(&self, field: StyleField) -> bool {
        self.fields.is_enabled(field)
    }

    /// Cancel is always enabled.
    pub fn cancel_enabled(&self) -> bool {
        self.fields.cancel_enabled()
    }

    /// Check if every field is locked.
    pub fn is_read_only(&self) -> bool {
        self.fields.is_empty()
    }
}
