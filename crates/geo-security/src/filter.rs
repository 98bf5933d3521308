//! # Access Filter
//!
//! Decides which styles a principal sees on the admin surface and which
//! style fields it may edit.
//!
//! ## Visibility
//!
//! ```text
//! unauthenticated              -> nothing
//! holds the superuser role     -> everything
//! otherwise                    -> global styles
//!                                 + styles of workspaces the principal administers
//! ```
//!
//! A principal administers workspace `W` when some ADMIN rule whose
//! workspace pattern matches `W` and whose layer pattern is the bare `*`
//! grants one of its roles (or any role). Layer-scoped ADMIN rules never
//! open a whole workspace.
//!
//! ## Editing
//!
//! Editing is all-or-nothing: either every field is editable or none is.
//! The cancel affordance is always available.

use std::collections::BTreeSet;

use geo_catalog::StyleResource;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::principal::Principal;
use crate::ruleset::RuleSet;

/// Editable fields of the style edit form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StyleField {
    /// Style name.
    Name,
    /// Owning workspace.
    Workspace,
    /// Copy-from-existing-style selector.
    Copy,
}

impl StyleField {
    /// Get the string representation of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleField::Name => "name",
            StyleField::Workspace => "workspace",
            StyleField::Copy => "copy",
        }
    }

    /// Get all fields.
    pub fn all() -> Vec<Self> {
        vec![StyleField::Name, StyleField::Workspace, StyleField::Copy]
    }
}

/// Fields a principal may edit on one style.
///
/// # Example
///
/// ```
/// use geo_security::{EditableFields, StyleField};
///
/// let locked = EditableFields::none();
/// assert!(locked.is_empty());
/// assert!(!locked.is_enabled(StyleField::Name));
/// assert!(locked.cancel_enabled());
///
/// let open = EditableFields::all();
/// assert!(open.is_enabled(StyleField::Copy));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableFields {
    fields: BTreeSet<StyleField>,
}

impl EditableFields {
    /// No editable fields.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every field editable.
    pub fn all() -> Self {
        Self {
            fields: StyleField::all().into_iter().collect(),
        }
    }

    /// Check if a field is enabled.
    pub fn is_enabled(&self, field: StyleField) -> bool {
        self.fields.contains(&field)
    }

    /// Cancel is always enabled.
    pub fn cancel_enabled(&self) -> bool {
        true
    }

    /// The editable fields.
    pub fn fields(&self) -> &BTreeSet<StyleField> {
        &self.fields
    }

    /// Check if nothing is editable.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Per-principal filtering over catalog styles.
///
/// Pure: every decision depends only on the rules, the superuser role
/// and the arguments.
///
/// # Example
///
/// ```
/// use geo_catalog::StyleResource;
/// use geo_security::{AccessFilter, Principal, RuleSet};
///
/// let rules = RuleSet::from_properties("cite.*.a=ROLE_CITE_ADMIN").unwrap();
/// let filter = AccessFilter::new(&rules, "ROLE_ADMINISTRATOR");
///
/// let styles = vec![
///     StyleResource::global("point", "point.sld"),
///     StyleResource::in_workspace("cite_style", "cite", "cite.sld"),
///     StyleResource::in_workspace("sf_style", "sf", "sf.sld"),
/// ];
/// let cite = Principal::new("cite", ["ROLE_CITE_ADMIN"]);
///
/// let visible: Vec<_> = filter
///     .filter_visible(&cite, &styles)
///     .into_iter()
///     .map(|s| s.name)
///     .collect();
/// assert_eq!(visible, vec!["point", "cite_style"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AccessFilter<'a> {
    rules: &'a RuleSet,
    superuser_role: &'a str,
}

impl<'a> AccessFilter<'a> {
    /// Create a filter over a rule snapshot.
    pub fn new(rules: &'a RuleSet, superuser_role: &'a str) -> Self {
        Self {
            rules,
            superuser_role,
        }
    }

    /// Check if the principal bypasses filtering.
    pub fn is_superuser(&self, principal: &Principal) -> bool {
        principal.is_authenticated() && principal.has_role(self.superuser_role)
    }

    /// Check if the principal administers a workspace.
    pub fn administers(&self, principal: &Principal, workspace: &str) -> bool {
        if !principal.is_authenticated() {
            return false;
        }
        self.is_superuser(principal) || self.rules.administers(principal.roles(), workspace)
    }

    /// Workspaces, out of `candidates`, the principal administers.
    ///
    /// Candidate order is preserved.
    pub fn admin_workspaces<'w, I>(&self, principal: &Principal, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'w str>,
    {
        candidates
            .into_iter()
            .filter(|ws| self.administers(principal, ws))
            .map(str::to_string)
            .collect()
    }

    /// Check if a single style is visible to the principal.
    pub fn is_visible(&self, principal: &Principal, style: &StyleResource) -> bool {
        if !principal.is_authenticated() {
            return false;
        }
        match style.workspace.as_deref() {
            None => true,
            Some(ws) => self.administers(principal, ws),
        }
    }

    /// Styles visible to the principal, in input order.
    pub fn filter_visible(
        &self,
        principal: &Principal,
        styles: &[StyleResource],
    ) -> Vec<StyleResource> {
        if self.is_superuser(principal) {
            return styles.to_vec();
        }

        let visible: Vec<StyleResource> = styles
            .iter()
            .filter(|s| self.is_visible(principal, s))
            .cloned()
            .collect();

        debug!(
            principal = %principal.username,
            total = styles.len(),
            visible = visible.len(),
            "Filtered styles"
        );
        visible
    }

    /// Fields of `style` the principal may edit.
    ///
    /// Superusers and administrators of the style's own workspace may edit
    /// everything; everyone else, including workspace administrators
    /// looking at a global style, may edit nothing.
    pub fn editable_fields(&self, principal: &Principal, style: &StyleResource) -> EditableFields {
        let editable = self.is_superuser(principal)
            || style
                .workspace
                .as_deref()
                .is_some_and(|ws| self.administers(principal, ws));

        debug!(
            principal = %principal.username,
            style = %style.qualified_name(),
            editable,
            "Resolved editable fields"
        );

        if editable {
            EditableFields::all()
        } else {
            EditableFields::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::from_properties(
            "*.*.r=*\n*.*.w=*\n*.*.a=ROLE_ADMINISTRATOR\ncite.*.a=ROLE_CITE_ADMIN\ncite.*.a=ROLE_SF_ADMIN\n",
        )
        .unwrap()
    }

    fn styles() -> Vec<StyleResource> {
        vec![
            StyleResource::global("point", "point.sld"),
            StyleResource::in_workspace("sf_style", "sf", "sf.sld"),
            StyleResource::in_workspace("cite_style", "cite", "cite.sld"),
        ]
    }

    fn names(styles: Vec<StyleResource>) -> Vec<String> {
        styles.into_iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_workspace_admin_sees_global_and_own() {
        let rules = rules();
        let filter = AccessFilter::new(&rules, "ROLE_ADMINISTRATOR");
        let cite = Principal::new("cite", ["ROLE_CITE_ADMIN"]);

        assert_eq!(
            names(filter.filter_visible(&cite, &styles())),
            vec!["point", "cite_style"]
        );
    }

    #[test]
    fn test_superuser_returns_input_unchanged() {
        let rules = RuleSet::new();
        let filter = AccessFilter::new(&rules, "ROLE_ADMINISTRATOR");
        let admin = Principal::new("admin", ["ROLE_ADMINISTRATOR"]);
        let input = styles();

        assert_eq!(filter.filter_visible(&admin, &input), input);
    }

    #[test]
    fn test_role_without_rules_sees_only_global() {
        let rules = rules();
        let filter = AccessFilter::new(&rules, "ROLE_ADMINISTRATOR");
        let nobody = Principal::new("nobody", ["ROLE_UNKNOWN"]);
        let no_roles = Principal::new("bare", Vec::<String>::new());

        assert_eq!(names(filter.filter_visible(&nobody, &styles())), vec!["point"]);
        assert_eq!(names(filter.filter_visible(&no_roles, &styles())), vec!["point"]);
    }

    #[test]
    fn test_anonymous_sees_nothing() {
        let rules = rules();
        let filter = AccessFilter::new(&rules, "ROLE_ADMINISTRATOR");
        assert!(filter
            .filter_visible(&Principal::anonymous(), &styles())
            .is_empty());
        assert!(!filter.administers(&Principal::anonymous(), "cite"));
    }

    #[test]
    fn test_wildcard_admin_rule_opens_every_workspace() {
        let rules = RuleSet::from_properties("*.*.a=*").unwrap();
        let filter = AccessFilter::new(&rules, "ROLE_ADMINISTRATOR");
        let anyone = Principal::new("anyone", Vec::<String>::new());

        assert_eq!(filter.filter_visible(&anyone, &styles()).len(), 3);
    }

    #[test]
    fn test_layer_scoped_admin_rule_keeps_workspace_closed() {
        let x = Principal::new("x", ["ROLE_X"]);
        let [_, _, cite_style]: [StyleResource; 3] = styles().try_into().unwrap();

        for text in ["cite.?.a=ROLE_X", "cite.[*].a=ROLE_X", "cite.[!a].a=ROLE_X"] {
            let rules = RuleSet::from_properties(text).unwrap();
            let filter = AccessFilter::new(&rules, "ROLE_ADMINISTRATOR");

            assert!(!filter.administers(&x, "cite"), "{text}");
            assert!(!filter.is_visible(&x, &cite_style), "{text}");
            assert!(filter.editable_fields(&x, &cite_style).is_empty(), "{text}");
        }
    }

    #[test]
    fn test_editable_fields() {
        let rules = rules();
        let filter = AccessFilter::new(&rules, "ROLE_ADMINISTRATOR");
        let cite = Principal::new("cite", ["ROLE_CITE_ADMIN"]);
        let admin = Principal::new("admin", ["ROLE_ADMINISTRATOR"]);
        let [point, sf_style, cite_style]: [StyleResource; 3] = styles().try_into().unwrap();

        assert!(filter.editable_fields(&cite, &point).is_empty());
        assert!(filter.editable_fields(&cite, &sf_style).is_empty());
        assert_eq!(filter.editable_fields(&cite, &cite_style), EditableFields::all());

        for style in [&point, &sf_style, &cite_style] {
            assert_eq!(filter.editable_fields(&admin, style), EditableFields::all());
        }
        assert!(filter
            .editable_fields(&Principal::anonymous(), &cite_style)
            .is_empty());
    }

    #[test]
    fn test_admin_workspaces_preserves_order() {
        let rules = rules();
        let filter = AccessFilter::new(&rules, "ROLE_ADMINISTRATOR");
        let sf = Principal::new("sf", ["ROLE_SF_ADMIN"]);
        let admin = Principal::new("admin", ["ROLE_ADMINISTRATOR"]);

        assert_eq!(filter.admin_workspaces(&sf, ["sf", "cite"]), vec!["cite"]);
        assert_eq!(
            filter.admin_workspaces(&admin, ["sf", "cite", "topp"]),
            vec!["sf", "cite", "topp"]
        );
    }

    #[test]
    fn test_unauthenticated_superuser_role_is_ignored() {
        let rules = rules();
        let filter = AccessFilter::new(&rules, "ROLE_ADMINISTRATOR");
        let forged: Principal = serde_json::from_str(
            r#"{"username":"admin","roles":["ROLE_ADMINISTRATOR"],"authenticated":false}"#,
        )
        .unwrap();

        assert!(!filter.is_superuser(&forged));
        assert!(filter.filter_visible(&forged, &styles()).is_empty());
        assert!(filter.editable_fields(&forged, &styles()[0]).is_empty());
    }
}
