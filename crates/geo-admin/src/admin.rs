//! Style administration
//!
//! `StyleAdmin` builds the per-principal views of the style pages from a
//! catalog snapshot and the access rules.

use geo_catalog::Catalog;
use geo_security::{AccessFilter, Principal, RuleSet, SecurityConfig};
use tracing::{debug, instrument};

use crate::error::{AdminError, AdminResult};
use crate::views::{EditStyleForm, NewStyleForm, StyleListView};

/// Builds style page views for principals.
///
/// # Example
///
/// ```
/// use geo_admin::StyleAdmin;
/// use geo_catalog::{MemoryCatalog, StyleResource, Workspace};
/// use geo_security::{Principal, RuleSet, SecurityConfig};
///
/// let mut catalog = MemoryCatalog::new();
/// catalog.add_workspace(Workspace::new("cite")).unwrap();
/// catalog.add_style(StyleResource::global("point", "point.sld")).unwrap();
/// catalog
///     .add_style(StyleResource::in_workspace("cite_style", "cite", "cite.sld"))
///     .unwrap();
///
/// let rules = RuleSet::from_properties("cite.*.a=ROLE_CITE_ADMIN").unwrap();
/// let admin = StyleAdmin::new(&catalog, rules, &SecurityConfig::default());
///
/// let cite = Principal::new("cite", ["ROLE_CITE_ADMIN"]);
/// assert_eq!(admin.style_list(&cite).item_count(), 2);
/// assert_eq!(admin.new_style_form(&cite).workspace.as_deref(), Some("cite"));
/// ```
#[derive(Debug)]
pub struct StyleAdmin<'a, C: Catalog> {
    catalog: &'a C,
    rules: RuleSet,
    superuser_role: String,
}

impl<'a, C: Catalog> StyleAdmin<'a, C> {
    /// Create an admin over a catalog with the given rules.
    pub fn new(catalog: &'a C, rules: RuleSet, config: &SecurityConfig) -> Self {
        Self {
            catalog,
            rules,
            superuser_role: config.superuser_role.clone(),
        }
    }

    /// Validate the configuration and load its rules.
    ///
    /// # Errors
    ///
    /// * `Config` if the configuration is invalid
    /// * `Security` if the rule file cannot be read or parsed
    pub fn from_config(catalog: &'a C, config: &SecurityConfig) -> AdminResult<Self> {
        config.validate()?;
        let rules = config.load_rules()?;
        debug!(rules = rules.len(), "Loaded style admin rules");
        Ok(Self::new(catalog, rules, config))
    }

    /// Access filter over this admin's rules.
    pub fn filter(&self) -> AccessFilter<'_> {
        AccessFilter::new(&self.rules, &self.superuser_role)
    }

    /// Rules in effect.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Styles listed for the principal.
    #[instrument(skip(self, principal), fields(principal = %principal.username))]
    pub fn style_list(&self, principal: &Principal) -> StyleListView {
        let styles = self.catalog.list_styles(None);
        StyleListView::new(self.filter().filter_visible(principal, &styles))
    }

    /// Workspace selector state for creating a new style.
    ///
    /// Superusers may create global styles in any workspace. Everyone else
    /// must pick one of the workspaces they administer.
    #[instrument(skip(self, principal), fields(principal = %principal.username))]
    pub fn new_style_form(&self, principal: &Principal) -> NewStyleForm {
        let filter = self.filter();
        let workspaces = self.catalog.workspaces();
        let names = workspaces.iter().map(|w| w.name.as_str());

        if filter.is_superuser(principal) {
            return NewStyleForm::unrestricted(names.map(str::to_string).collect());
        }

        let form = NewStyleForm::scoped(filter.admin_workspaces(principal, names));
        debug!(choices = form.choices.len(), "Scoped new style form");
        form
    }

    /// Edit form for the style called `name`.
    ///
    /// The style is looked up by name across scopes, global first.
    ///
    /// # Errors
    ///
    /// `StyleNotFound` if no style has that name.
    #[instrument(skip(self, principal), fields(principal = %principal.username))]
    pub fn edit_style_form(&self, principal: &Principal, name: &str) -> AdminResult<EditStyleForm> {
        let style = self
            .catalog
            .find_style(name)
            .ok_or_else(|| AdminError::StyleNotFound(name.to_string()))?;

        let fields = self.filter().editable_fields(principal, &style);
        Ok(EditStyleForm { style, fields })
    }

    /// Edit form for a style in a specific scope.
    ///
    /// # Errors
    ///
    /// `StyleNotFound` if the scope holds no style with that name.
    #[instrument(skip(self, principal), fields(principal = %principal.username))]
    pub fn edit_scoped_style_form(
        &self,
        principal: &Principal,
        workspace: Option<&str>,
        name: &str,
    ) -> AdminResult<EditStyleForm> {
        let style = self
            .catalog
            .style_by_name(workspace, name)
            .ok_or_else(|| {
                AdminError::StyleNotFound(match workspace {
                    Some(ws) => format!("{}:{}", ws, name),
                    None => name.to_string(),
                })
            })?;

        let fields = self.filter().editable_fields(principal, &style);
        Ok(EditStyleForm { style, fields })
    }
}
