//! Validated site navigation and per-page resolution.
//!
//! [`SiteNavigation`] bundles the top nav, the sidebar map and the optional
//! edit link. It is built once at startup, checked for dead sidebar entries,
//! and then only read. [`SiteNavigation::resolve`] turns a page path into a
//! [`PageShell`] for the rendering layer.

use serde::Serialize;

use crate::NavError;
use crate::nav::{NavItem, resolve_active_nav};
use crate::path::normalize_path;
use crate::sidebar::{NavLink, SidebarGroup, SidebarMap, resolve_sidebar};

/// Placeholder in edit link patterns replaced with the page source path.
const PATH_PLACEHOLDER: &str = ":path";

/// "Edit this page" link template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditLink {
    pattern: String,
    text: String,
}

impl EditLink {
    /// Create an edit link from a pattern containing `:path`.
    pub fn new(pattern: impl Into<String>, text: impl Into<String>) -> Result<Self, NavError> {
        let pattern = pattern.into();
        if !pattern.contains(PATH_PLACEHOLDER) {
            return Err(NavError::InvalidEditLink { pattern });
        }
        Ok(Self {
            pattern,
            text: text.into(),
        })
    }

    /// URL pattern containing `:path`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Link text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Edit URL for a page source path relative to the docs root.
    ///
    /// ```
    /// use lk_nav::EditLink;
    ///
    /// let link = EditLink::new("https://github.com/Luno-lab/lkdoc/edit/main/docs/:path", "Edit")?;
    /// assert_eq!(
    ///     link.url_for("/hooks/config/use-config.md"),
    ///     "https://github.com/Luno-lab/lkdoc/edit/main/docs/hooks/config/use-config.md"
    /// );
    /// # Ok::<(), lk_nav::NavError>(())
    /// ```
    pub fn url_for(&self, source_path: &str) -> String {
        self.pattern
            .replace(PATH_PLACEHOLDER, source_path.trim_start_matches('/'))
    }
}

/// Resolved navigation state for one rendered page.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageShell<'a> {
    /// Normalized page path.
    pub path: String,
    /// Highlighted top nav entry.
    pub active_nav: Option<&'a NavItem>,
    /// Sidebar groups for the page, empty when no prefix matches.
    pub sidebar: &'a [SidebarGroup],
    /// Sidebar link pointing at this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_link: Option<&'a NavLink>,
    /// Previous link in sidebar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<&'a NavLink>,
    /// Next link in sidebar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a NavLink>,
}

/// Sidebar prefixes that no nav item `activeMatch` covers.
///
/// A prefix is covered when some `activeMatch` prefix is a string prefix of
/// it, so every page under the sidebar key also highlights a nav item.
pub fn uncovered_sidebar_prefixes<'a>(nav: &[NavItem], sidebar: &'a SidebarMap) -> Vec<&'a str> {
    sidebar
        .prefixes()
        .filter(|prefix| {
            !nav.iter()
                .filter_map(NavItem::active_match)
                .any(|rule| rule.covers(prefix))
        })
        .collect()
}

/// Validated, immutable navigation configuration of a site.
#[derive(Debug, Default)]
pub struct SiteNavigation {
    nav: Vec<NavItem>,
    sidebar: SidebarMap,
    edit_link: Option<EditLink>,
}

impl SiteNavigation {
    /// Bundle navigation data.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UncoveredSidebarPrefix`] for the first sidebar
    /// prefix that no nav item `activeMatch` covers.
    pub fn new(
        nav: Vec<NavItem>,
        sidebar: SidebarMap,
        edit_link: Option<EditLink>,
    ) -> Result<Self, NavError> {
        if let Some(prefix) = uncovered_sidebar_prefixes(&nav, &sidebar).first() {
            return Err(NavError::UncoveredSidebarPrefix {
                prefix: (*prefix).to_owned(),
            });
        }

        tracing::debug!(
            nav_items = nav.len(),
            sidebar_prefixes = sidebar.len(),
            "Navigation built"
        );

        Ok(Self {
            nav,
            sidebar,
            edit_link,
        })
    }

    /// Top nav items in declaration order.
    pub fn nav_items(&self) -> &[NavItem] {
        &self.nav
    }

    /// Sidebar groups by prefix.
    pub fn sidebar(&self) -> &SidebarMap {
        &self.sidebar
    }

    /// Configured edit link, if any.
    pub fn edit_link(&self) -> Option<&EditLink> {
        self.edit_link.as_ref()
    }

    /// Nav item to highlight for `path`.
    pub fn active_nav(&self, path: &str) -> Option<&NavItem> {
        resolve_active_nav(path, &self.nav)
    }

    /// Sidebar groups for `path`.
    pub fn sidebar_for(&self, path: &str) -> &[SidebarGroup] {
        resolve_sidebar(path, &self.sidebar)
    }

    /// Edit URL for a page source path, if an edit link is configured.
    pub fn edit_url(&self, source_path: &str) -> Option<String> {
        self.edit_link.as_ref().map(|link| link.url_for(source_path))
    }

    /// Resolve everything the page shell needs for `path`.
    pub fn resolve(&self, path: &str) -> PageShell<'_> {
        let normalized = normalize_path(path);
        let active_nav = resolve_active_nav(&normalized, &self.nav);
        let sidebar = self.sidebar.resolve_normalized(&normalized);

        let links: Vec<&NavLink> = sidebar.iter().flat_map(SidebarGroup::links).collect();
        let position = links.iter().position(|link| link.is_page(&normalized));
        let active_link = position.map(|i| links[i]);
        let prev = position.and_then(|i| i.checked_sub(1)).map(|i| links[i]);
        let next = position.and_then(|i| links.get(i + 1).copied());

        PageShell {
            path: normalized,
            active_nav,
            sidebar,
            active_link,
            prev,
            next,
        }
    }
}
