//! `[theme]` section: navigation records and declarative theme data.
//!
//! Nav and sidebar records are parsed loosely from TOML and converted into
//! validated [`lk_nav`] types once, at load time.

use std::collections::BTreeMap;

use lk_nav::{
    EditLink, NavItem, NavLink, SidebarGroup, SidebarMap, SiteNavigation, normalize_prefix,
};
use serde::Deserialize;

use crate::{ConfigError, expand, require_http_url, require_non_empty};

/// Theme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Site logo shown in the top bar.
    pub logo: Option<LogoConfig>,
    /// Top navigation entries in declaration order.
    nav: Vec<NavItemRaw>,
    /// Sidebar entries keyed by path prefix.
    sidebar: BTreeMap<String, SidebarEntryRaw>,
    /// Social icons linked from the top bar.
    pub social_links: Vec<SocialLink>,
    /// Page footer.
    pub footer: Option<FooterConfig>,
    /// "Edit this page" link.
    edit_link: Option<EditLinkRaw>,
    /// Search configuration.
    pub search: SearchConfig,
}

/// Logo image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogoConfig {
    pub src: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Social icon link (e.g. `github`, `x`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

/// Footer text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub message: Option<String>,
    pub copyright: Option<String>,
}

/// Search provider selection. The indexer itself lives outside lkdoc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built from the docs.
    #[default]
    Local,
    /// Hosted Algolia `DocSearch`.
    Algolia,
    /// No search box.
    #[serde(rename = "none")]
    Disabled,
}

/// Search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub provider: SearchProvider,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NavItemRaw {
    text: String,
    link: String,
    active_match: Option<String>,
    target: Option<String>,
}

/// Sidebar entry: either its own groups or an alias of another prefix.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SidebarEntryRaw {
    groups: Option<Vec<SidebarGroupRaw>>,
    same_as: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SidebarGroupRaw {
    text: String,
    #[serde(default)]
    items: Vec<NavLinkRaw>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NavLinkRaw {
    text: String,
    link: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EditLinkRaw {
    pattern: String,
    #[serde(default = "default_edit_text")]
    text: String,
}

fn default_edit_text() -> String {
    "Edit this page".to_owned()
}

impl SidebarGroupRaw {
    fn build(&self) -> Result<SidebarGroup, ConfigError> {
        let links = self
            .items
            .iter()
            .map(|item| NavLink::new(item.text.as_str(), item.link.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SidebarGroup::new(self.text.as_str(), links)?)
    }
}

impl ThemeConfig {
    /// Validate declarative theme data (navigation is checked while building).
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Some(logo) = &self.logo {
            require_non_empty(&logo.src, "theme.logo.src")?;
        }
        for social in &self.social_links {
            require_non_empty(&social.icon, "theme.social_links.icon")?;
            require_http_url(&social.link, "theme.social_links.link")?;
        }
        Ok(())
    }

    pub(crate) fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(edit_link) = &mut self.edit_link {
            edit_link.pattern = expand::expand_env(&edit_link.pattern, "theme.edit_link.pattern")?;
        }
        Ok(())
    }

    /// Convert nav and sidebar records into a validated [`SiteNavigation`].
    ///
    /// Sidebar entries with groups are registered first, then aliases, so an
    /// alias may refer to any prefix regardless of key order. Aliases of
    /// aliases are rejected.
    pub(crate) fn build_navigation(&self) -> Result<SiteNavigation, ConfigError> {
        let nav = self
            .nav
            .iter()
            .map(|raw| -> Result<NavItem, ConfigError> {
                let item = NavItem::new(
                    raw.text.as_str(),
                    raw.link.as_str(),
                    raw.active_match.as_deref(),
                )?;
                Ok(match &raw.target {
                    Some(target) => item.with_target(target.as_str()),
                    None => item,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let mut sidebar = SidebarMap::new();
        for (prefix, entry) in &self.sidebar {
            match (&entry.groups, &entry.same_as) {
                (Some(groups), None) => {
                    let groups = groups
                        .iter()
                        .map(SidebarGroupRaw::build)
                        .collect::<Result<Vec<_>, _>>()?;
                    sidebar.insert(prefix, groups)?;
                }
                (None, Some(_)) => {}
                _ => {
                    return Err(ConfigError::Validation(format!(
                        "theme.sidebar.\"{prefix}\" must set exactly one of groups or same_as"
                    )));
                }
            }
        }
        for (prefix, target) in self.aliases() {
            let target_key = normalize_prefix(target)?;
            if self
                .aliases()
                .any(|(alias, _)| normalize_prefix(alias).is_ok_and(|key| key == target_key))
            {
                return Err(ConfigError::Validation(format!(
                    "theme.sidebar.\"{prefix}\" aliases \"{target}\", which is itself an alias"
                )));
            }
            sidebar.insert_alias(prefix, target)?;
        }

        let edit_link = self
            .edit_link
            .as_ref()
            .map(|raw| EditLink::new(raw.pattern.as_str(), raw.text.as_str()))
            .transpose()?;

        Ok(SiteNavigation::new(nav, sidebar, edit_link)?)
    }

    fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sidebar.iter().filter_map(|(prefix, entry)| {
            entry
                .same_as
                .as_deref()
                .map(|target| (prefix.as_str(), target))
        })
    }
}
