//! Sidebar groups keyed by path prefix.

use std::sync::Arc;

use serde::Serialize;

use crate::NavError;
use crate::path::{normalize_path, normalize_prefix, require_label, require_link};

/// Leaf sidebar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    label: String,
    path: String,
    #[serde(skip)]
    normalized: String,
}

impl NavLink {
    /// Create a link to a site page (or an external URL).
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Result<Self, NavError> {
        let label = label.into();
        let path = path.into();
        require_label(&label, "sidebar link")?;
        require_link(&label, &path)?;
        let normalized = normalize_path(&path);
        Ok(Self {
            label,
            path,
            normalized,
        })
    }

    /// Link text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Link path as configured.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this link points at the page with the given normalized path.
    pub(crate) fn is_page(&self, normalized_path: &str) -> bool {
        self.normalized == normalized_path
    }
}

/// Labeled, ordered set of sidebar links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    label: String,
    links: Vec<NavLink>,
}

impl SidebarGroup {
    /// Create a group; links keep their declared order.
    pub fn new(label: impl Into<String>, links: Vec<NavLink>) -> Result<Self, NavError> {
        let label = label.into();
        require_label(&label, "sidebar group")?;
        Ok(Self { label, links })
    }

    /// Section label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Links in sidebar order.
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}

#[derive(Debug)]
struct SidebarEntry {
    prefix: String,
    groups: Arc<[SidebarGroup]>,
}

/// Mapping from path prefix to sidebar groups.
///
/// Prefixes are normalized on insertion and must be unique. Aliased prefixes
/// share the group list of their target rather than a copy of it.
#[derive(Debug, Default)]
pub struct SidebarMap {
    entries: Vec<SidebarEntry>,
}

impl SidebarMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register groups under a prefix.
    pub fn insert(&mut self, prefix: &str, groups: Vec<SidebarGroup>) -> Result<(), NavError> {
        let prefix = self.unique_prefix(prefix)?;
        self.entries.push(SidebarEntry {
            prefix,
            groups: groups.into(),
        });
        Ok(())
    }

    /// Register `prefix` as an alias sharing the groups of `target`.
    ///
    /// `target` must already be registered.
    pub fn insert_alias(&mut self, prefix: &str, target: &str) -> Result<(), NavError> {
        let prefix = self.unique_prefix(prefix)?;
        let target = normalize_prefix(target)?;
        let groups = self
            .entries
            .iter()
            .find(|entry| entry.prefix == target)
            .map(|entry| Arc::clone(&entry.groups))
            .ok_or_else(|| NavError::UnknownAlias {
                prefix: prefix.clone(),
                target,
            })?;
        self.entries.push(SidebarEntry { prefix, groups });
        Ok(())
    }

    fn unique_prefix(&self, prefix: &str) -> Result<String, NavError> {
        let prefix = normalize_prefix(prefix)?;
        if self.entries.iter().any(|entry| entry.prefix == prefix) {
            return Err(NavError::DuplicatePrefix {
                prefix,
                context: "sidebar".to_owned(),
            });
        }
        Ok(prefix)
    }

    /// Registered prefixes in insertion order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.prefix.as_str())
    }

    /// Groups registered under an exact prefix.
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        let prefix = normalize_prefix(prefix).ok()?;
        self.entries
            .iter()
            .find(|entry| entry.prefix == prefix)
            .map(|entry| &*entry.groups)
    }

    /// Number of registered prefixes, aliases included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no prefix is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups of the longest prefix matching an already normalized path.
    pub(crate) fn resolve_normalized(&self, normalized_path: &str) -> &[SidebarGroup] {
        self.entries
            .iter()
            .filter(|entry| normalized_path.starts_with(entry.prefix.as_str()))
            .max_by_key(|entry| entry.prefix.len())
            .map(|entry| &*entry.groups)
            .unwrap_or_default()
    }

    #[cfg(test)]
    fn shares_groups(&self, a: &str, b: &str) -> bool {
        let find = |p: &str| self.entries.iter().find(|e| e.prefix == p);
        match (find(a), find(b)) {
            (Some(a), Some(b)) => Arc::ptr_eq(&a.groups, &b.groups),
            _ => false,
        }
    }
}

/// Sidebar groups to show for `path`.
///
/// Selects the entry whose prefix is the longest string prefix of the
/// normalized path. Returns an empty slice when no prefix matches.
pub fn resolve_sidebar<'a>(path: &str, sidebar: &'a SidebarMap) -> &'a [SidebarGroup] {
    let normalized = normalize_path(path);
    let groups = sidebar.resolve_normalized(&normalized);
    if groups.is_empty() {
        tracing::debug!(path = %normalized, "No sidebar for path");
    }
    groups
}
