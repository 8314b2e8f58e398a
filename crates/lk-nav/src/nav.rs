//! Top navigation items and active-state matching.

use serde::Serialize;

use crate::NavError;
use crate::path::{is_external, normalize_path, normalize_prefix, require_label, require_link};

/// Rule deciding whether a nav item is highlighted for a page.
///
/// Parsed from a `|`-separated alternation of path prefixes, e.g.
/// `/overview/|/getting-started/`. Prefixes get a single leading and trailing
/// slash but are otherwise kept literally, and must be unique within one rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveMatch {
    prefixes: Vec<String>,
}

impl ActiveMatch {
    /// Parse an alternation pattern.
    ///
    /// `label` is only used for error messages.
    pub fn parse(label: &str, pattern: &str) -> Result<Self, NavError> {
        let mut prefixes: Vec<String> = Vec::new();
        for alternative in pattern.split('|').map(str::trim) {
            if alternative.is_empty() {
                return Err(NavError::EmptyActiveMatch {
                    label: label.to_owned(),
                });
            }
            let prefix = normalize_prefix(alternative)?;
            if prefixes.contains(&prefix) {
                return Err(NavError::DuplicatePrefix {
                    prefix,
                    context: format!("activeMatch of '{label}'"),
                });
            }
            prefixes.push(prefix);
        }
        Ok(Self { prefixes })
    }

    /// Normalized prefixes in declaration order.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Length of the longest prefix matching a normalized path.
    pub(crate) fn specificity(&self, normalized_path: &str) -> Option<usize> {
        self.prefixes
            .iter()
            .filter(|prefix| normalized_path.starts_with(prefix.as_str()))
            .map(String::len)
            .max()
    }

    /// Whether every page under `prefix` is matched by this rule.
    pub(crate) fn covers(&self, prefix: &str) -> bool {
        self.prefixes.iter().any(|p| prefix.starts_with(p.as_str()))
    }
}

/// Top-level navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    label: String,
    link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(skip)]
    active_match: Option<ActiveMatch>,
}

impl NavItem {
    /// Create a nav item.
    ///
    /// Without an `active_match`, an internal link highlights only on its own
    /// page and an external link never highlights.
    pub fn new(
        label: impl Into<String>,
        link: impl Into<String>,
        active_match: Option<&str>,
    ) -> Result<Self, NavError> {
        let label = label.into();
        let link = link.into();
        require_label(&label, "nav item")?;
        require_link(&label, &link)?;
        let active_match = active_match
            .map(|pattern| ActiveMatch::parse(&label, pattern))
            .transpose()?;

        Ok(Self {
            label,
            link,
            target: None,
            active_match,
        })
    }

    /// Set the link target (e.g. `_blank`).
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Internal path or external URL.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Link target, e.g. `_blank` for external pages.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Highlight rule, `None` when the item matches only its own page.
    pub fn active_match(&self) -> Option<&ActiveMatch> {
        self.active_match.as_ref()
    }

    /// Specificity of this item for a normalized path, `None` if it doesn't match.
    pub(crate) fn match_len(&self, normalized_path: &str) -> Option<usize> {
        match &self.active_match {
            Some(rule) => rule.specificity(normalized_path),
            None if is_external(&self.link) => None,
            None => {
                let own = normalize_path(&self.link);
                (own == normalized_path).then_some(own.len())
            }
        }
    }
}

/// Find the nav item to highlight for `path`.
///
/// The item with the longest matching prefix wins; on equal specificity the
/// first declared item wins. Returns `None` when nothing matches.
pub fn resolve_active_nav<'a>(path: &str, items: &'a [NavItem]) -> Option<&'a NavItem> {
    let normalized = normalize_path(path);
    let mut best: Option<(usize, &NavItem)> = None;
    for item in items {
        if let Some(len) = item.match_len(&normalized)
            && best.is_none_or(|(best_len, _)| len > best_len)
        {
            best = Some((len, item));
        }
    }

    if best.is_none() {
        tracing::debug!(path = %normalized, "No nav item matches path");
    }
    best.map(|(_, item)| item)
}
