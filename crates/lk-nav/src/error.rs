//! Navigation validation errors.

/// Error returned when navigation data fails validation.
///
/// All variants are raised while building the navigation model at startup.
/// Resolution itself never fails: an unmatched path simply yields no
/// active item and an empty sidebar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// A label (nav item, sidebar group or link) is empty.
    #[error("{kind} label cannot be empty")]
    EmptyLabel {
        /// What carried the label (e.g. "nav item").
        kind: &'static str,
    },
    /// An `activeMatch` pattern is empty or has an empty alternative.
    #[error("nav item '{label}' has an empty activeMatch")]
    EmptyActiveMatch {
        /// Label of the offending nav item.
        label: String,
    },
    /// A path prefix does not start with `/`.
    #[error("path prefix '{prefix}' must start with '/'")]
    InvalidPrefix {
        /// The prefix as written in configuration.
        prefix: String,
    },
    /// The same prefix appears twice where prefixes must be unique.
    #[error("duplicate path prefix '{prefix}' in {context}")]
    DuplicatePrefix {
        /// Normalized prefix.
        prefix: String,
        /// Where the duplicate was found (e.g. "sidebar").
        context: String,
    },
    /// A link is neither an absolute site path nor an http(s) URL.
    #[error("link '{link}' of '{label}' must be an absolute path or an http(s) URL")]
    InvalidLink {
        /// Label of the entry carrying the link.
        label: String,
        /// The link as written.
        link: String,
    },
    /// A sidebar alias points to a prefix with no groups of its own.
    #[error("sidebar prefix '{prefix}' aliases unknown prefix '{target}'")]
    UnknownAlias {
        /// Alias prefix.
        prefix: String,
        /// Prefix it refers to.
        target: String,
    },
    /// A sidebar prefix no nav item `activeMatch` covers.
    #[error("sidebar prefix '{prefix}' is not covered by any nav item activeMatch")]
    UncoveredSidebarPrefix {
        /// Normalized sidebar prefix.
        prefix: String,
    },
    /// An edit link pattern without a `:path` placeholder.
    #[error("edit link pattern '{pattern}' must contain ':path'")]
    InvalidEditLink {
        /// The pattern as written.
        pattern: String,
    },
}
