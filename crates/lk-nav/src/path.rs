//! Page path normalization.
//!
//! Every path is reduced to a canonical form before matching:
//! leading slash, single slashes, no query or fragment, no `.html`/`.md`
//! suffix, no trailing `index` segment, and always a trailing slash.
//! `/hooks`, `/hooks/`, `/hooks/index.html` and `hooks` all become `/hooks/`.
//!
//! Configured prefixes only get their slashes canonicalized, so a prefix
//! matches exactly the pages under it as written.

use crate::NavError;

/// Normalize a page path to its canonical trailing-slash form.
///
/// # Examples
///
/// ```
/// use lk_nav::normalize_path;
///
/// assert_eq!(normalize_path("/hooks"), "/hooks/");
/// assert_eq!(normalize_path("/hooks/connection/use-connect.html#usage"), "/hooks/connection/use-connect/");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();

    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if let Some(last) = segments.pop() {
        let stem = last
            .strip_suffix(".html")
            .or_else(|| last.strip_suffix(".md"))
            .unwrap_or(last);
        if !stem.is_empty() && stem != "index" {
            segments.push(stem);
        }
    }

    let mut normalized = String::with_capacity(path.len() + 2);
    normalized.push('/');
    for segment in segments {
        normalized.push_str(segment);
        normalized.push('/');
    }
    normalized
}

/// Whether a link points outside the site (`http://` or `https://`).
#[must_use]
pub fn is_external(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

/// Validate a configured path prefix and return its normalized form.
///
/// Prefixes are matched literally, so only the slashes are canonicalized:
/// a trailing `index` segment or `.html`/`.md` suffix stays part of the prefix.
///
/// # Errors
///
/// Returns [`NavError::InvalidPrefix`] when `prefix` does not start with `/`.
pub fn normalize_prefix(prefix: &str) -> Result<String, NavError> {
    if !prefix.starts_with('/') {
        return Err(NavError::InvalidPrefix {
            prefix: prefix.to_owned(),
        });
    }

    let mut normalized = String::with_capacity(prefix.len() + 1);
    normalized.push('/');
    for segment in prefix.split('/').filter(|s| !s.is_empty()) {
        normalized.push_str(segment);
        normalized.push('/');
    }
    Ok(normalized)
}

/// Require a link to be an absolute site path or an external URL.
pub(crate) fn require_link(label: &str, link: &str) -> Result<(), NavError> {
    if link.starts_with('/') || is_external(link) {
        return Ok(());
    }
    Err(NavError::InvalidLink {
        label: label.to_owned(),
        link: link.to_owned(),
    })
}

/// Require a label to be non-empty after trimming.
pub(crate) fn require_label(label: &str, kind: &'static str) -> Result<(), NavError> {
    if label.trim().is_empty() {
        return Err(NavError::EmptyLabel { kind });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_trailing_slash() {
        assert_eq!(normalize_path("/hooks"), "/hooks/");
        assert_eq!(normalize_path("/hooks/"), "/hooks/");
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize_path("hooks/chain"), "/hooks/chain/");
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
    }

    #[test]
    fn test_normalize_collapses_repeated_slashes() {
        assert_eq!(normalize_path("//hooks///chain//"), "/hooks/chain/");
    }

    #[test]
    fn test_normalize_strips_query_and_fragment() {
        assert_eq!(normalize_path("/faq/runtime-errors?x=1"), "/faq/runtime-errors/");
        assert_eq!(normalize_path("/faq/runtime-errors#top"), "/faq/runtime-errors/");
        assert_eq!(normalize_path("/faq/?q#frag"), "/faq/");
    }

    #[test]
    fn test_normalize_strips_extensions() {
        assert_eq!(normalize_path("/examples/vite.html"), "/examples/vite/");
        assert_eq!(normalize_path("/examples/vite.md"), "/examples/vite/");
    }

    #[test]
    fn test_normalize_drops_trailing_index() {
        assert_eq!(normalize_path("/hooks/index.html"), "/hooks/");
        assert_eq!(normalize_path("/hooks/index"), "/hooks/");
        assert_eq!(normalize_path("/index.md"), "/");
    }

    #[test]
    fn test_normalize_keeps_inner_index_segment() {
        assert_eq!(normalize_path("/index/page"), "/index/page/");
    }

    #[test]
    fn test_normalize_is_case_sensitive() {
        assert_eq!(normalize_path("/Hooks"), "/Hooks/");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for path in ["/a/b.html", "x", "/", "/a//b/index.md?q"] {
            let once = normalize_path(path);
            assert_eq!(normalize_path(&once), once);
        }
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://deepwiki.com/Luno-lab/LunoKit"));
        assert!(is_external("http://localhost:5173"));
        assert!(!is_external("/hooks/"));
        assert!(!is_external("ftp://example.com"));
    }

    #[test]
    fn test_normalize_prefix_requires_leading_slash() {
        let err = normalize_prefix("hooks/").unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidPrefix {
                prefix: "hooks/".to_owned()
            }
        );
        assert_eq!(normalize_prefix("/hooks").unwrap(), "/hooks/");
    }

    #[test]
    fn test_normalize_prefix_only_canonicalizes_slashes() {
        assert_eq!(normalize_prefix("//hooks//chain").unwrap(), "/hooks/chain/");
        assert_eq!(normalize_prefix("/").unwrap(), "/");
        assert_eq!(normalize_prefix("/reference/index/").unwrap(), "/reference/index/");
        assert_eq!(normalize_prefix("/guide.html").unwrap(), "/guide.html/");
    }

    #[test]
    fn test_require_link() {
        assert!(require_link("Guide", "/overview/introduction").is_ok());
        assert!(require_link("DeepWiki", "https://deepwiki.com").is_ok());
        assert!(matches!(
            require_link("Guide", "overview/introduction"),
            Err(NavError::InvalidLink { .. })
        ));
    }

    #[test]
    fn test_require_label_rejects_blank() {
        assert_eq!(
            require_label("  ", "nav item"),
            Err(NavError::EmptyLabel { kind: "nav item" })
        );
        assert!(require_label("Hooks", "nav item").is_ok());
    }
}
