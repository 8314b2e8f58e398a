//! `${VAR}` / `${VAR:-default}` expansion for configuration strings.

use crate::ConfigError;

/// Name of the variable that failed to resolve.
struct MissingVar(String);

/// Expand environment variable references in `value`.
///
/// Only the braced forms are expanded; a bare `$VAR` is left as written so
/// URLs containing `$` survive untouched. `field` names the config key in
/// error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |var: &str| -> Result<Option<String>, MissingVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| MissingVar(var.to_owned()))
    };

    shellexpand::env_with_context(&escape_bare_dollars(value), lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

/// Double every `$` outside a `${...}` reference so shellexpand emits it as is.
fn escape_bare_dollars(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 4);
    let mut rest = value;
    while let Some(idx) = rest.find('$') {
        escaped.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        if tail.starts_with("${")
            && let Some(end) = tail.find('}')
        {
            escaped.push_str(&tail[..=end]);
            rest = &tail[end + 1..];
        } else {
            escaped.push_str("$$");
            rest = &tail[1..];
        }
    }
    escaped.push_str(rest);
    escaped
}

/// Expand an optional value in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        *value = Some(expand_env(raw, field)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_returned_unchanged() {
        let result = expand_env("https://docs.lunolab.xyz/", "site.url").unwrap();
        assert_eq!(result, "https://docs.lunolab.xyz/");
    }

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LK_EXPAND_HOST", "docs.example.com");
        }
        let result = expand_env("https://${LK_EXPAND_HOST}/", "site.url").unwrap();
        assert_eq!(result, "https://docs.example.com/");
        unsafe {
            std::env::remove_var("LK_EXPAND_HOST");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LK_EXPAND_UNSET");
        }
        let result = expand_env("${LK_EXPAND_UNSET:-main}", "theme.edit_link.pattern").unwrap();
        assert_eq!(result, "main");
    }

    #[test]
    fn test_expand_missing_var_names_field_and_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LK_EXPAND_MISSING");
        }
        let err = expand_env("${LK_EXPAND_MISSING}", "site.url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("LK_EXPAND_MISSING"));
        assert!(msg.contains("site.url"));
    }

    #[test]
    fn test_bare_dollar_left_alone() {
        let result = expand_env("https://example.com/$path", "site.url").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }

    #[test]
    fn test_bare_dollar_left_alone_next_to_braced_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LK_EXPAND_MIXED_HOST", "docs.example.com");
        }
        let result =
            expand_env("https://${LK_EXPAND_MIXED_HOST}/$path?a=$$", "site.url").unwrap();
        assert_eq!(result, "https://docs.example.com/$path?a=$$");
        unsafe {
            std::env::remove_var("LK_EXPAND_MIXED_HOST");
        }
    }

    #[test]
    fn test_bare_dollar_left_alone_next_to_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LK_EXPAND_MIXED_UNSET");
        }
        let result =
            expand_env("${LK_EXPAND_MIXED_UNSET:-main}/$ref", "theme.edit_link.pattern").unwrap();
        assert_eq!(result, "main/$ref");
    }

    #[test]
    fn test_escape_bare_dollars() {
        assert_eq!(escape_bare_dollars("a$b${C}$"), "a$$b${C}$$");
        assert_eq!(escape_bare_dollars("${unclosed"), "$${unclosed");
    }

    #[test]
    fn test_expand_opt_none_stays_none() {
        let mut value = None;
        expand_opt(&mut value, "site.url").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_expand_opt_some() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LK_EXPAND_OPT");
        }
        let mut value = Some("${LK_EXPAND_OPT:-https://docs.lunolab.xyz/}".to_owned());
        expand_opt(&mut value, "site.url").unwrap();
        assert_eq!(value.as_deref(), Some("https://docs.lunolab.xyz/"));
    }
}
