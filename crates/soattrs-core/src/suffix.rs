//! Origin attribute suffix grammar.
//!
//! A suffix is `^key1=value1&key2=value2...`, appended to an origin. Pairs are
//! `application/x-www-form-urlencoded`: split on `&`, empty pairs skipped, a
//! pair without `=` has an empty value, and `%XX` / `+` are decoded.
//!
//! This module only knows the grammar. Which keys mean what is decided by
//! [`crate::origin_attributes`] and [`crate::storage_attributes`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::SuffixError;

/// Character separating an origin from its attribute suffix.
pub const SUFFIX_MARKER: char = '^';

/// What to do with a key that no attribute set recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeyPolicy {
    /// Drop the pair silently. Suffixes written by richer attribute formats
    /// still parse.
    #[default]
    Ignore,
    /// Fail with [`SuffixError::UnknownKey`].
    Reject,
}

/// Knobs for suffix parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub unknown_keys: UnknownKeyPolicy,
}

impl ParseOptions {
    pub fn rejecting_unknown_keys() -> Self {
        Self {
            unknown_keys: UnknownKeyPolicy::Reject,
        }
    }

    /// Apply the unknown-key policy to `key`.
    pub(crate) fn check_unknown(&self, key: &str) -> Result<(), SuffixError> {
        match self.unknown_keys {
            UnknownKeyPolicy::Ignore => {
                tracing::trace!(key, "ignoring unknown origin attribute");
                Ok(())
            }
            UnknownKeyPolicy::Reject => Err(SuffixError::UnknownKey {
                key: key.to_string(),
            }),
        }
    }
}

/// Splits `origin` at the first [`SUFFIX_MARKER`].
///
/// Returns the base and, if a marker was found, the suffix including the
/// marker. Later markers are left inside the suffix untouched.
///
/// - `split_origin("https://a.test^userContextId=1")` → `("https://a.test", Some("^userContextId=1"))`
/// - `split_origin("https://a.test")` → `("https://a.test", None)`
pub fn split_origin(origin: &str) -> (&str, Option<&str>) {
    match origin.find(SUFFIX_MARKER) {
        Some(idx) => (&origin[..idx], Some(&origin[idx..])),
        None => (origin, None),
    }
}

/// Iterator over decoded `(key, value)` pairs of a suffix.
pub struct Pairs<'a> {
    inner: form_urlencoded::Parse<'a>,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (Cow<'a, str>, Cow<'a, str>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Validates the marker and returns the pairs of `suffix`.
///
/// An empty suffix yields no pairs. A non-empty suffix must start with `^`.
pub fn pairs(suffix: &str) -> Result<Pairs<'_>, SuffixError> {
    let body = if suffix.is_empty() {
        ""
    } else {
        suffix
            .strip_prefix(SUFFIX_MARKER)
            .ok_or_else(|| SuffixError::MissingMarker(suffix.to_string()))?
    };
    Ok(Pairs {
        inner: form_urlencoded::parse(body.as_bytes()),
    })
}

/// Parses a numeric attribute value: plain ASCII decimal digits fitting `u32`.
pub(crate) fn parse_u32(key: &str, value: &str) -> Result<u32, SuffixError> {
    let invalid = || SuffixError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    };
    // u32::from_str accepts a leading '+', which is not part of the grammar.
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<u32>().map_err(|_| invalid())
}

/// Parses a flag attribute value. Only `1` is valid; absent flags are false.
pub(crate) fn parse_flag(key: &str, value: &str) -> Result<bool, SuffixError> {
    if value == "1" {
        Ok(true)
    } else {
        Err(SuffixError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(suffix: &str) -> Vec<(String, String)> {
        pairs(suffix)
            .unwrap()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn split_without_marker() {
        assert_eq!(split_origin("https://example.com"), ("https://example.com", None));
        assert_eq!(split_origin(""), ("", None));
    }

    #[test]
    fn split_at_first_marker_only() {
        assert_eq!(
            split_origin("a^k1=v^k2=w"),
            ("a", Some("^k1=v^k2=w"))
        );
        assert_eq!(split_origin("^userContextId=1"), ("", Some("^userContextId=1")));
    }

    #[test]
    fn pairs_basic() {
        assert_eq!(
            collect("^userContextId=2&inBrowser=1"),
            vec![
                ("userContextId".to_string(), "2".to_string()),
                ("inBrowser".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn pairs_empty_suffix_and_bare_marker() {
        assert!(collect("").is_empty());
        assert!(collect("^").is_empty());
    }

    #[test]
    fn pairs_skip_empty_and_default_value() {
        assert_eq!(
            collect("^&&flag&k=v"),
            vec![
                ("flag".to_string(), String::new()),
                ("k".to_string(), "v".to_string()),
            ]
        );
    }

    #[test]
    fn pairs_decode_percent_and_plus() {
        assert_eq!(
            collect("^firstPartyDomain=a%2Bb+c"),
            vec![("firstPartyDomain".to_string(), "a+b c".to_string())]
        );
    }

    #[test]
    fn pairs_keep_later_markers_literal() {
        assert_eq!(
            collect("^k1=v^k2=w"),
            vec![("k1".to_string(), "v^k2=w".to_string())]
        );
    }

    #[test]
    fn pairs_require_marker() {
        assert_eq!(
            pairs("userContextId=1").err(),
            Some(SuffixError::MissingMarker("userContextId=1".to_string()))
        );
    }

    #[test]
    fn parse_u32_rules() {
        assert_eq!(parse_u32("k", "0"), Ok(0));
        assert_eq!(parse_u32("k", "4294967295"), Ok(u32::MAX));
        assert!(parse_u32("k", "").is_err());
        assert!(parse_u32("k", "+1").is_err());
        assert!(parse_u32("k", "-1").is_err());
        assert!(parse_u32("k", "4294967296").is_err());
        assert!(parse_u32("k", "1^x").is_err());
    }

    #[test]
    fn parse_flag_rules() {
        assert_eq!(parse_flag("k", "1"), Ok(true));
        assert!(parse_flag("k", "0").is_err());
        assert!(parse_flag("k", "true").is_err());
        assert!(parse_flag("k", "").is_err());
    }

    #[test]
    fn reject_policy_names_key() {
        let opts = ParseOptions::rejecting_unknown_keys();
        assert_eq!(
            opts.check_unknown("foo"),
            Err(SuffixError::UnknownKey {
                key: "foo".to_string()
            })
        );
        assert_eq!(ParseOptions::default().check_unknown("foo"), Ok(()));
    }
}
