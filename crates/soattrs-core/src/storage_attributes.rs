//! Origin attributes as tracked by storage quota bookkeeping.
//!
//! Quota directories are keyed by origins that may carry attributes the
//! general [`OriginAttributes`] record no longer models (the isolated
//! browser flag). [`StorageOriginAttributes`] parses the general record first
//! and then overlays those legacy keys. Anything else is tolerated.

use std::str::FromStr;

use serde::Serialize;

use crate::error::SuffixError;
use crate::origin_attributes::OriginAttributes;
use crate::suffix::{self, ParseOptions};

/// Keys that only the storage layer still understands.
///
/// Closed set; add a variant here (and to [`LegacyKey::from_name`]) to start
/// honouring another historical key instead of ignoring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyKey {
    /// Storage belongs to an isolated embedded browser frame. Written as
    /// `inBrowser=1`; `inIsolatedMozBrowser=1` is accepted too.
    IsolatedBrowser,
}

impl LegacyKey {
    pub const ALL: &'static [LegacyKey] = &[LegacyKey::IsolatedBrowser];

    /// Canonical wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            LegacyKey::IsolatedBrowser => "inBrowser",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "inBrowser" | "inIsolatedMozBrowser" => Some(LegacyKey::IsolatedBrowser),
            _ => None,
        }
    }
}

/// Storage view of an origin's attributes: isolation flag and user-context id.
///
/// Plain value type. Fields only change through the `populate_*` methods; if
/// one of those fails, the fields may be partially populated and must not be
/// trusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageOriginAttributes {
    in_isolated_moz_browser: bool,
    user_context_id: u32,
}

impl StorageOriginAttributes {
    pub fn in_isolated_moz_browser(&self) -> bool {
        self.in_isolated_moz_browser
    }

    pub fn user_context_id(&self) -> u32 {
        self.user_context_id
    }

    /// Populates from a bare suffix such as `^userContextId=1&inBrowser=1`.
    ///
    /// An empty string means "no attributes". Unknown keys are ignored.
    pub fn populate_from_suffix(&mut self, suffix: &str) -> Result<(), SuffixError> {
        self.populate_from_suffix_with(suffix, &ParseOptions::default())
    }

    pub fn populate_from_suffix_with(
        &mut self,
        suffix: &str,
        opts: &ParseOptions,
    ) -> Result<(), SuffixError> {
        *self = Self::default();

        // Legacy keys are unknown to the general record, so the unknown-key
        // policy is applied by the overlay pass, not here.
        let mut general = OriginAttributes::default();
        general
            .populate_from_suffix(suffix)
            .inspect_err(|e| tracing::debug!(error = %e, "origin attribute suffix rejected"))?;
        self.user_context_id = general.user_context_id;

        for (name, value) in suffix::pairs(suffix)? {
            if let Some(key) = LegacyKey::from_name(&name) {
                self.apply_legacy(key, &name, &value).inspect_err(|e| {
                    tracing::debug!(error = %e, "legacy origin attribute rejected")
                })?;
            } else if !OriginAttributes::is_known_key(&name) {
                opts.check_unknown(&name)?;
            }
        }
        Ok(())
    }

    fn apply_legacy(&mut self, key: LegacyKey, name: &str, value: &str) -> Result<(), SuffixError> {
        match key {
            LegacyKey::IsolatedBrowser => {
                self.in_isolated_moz_browser = suffix::parse_flag(name, value)?;
            }
        }
        Ok(())
    }

    /// Populates from `uri^key1=value1&key2=value2` and returns the origin
    /// without its suffix.
    ///
    /// Only the first `^` splits; the rest of the string is handed to
    /// [`Self::populate_from_suffix`] as one suffix. Without a marker the whole
    /// input is the base and the attributes are defaults.
    pub fn populate_from_origin<'a>(&mut self, origin: &'a str) -> Result<&'a str, SuffixError> {
        self.populate_from_origin_with(origin, &ParseOptions::default())
    }

    pub fn populate_from_origin_with<'a>(
        &mut self,
        origin: &'a str,
        opts: &ParseOptions,
    ) -> Result<&'a str, SuffixError> {
        let (base, suffix) = suffix::split_origin(origin);
        self.populate_from_suffix_with(suffix.unwrap_or(""), opts)?;
        Ok(base)
    }

    pub fn from_suffix(suffix: &str) -> Result<Self, SuffixError> {
        let mut attrs = Self::default();
        attrs.populate_from_suffix(suffix)?;
        Ok(attrs)
    }

    /// Parses `origin`, returning the attributes and the suffix-free origin.
    pub fn from_origin(origin: &str) -> Result<(Self, &str), SuffixError> {
        let mut attrs = Self::default();
        let base = attrs.populate_from_origin(origin)?;
        Ok((attrs, base))
    }

    /// General record carrying the tracked user-context id. The isolation
    /// flag has no counterpart there and is dropped.
    pub fn to_origin_attributes(&self) -> OriginAttributes {
        OriginAttributes {
            user_context_id: self.user_context_id,
            ..Default::default()
        }
    }
}

impl From<&OriginAttributes> for StorageOriginAttributes {
    fn from(attrs: &OriginAttributes) -> Self {
        Self {
            in_isolated_moz_browser: false,
            user_context_id: attrs.user_context_id,
        }
    }
}

impl FromStr for StorageOriginAttributes {
    type Err = SuffixError;

    /// Parses a bare suffix (not a full origin).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_suffix(s)
    }
}
