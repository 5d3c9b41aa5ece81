//! General-purpose origin attributes record.
//!
//! Holds the attributes every consumer of an origin suffix understands. The
//! storage layer ([`crate::storage_attributes`]) reads its user-context id
//! from here and overlays the keys this record no longer models.

use serde::Serialize;

use crate::error::SuffixError;
use crate::suffix::{self, ParseOptions};

/// Keys understood by [`OriginAttributes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    UserContextId,
    PrivateBrowsingId,
    FirstPartyDomain,
    GeckoViewUserContextId,
    PartitionKey,
    /// Accepted for compatibility and dropped.
    Deprecated,
}

impl Key {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "userContextId" => Some(Key::UserContextId),
            "privateBrowsingId" => Some(Key::PrivateBrowsingId),
            "firstPartyDomain" => Some(Key::FirstPartyDomain),
            "geckoViewUserContextId" => Some(Key::GeckoViewUserContextId),
            "partitionKey" => Some(Key::PartitionKey),
            "appId" | "addonId" | "inBrowser" => Some(Key::Deprecated),
            _ => None,
        }
    }
}

/// Origin attributes shared by all storage and networking consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginAttributes {
    pub user_context_id: u32,
    pub private_browsing_id: u32,
    pub first_party_domain: String,
    pub gecko_view_user_context_id: String,
    pub partition_key: String,
}

impl OriginAttributes {
    /// True if `name` is a key this record accepts (including deprecated ones).
    pub fn is_known_key(name: &str) -> bool {
        Key::from_name(name).is_some()
    }

    /// Populates from a suffix like `^userContextId=1&privateBrowsingId=2`.
    ///
    /// Resets to defaults first. An empty suffix is valid and leaves defaults.
    /// Unknown keys are ignored; see [`Self::populate_from_suffix_with`].
    pub fn populate_from_suffix(&mut self, suffix: &str) -> Result<(), SuffixError> {
        self.populate_from_suffix_with(suffix, &ParseOptions::default())
    }

    pub fn populate_from_suffix_with(
        &mut self,
        suffix: &str,
        opts: &ParseOptions,
    ) -> Result<(), SuffixError> {
        *self = Self::default();
        for (name, value) in suffix::pairs(suffix)? {
            match Key::from_name(&name) {
                Some(key) => self.apply(key, &name, &value)?,
                None => opts.check_unknown(&name)?,
            }
        }
        Ok(())
    }

    fn apply(&mut self, key: Key, name: &str, value: &str) -> Result<(), SuffixError> {
        match key {
            Key::UserContextId => self.user_context_id = suffix::parse_u32(name, value)?,
            Key::PrivateBrowsingId => self.private_browsing_id = suffix::parse_u32(name, value)?,
            // ':' is written as '+' before form encoding.
            Key::FirstPartyDomain => self.first_party_domain = value.replace('+', ":"),
            Key::GeckoViewUserContextId => self.gecko_view_user_context_id = value.to_string(),
            Key::PartitionKey => self.partition_key = value.replace('+', ":"),
            Key::Deprecated => {}
        }
        Ok(())
    }

    pub fn is_private_browsing(&self) -> bool {
        self.private_browsing_id != 0
    }
}
