//! Text and JSON rendering of parse results.

use anyhow::Result;
use serde::Serialize;
use soattrs_core::config::OutputFormat;
use soattrs_core::StorageOriginAttributes;

#[derive(Debug, Serialize)]
pub struct OriginReport<'a> {
    pub origin: &'a str,
    pub base: &'a str,
    pub attributes: StorageOriginAttributes,
}

#[derive(Debug, Serialize)]
pub struct SuffixReport<'a> {
    pub suffix: &'a str,
    pub attributes: StorageOriginAttributes,
}

fn attributes_text(attrs: &StorageOriginAttributes) -> String {
    format!(
        "userContextId={} inIsolatedMozBrowser={}",
        attrs.user_context_id(),
        attrs.in_isolated_moz_browser()
    )
}

impl OriginReport<'_> {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Text => format!("{}\t{}", self.base, attributes_text(&self.attributes)),
            OutputFormat::Json => serde_json::to_string(self)?,
        })
    }
}

impl SuffixReport<'_> {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Text => attributes_text(&self.attributes),
            OutputFormat::Json => serde_json::to_string(self)?,
        })
    }
}
