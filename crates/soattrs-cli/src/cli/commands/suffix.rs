//! `soattrs suffix` – parse a bare attribute suffix.

use anyhow::{Context, Result};
use soattrs_core::StorageOriginAttributes;

use crate::cli::report::SuffixReport;
use crate::cli::Settings;

pub fn run_suffix(suffix: &str, settings: &Settings) -> Result<()> {
    let mut attrs = StorageOriginAttributes::default();
    attrs
        .populate_from_suffix_with(suffix, &settings.parse)
        .with_context(|| format!("suffix {suffix:?}"))?;
    let report = SuffixReport {
        suffix,
        attributes: attrs,
    };
    println!("{}", report.render(settings.output)?);
    Ok(())
}
