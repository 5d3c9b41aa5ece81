//! `soattrs origin` – split origins into base and attributes.

use anyhow::{bail, Context, Result};
use soattrs_core::StorageOriginAttributes;
use std::io::{self, BufRead};

use crate::cli::report::OriginReport;
use crate::cli::Settings;

/// Parse each origin and print one report per line. Malformed origins are
/// logged and skipped; the command fails afterwards if any were seen.
pub fn run_origin(origins: &[String], settings: &Settings) -> Result<()> {
    let inputs: Vec<String> = if origins.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("read origins from stdin")?
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    } else {
        origins.to_vec()
    };

    let mut failed = 0usize;
    for origin in &inputs {
        let mut attrs = StorageOriginAttributes::default();
        match attrs.populate_from_origin_with(origin, &settings.parse) {
            Ok(base) => {
                let report = OriginReport {
                    origin,
                    base,
                    attributes: attrs,
                };
                println!("{}", report.render(settings.output)?);
            }
            Err(e) => {
                tracing::warn!(origin = %origin, "skipping origin: {}", e);
                eprintln!("{origin}: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} origins had a malformed suffix", failed, inputs.len());
    }
    Ok(())
}
