//! CLI for inspecting storage origin attributes.

mod commands;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use soattrs_core::config::{self, OutputFormat};
use soattrs_core::{ParseOptions, UnknownKeyPolicy};

use commands::{run_completions, run_origin, run_suffix};

/// Top-level CLI for soattrs.
#[derive(Debug, Parser)]
#[command(name = "soattrs")]
#[command(about = "soattrs: parse origin attribute suffixes used by storage quota", long_about = None)]
pub struct Cli {
    /// Print results as JSON (overrides `output` in config.toml).
    #[arg(long, global = true)]
    pub json: bool,

    /// Fail on attribute keys nothing recognizes (overrides `unknown_keys` in config.toml).
    #[arg(long, global = true)]
    pub reject_unknown: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split origins like `https://a.test^userContextId=1` into base and attributes.
    Origin {
        /// Origins to parse. Read one per line from stdin when omitted.
        origins: Vec<String>,
    },

    /// Parse a bare suffix like `^userContextId=1&inBrowser=1`.
    Suffix {
        /// Suffix including the leading `^` (empty string for none).
        suffix: String,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Effective settings after merging config.toml with command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub parse: ParseOptions,
    pub output: OutputFormat,
}

impl Cli {
    pub fn settings(&self, cfg: &config::SoattrsConfig) -> Settings {
        let mut parse = cfg.parse_options();
        if self.reject_unknown {
            parse.unknown_keys = UnknownKeyPolicy::Reject;
        }
        let output = if self.json {
            OutputFormat::Json
        } else {
            cfg.output
        };
        Settings { parse, output }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let settings = cli.settings(&cfg);

        match cli.command {
            CliCommand::Origin { origins } => run_origin(&origins, &settings)?,
            CliCommand::Suffix { suffix } => run_suffix(&suffix, &settings)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
