//! `callout check` command implementation.

use std::path::PathBuf;

use callout_config::Config;
use callout_renderer::ContainerProcessor;
use clap::Args;

use super::read_input;
use crate::error::CliError;
use crate::output::{Output, warning_summary};

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Markdown file to check (`-` reads stdin).
    input: PathBuf,

    /// Path to configuration file (default: auto-discover callout.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Validation` if the document has container warnings.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let markdown = read_input(&self.input)?;

        let source = self.input.to_string_lossy();
        let warnings = check(&markdown, &config);
        if warnings.is_empty() {
            output.success(&warning_summary(&source, 0));
            return Ok(());
        }

        output.warnings(&source, &warnings);
        Err(CliError::Validation(warning_summary(&source, warnings.len())))
    }
}

fn check(markdown: &str, config: &Config) -> Vec<String> {
    let mut processor = ContainerProcessor::new(config.registry());
    let _ = processor.process(markdown);
    processor.into_warnings()
}
