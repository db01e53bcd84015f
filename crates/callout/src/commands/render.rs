//! `callout render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use callout_config::{CliSettings, Config};
use callout_renderer::{RenderOutput, render_markdown};
use clap::Args;

use super::read_input;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (`-` reads stdin).
    input: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover callout.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long)]
    no_gfm: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the input/output file
    /// cannot be accessed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            gfm: self.no_gfm.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let markdown = read_input(&self.input)?;
        let rendered = render(&markdown, &config);

        output.warnings(&self.input.to_string_lossy(), &rendered.warnings);

        match &self.output {
            Some(path) => {
                write_html(path, &rendered.html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => std::io::stdout().lock().write_all(rendered.html.as_bytes())?,
        }

        tracing::info!(
            input = %self.input.display(),
            warnings = rendered.warnings.len(),
            "Rendered document"
        );
        Ok(())
    }
}

fn render(markdown: &str, config: &Config) -> RenderOutput {
    render_markdown(markdown, &config.render_options())
}

fn write_html(path: &Path, html: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_with_default_config() {
        let rendered = render("::: details More\nBody\n:::\n", &Config::default());
        assert!(rendered.html.starts_with("<details><summary>More</summary>"));
        assert!(rendered.warnings.is_empty());
    }

    #[test]
    fn test_render_with_disabled_handler() {
        let mut config = Config::default();
        config.containers.message = false;
        let rendered = render("::: message\nBody\n:::\n", &config);
        assert!(!rendered.html.contains("<aside"));
        assert_eq!(rendered.warnings.len(), 2);
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("page.md");
        let out = dir.path().join("site/page.html");
        let config = dir.path().join("callout.toml");
        std::fs::write(&input, "::: message alert\nCareful\n:::\n").unwrap();
        std::fs::write(&config, "").unwrap();

        let args = RenderArgs {
            input,
            output: Some(out.clone()),
            config: Some(config),
            no_gfm: false,
            verbose: false,
        };
        args.execute().unwrap();

        let html = std::fs::read_to_string(out).unwrap();
        assert!(html.starts_with(r#"<aside class="msg alert">"#));
    }

    #[test]
    fn test_execute_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let args = RenderArgs {
            input: dir.path().join("page.md"),
            output: None,
            config: Some(dir.path().join("missing.toml")),
            no_gfm: false,
            verbose: false,
        };
        assert!(matches!(args.execute(), Err(CliError::Config(_))));
    }
}
