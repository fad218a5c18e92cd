//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::pages::preview::PageType;

/// Command line configuration for Folio.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Config {
    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Folio subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Build the whole site
    Build(BuildArgs),
    /// Render a single document into a standalone preview page
    Preview(PreviewArgs),
}

/// Arguments of `folio build`.
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Content directory
    #[arg(default_value = "contents")]
    pub contents: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// URL prefix the site is served under (e.g. /blog)
    #[arg(long, default_value = "")]
    pub base_path: String,

    /// Color scheme of the generated pages
    #[arg(long, value_enum, default_value_t = DisplayMode::Light)]
    pub mode: DisplayMode,
}

/// Arguments of `folio preview`.
#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    /// Document to preview, `-` reads standard input
    pub input: PathBuf,

    /// Content directory used for site settings and post cards
    #[arg(long, default_value = "contents")]
    pub contents: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "preview.html")]
    pub output: PathBuf,

    /// How the document is interpreted
    #[arg(long, value_enum, default_value_t = PageType::Article)]
    pub page_type: PageType,

    /// Color scheme of the preview page
    #[arg(long, value_enum, default_value_t = DisplayMode::Light)]
    pub mode: DisplayMode,

    /// Print the rendered node tree as JSON instead of writing a page
    #[arg(long)]
    pub json: bool,

    /// Do not open the preview in a browser
    #[arg(long)]
    pub no_open: bool,
}

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// Background color of quote cards.
    pub fn quote_background(&self) -> &'static str {
        match self {
            DisplayMode::Light => "#efefefef",
            DisplayMode::Dark => "#303030",
        }
    }

    /// Class name applied to the page body.
    pub fn class_name(&self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

impl BuildArgs {
    /// Validates build arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.contents.is_dir() {
            bail!(
                "Content directory does not exist: {}",
                self.contents.display()
            );
        }

        Ok(())
    }
}

impl PreviewArgs {
    /// Returns true when the document comes from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new("-")
    }

    /// Validates preview arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() && !self.input.is_file() {
            bail!("Preview input does not exist: {}", self.input.display());
        }

        Ok(())
    }
}
