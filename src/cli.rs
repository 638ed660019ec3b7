//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can generate man pages from it.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::terminal::{Color, Graphics};

/// Render width-bounded, ANSI-styled terminal lines.
#[derive(Debug, Parser)]
#[command(name = "sgrline", version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render text as styled lines cut to a visible width
    Render(RenderArgs),
    /// Show every named color as a swatch
    Colors,
    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Maximum visible columns per line [default: config, then terminal width]
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Foreground color name (e.g. red, brightcyan)
    #[arg(long, value_name = "COLOR")]
    pub fg: Option<Color>,

    /// Background color name
    #[arg(long, value_name = "COLOR")]
    pub bg: Option<Color>,

    #[arg(long)]
    pub bold: bool,

    #[arg(long)]
    pub faint: bool,

    #[arg(long)]
    pub reverse: bool,

    /// Treat input as pre-styled text; embedded escape sequences are kept
    #[arg(long, conflicts_with_all = ["fg", "bg", "bold", "faint", "reverse"])]
    pub raw: bool,

    /// Text to render, one line each. Reads stdin when omitted.
    pub text: Vec<String>,
}

impl RenderArgs {
    /// Fragment style from the flags, or `None` when no flag was given.
    pub fn graphics(&self) -> Option<Graphics> {
        let graphics = Graphics {
            fg: self.fg,
            bg: self.bg,
            bold: self.bold,
            faint: self.faint,
            reverse: self.reverse,
        };
        (graphics != Graphics::default()).then_some(graphics)
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file if none exists
    Init,
}
