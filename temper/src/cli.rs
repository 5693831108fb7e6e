use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "temper", about = "Theme palette generator and CSS variable engine")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print the shade ramp for one base color
    Palette {
        color: String,
        /// Variable prefix used for CSS output (`--color-<role>-500`)
        #[arg(long, default_value = "primary")]
        role: String,
        #[arg(long, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        #[arg(long, default_value = ":root")]
        selector: String,
    },
    /// Compose a full color scheme from two base colors
    Compose {
        #[arg(long)]
        primary: String,
        #[arg(long)]
        secondary: String,
        /// Stored scheme whose UI overrides should be kept
        #[arg(long)]
        previous: Option<PathBuf>,
        #[arg(long, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        #[arg(long, default_value = ":root")]
        selector: String,
    },
    /// Build a theme from a config file
    Theme {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Publish a stored scheme as CSS custom properties
    Css {
        scheme: PathBuf,
        #[arg(long, default_value = ":root")]
        selector: String,
    },
    /// Override one UI color slot (e.g. badge.sale) in a stored scheme
    SetUi {
        scheme: PathBuf,
        slot: String,
        color: String,
    },
}
