use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use temper::cli::{Cli, Cmd};
use temper::config::{CONFIG_FILE, Config, OutputFormat};
use temper::{ColorScheme, UiSlot, compose_scheme, generate_palette};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.cmd {
        Some(Cmd::Palette {
            color,
            role,
            format,
            selector,
        }) => {
            let ramp = generate_palette(&color)?;
            format.render_ramp(&ramp, &role, &selector)?
        }
        Some(Cmd::Compose {
            primary,
            secondary,
            previous,
            format,
            selector,
        }) => {
            let previous = previous.as_deref().map(load_scheme).transpose()?;
            let scheme = compose_scheme(&primary, &secondary, previous.as_ref())?;
            format.render_scheme(&scheme, &selector)?
        }
        Some(Cmd::Theme { config, format }) => build_theme(config, format)?,
        Some(Cmd::Css { scheme, selector }) => load_scheme(&scheme)?.to_css(&selector),
        Some(Cmd::SetUi {
            scheme,
            slot,
            color,
        }) => {
            let mut stored = load_scheme(&scheme)?;
            let slot: UiSlot = slot.parse()?;
            stored.set_ui_color(slot, &color)?;
            stored.to_json()?
        }
        None => build_theme(None, None)?,
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn build_theme(config: Option<PathBuf>, format: Option<OutputFormat>) -> Result<String> {
    let path = config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = Config::from_file(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let theme = config.build_theme()?;

    let format = config.output.resolve_format(format);
    Ok(format.render_theme(&theme, &config.output.selector)?)
}

fn load_scheme(path: &Path) -> Result<ColorScheme> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scheme {}", path.display()))?;
    ColorScheme::from_json(&json).with_context(|| format!("Failed to parse scheme {}", path.display()))
}
