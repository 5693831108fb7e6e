use crate::css::CssRule;
use crate::error::ThemeError;
use crate::palette::ColorRamp;
use crate::scheme::ColorScheme;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};
use thiserror::Error;

pub const CONFIG_FILE: &str = "temper.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    NotFound(String),
    #[error("Invalid theme settings: {0}")]
    Theme(#[from] ThemeError),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Css,
}

impl OutputFormat {
    pub fn render_ramp(self, ramp: &ColorRamp, role: &str, selector: &str) -> serde_json::Result<String> {
        match self {
            OutputFormat::Json => serde_json::to_string_pretty(ramp),
            OutputFormat::Css => Ok(CssRule::new(selector)
                .properties(ramp.css_variables(role))
                .render()),
        }
    }

    pub fn render_scheme(self, scheme: &ColorScheme, selector: &str) -> serde_json::Result<String> {
        match self {
            OutputFormat::Json => scheme.to_json(),
            OutputFormat::Css => Ok(scheme.to_css(selector)),
        }
    }

    /// JSON carries the whole theme record, CSS only its color scheme.
    pub fn render_theme(self, theme: &Theme, selector: &str) -> serde_json::Result<String> {
        match self {
            OutputFormat::Json => serde_json::to_string_pretty(theme),
            OutputFormat::Css => Ok(theme.color_scheme.to_css(selector)),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ThemeSettings {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub primary: String,
    pub secondary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub system: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_selector")]
    pub selector: String,
}

impl OutputSettings {
    /// A format passed on the command line wins over the configured one.
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.format)
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            selector: default_selector(),
        }
    }
}

fn default_selector() -> String {
    ":root".to_string()
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub theme: ThemeSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn build_theme(&self) -> Result<Theme, ConfigError> {
        let settings = &self.theme;
        let theme = Theme::new(&settings.name, &settings.primary, &settings.secondary)?
            .description(&settings.description)
            .tags(settings.tags.iter().cloned())
            .system(settings.system);
        Ok(theme)
    }
}
