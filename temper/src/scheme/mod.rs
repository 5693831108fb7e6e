//! Color scheme records and the composer that derives them from two base
//! colors.

use crate::color::normalize_hex;
use crate::error::Result;
use crate::palette::{ColorRamp, Shade, generate_palette};
use serde::{Deserialize, Serialize};

pub mod ui;

pub use ui::*;

const GRADIENT_ANGLE: u16 = 135;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
    pub inverse: String,
    pub link: String,
    pub link_hover: String,
}

impl Default for TextColors {
    fn default() -> Self {
        Self {
            primary: "#1f2937".to_string(),
            secondary: "#4b5563".to_string(),
            muted: "#9ca3af".to_string(),
            inverse: "#ffffff".to_string(),
            link: "#3b82f6".to_string(),
            link_hover: "#2563eb".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderColors {
    pub default: String,
    pub light: String,
    pub focus: String,
}

impl Default for BorderColors {
    fn default() -> Self {
        Self {
            default: "#e5e7eb".to_string(),
            light: "#f3f4f6".to_string(),
            focus: "#3b82f6".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gradients {
    pub primary: String,
    pub secondary: String,
    pub button: String,
    pub accent: String,
}

impl Gradients {
    fn derive(primary: &ColorRamp, secondary: &ColorRamp) -> Self {
        let p500 = primary.get(Shade::S500);
        let s500 = secondary.get(Shade::S500);

        Self {
            primary: linear_gradient(&[(p500, 0), (primary.get(Shade::S700), 100)]),
            secondary: linear_gradient(&[(s500, 0), (secondary.get(Shade::S700), 100)]),
            button: linear_gradient(&[(p500, 0), (s500, 100)]),
            accent: linear_gradient(&[(primary.get(Shade::S400), 0), (p500, 50), (s500, 100)]),
        }
    }
}

impl Default for Gradients {
    fn default() -> Self {
        Self::derive(&default_primary_ramp(), &default_secondary_ramp())
    }
}

/// `linear-gradient(135deg, <color> <pos>%, ...)`
pub fn linear_gradient(stops: &[(&str, u8)]) -> String {
    let stops = stops
        .iter()
        .map(|(color, position)| format!("{color} {position}%"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("linear-gradient({GRADIENT_ANGLE}deg, {stops})")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorScheme {
    pub primary: ColorRamp,
    pub secondary: ColorRamp,
    pub text: TextColors,
    pub border: BorderColors,
    pub gradients: Gradients,
    pub ui: UiColors,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: default_primary_ramp(),
            secondary: default_secondary_ramp(),
            text: TextColors::default(),
            border: BorderColors::default(),
            gradients: Gradients::default(),
            ui: UiColors::default(),
        }
    }
}

impl ColorScheme {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn ui_color(&self, slot: UiSlot) -> &str {
        self.ui.get(slot)
    }

    /// Overrides one UI slot. The value must be a `#rrggbb` color and is
    /// stored lowercased.
    pub fn set_ui_color(&mut self, slot: UiSlot, value: &str) -> Result<()> {
        let value = normalize_hex(value).inspect_err(|e| {
            tracing::warn!("rejected override for {slot}: {e}");
        })?;
        *self.ui.get_mut(slot) = value;
        Ok(())
    }
}

fn default_primary_ramp() -> ColorRamp {
    ColorRamp {
        s50: "#eff6ff".to_string(),
        s100: "#dbeafe".to_string(),
        s200: "#bfdbfe".to_string(),
        s300: "#93c5fd".to_string(),
        s400: "#60a5fa".to_string(),
        s500: "#3b82f6".to_string(),
        s600: "#2563eb".to_string(),
        s700: "#1d4ed8".to_string(),
        s800: "#1e40af".to_string(),
        s900: "#1e3a8a".to_string(),
    }
}

fn default_secondary_ramp() -> ColorRamp {
    ColorRamp {
        s50: "#f5f3ff".to_string(),
        s100: "#ede9fe".to_string(),
        s200: "#ddd6fe".to_string(),
        s300: "#c4b5fd".to_string(),
        s400: "#a78bfa".to_string(),
        s500: "#8b5cf6".to_string(),
        s600: "#7c3aed".to_string(),
        s700: "#6d28d9".to_string(),
        s800: "#5b21b6".to_string(),
        s900: "#4c1d95".to_string(),
    }
}

/// Base colors as submitted by the admin theme form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary_color: String,
    pub secondary_color: String,
}

impl ThemeColors {
    pub fn new(primary: &str, secondary: &str) -> Self {
        Self {
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
        }
    }

    pub fn compose(&self, previous: Option<&ColorScheme>) -> Result<ColorScheme> {
        compose_scheme(&self.primary_color, &self.secondary_color, previous)
    }
}

/// Builds complete schemes on top of a defaults template. The template is
/// never mutated; each composition works on its own clone.
#[derive(Clone, Debug, Default)]
pub struct Composer {
    template: ColorScheme,
}

impl Composer {
    pub fn new(template: ColorScheme) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &ColorScheme {
        &self.template
    }

    /// Both colors are validated before anything is built. When `previous`
    /// is given its `ui` colors replace the template's, so per-slot admin
    /// overrides survive a base color change.
    pub fn compose(
        &self,
        primary: &str,
        secondary: &str,
        previous: Option<&ColorScheme>,
    ) -> Result<ColorScheme> {
        let primary = normalize_hex(primary)?;
        let secondary = normalize_hex(secondary)?;

        let primary_ramp = generate_palette(&primary)?;
        let secondary_ramp = generate_palette(&secondary)?;

        let mut scheme = self.template.clone();
        scheme.text.link = primary.clone();
        scheme.text.link_hover = primary_ramp.get(Shade::S600).to_string();
        scheme.border.focus = primary.clone();
        scheme.gradients = Gradients::derive(&primary_ramp, &secondary_ramp);
        scheme.primary = primary_ramp;
        scheme.secondary = secondary_ramp;

        if let Some(previous) = previous {
            scheme.ui = previous.ui.clone();
        }

        tracing::debug!(
            "composed scheme primary={primary} secondary={secondary} kept_ui={}",
            previous.is_some()
        );
        Ok(scheme)
    }
}

pub fn compose_scheme(
    primary: &str,
    secondary: &str,
    previous: Option<&ColorScheme>,
) -> Result<ColorScheme> {
    Composer::default().compose(primary, secondary, previous)
}
