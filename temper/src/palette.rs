//! Shade ramp generation.
//!
//! A ramp keeps the hue and saturation of its base color and only moves
//! lightness. Shade 500 is the base color itself. Lighter shades are
//! interpolated from the base lightness `L` up to 95%, darker shades down to
//! 10%, using the fixed fractions in [`Shade::lightness_step`]. A base at or
//! above 85% stretches the light side to 100%, a base at or below 20%
//! stretches the dark side to 0%, so bases near either end still get
//! separate shades.
//!
//! Every gray from `#050505` to `#f8f8f8` yields ten distinct shades. Grays
//! outside that band lack the 8-bit headroom; `#ffffff` repeats itself on
//! the light side and `#000000` on the dark side.

use crate::color::{Hsl, Rgb};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const LIGHTEST: f64 = 95.0;
const DARKEST: f64 = 10.0;
const NEAR_LIGHT: f64 = 85.0;
const NEAR_DARK: f64 = 20.0;

/// Lightness the 50 and 900 shades move toward for a base lightness `l`.
pub fn lightness_bounds(l: f64) -> (f64, f64) {
    let top = if l >= NEAR_LIGHT { 100.0 } else { LIGHTEST };
    let bottom = if l <= NEAR_DARK { 0.0 } else { DARKEST };
    (top, bottom)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

/// Direction and distance of a shade relative to the base color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightnessStep {
    Lighter(f64),
    Base,
    Darker(f64),
}

impl Shade {
    pub fn key(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
        }
    }

    pub fn from_key(key: u16) -> Option<Self> {
        Self::iter().find(|shade| shade.key() == key)
    }

    pub fn lightness_step(self) -> LightnessStep {
        match self {
            Shade::S50 => LightnessStep::Lighter(1.0),
            Shade::S100 => LightnessStep::Lighter(0.85),
            Shade::S200 => LightnessStep::Lighter(0.65),
            Shade::S300 => LightnessStep::Lighter(0.45),
            Shade::S400 => LightnessStep::Lighter(0.22),
            Shade::S500 => LightnessStep::Base,
            Shade::S600 => LightnessStep::Darker(0.22),
            Shade::S700 => LightnessStep::Darker(0.45),
            Shade::S800 => LightnessStep::Darker(0.70),
            Shade::S900 => LightnessStep::Darker(1.0),
        }
    }
}

impl Display for Shade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRamp {
    #[serde(rename = "50")]
    pub s50: String,
    #[serde(rename = "100")]
    pub s100: String,
    #[serde(rename = "200")]
    pub s200: String,
    #[serde(rename = "300")]
    pub s300: String,
    #[serde(rename = "400")]
    pub s400: String,
    #[serde(rename = "500")]
    pub s500: String,
    #[serde(rename = "600")]
    pub s600: String,
    #[serde(rename = "700")]
    pub s700: String,
    #[serde(rename = "800")]
    pub s800: String,
    #[serde(rename = "900")]
    pub s900: String,
}

impl ColorRamp {
    pub fn get(&self, shade: Shade) -> &str {
        match shade {
            Shade::S50 => &self.s50,
            Shade::S100 => &self.s100,
            Shade::S200 => &self.s200,
            Shade::S300 => &self.s300,
            Shade::S400 => &self.s400,
            Shade::S500 => &self.s500,
            Shade::S600 => &self.s600,
            Shade::S700 => &self.s700,
            Shade::S800 => &self.s800,
            Shade::S900 => &self.s900,
        }
    }

    fn slot_mut(&mut self, shade: Shade) -> &mut String {
        match shade {
            Shade::S50 => &mut self.s50,
            Shade::S100 => &mut self.s100,
            Shade::S200 => &mut self.s200,
            Shade::S300 => &mut self.s300,
            Shade::S400 => &mut self.s400,
            Shade::S500 => &mut self.s500,
            Shade::S600 => &mut self.s600,
            Shade::S700 => &mut self.s700,
            Shade::S800 => &mut self.s800,
            Shade::S900 => &mut self.s900,
        }
    }

    /// Shades in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> {
        Shade::iter().map(|shade| (shade, self.get(shade)))
    }

    /// Builds a ramp where every shade has the same color.
    pub fn uniform(hex: &str) -> Self {
        let hex = hex.to_string();
        Self {
            s50: hex.clone(),
            s100: hex.clone(),
            s200: hex.clone(),
            s300: hex.clone(),
            s400: hex.clone(),
            s500: hex.clone(),
            s600: hex.clone(),
            s700: hex.clone(),
            s800: hex.clone(),
            s900: hex,
        }
    }
}

pub fn generate_palette(base_hex: &str) -> Result<ColorRamp> {
    let base = Rgb::from_hex(base_hex)?;
    let hsl = base.to_hsl();

    let (top, bottom) = lightness_bounds(hsl.l);

    let mut ramp = ColorRamp::uniform(&base.to_hex());
    for shade in Shade::iter() {
        let lightness = match shade.lightness_step() {
            LightnessStep::Base => continue,
            LightnessStep::Lighter(t) => hsl.l + (top - hsl.l) * t,
            LightnessStep::Darker(t) => hsl.l - (hsl.l - bottom) * t,
        };
        *ramp.slot_mut(shade) = Hsl::new(hsl.h, hsl.s, lightness).to_hex();
    }

    tracing::debug!("generated palette for {} (l={:.1})", ramp.s500, hsl.l);
    Ok(ramp)
}
