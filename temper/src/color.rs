//! Conversions between hex strings, RGB triples and HSL.
//!
//! Hue is expressed in degrees `[0, 360)`, saturation and lightness in
//! percent `[0, 100]`.

use crate::error::{Result, ThemeError};
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("hex color pattern compiles"));

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the `#` is optional, digits are case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self> {
        if !HEX_COLOR.is_match(hex) {
            return Err(ThemeError::InvalidColorFormat(hex.to_string()));
        }

        let digits = hex.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ThemeError::InvalidColorFormat(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d == 0.0 {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Wraps hue into `[0, 360)` and clamps saturation/lightness into `[0, 100]`.
    pub fn clamped(self) -> Self {
        Self {
            h: self.h.rem_euclid(360.0),
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let Hsl { h, s, l } = self.clamped();
        let s = s / 100.0;
        let l = l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = h / 60.0;
        let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match sector as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Rgb::from_hex(hex).map(Rgb::to_hsl)
}

pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

/// Validates `hex` and returns it as lowercase `#rrggbb`.
pub fn normalize_hex(hex: &str) -> Result<String> {
    Rgb::from_hex(hex).map(Rgb::to_hex)
}
