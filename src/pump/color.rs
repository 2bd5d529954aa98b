use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PumpError;

/// Display color of a pump series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert an HSL triple (hue in degrees, saturation and lightness in `0..=1`)
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = lightness - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = PumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PumpError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        // from_str_radix alone would accept a sign
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #rgb shorthand: each digit is doubled
            3 => {
                let short = |digits: &str| channel(digits).map(|v| v * 17);
                Ok(Self::rgb(
                    short(&hex[0..1])?,
                    short(&hex[1..2])?,
                    short(&hex[2..3])?,
                ))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = PumpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Fixed colors handed out before falling back to generated hues
pub const DEFAULT_PALETTE: [Color; 8] = [
    Color::rgb(0x2e, 0xcc, 0x71), // green
    Color::rgb(0xe6, 0x7e, 0x22), // orange
    Color::rgb(0x34, 0x98, 0xdb), // blue
    Color::rgb(0xe7, 0x4c, 0x3c), // red
    Color::rgb(0x9b, 0x59, 0xb6), // purple
    Color::rgb(0x1a, 0xbc, 0x9c), // turquoise
    Color::rgb(0xf1, 0xc4, 0x0f), // yellow
    Color::rgb(0x34, 0x49, 0x5e), // navy
];

const GOLDEN_ANGLE_DEG: f64 = 137.507_764;
const FALLBACK_ATTEMPTS: usize = 4096;

/// Assigns display colors so that held pumps stay visually distinct
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.to_vec())
    }
}

impl Palette {
    /// Create a palette from an ordered list of preferred colors
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Preferred colors, in hand-out order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Pick a color for a new pump.
    ///
    /// A requested color is honored when nobody holds it yet. Otherwise the
    /// first unused palette entry is returned, and once the palette is
    /// exhausted hues are generated at golden-angle spacing (70% saturation,
    /// 50% lightness) until one is found that is not in `used`.
    pub fn assign(&self, requested: Option<Color>, used: &[Color]) -> Color {
        if let Some(color) = requested {
            if !used.contains(&color) {
                return color;
            }
        }

        if let Some(color) = self.colors.iter().find(|c| !used.contains(c)) {
            return *color;
        }

        (0..FALLBACK_ATTEMPTS)
            .map(|k| Color::from_hsl(k as f64 * GOLDEN_ANGLE_DEG, 0.7, 0.5))
            .find(|c| !used.contains(c))
            .unwrap_or_else(|| {
                // every generated hue is taken; walk the gray ramp instead
                (0..=255u8)
                    .map(|v| Color::rgb(v, v, v))
                    .find(|c| !used.contains(c))
                    .unwrap_or(Color::rgb(0, 0, 0))
            })
    }
}
