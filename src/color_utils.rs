// File: src/color_utils.rs
// RGB <-> HSL conversion and named color normalization.
use crate::error::OutfitError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four colors that always get a monochromatic scheme.
pub const NEUTRAL_NAMES: [&str; 4] = ["black", "white", "gray", "beige"];

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("gray", Rgb::new(128, 128, 128)),
    ("beige", Rgb::new(245, 245, 220)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("pink", Rgb::new(255, 192, 203)),
    ("brown", Rgb::new(165, 42, 42)),
    ("navy", Rgb::new(0, 0, 128)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("olive", Rgb::new(128, 128, 0)),
    ("teal", Rgb::new(0, 128, 128)),
    ("khaki", Rgb::new(240, 230, 140)),
    ("cream", Rgb::new(255, 253, 208)),
    ("tan", Rgb::new(210, 180, 140)),
    ("burgundy", Rgb::new(128, 0, 32)),
    ("lime", Rgb::new(0, 255, 0)),
    ("silver", Rgb::new(192, 192, 192)),
    ("gold", Rgb::new(255, 215, 0)),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue in degrees [0, 360), saturation and lightness as percentages [0, 100].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    /// Same saturation and lightness, hue shifted by `degrees` (wrapping).
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }
}

pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    // Achromatic
    if delta == 0.0 {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());

    let h = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsl {
        h: h.rem_euclid(360.0),
        s: (s * 100.0).clamp(0.0, 100.0),
        l: l * 100.0,
    }
}

pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Lowercased, trimmed name with `grey` folded into `gray`.
pub fn normalize_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    match lower.as_str() {
        "grey" => "gray".to_string(),
        _ => lower,
    }
}

fn parse_hex(raw: &str) -> Option<Rgb> {
    let hex = raw.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
}

/// A clothing color as tagged upstream: either a name or explicit channels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb(Rgb),
    Channels([u8; 3]),
}

impl Color {
    pub fn named(name: &str) -> Self {
        Self::Named(name.to_string())
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Resolves to RGB. Names are matched case-insensitively; `#rrggbb` is accepted.
    pub fn to_rgb(&self) -> Result<Rgb, OutfitError> {
        match self {
            Color::Rgb(rgb) => Ok(*rgb),
            Color::Channels([r, g, b]) => Ok(Rgb::new(*r, *g, *b)),
            Color::Named(name) => {
                if let Some(rgb) = parse_hex(name) {
                    return Ok(rgb);
                }
                let key = normalize_name(name);
                NAMED_COLORS
                    .iter()
                    .find(|(n, _)| *n == key)
                    .map(|(_, rgb)| *rgb)
                    .ok_or_else(|| OutfitError::InvalidColor(name.clone()))
            }
        }
    }

    pub fn is_neutral(&self) -> bool {
        if let Color::Named(name) = self
            && NEUTRAL_NAMES.contains(&normalize_name(name).as_str())
        {
            return true;
        }
        match self.to_rgb() {
            Ok(rgb) => NAMED_COLORS
                .iter()
                .filter(|(n, _)| NEUTRAL_NAMES.contains(n))
                .any(|(_, neutral)| *neutral == rgb),
            Err(_) => false,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => write!(f, "{}", name),
            Color::Rgb(rgb) => write!(f, "{}", rgb),
            Color::Channels([r, g, b]) => write!(f, "rgb({}, {}, {})", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors_convert_to_expected_hsl() {
        let red = rgb_to_hsl(255, 0, 0);
        assert_eq!((red.h, red.s, red.l), (0.0, 100.0, 50.0));

        let green = rgb_to_hsl(0, 255, 0);
        assert_eq!((green.h, green.s, green.l), (120.0, 100.0, 50.0));

        let blue = rgb_to_hsl(0, 0, 255);
        assert_eq!((blue.h, blue.s, blue.l), (240.0, 100.0, 50.0));
    }

    #[test]
    fn achromatic_input_has_zero_hue_and_saturation() {
        for v in [0u8, 17, 128, 255] {
            let hsl = rgb_to_hsl(v, v, v);
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
        }
        assert_eq!(rgb_to_hsl(255, 255, 255).l, 100.0);
        assert_eq!(rgb_to_hsl(0, 0, 0).l, 0.0);
    }

    #[test]
    fn hue_stays_below_360() {
        // Magenta-ish red sits just under the wrap point
        let hsl = rgb_to_hsl(255, 0, 1);
        assert!(hsl.h < 360.0 && hsl.h > 359.0);
    }

    #[test]
    fn round_trip_within_one_per_channel() {
        for r in (0..=255u16).step_by(5) {
            for g in (0..=255u16).step_by(7) {
                for b in (0..=255u16).step_by(11) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let back = rgb_to_hsl(r, g, b).to_rgb();
                    assert!(
                        back.r.abs_diff(r) <= 1 && back.g.abs_diff(g) <= 1 && back.b.abs_diff(b) <= 1,
                        "({}, {}, {}) came back as {}",
                        r,
                        g,
                        b,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn rotation_wraps_negative_hues() {
        let hsl = Hsl {
            h: 10.0,
            s: 50.0,
            l: 50.0,
        };
        assert_eq!(hsl.rotate(-30.0).h, 340.0);
        assert_eq!(hsl.rotate(360.0).h, 10.0);
    }

    #[test]
    fn named_colors_resolve_case_insensitively() {
        assert_eq!(Color::named("Black").to_rgb().unwrap(), Rgb::new(0, 0, 0));
        assert_eq!(Color::named(" RED ").to_rgb().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(
            Color::named("Grey").to_rgb().unwrap(),
            Color::named("gray").to_rgb().unwrap()
        );
        assert_eq!(
            Color::named("#0A0b0C").to_rgb().unwrap(),
            Rgb::new(10, 11, 12)
        );
    }

    #[test]
    fn unknown_name_is_invalid_color() {
        let err = Color::named("Periwinkle-ish").to_rgb().unwrap_err();
        assert!(matches!(err, OutfitError::InvalidColor(ref s) if s == "Periwinkle-ish"));
        assert!(Color::named("#12345").to_rgb().is_err());
    }

    #[test]
    fn neutrals_detected_by_name_and_value() {
        for name in ["black", "WHITE", "Gray", "grey", "Beige"] {
            assert!(Color::named(name).is_neutral(), "{}", name);
        }
        assert!(Color::rgb(0, 0, 0).is_neutral());
        assert!(Color::Channels([245, 245, 220]).is_neutral());
        assert!(Color::named("#FFFFFF").is_neutral());
        assert!(!Color::named("red").is_neutral());
        assert!(!Color::rgb(1, 0, 0).is_neutral());
        assert!(!Color::named("nonsense").is_neutral());
    }

    #[test]
    fn color_deserializes_from_every_shape() {
        let named: Color = serde_json::from_str(r#""Navy""#).unwrap();
        assert_eq!(named, Color::named("Navy"));

        let object: Color = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
        assert_eq!(object.to_rgb().unwrap(), Rgb::new(1, 2, 3));

        let array: Color = serde_json::from_str("[4,5,6]").unwrap();
        assert_eq!(array.to_rgb().unwrap(), Rgb::new(4, 5, 6));
    }
}
