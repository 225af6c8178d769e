// File: src/scheme.rs
use crate::color_utils::{Color, Rgb};
use crate::error::OutfitError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Monochromatic,
    Complementary,
    Analogous,
}

impl ColorScheme {
    /// Neutrals always pair monochromatically; anything else is a coin flip
    /// between complementary and analogous.
    pub fn choose<R: Rng + ?Sized>(base: &Color, rng: &mut R) -> Self {
        if base.is_neutral() {
            ColorScheme::Monochromatic
        } else if rng.random_bool(0.5) {
            ColorScheme::Complementary
        } else {
            ColorScheme::Analogous
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Monochromatic => "monochromatic",
            ColorScheme::Complementary => "complementary",
            ColorScheme::Analogous => "analogous",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeTargets {
    pub scheme: ColorScheme,
    /// One color for monochromatic and complementary, two for analogous.
    pub colors: Vec<Rgb>,
}

impl SchemeTargets {
    pub fn matches(&self, rgb: Rgb) -> bool {
        self.colors.contains(&rgb)
    }
}

/// Target colors for a known scheme.
pub fn targets_for(scheme: ColorScheme, base: Rgb) -> Vec<Rgb> {
    match scheme {
        ColorScheme::Monochromatic => vec![base],
        ColorScheme::Complementary => vec![base.to_hsl().rotate(180.0).to_rgb()],
        ColorScheme::Analogous => {
            let hsl = base.to_hsl();
            vec![hsl.rotate(30.0).to_rgb(), hsl.rotate(-30.0).to_rgb()]
        }
    }
}

/// Picks a scheme for `base` and computes the colors a matching piece must have.
///
/// Fails only when `base` cannot be resolved to RGB.
pub fn resolve_targets<R: Rng + ?Sized>(
    base: &Color,
    rng: &mut R,
) -> Result<SchemeTargets, OutfitError> {
    let rgb = base.to_rgb()?;
    let scheme = ColorScheme::choose(base, rng);
    let colors = targets_for(scheme, rgb);
    log::debug!("Scheme for {}: {} -> {:?}", base, scheme, colors);
    Ok(SchemeTargets { scheme, colors })
}
