// File: src/lib.rs
//! Outfit generation for a clothing closet.
//!
//! Given a closet snapshot and a season and/or occasion, [`generate_outfit`]
//! picks a top at random, chooses a color scheme from its color, and completes
//! the outfit with a color-matched bottom and pair of shoes. It never returns a
//! partial outfit.
pub mod color_utils;
pub mod config;
pub mod error;
pub mod model;
pub mod outfit;
pub mod paths;
pub mod scheme;
pub mod store;

pub use color_utils::{Color, Hsl, Rgb, hsl_to_rgb, rgb_to_hsl};
pub use error::OutfitError;
pub use model::{Category, ClosetItem, Hemisphere, Outfit, Season};
pub use outfit::{generate_outfit, generate_outfit_with_rng};
pub use scheme::{ColorScheme, SchemeTargets, resolve_targets};
