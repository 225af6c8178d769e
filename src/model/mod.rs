// File: src/model/mod.rs
pub mod adapter;
pub mod item;

pub use item::{Category, ClosetItem, Hemisphere, Outfit, Season};
