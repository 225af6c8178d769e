// File: src/outfit.rs
// Filter -> partition -> random top -> color scheme -> matched (or fallback) bottom and shoes.
use crate::error::OutfitError;
use crate::model::{Category, ClosetItem, Outfit};
use crate::scheme::{SchemeTargets, resolve_targets};
use crate::store::{self, FilterOptions};
use rand::Rng;
use rand::seq::IndexedRandom;

/// The candidate pool split by category. Order within each slot follows the
/// closet snapshot.
#[derive(Debug, Default)]
pub struct Partition<'i> {
    pub tops: Vec<&'i ClosetItem>,
    pub bottoms: Vec<&'i ClosetItem>,
    pub shoes: Vec<&'i ClosetItem>,
    pub accessories: Vec<&'i ClosetItem>,
}

impl<'i> Partition<'i> {
    pub fn new(pool: &[&'i ClosetItem]) -> Self {
        let mut partition = Self::default();
        for &item in pool {
            match item.category {
                Some(Category::Top) => partition.tops.push(item),
                Some(Category::Bottom) => partition.bottoms.push(item),
                Some(Category::Shoes) => partition.shoes.push(item),
                Some(Category::Accessory) => partition.accessories.push(item),
                _ => {}
            }
        }
        partition
    }

    /// Top, bottom and shoes are all mandatory.
    pub fn has_mandatory_slots(&self) -> bool {
        !self.tops.is_empty() && !self.bottoms.is_empty() && !self.shoes.is_empty()
    }
}

fn color_matches(item: &ClosetItem, targets: &SchemeTargets) -> bool {
    item.color
        .as_ref()
        .and_then(|c| c.to_rgb().ok())
        .is_some_and(|rgb| targets.matches(rgb))
}

/// First color-matched item of the slot's partition, else its first item.
fn pick_slot<'i>(
    slot: &[&'i ClosetItem],
    category: &Category,
    targets: &SchemeTargets,
) -> Option<&'i ClosetItem> {
    let matched = slot.iter().copied().find(|item| color_matches(item, targets));
    if matched.is_none() {
        log::debug!(
            "No {} color match for {}, falling back",
            category,
            targets.scheme
        );
    }
    matched.or_else(|| slot.first().copied())
}

/// Generates an outfit using the thread-local random source.
pub fn generate_outfit(
    items: &[ClosetItem],
    season: Option<&str>,
    occasion: Option<&str>,
) -> Result<Outfit, OutfitError> {
    generate_outfit_with_rng(items, season, occasion, &mut rand::rng())
}

/// Generates an outfit from `items` for the given season and occasion.
///
/// Returns [`Outfit::empty`] when nothing suitable exists: no constraints,
/// an empty candidate pool, or a missing top, bottom or shoes category.
/// Items whose color does not resolve to RGB never reach the pool.
pub fn generate_outfit_with_rng<R: Rng + ?Sized>(
    items: &[ClosetItem],
    season: Option<&str>,
    occasion: Option<&str>,
    rng: &mut R,
) -> Result<Outfit, OutfitError> {
    let pool = store::filter(items, FilterOptions::new(season, occasion));
    if pool.is_empty() {
        return Ok(Outfit::empty());
    }

    let partition = Partition::new(&pool);
    log::debug!(
        "Partition: {} tops, {} bottoms, {} shoes, {} accessories",
        partition.tops.len(),
        partition.bottoms.len(),
        partition.shoes.len(),
        partition.accessories.len()
    );
    if !partition.has_mandatory_slots() {
        return Ok(Outfit::empty());
    }

    let Some(&top) = partition.tops.choose(rng) else {
        return Ok(Outfit::empty());
    };
    // Eligibility guarantees a resolvable color
    let Some(top_color) = &top.color else {
        return Ok(Outfit::empty());
    };
    let targets = resolve_targets(top_color, rng)?;

    let bottom = pick_slot(&partition.bottoms, &Category::Bottom, &targets);
    let shoes = pick_slot(&partition.shoes, &Category::Shoes, &targets);

    match (bottom, shoes) {
        (Some(bottom), Some(shoes)) => Ok(Outfit::complete(
            top.clone(),
            bottom.clone(),
            shoes.clone(),
            targets.scheme,
        )),
        _ => Ok(Outfit::empty()),
    }
}
