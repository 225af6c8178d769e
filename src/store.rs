// File: src/store.rs
// Season / occasion / eligibility filtering over a closet snapshot.
use crate::model::ClosetItem;

pub const ALL_SEASONS: [&str; 2] = ["All", "All seasons"];

#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions<'a> {
    pub season: Option<&'a str>,
    pub occasion: Option<&'a str>,
}

impl<'a> FilterOptions<'a> {
    pub fn new(season: Option<&'a str>, occasion: Option<&'a str>) -> Self {
        Self { season, occasion }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.season.is_none() && self.occasion.is_none()
    }
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// An item can take part in outfit generation only when it is fully tagged and uploaded.
pub fn is_eligible(item: &ClosetItem) -> bool {
    item.category
        .as_ref()
        .is_some_and(|c| !c.as_str().trim().is_empty())
        && present(&item.subcategory)
        && present(&item.season)
        && present(&item.occasion)
        && present(&item.image_url)
        && has_resolvable_color(item)
}

fn has_resolvable_color(item: &ClosetItem) -> bool {
    let Some(color) = &item.color else {
        return false;
    };
    match color.to_rgb() {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Item {} is not eligible: {}", item.id, e);
            false
        }
    }
}

/// Whether an item tagged `item_season` can be worn in `requested`.
pub fn season_matches(item_season: &str, requested: &str) -> bool {
    if item_season == requested || ALL_SEASONS.contains(&item_season) {
        return true;
    }
    match item_season {
        "Fall/Winter" => matches!(requested, "Fall" | "Winter"),
        "Spring/Summer" => matches!(requested, "Spring" | "Summer"),
        _ => false,
    }
}

pub fn matches_season(item: &ClosetItem, requested: &str) -> bool {
    item.season
        .as_deref()
        .is_some_and(|s| season_matches(s, requested))
}

/// Exact string equality; no synonyms.
pub fn matches_occasion(item: &ClosetItem, requested: &str) -> bool {
    item.occasion.as_deref() == Some(requested)
}

/// Candidate pool for `options`. A request with neither season nor occasion
/// yields nothing.
pub fn filter<'i>(items: &'i [ClosetItem], options: FilterOptions<'_>) -> Vec<&'i ClosetItem> {
    if options.is_unconstrained() {
        log::debug!("No season or occasion given, candidate pool is empty");
        return Vec::new();
    }

    let pool: Vec<&ClosetItem> = items
        .iter()
        .filter(|item| options.season.is_none_or(|s| matches_season(item, s)))
        .filter(|item| options.occasion.is_none_or(|o| matches_occasion(item, o)))
        .filter(|item| is_eligible(item))
        .collect();

    log::debug!(
        "Filtered {} of {} items (season={:?}, occasion={:?})",
        pool.len(),
        items.len(),
        options.season,
        options.occasion
    );
    pool
}
