// File: src/model/adapter.rs
// Handles closet snapshot (JSON) import and outfit export
use crate::error::OutfitError;
use crate::model::item::{ClosetItem, Outfit};

impl ClosetItem {
    /// Parses a snapshot as exported by the closet store: a JSON array of items.
    ///
    /// Records that do not form a valid item are skipped; only a snapshot that
    /// is not a JSON array is an error.
    pub fn list_from_json(raw: &str) -> Result<Vec<ClosetItem>, OutfitError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(raw)?;
        let total = records.len();
        let items: Vec<ClosetItem> = records
            .into_iter()
            .enumerate()
            .filter_map(|(idx, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("Skipping closet record {}: {}", idx, e);
                    None
                }
            })
            .collect();
        log::debug!("Loaded {} of {} closet records from snapshot", items.len(), total);
        Ok(items)
    }

    pub fn list_to_json(items: &[ClosetItem]) -> Result<String, OutfitError> {
        Ok(serde_json::to_string_pretty(items)?)
    }
}

impl Outfit {
    pub fn to_json(&self) -> Result<String, OutfitError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
