//! Playlist item storage and field updates
//!
//! Items live in an in-memory table keyed by playlist. Positions are dense and
//! 1-based within a playlist; insert and delete renumber so ordering survives
//! arbitrary edit sequences.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::insert::ItemSource;

/// One entry of a playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: u64,
    pub playlist_id: u64,
    /// The content this item references (media id, playlist id, or URL)
    pub content_id: String,
    pub item_name: String,
    pub item_duration: i64,
    /// 1-based position within the playlist
    pub item_order: usize,
    pub source: ItemSource,
    /// User who inserted the item
    #[serde(rename = "UID")]
    pub inserted_by_uid: u64,
}

/// The closed set of item fields editable over the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Duration,
}

impl ItemField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Name => "item_name",
            ItemField::Duration => "item_duration",
        }
    }
}

impl FromStr for ItemField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "item_name" => Ok(ItemField::Name),
            "item_duration" => Ok(ItemField::Duration),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ItemField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed value for an item field update
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Name(String),
    Duration(i64),
}

/// In-memory playlist item store
pub struct ItemsService {
    playlists: RwLock<HashMap<u64, Vec<Item>>>,
    next_item_id: AtomicU64,
}

impl ItemsService {
    pub fn new() -> Self {
        Self {
            playlists: RwLock::new(HashMap::new()),
            next_item_id: AtomicU64::new(1),
        }
    }

    /// Load a playlist's items ordered by position, for the composer view
    pub fn load_items_for_composer(&self, playlist_id: u64) -> Vec<Item> {
        let playlists = self.playlists.read().unwrap();
        let mut items = playlists.get(&playlist_id).cloned().unwrap_or_default();
        items.sort_by_key(|item| item.item_order);
        items
    }

    /// Insert an item at the given 1-based position, shifting later items down
    ///
    /// Positions past the end clamp to appending. Returns the stored item with
    /// its assigned id and final position.
    pub fn insert_at(
        &self,
        playlist_id: u64,
        position: usize,
        content_id: &str,
        name: &str,
        duration: i64,
        source: ItemSource,
        uid: u64,
    ) -> Item {
        let item_id = self.next_item_id.fetch_add(1, Ordering::Relaxed);
        let mut playlists = self.playlists.write().unwrap();
        let items = playlists.entry(playlist_id).or_default();

        let index = position.saturating_sub(1).min(items.len());
        let item = Item {
            item_id,
            playlist_id,
            content_id: content_id.to_string(),
            item_name: name.to_string(),
            item_duration: duration,
            item_order: index + 1,
            source,
            inserted_by_uid: uid,
        };
        items.insert(index, item);
        Self::renumber(items);

        tracing::info!(playlist_id, item_id, position = index + 1, "item inserted");
        items[index].clone()
    }

    /// Update a single editable field; returns the number of affected items
    pub fn update_field(&self, item_id: u64, value: FieldValue) -> usize {
        let mut playlists = self.playlists.write().unwrap();
        for items in playlists.values_mut() {
            if let Some(item) = items.iter_mut().find(|i| i.item_id == item_id) {
                match &value {
                    FieldValue::Name(name) => item.item_name = name.clone(),
                    FieldValue::Duration(secs) => item.item_duration = *secs,
                }
                return 1;
            }
        }
        0
    }

    pub fn fetch_item_by_id(&self, item_id: u64) -> Option<Item> {
        let playlists = self.playlists.read().unwrap();
        playlists
            .values()
            .flat_map(|items| items.iter())
            .find(|item| item.item_id == item_id)
            .cloned()
    }

    /// Reorder a playlist to match the given item-id sequence
    ///
    /// Ids missing from the playlist are ignored; items not named keep their
    /// relative order after the named ones. Returns false when the playlist is
    /// unknown or the sequence names none of its items.
    pub fn update_item_order(&self, playlist_id: u64, item_ids: &[u64]) -> bool {
        let mut playlists = self.playlists.write().unwrap();
        let Some(items) = playlists.get_mut(&playlist_id) else {
            return false;
        };

        let mut reordered: Vec<Item> = Vec::with_capacity(items.len());
        for &id in item_ids {
            if let Some(pos) = items.iter().position(|i| i.item_id == id) {
                reordered.push(items.remove(pos));
            }
        }
        if reordered.is_empty() {
            return false;
        }
        reordered.append(items);
        Self::renumber(&mut reordered);
        *items = reordered;

        tracing::info!(playlist_id, count = items.len(), "items reordered");
        true
    }

    /// Remove an item; returns it when found
    pub fn delete(&self, playlist_id: u64, item_id: u64) -> Option<Item> {
        let mut playlists = self.playlists.write().unwrap();
        let items = playlists.get_mut(&playlist_id)?;
        let pos = items.iter().position(|i| i.item_id == item_id)?;
        let removed = items.remove(pos);
        Self::renumber(items);
        tracing::info!(playlist_id, item_id, "item deleted");
        Some(removed)
    }

    fn renumber(items: &mut [Item]) {
        for (index, item) in items.iter_mut().enumerate() {
            item.item_order = index + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ItemsService {
        let service = ItemsService::new();
        service.insert_at(1, 1, "m-1", "Intro", 10, ItemSource::Mediapool, 42);
        service.insert_at(1, 2, "m-2", "Promo", 20, ItemSource::Mediapool, 42);
        service.insert_at(1, 3, "m-3", "Outro", 5, ItemSource::Mediapool, 42);
        service
    }

    #[test]
    fn test_load_is_ordered_by_position() {
        let service = seeded();
        let items = service.load_items_for_composer(1);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].item_name, "Intro");
        assert_eq!(items[2].item_name, "Outro");
        assert_eq!(items.iter().map(|i| i.item_order).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_load_unknown_playlist_is_empty() {
        let service = ItemsService::new();
        assert!(service.load_items_for_composer(9).is_empty());
    }

    #[test]
    fn test_insert_in_middle_shifts_positions() {
        let service = seeded();
        let item = service.insert_at(1, 2, "m-9", "Spot", 8, ItemSource::Mediapool, 42);
        assert_eq!(item.item_order, 2);

        let items = service.load_items_for_composer(1);
        assert_eq!(
            items.iter().map(|i| i.item_name.as_str()).collect::<Vec<_>>(),
            vec!["Intro", "Spot", "Promo", "Outro"]
        );
        assert_eq!(items.iter().map(|i| i.item_order).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let service = seeded();
        let item = service.insert_at(1, 99, "m-9", "Tail", 8, ItemSource::Mediapool, 42);
        assert_eq!(item.item_order, 4);
    }

    #[test]
    fn test_update_field_name_and_duration() {
        let service = seeded();
        let item_id = service.load_items_for_composer(1)[0].item_id;

        assert_eq!(service.update_field(item_id, FieldValue::Name("Opener".into())), 1);
        assert_eq!(service.update_field(item_id, FieldValue::Duration(30)), 1);

        let item = service.fetch_item_by_id(item_id).unwrap();
        assert_eq!(item.item_name, "Opener");
        assert_eq!(item.item_duration, 30);
    }

    #[test]
    fn test_update_field_unknown_item_affects_zero() {
        let service = seeded();
        assert_eq!(service.update_field(999, FieldValue::Duration(30)), 0);
    }

    #[test]
    fn test_reorder_renumbers() {
        let service = seeded();
        let ids: Vec<u64> = service.load_items_for_composer(1).iter().map(|i| i.item_id).collect();

        assert!(service.update_item_order(1, &[ids[2], ids[0], ids[1]]));
        let items = service.load_items_for_composer(1);
        assert_eq!(
            items.iter().map(|i| i.item_name.as_str()).collect::<Vec<_>>(),
            vec!["Outro", "Intro", "Promo"]
        );
        assert_eq!(items.iter().map(|i| i.item_order).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_reorder_with_unknown_ids_fails() {
        let service = seeded();
        assert!(!service.update_item_order(1, &[777, 888]));
        assert!(!service.update_item_order(5, &[1]));
    }

    #[test]
    fn test_delete_returns_item_and_renumbers() {
        let service = seeded();
        let ids: Vec<u64> = service.load_items_for_composer(1).iter().map(|i| i.item_id).collect();

        let removed = service.delete(1, ids[1]).unwrap();
        assert_eq!(removed.item_name, "Promo");

        let items = service.load_items_for_composer(1);
        assert_eq!(items.len(), 2);
        assert_eq!(items.iter().map(|i| i.item_order).collect::<Vec<_>>(), vec![1, 2]);
        assert!(service.delete(1, ids[1]).is_none());
    }

    #[test]
    fn test_item_field_parsing() {
        assert_eq!("item_name".parse::<ItemField>(), Ok(ItemField::Name));
        assert_eq!("item_duration".parse::<ItemField>(), Ok(ItemField::Duration));
        assert!("item_color".parse::<ItemField>().is_err());
        assert_eq!(ItemField::Duration.to_string(), "item_duration");
    }
}
