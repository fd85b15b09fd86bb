//! Insert strategies for the different item sources
//!
//! The source field of an insert request selects how the referenced content
//! turns into a playlist item: media pool assets carry a default duration,
//! nested playlists contribute their own timing, external URLs are validated
//! before acceptance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::items::{Item, ItemsService};

/// Default duration for media assets without intrinsic timing, in seconds
const DEFAULT_MEDIA_DURATION: i64 = 15;

/// Where an inserted item's content comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSource {
    Mediapool,
    Playlist,
    External,
}

impl ItemSource {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mediapool" => Some(ItemSource::Mediapool),
            "playlist" => Some(ItemSource::Playlist),
            "external" => Some(ItemSource::External),
            _ => None,
        }
    }
}

/// Errors raised by insert strategies
#[derive(Debug, Error)]
pub enum InsertError {
    #[error("External source must be an http(s) URL: {0}")]
    InvalidUrl(String),
    #[error("A playlist cannot be nested into itself")]
    SelfReference,
}

/// One way of turning referenced content into a playlist item
pub trait InsertItem: Send + Sync {
    fn insert(
        &self,
        items: &ItemsService,
        uid: u64,
        playlist_id: u64,
        content_id: &str,
        position: usize,
    ) -> Result<Item, InsertError>;
}

/// Media pool asset insertion
struct MediapoolInsert;

impl InsertItem for MediapoolInsert {
    fn insert(
        &self,
        items: &ItemsService,
        uid: u64,
        playlist_id: u64,
        content_id: &str,
        position: usize,
    ) -> Result<Item, InsertError> {
        let name = format!("Media {}", content_id);
        Ok(items.insert_at(
            playlist_id,
            position,
            content_id,
            &name,
            DEFAULT_MEDIA_DURATION,
            ItemSource::Mediapool,
            uid,
        ))
    }
}

/// Nested playlist insertion
///
/// Duration stays zero; the composer resolves it from the nested playlist.
struct PlaylistInsert;

impl InsertItem for PlaylistInsert {
    fn insert(
        &self,
        items: &ItemsService,
        uid: u64,
        playlist_id: u64,
        content_id: &str,
        position: usize,
    ) -> Result<Item, InsertError> {
        if content_id == playlist_id.to_string() {
            return Err(InsertError::SelfReference);
        }
        let name = format!("Playlist {}", content_id);
        Ok(items.insert_at(playlist_id, position, content_id, &name, 0, ItemSource::Playlist, uid))
    }
}

/// External URL insertion
struct ExternalInsert;

impl InsertItem for ExternalInsert {
    fn insert(
        &self,
        items: &ItemsService,
        uid: u64,
        playlist_id: u64,
        content_id: &str,
        position: usize,
    ) -> Result<Item, InsertError> {
        if !content_id.starts_with("http://") && !content_id.starts_with("https://") {
            return Err(InsertError::InvalidUrl(content_id.to_string()));
        }
        Ok(items.insert_at(
            playlist_id,
            position,
            content_id,
            content_id,
            DEFAULT_MEDIA_DURATION,
            ItemSource::External,
            uid,
        ))
    }
}

/// Creates the insert strategy matching a request's source field
pub struct InsertItemFactory;

impl InsertItemFactory {
    /// Unknown sources yield None; the handler turns that into an envelope error.
    pub fn create(source: &str) -> Option<Box<dyn InsertItem>> {
        match ItemSource::parse(source)? {
            ItemSource::Mediapool => Some(Box::new(MediapoolInsert)),
            ItemSource::Playlist => Some(Box::new(PlaylistInsert)),
            ItemSource::External => Some(Box::new(ExternalInsert)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_rejects_unknown_source() {
        assert!(InsertItemFactory::create("youtube").is_none());
        assert!(InsertItemFactory::create("").is_none());
    }

    #[test]
    fn test_mediapool_insert_uses_default_duration() {
        let items = ItemsService::new();
        let strategy = InsertItemFactory::create("mediapool").unwrap();
        let item = strategy.insert(&items, 42, 1, "m-7", 1).unwrap();
        assert_eq!(item.item_duration, DEFAULT_MEDIA_DURATION);
        assert_eq!(item.source, ItemSource::Mediapool);
        assert_eq!(item.inserted_by_uid, 42);
    }

    #[test]
    fn test_playlist_insert_rejects_self_reference() {
        let items = ItemsService::new();
        let strategy = InsertItemFactory::create("playlist").unwrap();
        let err = strategy.insert(&items, 42, 5, "5", 1).unwrap_err();
        assert!(matches!(err, InsertError::SelfReference));
        assert!(strategy.insert(&items, 42, 5, "6", 1).is_ok());
    }

    #[test]
    fn test_external_insert_requires_http_url() {
        let items = ItemsService::new();
        let strategy = InsertItemFactory::create("external").unwrap();
        assert!(matches!(
            strategy.insert(&items, 42, 1, "ftp://feed", 1),
            Err(InsertError::InvalidUrl(_))
        ));
        let item = strategy.insert(&items, 42, 1, "https://feed.example/news", 1).unwrap();
        assert_eq!(item.item_name, "https://feed.example/news");
    }
}
