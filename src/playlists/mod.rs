//! Playlist composition: item storage, insert strategies, settings parameters

mod insert;
mod items;
pub mod settings;

pub use insert::{InsertError, InsertItem, InsertItemFactory, ItemSource};
pub use items::{FieldValue, Item, ItemField, ItemsService};
