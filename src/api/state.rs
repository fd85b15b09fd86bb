//! Shared application state for API handlers
//!
//! Handlers get one `Arc` handle bundling the per-domain services. Services
//! guard their own interior state; the handle itself is immutable.

use std::sync::Arc;

use crate::player::PlayerService;
use crate::playlists::ItemsService;
use crate::session::SessionStore;
use crate::users::UsersService;

/// The services every handler can reach
pub struct SharedServices {
    pub items: ItemsService,
    pub users: UsersService,
    pub players: PlayerService,
    pub sessions: SessionStore,
}

impl SharedServices {
    pub fn new() -> Self {
        Self {
            items: ItemsService::new(),
            users: UsersService::new(),
            players: PlayerService::new(),
            sessions: SessionStore::new(),
        }
    }
}

impl Default for SharedServices {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the shared state handle used by API handlers
pub type AppState = Arc<SharedServices>;

/// Create a fresh state handle
pub fn create_state() -> AppState {
    Arc::new(SharedServices::new())
}
