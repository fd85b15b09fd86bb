//! Player registry service

use std::collections::HashMap;
use std::sync::RwLock;

use super::entity::PlayerEntity;
use super::layout::{LayoutPreparer, PlayerLayout};

/// In-memory registry of known players
///
/// Registrations come from provisioning; API handlers only read.
#[derive(Default)]
pub struct PlayerService {
    players: RwLock<HashMap<u64, PlayerEntity>>,
}

impl PlayerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a player record
    pub fn register(&self, player: PlayerEntity) {
        let mut players = self.players.write().unwrap();
        tracing::debug!(player_id = player.player_id, name = %player.name, "player registered");
        players.insert(player.player_id, player);
    }

    pub fn fetch(&self, player_id: u64) -> Option<PlayerEntity> {
        self.players.read().unwrap().get(&player_id).cloned()
    }

    /// Prepare the display layouts for a registered player
    pub fn prepare_layouts(&self, player_id: u64) -> Option<Vec<PlayerLayout>> {
        let players = self.players.read().unwrap();
        let player = players.get(&player_id)?;
        Some(LayoutPreparer::new(player).prepare())
    }

    pub fn count(&self) -> usize {
        self.players.read().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_fetch() {
        let service = PlayerService::new();
        service.register(PlayerEntity::new(7, "Lobby", "1920", "1080"));
        assert_eq!(service.count(), 1);
        assert_eq!(service.fetch(7).unwrap().name, "Lobby");
        assert!(service.fetch(8).is_none());
    }

    #[test]
    fn test_prepare_layouts_for_unknown_player() {
        let service = PlayerService::new();
        assert!(service.prepare_layouts(42).is_none());
    }

    #[test]
    fn test_prepare_layouts_for_registered_player() {
        let service = PlayerService::new();
        service.register(PlayerEntity::new(7, "Lobby", "1920", "1080"));
        let layouts = service.prepare_layouts(7).unwrap();
        assert_eq!(layouts.len(), 1);
        assert_eq!(layouts[0].regions.len(), 1);
    }
}
