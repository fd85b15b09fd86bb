//! User accounts and credential updates

use std::collections::HashMap;
use std::sync::RwLock;

/// Stored user record
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uid: u64,
    pub username: String,
    password_digest: blake3::Hash,
}

/// In-memory user account store
#[derive(Default)]
pub struct UsersService {
    users: RwLock<HashMap<u64, UserRecord>>,
}

impl UsersService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, uid: u64, username: impl Into<String>, password: &str) {
        let mut users = self.users.write().unwrap();
        users.insert(
            uid,
            UserRecord {
                uid,
                username: username.into(),
                password_digest: blake3::hash(password.as_bytes()),
            },
        );
    }

    /// Replace a user's password digest; returns the affected row count
    pub fn update_password(&self, uid: u64, new_password: &str) -> usize {
        let mut users = self.users.write().unwrap();
        match users.get_mut(&uid) {
            Some(user) => {
                user.password_digest = blake3::hash(new_password.as_bytes());
                tracing::info!(uid, "password updated");
                1
            }
            None => 0,
        }
    }

    pub fn verify_password(&self, uid: u64, password: &str) -> bool {
        let users = self.users.read().unwrap();
        users
            .get(&uid)
            .map(|user| user.password_digest == blake3::hash(password.as_bytes()))
            .unwrap_or(false)
    }

    pub fn fetch(&self, uid: u64) -> Option<UserRecord> {
        self.users.read().unwrap().get(&uid).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_password_affects_one_row() {
        let service = UsersService::new();
        service.register(1, "admin", "old-password");

        assert_eq!(service.update_password(1, "new-password"), 1);
        assert!(service.verify_password(1, "new-password"));
        assert!(!service.verify_password(1, "old-password"));
    }

    #[test]
    fn test_update_password_unknown_user_affects_zero() {
        let service = UsersService::new();
        assert_eq!(service.update_password(9, "whatever"), 0);
    }
}
