//! User session seam.
//!
//! The session is passed read-only into the controllers that need it;
//! there is no ambient global user state.

use serde::Deserialize;
use serde_json::Value;

/// A user record as supplied by the session provider.
///
/// `favoriteGames` is kept as raw JSON: its shape varies across record
/// generations and is normalized by the favorite-games crate.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub username: String,
    #[serde(rename = "favoriteGames", default)]
    pub favorite_games: Option<Value>,
}

/// Read-only session holder.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<UserRecord>,
}

impl Session {
    pub fn new(user: Option<UserRecord>) -> Self {
        Self { user }
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }
}
