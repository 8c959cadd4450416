//! Match configuration.
//!
//! Fixed when a `Game` is constructed. Values are taken as given: a zero
//! shell count simply produces an empty chamber.

use serde::{Deserialize, Serialize};

/// Default health cap.
pub const DEFAULT_MAX_HEALTH: i64 = 2;

/// Default number of shells loaded into the chamber.
pub const DEFAULT_MAX_SHELLS: usize = 8;

/// Configuration for a single match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Health cap. Healing never raises a player above this.
    pub max_health: i64,

    /// Number of shells drawn into the chamber at construction.
    pub max_shells: usize,
}

impl GameConfig {
    /// Create a configuration.
    #[must_use]
    pub const fn new(max_health: i64, max_shells: usize) -> Self {
        Self { max_health, max_shells }
    }

    /// Set the health cap.
    #[must_use]
    pub const fn with_max_health(mut self, max_health: i64) -> Self {
        self.max_health = max_health;
        self
    }

    /// Set the chamber size.
    #[must_use]
    pub const fn with_max_shells(mut self, max_shells: usize) -> Self {
        self.max_shells = max_shells;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HEALTH, DEFAULT_MAX_SHELLS)
    }
}
