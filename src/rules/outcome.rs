//! What an action did, reported back to the caller.
//!
//! The engine also emits these as `tracing` events; the returned values
//! are the contract, the log lines are advisory.

use serde::{Deserialize, Serialize};

use crate::core::Shell;

/// Result of resolving one item's effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemOutcome {
    /// The item has no effect (ADRENALINE, HANDCUFFS), or its effect could
    /// not apply (BURNER_PHONE with a negative pick bound).
    NoEffect,

    /// The chamber was empty, so the item did nothing.
    EmptyChamber,

    /// The next shell was removed unfired.
    Ejected(Shell),

    /// A shell was revealed to the acting player.
    Revealed {
        /// 0-based chamber index (0 = next).
        position: usize,
        shell: Shell,
        /// It was the only shell left.
        last_shell: bool,
    },

    /// Health gained. Zero when already at the cap.
    Healed(i64),

    /// Health lost.
    Hurt(i64),

    /// Damage per live shell was set to this value.
    DamageBoosted(i64),

    /// The next shell was flipped.
    Inverted { from: Shell, to: Shell },
}

/// Result of firing the shotgun.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// A shell was fired at the target.
    Fired {
        shell: Shell,
        /// Health the target lost. Zero for a blank.
        damage_dealt: i64,
    },

    /// Nothing to fire.
    Empty,
}

impl ShotOutcome {
    /// Did the shot cost the target health?
    #[must_use]
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Fired { damage_dealt, .. } if damage_dealt > 0)
    }
}
