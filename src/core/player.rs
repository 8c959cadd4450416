//! Players and their item pools.
//!
//! ## PlayerId
//!
//! Opaque handle an orchestrator uses to tell the engine who is acting.
//! The engine never owns `Player` values, so it refers to them by id.
//!
//! ## Player
//!
//! A named actor with health and an ordered pool of items. The pool is a
//! multiset that preserves insertion order: duplicates are allowed and
//! removal takes the first matching item.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::item::Item;

/// Inline capacity of an item pool before it spills to the heap.
const INLINE_ITEMS: usize = 8;

/// Player handle supporting up to 255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in the match.
///
/// `health` is signed: the engine does not clamp it at zero, so a player
/// hit for more than they have goes negative. Detecting elimination is the
/// caller's job.
///
/// ```
/// use shotgun_roulette::core::{Item, Player};
///
/// let dealer = Player::new("Dealer", 2, [Item::Beer, Item::Beer]);
/// assert_eq!(dealer.to_string(), "Player (Dealer)");
/// assert_eq!(dealer.item_count(Item::Beer), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Not unique.
    pub name: String,

    /// Current health.
    pub health: i64,

    /// Held items, in the order they were received.
    pub items: SmallVec<[Item; INLINE_ITEMS]>,

    /// Set when the player must skip a turn.
    ///
    /// Nothing in the engine sets this yet: HANDCUFFS is a no-op.
    pub is_handcuffed: bool,
}

impl Player {
    /// Create a player with a starting health and item pool.
    pub fn new(name: impl Into<String>, health: i64, items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            name: name.into(),
            health,
            items: items.into_iter().collect(),
            is_handcuffed: false,
        }
    }

    /// Does the player hold at least one of `item`?
    #[must_use]
    pub fn has_item(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// How many of `item` the player holds.
    #[must_use]
    pub fn item_count(&self, item: Item) -> usize {
        self.items.iter().filter(|&&held| held == item).count()
    }

    /// Append items to the end of the pool.
    pub(crate) fn push_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.extend(items);
    }

    /// Remove the first occurrence of `item`.
    ///
    /// Returns true if the item was found and removed.
    pub(crate) fn take_item(&mut self, item: Item) -> bool {
        if let Some(pos) = self.items.iter().position(|&held| held == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// One-line description: name, health and items.
    #[must_use]
    pub fn summary(&self) -> String {
        let items = if self.items.is_empty() {
            "None".to_string()
        } else {
            self.items
                .iter()
                .map(|item| item.name())
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!("{} (Health: {}; Items: {})", self.name, self.health, items)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("Player", 2, [])
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player ({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_default_player() {
        let player = Player::default();

        assert_eq!(player.name, "Player");
        assert_eq!(player.health, 2);
        assert!(player.items.is_empty());
        assert!(!player.is_handcuffed);
    }

    #[test]
    fn test_take_item_removes_first_match_only() {
        let mut player = Player::new("P", 2, [Item::Beer, Item::Inverter, Item::Beer]);

        assert!(player.take_item(Item::Beer));
        assert_eq!(player.items.as_slice(), &[Item::Inverter, Item::Beer]);

        assert!(!player.take_item(Item::HandSaw));
        assert_eq!(player.items.len(), 2);
    }

    #[test]
    fn test_push_items_preserves_order() {
        let mut player = Player::new("P", 2, [Item::Beer]);
        player.push_items([Item::HandSaw, Item::Beer]);

        assert_eq!(player.items.as_slice(), &[Item::Beer, Item::HandSaw, Item::Beer]);
        assert_eq!(player.item_count(Item::Beer), 2);
        assert!(player.has_item(Item::HandSaw));
        assert!(!player.has_item(Item::Handcuffs));
    }

    #[test]
    fn test_pool_spills_past_inline_capacity() {
        let mut player = Player::default();
        player.push_items(std::iter::repeat(Item::CigarettePack).take(INLINE_ITEMS + 3));

        assert_eq!(player.item_count(Item::CigarettePack), INLINE_ITEMS + 3);
    }

    #[test]
    fn test_summary() {
        let dealer = Player::new("Dealer", 2, [Item::MagnifyingGlass, Item::Beer]);
        assert_eq!(dealer.summary(), "Dealer (Health: 2; Items: MAGNIFYING_GLASS, BEER)");

        let empty = Player::new("You", 1, []);
        assert_eq!(empty.summary(), "You (Health: 1; Items: None)");
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new("Dealer", 3, [Item::HandSaw, Item::Beer]);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
