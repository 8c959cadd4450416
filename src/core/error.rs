//! Engine errors.

use super::item::Item;

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised by the rules engine.
///
/// Almost every operation is total: empty-chamber actions are no-ops.
/// The only failure is asking a player to give up an item they lack.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{player} does not hold {item}")]
    ItemNotHeld { item: Item, player: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let err = GameError::ItemNotHeld {
            item: Item::HandSaw,
            player: "Dealer".to_string(),
        };
        assert_eq!(err.to_string(), "Dealer does not hold HAND_SAW");
    }
}
