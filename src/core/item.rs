//! Single-use items a player can hold.

use serde::{Deserialize, Serialize};

/// A consumable item.
///
/// Players hold items in an ordered pool that may contain duplicates.
/// Every item is consumed when used, whether or not its effect did anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Item {
    /// Meant to steal an item from the opponent. Currently has no effect.
    Adrenaline,
    /// Ejects the next shell without firing it.
    Beer,
    /// Reveals a random shell in the chamber.
    BurnerPhone,
    /// Restores one health, up to the cap.
    CigarettePack,
    /// Coin flip: lose one health, or gain up to two.
    ExpiredMedicine,
    /// Doubles the damage of the next live shell.
    HandSaw,
    /// Meant to make the opponent skip a turn. Currently has no effect.
    Handcuffs,
    /// Flips the next shell between blank and live.
    Inverter,
    /// Reveals the next shell.
    MagnifyingGlass,
}

impl Item {
    /// Every item, in declaration order.
    pub const ALL: [Item; 9] = [
        Item::Adrenaline,
        Item::Beer,
        Item::BurnerPhone,
        Item::CigarettePack,
        Item::ExpiredMedicine,
        Item::HandSaw,
        Item::Handcuffs,
        Item::Inverter,
        Item::MagnifyingGlass,
    ];

    /// Upper-case name, as shown in notices and player summaries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Item::Adrenaline => "ADRENALINE",
            Item::Beer => "BEER",
            Item::BurnerPhone => "BURNER_PHONE",
            Item::CigarettePack => "CIGARETTE_PACK",
            Item::ExpiredMedicine => "EXPIRED_MEDICINE",
            Item::HandSaw => "HAND_SAW",
            Item::Handcuffs => "HANDCUFFS",
            Item::Inverter => "INVERTER",
            Item::MagnifyingGlass => "MAGNIFYING_GLASS",
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_distinct() {
        for (i, a) in Item::ALL.iter().enumerate() {
            for b in &Item::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_serde_uses_display_name() {
        for item in Item::ALL {
            let json = serde_json::to_string(&item).unwrap();
            assert_eq!(json, format!("\"{}\"", item));

            let back: Item = serde_json::from_str(&json).unwrap();
            assert_eq!(back, item);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Item::HandSaw.to_string(), "HAND_SAW");
        assert_eq!(Item::MagnifyingGlass.to_string(), "MAGNIFYING_GLASS");
    }
}
