//! The `Game` aggregate and its transitions.
//!
//! ## Lifecycle
//!
//! 1. Construct a `Game`: the chamber is loaded and shuffled.
//! 2. The orchestrator creates `Player`s and hands out items with
//!    `add_items`.
//! 3. The orchestrator repeatedly calls `use_item` and `use_shotgun`,
//!    passing the player the action applies to.
//!
//! The engine does not advance `turn` or `round`, does not detect
//! elimination, and does not clamp health at zero.
//!
//! ## Damage
//!
//! A live shell costs `damage` health. HAND_SAW raises `damage` to 2, and
//! removing a HAND_SAW from any pool resets it to 1. Because `use_item`
//! consumes the item as its last step, a saw used through `use_item` is
//! reset before the caller can fire. Callers that want the boosted shot
//! apply the effect with `apply_item_effect`, fire, then `remove_item`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::chamber::Chamber;
use super::outcome::{ItemOutcome, ShotOutcome};
use crate::core::{
    GameConfig, GameError, GameRng, RngCheckpoint, Item, Player, PlayerId, Result, Shell,
};

/// Health lost to a live shell.
pub const BASE_DAMAGE: i64 = 1;

/// Health lost to a live shell while a hand saw is in effect.
pub const SAWED_OFF_DAMAGE: i64 = 2;

/// Probability that expired medicine hurts instead of heals.
const MEDICINE_FAILURE_CHANCE: f64 = 0.5;

/// A single match: the chamber, the damage multiplier and the counters.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,

    /// Whoever is acting. Set by the orchestrator, never by the engine.
    pub current_player: Option<PlayerId>,

    /// Turn counter. Read by BURNER_PHONE; never advanced by the engine.
    pub turn: usize,

    /// Round counter. Never advanced by the engine.
    pub round: u32,

    damage: i64,
    chamber: Chamber,
    rng: GameRng,
}

impl Game {
    /// Start a match seeded from the operating system.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Start a reproducible match.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a match drawing from `rng`.
    ///
    /// The chamber is loaded from its own stream, so the mix of shells does
    /// not depend on how many draws item effects make later.
    #[must_use]
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Self {
        let mut chamber_rng = rng.stream("chamber");
        let (chamber, drawn) = Chamber::generate(config.max_shells, &mut chamber_rng);

        let names: Vec<_> = drawn.iter().map(|shell| shell.name()).collect();
        info!(
            target: "chamber",
            live = chamber.live_count(),
            blank = chamber.blank_count(),
            "Shells: {}",
            names.join(", ")
        );

        Self::from_chamber(config, chamber, rng)
    }

    /// Start a match over a known chamber, front first.
    #[must_use]
    pub fn from_shells(config: GameConfig, shells: impl IntoIterator<Item = Shell>, rng: GameRng) -> Self {
        Self::from_chamber(config, Chamber::from_shells(shells), rng)
    }

    fn from_chamber(config: GameConfig, chamber: Chamber, rng: GameRng) -> Self {
        Self {
            config,
            current_player: None,
            turn: 0,
            round: 0,
            damage: BASE_DAMAGE,
            chamber,
            rng,
        }
    }

    // === Accessors ===

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Health cap.
    #[must_use]
    pub fn max_health(&self) -> i64 {
        self.config.max_health
    }

    /// Chamber size at load.
    #[must_use]
    pub fn max_shells(&self) -> usize {
        self.config.max_shells
    }

    /// Health lost to the next live shell.
    #[must_use]
    pub fn damage(&self) -> i64 {
        self.damage
    }

    /// The remaining shells.
    #[must_use]
    pub fn chamber(&self) -> &Chamber {
        &self.chamber
    }

    /// The RNG driving item effects.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Record who is acting.
    pub fn set_current_player(&mut self, player: Option<PlayerId>) {
        self.current_player = player;
    }

    /// Set the turn counter BURNER_PHONE reads.
    pub fn set_turn(&mut self, turn: usize) {
        self.turn = turn;
    }

    pub fn set_round(&mut self, round: u32) {
        self.round = round;
    }

    // === Item pool ===

    /// Give `player` items, appended after the ones they already hold.
    ///
    /// Touches only the player. It sits on `Game` so every pool change an
    /// orchestrator makes goes through the same entry points.
    pub fn add_items(&self, player: &mut Player, items: impl IntoIterator<Item = Item>) {
        player.push_items(items);
        debug!(target: "items", player = %player.name, held = player.items.len(), "items added");
    }

    /// Take one `item` from `player`.
    ///
    /// Removing a HAND_SAW resets damage to 1, whatever removed it.
    ///
    /// # Errors
    ///
    /// `GameError::ItemNotHeld` if the player has no such item. Nothing is
    /// changed in that case.
    pub fn remove_item(&mut self, player: &mut Player, item: Item) -> Result<()> {
        if !player.take_item(item) {
            return Err(GameError::ItemNotHeld {
                item,
                player: player.name.clone(),
            });
        }

        if item == Item::HandSaw {
            self.damage = BASE_DAMAGE;
        }

        Ok(())
    }

    // === Actions ===

    /// Use one of `player`'s items: apply its effect, then consume it.
    ///
    /// # Errors
    ///
    /// `GameError::ItemNotHeld` if the player has no such item. The check
    /// happens before the effect, so a failed call changes nothing.
    pub fn use_item(&mut self, player: &mut Player, item: Item) -> Result<ItemOutcome> {
        if !player.has_item(item) {
            return Err(GameError::ItemNotHeld {
                item,
                player: player.name.clone(),
            });
        }

        let outcome = self.apply_item_effect(player, item);
        self.remove_item(player, item)?;

        debug!(target: "items", player = %player.name, %item, ?outcome, "item used");
        Ok(outcome)
    }

    /// Apply `item`'s effect without consuming it.
    ///
    /// Does not check that `player` holds the item. `use_item` is this
    /// followed by `remove_item`.
    pub fn apply_item_effect(&mut self, player: &mut Player, item: Item) -> ItemOutcome {
        match item {
            Item::Adrenaline | Item::Handcuffs => ItemOutcome::NoEffect,

            Item::Beer => match self.chamber.eject_front() {
                Some(shell) => {
                    debug!(target: "items", %shell, "shell ejected");
                    ItemOutcome::Ejected(shell)
                }
                None => ItemOutcome::EmptyChamber,
            },

            Item::BurnerPhone => self.burner_phone(),

            Item::CigarettePack => {
                let healed = self.heal(player, 1);
                ItemOutcome::Healed(healed)
            }

            Item::ExpiredMedicine => {
                if self.rng.chance(MEDICINE_FAILURE_CHANCE) {
                    ItemOutcome::Hurt(Self::hurt(player, 1))
                } else {
                    let healed = match self.heal(player, 2) {
                        0 => self.heal(player, 1),
                        healed => healed,
                    };
                    ItemOutcome::Healed(healed)
                }
            }

            Item::HandSaw => {
                self.damage = SAWED_OFF_DAMAGE;
                ItemOutcome::DamageBoosted(self.damage)
            }

            Item::Inverter => match self.chamber.invert_front() {
                Some(from) => ItemOutcome::Inverted { from, to: from.inverted() },
                None => ItemOutcome::EmptyChamber,
            },

            Item::MagnifyingGlass => match self.chamber.front() {
                Some(shell) => {
                    info!(target: "items", "{}", shell);
                    ItemOutcome::Revealed {
                        position: 0,
                        shell,
                        last_shell: self.chamber.len() == 1,
                    }
                }
                None => ItemOutcome::EmptyChamber,
            },
        }
    }

    /// Fire the next shell at `player`.
    ///
    /// A live shell costs `damage` health; the shell is spent either way.
    /// Does not reset `damage`.
    pub fn use_shotgun(&mut self, player: &mut Player) -> ShotOutcome {
        let Some(shell) = self.chamber.eject_front() else {
            return ShotOutcome::Empty;
        };

        let damage_dealt = if shell.is_live() {
            Self::hurt(player, self.damage)
        } else {
            0
        };

        debug!(
            target: "shotgun",
            player = %player.name,
            %shell,
            damage_dealt,
            health = player.health,
            "shot fired"
        );

        ShotOutcome::Fired { shell, damage_dealt }
    }

    /// Raise health by `amount` if that stays within the cap.
    ///
    /// All or nothing: returns the amount gained, 0 if it would overshoot.
    fn heal(&self, player: &mut Player, amount: i64) -> i64 {
        match player.health.checked_add(amount) {
            Some(healed) if healed <= self.config.max_health => {
                player.health = healed;
                amount
            }
            _ => 0,
        }
    }

    /// Lower health by `amount`, saturating at `i64::MIN`.
    ///
    /// Returns the health actually lost.
    fn hurt(player: &mut Player, amount: i64) -> i64 {
        let before = player.health;
        player.health = before.saturating_sub(amount);
        before - player.health
    }

    /// Reveal a random shell in `[0, len - turn - 1]`.
    fn burner_phone(&mut self) -> ItemOutcome {
        let len = self.chamber.len();
        if len == 0 {
            return ItemOutcome::EmptyChamber;
        }

        let last_shell = len == 1;
        if last_shell {
            info!(target: "items", "How unfortunate...");
        }

        let Some(upper) = len.checked_sub(self.turn + 1) else {
            warn!(
                target: "items",
                shells = len,
                turn = self.turn,
                "burner phone pick range is empty"
            );
            return ItemOutcome::NoEffect;
        };

        let position = self.rng.index_up_to(upper);
        match self.chamber.get(position) {
            Some(shell) => {
                info!(target: "items", "{} shell ... {}", position + 1, shell);
                ItemOutcome::Revealed { position, shell, last_shell }
            }
            None => ItemOutcome::NoEffect,
        }
    }

    // === Cloning and checkpoints ===

    /// Clone the game for lookahead.
    ///
    /// The chamber is shared structurally. Takes `&mut self` because
    /// forking the RNG advances the fork counter, so the copy's draws
    /// differ from the original's.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        Self {
            config: self.config,
            current_player: self.current_player,
            turn: self.turn,
            round: self.round,
            damage: self.damage,
            chamber: self.chamber.clone(),
            rng: self.rng.fork(),
        }
    }

    /// Capture everything needed to resume this game exactly.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config,
            current_player: self.current_player,
            turn: self.turn,
            round: self.round,
            damage: self.damage,
            chamber: self.chamber.clone(),
            rng: self.rng.checkpoint(),
        }
    }

    /// Resume a game from a snapshot.
    #[must_use]
    pub fn restore(snapshot: &GameSnapshot) -> Self {
        Self {
            config: snapshot.config,
            current_player: snapshot.current_player,
            turn: snapshot.turn,
            round: snapshot.round,
            damage: snapshot.damage,
            chamber: snapshot.chamber.clone(),
            rng: GameRng::restore(&snapshot.rng),
        }
    }
}

/// Serializable game checkpoint. Players are not included; the
/// orchestrator owns them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub current_player: Option<PlayerId>,
    pub turn: usize,
    pub round: u32,
    pub damage: i64,
    pub chamber: Chamber,
    pub rng: RngCheckpoint,
}
