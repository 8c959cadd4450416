//! # shotgun-roulette
//!
//! Rules engine for shotgun roulette: a shared chamber of shuffled blank and
//! live shells, players with bounded health, and single-use items that
//! inspect, manipulate, or soften the chamber.
//!
//! ## Scope
//!
//! The crate is the rules core only. Turn order, win detection, input and
//! display belong to an orchestrator that calls in through `Game`:
//!
//! ```
//! use shotgun_roulette::{Game, GameConfig, Item, Player, Shell, ShotOutcome};
//!
//! let mut game = Game::with_seed(GameConfig::default(), 42);
//! let mut dealer = Player::new("Dealer", game.max_health(), []);
//! game.add_items(&mut dealer, [Item::MagnifyingGlass, Item::Inverter]);
//!
//! game.use_item(&mut dealer, Item::MagnifyingGlass)?;
//! game.use_item(&mut dealer, Item::Inverter)?;
//!
//! match game.use_shotgun(&mut dealer) {
//!     ShotOutcome::Fired { shell: Shell::Live, damage_dealt } => assert_eq!(damage_dealt, 1),
//!     ShotOutcome::Fired { shell: Shell::Blank, .. } => assert_eq!(dealer.health, 2),
//!     ShotOutcome::Empty => unreachable!("eight shells were loaded"),
//! }
//! # Ok::<(), shotgun_roulette::GameError>(())
//! ```
//!
//! ## Determinism
//!
//! Every random draw goes through `GameRng` (ChaCha8). Seed a game with
//! `Game::with_seed` to replay it exactly, or checkpoint it with
//! `Game::snapshot`.
//!
//! ## Modules
//!
//! - `core`: Shells, items, players, configuration, RNG, errors
//! - `rules`: The chamber and the `Game` rules engine

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Shell, Item, Player, PlayerId,
    GameRng, RngCheckpoint,
    GameConfig, GameError, Result,
};

pub use crate::rules::{
    Chamber, Game, GameSnapshot,
    ItemOutcome, ShotOutcome,
    BASE_DAMAGE, SAWED_OFF_DAMAGE,
};
