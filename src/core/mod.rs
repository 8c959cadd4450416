//! Core types: shells, items, players, configuration, RNG, errors.
//!
//! These are plain values. The rules engine in `rules` is the only thing
//! that changes them during a match.

pub mod shell;
pub mod item;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use shell::Shell;
pub use item::Item;
pub use player::{Player, PlayerId};
pub use rng::{GameRng, RngCheckpoint};
pub use config::{GameConfig, DEFAULT_MAX_HEALTH, DEFAULT_MAX_SHELLS};
pub use error::{GameError, Result};
