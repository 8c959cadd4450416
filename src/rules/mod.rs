//! The rules engine.
//!
//! `Game` owns the chamber and the damage multiplier, and applies item
//! effects and shotgun fire to players it is handed. It never decides whose
//! turn it is or who may target whom; an orchestrator does that and calls
//! in once it has chosen an action.

pub mod chamber;
pub mod engine;
pub mod outcome;

pub use chamber::Chamber;
pub use engine::{Game, GameSnapshot, BASE_DAMAGE, SAWED_OFF_DAMAGE};
pub use outcome::{ItemOutcome, ShotOutcome};
