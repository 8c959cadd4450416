//! Seeded randomness for the chamber and item effects.
//!
//! The engine makes four kinds of draw: a shell kind when loading, a
//! permutation of the loaded shells, the expired medicine coin flip, and
//! the burner phone's pick. All of them come from a `GameRng`, so a game
//! built from a seed replays exactly.
//!
//! Named streams (`stream("chamber")`) and forks derive their seeds with a
//! fixed FxHash mix, so a seed means the same game on every toolchain.
//!
//! ```
//! use shotgun_roulette::core::{GameRng, Shell};
//!
//! let mut a = GameRng::new(42).stream("chamber");
//! let mut b = GameRng::new(42).stream("chamber");
//!
//! let loaded: Vec<Shell> = (0..8).map(|_| a.draw_shell()).collect();
//! let again: Vec<Shell> = (0..8).map(|_| b.draw_shell()).collect();
//! assert_eq!(loaded, again);
//! ```

use std::hash::Hasher;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use super::shell::Shell;

/// ChaCha8 generator that remembers its seed for checkpoints.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Seeded generator.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Generator with a seed from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A separate generator for one kind of draw.
    ///
    /// Depends only on the seed and `name`, not on how far this generator
    /// has advanced.
    #[must_use]
    pub fn stream(&self, name: &str) -> Self {
        Self::new(derive_seed(self.seed, name.as_bytes(), 0))
    }

    /// A separate generator for a copy of the game.
    ///
    /// Each call yields a new, deterministic branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(derive_seed(self.seed, b"fork", self.forks))
    }

    /// Blank or live, even odds.
    pub fn draw_shell(&mut self) -> Shell {
        if self.inner.gen_bool(0.5) {
            Shell::Live
        } else {
            Shell::Blank
        }
    }

    /// Uniform random permutation.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.inner);
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p)
    }

    /// Uniform index in `0..=upper`.
    pub fn index_up_to(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }

    #[must_use]
    pub fn checkpoint(&self) -> RngCheckpoint {
        RngCheckpoint {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Resume exactly where `checkpoint` was taken.
    #[must_use]
    pub fn restore(checkpoint: &RngCheckpoint) -> Self {
        let mut rng = Self::new(checkpoint.seed);
        rng.inner.set_word_pos(checkpoint.word_pos);
        rng.forks = checkpoint.forks;
        rng
    }
}

/// Where a `GameRng` stands: its seed, stream position and fork count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngCheckpoint {
    pub seed: u64,
    pub word_pos: u128,
    pub forks: u64,
}

fn derive_seed(seed: u64, label: &[u8], n: u64) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write_u64(seed);
    hasher.write(label);
    hasher.write_u64(n);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shells(rng: &mut GameRng, count: usize) -> Vec<Shell> {
        (0..count).map(|_| rng.draw_shell()).collect()
    }

    #[test]
    fn test_seed_replays_shells() {
        assert_eq!(shells(&mut GameRng::new(5), 32), shells(&mut GameRng::new(5), 32));
        assert_ne!(shells(&mut GameRng::new(5), 32), shells(&mut GameRng::new(6), 32));
    }

    #[test]
    fn test_draw_shell_gives_both_kinds() {
        let drawn = shells(&mut GameRng::new(11), 400);
        let live = drawn.iter().filter(|s| s.is_live()).count();

        assert!((120..=280).contains(&live), "{live} live of 400");
    }

    #[test]
    fn test_streams_are_named() {
        let rng = GameRng::new(3);

        assert_eq!(
            shells(&mut rng.stream("chamber"), 16),
            shells(&mut rng.stream("chamber"), 16)
        );
        assert_ne!(
            shells(&mut rng.stream("chamber"), 16),
            shells(&mut rng.stream("items"), 16)
        );
    }

    #[test]
    fn test_stream_ignores_position() {
        let fresh = GameRng::new(3);
        let mut used = GameRng::new(3);
        used.chance(0.5);
        used.index_up_to(7);

        assert_eq!(fresh.stream("chamber").seed(), used.stream("chamber").seed());
    }

    #[test]
    fn test_forks_branch_deterministically() {
        let mut a = GameRng::new(9);
        let mut b = GameRng::new(9);

        let (first_a, second_a) = (a.fork(), a.fork());
        let first_b = b.fork();

        assert_eq!(first_a.seed(), first_b.seed());
        assert_ne!(first_a.seed(), second_a.seed());
        assert_ne!(first_a.seed(), a.seed());
    }

    #[test]
    fn test_chance_extremes_and_mix() {
        let mut rng = GameRng::new(1);
        assert!(rng.chance(1.0));
        assert!(!rng.chance(0.0));

        let hits = (0..400).filter(|_| rng.chance(0.5)).count();
        assert!((120..=280).contains(&hits), "{hits} of 400");
    }

    #[test]
    fn test_index_up_to_covers_range() {
        let mut rng = GameRng::new(2);
        let picks: Vec<_> = (0..200).map(|_| rng.index_up_to(3)).collect();

        assert!(picks.iter().all(|&i| i <= 3));
        assert!(picks.contains(&0));
        assert!(picks.contains(&3));
        assert_eq!(rng.index_up_to(0), 0);
    }

    #[test]
    fn test_shuffle_keeps_shells() {
        let mut rng = GameRng::new(4);
        let mut loaded = vec![Shell::Live, Shell::Live, Shell::Blank, Shell::Blank, Shell::Blank];
        rng.shuffle(&mut loaded);

        assert_eq!(loaded.iter().filter(|s| s.is_live()).count(), 2);
        assert_eq!(loaded.len(), 5);
    }

    #[test]
    fn test_checkpoint_resumes_draws() {
        let mut rng = GameRng::new(21);
        let _ = rng.fork();
        shells(&mut rng, 10);

        let checkpoint = rng.checkpoint();
        let expected = (shells(&mut rng, 8), rng.index_up_to(5));

        let mut resumed = GameRng::restore(&checkpoint);
        assert_eq!((shells(&mut resumed, 8), resumed.index_up_to(5)), expected);
        assert_eq!(resumed.checkpoint().forks, 1);
    }

    #[test]
    fn test_checkpoint_serde() {
        let mut rng = GameRng::new(8);
        rng.draw_shell();
        let checkpoint = rng.checkpoint();

        let json = serde_json::to_string(&checkpoint).unwrap();
        let back: RngCheckpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, checkpoint);
    }
}
