//! The chamber: an ordered sequence of shells.
//!
//! Index 0 is always the next shell to be fired or revealed. The chamber
//! only ever shrinks once loaded; reloading is the orchestrator's concern.
//!
//! Backed by `im::Vector` so copies of a game taken for lookahead share
//! structure instead of copying every shell.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Shell};

/// Ordered shells, front first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chamber {
    shells: Vector<Shell>,
}

impl Chamber {
    /// Create an empty chamber.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chamber from a known sequence, front first.
    pub fn from_shells(shells: impl IntoIterator<Item = Shell>) -> Self {
        Self {
            shells: shells.into_iter().collect(),
        }
    }

    /// Load `count` shells.
    ///
    /// Each shell is drawn independently, blank or live with equal odds,
    /// and the whole sequence is then shuffled. Returns the chamber together
    /// with the shells in the order they were drawn, before shuffling.
    pub fn generate(count: usize, rng: &mut GameRng) -> (Self, Vec<Shell>) {
        let drawn: Vec<Shell> = (0..count).map(|_| rng.draw_shell()).collect();

        let mut loaded = drawn.clone();
        rng.shuffle(&mut loaded);

        (Self::from_shells(loaded), drawn)
    }

    /// Number of shells left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shells.len()
    }

    /// Is the chamber empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }

    /// The next shell, if any.
    #[must_use]
    pub fn front(&self) -> Option<Shell> {
        self.shells.front().copied()
    }

    /// The shell at `index` (0 = next).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Shell> {
        self.shells.get(index).copied()
    }

    /// Remove and return the next shell.
    pub fn eject_front(&mut self) -> Option<Shell> {
        self.shells.pop_front()
    }

    /// Flip the next shell between blank and live.
    ///
    /// Returns the shell's previous value, or `None` if the chamber is empty.
    pub fn invert_front(&mut self) -> Option<Shell> {
        let front = self.shells.front_mut()?;
        let previous = *front;
        *front = previous.inverted();
        Some(previous)
    }

    /// Number of live shells left.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.shells.iter().filter(|shell| shell.is_live()).count()
    }

    /// Number of blank shells left.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.len() - self.live_count()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = Shell> + '_ {
        self.shells.iter().copied()
    }
}

impl FromIterator<Shell> for Chamber {
    fn from_iter<I: IntoIterator<Item = Shell>>(iter: I) -> Self {
        Self::from_shells(iter)
    }
}
