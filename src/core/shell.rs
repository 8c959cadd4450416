//! Chamber contents.

use serde::{Deserialize, Serialize};

/// A single round in the chamber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shell {
    /// Harmless when fired.
    Blank,
    /// Costs the target health when fired.
    Live,
}

impl Shell {
    /// Both shell kinds, in the order they are drawn from.
    pub const ALL: [Shell; 2] = [Shell::Blank, Shell::Live];

    /// Is this a live round?
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Shell::Live)
    }

    /// The opposite shell kind.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Shell::Blank => Shell::Live,
            Shell::Live => Shell::Blank,
        }
    }

    /// Upper-case name, as shown in notices.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shell::Blank => "BLANK",
            Shell::Live => "LIVE",
        }
    }
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted() {
        assert_eq!(Shell::Blank.inverted(), Shell::Live);
        assert_eq!(Shell::Live.inverted(), Shell::Blank);
        assert_eq!(Shell::Live.inverted().inverted(), Shell::Live);
    }

    #[test]
    fn test_display_and_serde_agree() {
        for shell in Shell::ALL {
            let json = serde_json::to_string(&shell).unwrap();
            assert_eq!(json, format!("\"{}\"", shell));
        }
    }
}
