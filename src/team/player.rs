// Player attributes: role and batting-position enums, parsing, display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Playing role. Only `WicketKeeper` affects team assignment (the scarcity
/// rule); the other roles influence the order players are fed to the greedy
/// balancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    WicketKeeper,
    Batter,
    Bowler,
    AllRounder,
}

impl Role {
    /// Parse a role string into a Role enum.
    ///
    /// Accepts both modern and traditional spellings:
    /// - "wicket-keeper", "wicketkeeper", "wk", "keeper" -> WicketKeeper
    /// - "batter", "batsman" -> Batter
    /// - "bowler" -> Bowler
    /// - "all-rounder", "allrounder" -> AllRounder
    pub fn from_str_role(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wicket-keeper" | "wicketkeeper" | "wk" | "keeper" => Some(Role::WicketKeeper),
            "batter" | "batsman" => Some(Role::Batter),
            "bowler" => Some(Role::Bowler),
            "all-rounder" | "allrounder" => Some(Role::AllRounder),
            _ => None,
        }
    }

    /// Return the display string for this role.
    pub fn display_str(&self) -> &'static str {
        match self {
            Role::WicketKeeper => "wicket-keeper",
            Role::Batter => "batter",
            Role::Bowler => "bowler",
            Role::AllRounder => "all-rounder",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Where in the batting order a player prefers to come in. Used only as a
/// captain-selection signal (opening batters tend to be match-day leaders).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattingPosition {
    Opening,
    Middle,
    Lower,
}

impl BattingPosition {
    pub fn from_str_position(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "opening" | "opener" | "top" => Some(BattingPosition::Opening),
            "middle" => Some(BattingPosition::Middle),
            "lower" | "tail" => Some(BattingPosition::Lower),
            _ => None,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            BattingPosition::Opening => "opening",
            BattingPosition::Middle => "middle",
            BattingPosition::Lower => "lower",
        }
    }
}

impl fmt::Display for BattingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// A confirmed player, as handed to the balancing engine.
///
/// Immutable for the duration of a balancing run. Ratings are unbounded;
/// validating them is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier, stable across calls.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Skill rating, higher = stronger.
    pub rating: f64,
    pub role: Role,
    pub batting_position: BattingPosition,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rating: f64,
        role: Role,
        batting_position: BattingPosition,
    ) -> Self {
        Player {
            id: id.into(),
            name: name.into(),
            rating,
            role,
            batting_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_role_standard_spellings() {
        assert_eq!(Role::from_str_role("wicket-keeper"), Some(Role::WicketKeeper));
        assert_eq!(Role::from_str_role("batter"), Some(Role::Batter));
        assert_eq!(Role::from_str_role("bowler"), Some(Role::Bowler));
        assert_eq!(Role::from_str_role("all-rounder"), Some(Role::AllRounder));
    }

    #[test]
    fn from_str_role_legacy_spellings() {
        assert_eq!(Role::from_str_role("batsman"), Some(Role::Batter));
        assert_eq!(Role::from_str_role("wk"), Some(Role::WicketKeeper));
        assert_eq!(Role::from_str_role("keeper"), Some(Role::WicketKeeper));
        assert_eq!(Role::from_str_role("allrounder"), Some(Role::AllRounder));
    }

    #[test]
    fn from_str_role_case_insensitive() {
        assert_eq!(Role::from_str_role("Bowler"), Some(Role::Bowler));
        assert_eq!(Role::from_str_role("WICKET-KEEPER"), Some(Role::WicketKeeper));
    }

    #[test]
    fn from_str_role_invalid() {
        assert_eq!(Role::from_str_role("fielder"), None);
        assert_eq!(Role::from_str_role(""), None);
    }

    #[test]
    fn role_display_roundtrip() {
        for role in [Role::WicketKeeper, Role::Batter, Role::Bowler, Role::AllRounder] {
            assert_eq!(Role::from_str_role(role.display_str()), Some(role));
        }
    }

    #[test]
    fn from_str_position_spellings() {
        assert_eq!(
            BattingPosition::from_str_position("opening"),
            Some(BattingPosition::Opening)
        );
        assert_eq!(
            BattingPosition::from_str_position("opener"),
            Some(BattingPosition::Opening)
        );
        assert_eq!(
            BattingPosition::from_str_position("middle"),
            Some(BattingPosition::Middle)
        );
        assert_eq!(
            BattingPosition::from_str_position("tail"),
            Some(BattingPosition::Lower)
        );
        assert_eq!(BattingPosition::from_str_position("silly-mid-on"), None);
    }

    #[test]
    fn batting_position_display_roundtrip() {
        for pos in [
            BattingPosition::Opening,
            BattingPosition::Middle,
            BattingPosition::Lower,
        ] {
            assert_eq!(
                BattingPosition::from_str_position(pos.display_str()),
                Some(pos)
            );
        }
    }

    #[test]
    fn display_trait_works() {
        assert_eq!(format!("{}", Role::WicketKeeper), "wicket-keeper");
        assert_eq!(format!("{}", BattingPosition::Opening), "opening");
    }
}
