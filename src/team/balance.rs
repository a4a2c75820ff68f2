// Greedy skill-balanced two-way roster split.
//
// Splits the confirmed players for a match into a red and a blue side of
// near-equal total rating, spreading wicket-keepers one per side when the
// group has enough of them.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::player::{Player, Role};

/// One side of a match: its players plus the captain chosen for it, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub players: Vec<Player>,
    pub captain_id: Option<String>,
}

impl Team {
    pub fn new(players: Vec<Player>) -> Self {
        Team {
            players,
            captain_id: None,
        }
    }

    /// Sum of player ratings on this side.
    pub fn total_rating(&self) -> f64 {
        self.players.iter().map(|p| p.rating).sum()
    }

    /// Mean player rating, 0.0 for an empty side.
    pub fn mean_rating(&self) -> f64 {
        team_rating(&self.players)
    }
}

/// The outcome of a balancing run. Every input player appears on exactly
/// one side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancedTeams {
    pub red: Team,
    pub blue: Team,
}

/// Mean rating of a set of players, 0.0 when empty.
pub fn team_rating(players: &[Player]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    players.iter().map(|p| p.rating).sum::<f64>() / players.len() as f64
}

/// Split `players` into two competitively balanced sides.
///
/// Algorithm (single pass after an `O(n log n)` sort):
/// 1. Fewer than two players: everyone goes red, blue stays empty.
/// 2. Sort by rating descending, ties by id ascending, so identical inputs
///    always produce identical output.
/// 3. Bucket by role, preserving the rating order within each bucket.
/// 4. Keeper scarcity rule: with two or more keepers the best goes red and
///    the next blue; with exactly one, a coin flip on `rng` decides the side
///    (both sides are empty at that point, so there is no rating signal to
///    break the tie with). Further keepers rejoin the general pool.
/// 5. Feed the pool to the greedy pass as leftover keepers, then batters,
///    bowlers, all-rounders, so scarce specialist roles spread before the
///    all-rounders fill the gaps.
/// 6. Each player joins whichever side has the lower running rating total.
///    Exact ties alternate by position parity (even index red, odd blue) so
///    repeated ties do not pile onto one side.
///
/// The coin flip in step 4 is the only nondeterminism; callers that need
/// reproducible output pass a seeded `rng`.
pub fn balance_teams(players: &[Player], rng: &mut impl Rng) -> BalancedTeams {
    if players.len() < 2 {
        return BalancedTeams {
            red: Team::new(players.to_vec()),
            blue: Team::new(Vec::new()),
        };
    }

    let mut sorted: Vec<Player> = players.to_vec();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating).then_with(|| a.id.cmp(&b.id)));

    let mut keepers: Vec<Player> = Vec::new();
    let mut batters: Vec<Player> = Vec::new();
    let mut bowlers: Vec<Player> = Vec::new();
    let mut all_rounders: Vec<Player> = Vec::new();
    for p in sorted {
        match p.role {
            Role::WicketKeeper => keepers.push(p),
            Role::Batter => batters.push(p),
            Role::Bowler => bowlers.push(p),
            Role::AllRounder => all_rounders.push(p),
        }
    }

    let mut red: Vec<Player> = Vec::new();
    let mut blue: Vec<Player> = Vec::new();

    // Keeper pre-assignment. Anything left in `keepers` afterwards is
    // treated as an ordinary player.
    if keepers.len() >= 2 {
        red.push(keepers.remove(0));
        blue.push(keepers.remove(0));
    } else if keepers.len() == 1 {
        let keeper = keepers.remove(0);
        if rng.gen_bool(0.5) {
            red.push(keeper);
        } else {
            blue.push(keeper);
        }
    }

    let mut red_rating: f64 = red.iter().map(|p| p.rating).sum();
    let mut blue_rating: f64 = blue.iter().map(|p| p.rating).sum();

    let pool = keepers
        .into_iter()
        .chain(batters)
        .chain(bowlers)
        .chain(all_rounders);

    for (idx, player) in pool.enumerate() {
        let goes_red = if red_rating < blue_rating {
            true
        } else if blue_rating < red_rating {
            false
        } else {
            idx % 2 == 0
        };
        if goes_red {
            red_rating += player.rating;
            red.push(player);
        } else {
            blue_rating += player.rating;
            blue.push(player);
        }
    }

    BalancedTeams {
        red: Team::new(red),
        blue: Team::new(blue),
    }
}
