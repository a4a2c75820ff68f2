// Rotation-aware captain selection.

use std::collections::HashSet;

use super::player::{BattingPosition, Player};

/// Pick a captain for `roster`, avoiding ids in `recent_captain_ids`.
///
/// Players who captained inside the rotation window are excluded first. When
/// that excludes everyone, the whole roster becomes eligible again: rotation
/// is best-effort and must never block a match from forming. Within the
/// eligible pool the first opening batter in roster order wins; failing
/// that, the highest-rated player, earliest in roster order on ties.
///
/// Returns `None` only for an empty roster. `recent_captain_ids` is read
/// only; recording the chosen captain is the caller's job.
pub fn select_captain<'a>(
    roster: &'a [Player],
    recent_captain_ids: &HashSet<String>,
) -> Option<&'a Player> {
    if roster.is_empty() {
        return None;
    }

    let eligible: Vec<&Player> = roster
        .iter()
        .filter(|p| !recent_captain_ids.contains(&p.id))
        .collect();
    let pool: Vec<&Player> = if eligible.is_empty() {
        roster.iter().collect()
    } else {
        eligible
    };

    if let Some(opener) = pool
        .iter()
        .copied()
        .find(|p| p.batting_position == BattingPosition::Opening)
    {
        return Some(opener);
    }

    // Strict comparison keeps the earliest of equally rated players.
    pool.into_iter()
        .reduce(|best, p| if p.rating > best.rating { p } else { best })
}
