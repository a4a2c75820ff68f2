// Captain rotation history and look-back windowing.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One captaincy record: who captained a side on a given match date. A match
/// normally contributes two entries, one per side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptainEntry {
    pub match_date: NaiveDate,
    pub player_id: String,
}

/// The group's captaincy log, ordered most recent match first.
#[derive(Debug, Clone, Default)]
pub struct CaptainLog {
    entries: Vec<CaptainEntry>,
}

impl CaptainLog {
    /// Build a log from unordered entries.
    pub fn new(mut entries: Vec<CaptainEntry>) -> Self {
        entries.sort_by(|a, b| b.match_date.cmp(&a.match_date));
        CaptainLog { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[CaptainEntry] {
        &self.entries
    }

    /// Ids of everyone who captained in the most recent `window` matches.
    ///
    /// A match is identified by its date, so the window counts distinct
    /// dates, not log rows: both sides' captains of a counted match are
    /// excluded together. `window == 0` yields the empty set (no rotation
    /// constraint).
    pub fn recent_captains(&self, window: usize) -> HashSet<String> {
        let mut dates_seen: Vec<NaiveDate> = Vec::new();
        let mut ids = HashSet::new();

        for entry in &self.entries {
            if !dates_seen.contains(&entry.match_date) {
                if dates_seen.len() == window {
                    break;
                }
                dates_seen.push(entry.match_date);
            }
            ids.insert(entry.player_id.clone());
        }
        ids
    }
}
