// CSV import for the player list and the captain log.
//
// players.csv columns: id,name,rating,role,batting_position,rsvp
// captains.csv columns: match_date,player_id

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::rotation::{CaptainEntry, CaptainLog};
use crate::team::player::{BattingPosition, Player, Role};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("player `{id}` has unknown role `{value}`")]
    UnknownRole { id: String, value: String },

    #[error("player `{id}` has unknown batting position `{value}`")]
    UnknownBattingPosition { id: String, value: String },

    #[error("player `{id}` has unknown rsvp status `{value}`")]
    UnknownRsvp { id: String, value: String },

    #[error("duplicate player id `{id}` in {path}")]
    DuplicateId { id: String, path: String },

    #[error("bad match date `{value}` in {path}: {source}")]
    BadDate {
        value: String,
        path: String,
        source: chrono::ParseError,
    },
}

// ---------------------------------------------------------------------------
// RSVP status
// ---------------------------------------------------------------------------

/// A member's response to a match invite. Only `Going` players reach the
/// balancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rsvp {
    Going,
    Maybe,
    NotGoing,
}

impl Rsvp {
    pub fn from_str_rsvp(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "going" | "yes" => Some(Rsvp::Going),
            "maybe" => Some(Rsvp::Maybe),
            "not-going" | "no" => Some(Rsvp::NotGoing),
            _ => None,
        }
    }
}

/// A player row together with their RSVP status.
#[derive(Debug, Clone)]
pub struct PlayerEntry {
    pub player: Player,
    pub rsvp: Rsvp,
}

/// Filter imported entries down to the confirmed ("going") players.
pub fn confirmed_players(entries: &[PlayerEntry]) -> Vec<Player> {
    entries
        .iter()
        .filter(|e| e.rsvp == Rsvp::Going)
        .map(|e| e.player.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawPlayerRow {
    id: String,
    name: String,
    rating: f64,
    role: String,
    batting_position: String,
    /// Missing column defaults to "going" so plain roster files import as-is.
    #[serde(default = "default_rsvp")]
    rsvp: String,
}

fn default_rsvp() -> String {
    "going".to_string()
}

#[derive(Debug, Deserialize)]
struct RawCaptainRow {
    match_date: String,
    player_id: String,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load the group's player list. Unknown role, batting-position, or rsvp
/// strings fail the import; a silently skipped player would corrupt the
/// balance.
pub fn load_players(path: &Path) -> Result<Vec<PlayerEntry>, ImportError> {
    let path_str = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path_str.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let mut entries: Vec<PlayerEntry> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for row in reader.deserialize::<RawPlayerRow>() {
        let raw = row.map_err(|source| ImportError::Csv {
            path: path_str.clone(),
            source,
        })?;

        if !seen.insert(raw.id.clone()) {
            return Err(ImportError::DuplicateId {
                id: raw.id,
                path: path_str,
            });
        }

        let role = Role::from_str_role(&raw.role).ok_or_else(|| ImportError::UnknownRole {
            id: raw.id.clone(),
            value: raw.role.clone(),
        })?;
        let batting_position = BattingPosition::from_str_position(&raw.batting_position)
            .ok_or_else(|| ImportError::UnknownBattingPosition {
                id: raw.id.clone(),
                value: raw.batting_position.clone(),
            })?;
        let rsvp = Rsvp::from_str_rsvp(&raw.rsvp).ok_or_else(|| ImportError::UnknownRsvp {
            id: raw.id.clone(),
            value: raw.rsvp.clone(),
        })?;

        entries.push(PlayerEntry {
            player: Player::new(raw.id, raw.name, raw.rating, role, batting_position),
            rsvp,
        });
    }

    debug!("loaded {} player rows from {}", entries.len(), path_str);
    Ok(entries)
}

/// Load the captaincy log. Dates are ISO (`YYYY-MM-DD`).
pub fn load_captain_log(path: &Path) -> Result<CaptainLog, ImportError> {
    let path_str = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path_str.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let mut entries: Vec<CaptainEntry> = Vec::new();
    for row in reader.deserialize::<RawCaptainRow>() {
        let raw = row.map_err(|source| ImportError::Csv {
            path: path_str.clone(),
            source,
        })?;
        let match_date = raw.match_date.parse().map_err(|source| ImportError::BadDate {
            value: raw.match_date.clone(),
            path: path_str.clone(),
            source,
        })?;
        entries.push(CaptainEntry {
            match_date,
            player_id: raw.player_id,
        });
    }

    debug!("loaded {} captaincy rows from {}", entries.len(), path_str);
    Ok(CaptainLog::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_players_parses_rows() {
        let file = write_temp(
            "id,name,rating,role,batting_position,rsvp\n\
             p1,Asha,82.5,batter,opening,going\n\
             p2,Vik,71.0,wicket-keeper,middle,maybe\n",
        );
        let entries = load_players(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].player.id, "p1");
        assert_eq!(entries[0].player.role, Role::Batter);
        assert_eq!(entries[0].rsvp, Rsvp::Going);
        assert_eq!(entries[1].player.role, Role::WicketKeeper);
        assert_eq!(entries[1].rsvp, Rsvp::Maybe);
    }

    #[test]
    fn missing_rsvp_column_defaults_to_going() {
        let file = write_temp(
            "id,name,rating,role,batting_position\n\
             p1,Asha,82.5,batsman,opening\n",
        );
        let entries = load_players(file.path()).unwrap();
        assert_eq!(entries[0].rsvp, Rsvp::Going);
    }

    #[test]
    fn unknown_role_is_an_error() {
        let file = write_temp(
            "id,name,rating,role,batting_position,rsvp\n\
             p1,Asha,82.5,goalkeeper,opening,going\n",
        );
        let err = load_players(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::UnknownRole { .. }));
    }

    #[test]
    fn unknown_batting_position_is_an_error() {
        let file = write_temp(
            "id,name,rating,role,batting_position,rsvp\n\
             p1,Asha,82.5,batter,floating,going\n",
        );
        let err = load_players(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::UnknownBattingPosition { .. }));
    }

    #[test]
    fn unknown_rsvp_is_an_error() {
        let file = write_temp(
            "id,name,rating,role,batting_position,rsvp\n\
             p1,Asha,82.5,batter,opening,perhaps\n",
        );
        let err = load_players(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::UnknownRsvp { .. }));
    }

    #[test]
    fn duplicate_id_is_an_error() {
        let file = write_temp(
            "id,name,rating,role,batting_position,rsvp\n\
             p1,Asha,82.5,batter,opening,going\n\
             p1,Vik,71.0,bowler,lower,going\n",
        );
        let err = load_players(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::DuplicateId { .. }));
    }

    #[test]
    fn confirmed_players_filters_to_going() {
        let file = write_temp(
            "id,name,rating,role,batting_position,rsvp\n\
             p1,Asha,82.5,batter,opening,going\n\
             p2,Vik,71.0,bowler,lower,maybe\n\
             p3,Ria,65.0,all-rounder,middle,not-going\n\
             p4,Sam,60.0,bowler,lower,going\n",
        );
        let entries = load_players(file.path()).unwrap();
        let confirmed = confirmed_players(&entries);
        assert_eq!(confirmed.len(), 2);
        assert_eq!(confirmed[0].id, "p1");
        assert_eq!(confirmed[1].id, "p4");
    }

    #[test]
    fn load_captain_log_parses_and_windows() {
        let file = write_temp(
            "match_date,player_id\n\
             2026-08-01,p1\n\
             2026-08-01,p2\n\
             2026-08-08,p3\n",
        );
        let log = load_captain_log(file.path()).unwrap();
        assert_eq!(log.len(), 3);
        let recent = log.recent_captains(1);
        assert!(recent.contains("p3"));
        assert!(!recent.contains("p1"));
    }

    #[test]
    fn bad_date_is_an_error() {
        let file = write_temp("match_date,player_id\nnext-friday,p1\n");
        let err = load_captain_log(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::BadDate { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_players(Path::new("/nonexistent/players.csv")).unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
    }
}
