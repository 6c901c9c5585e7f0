//! Raw season statistics as delivered by the upstream football-data feed
//!
//! Every leaf is optional: the feed omits whole sub-objects for players
//! without recorded actions, and numeric values arrive as numbers or as
//! decimal strings depending on the field. Parsing is lenient throughout;
//! unusable values resolve to documented defaults at normalization time.

use serde::{Deserialize, Serialize};

/// A numeric value the feed may deliver as a JSON number or a string
/// (e.g. `"rating": "7.25"` vs `"accuracy": 85`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Num(f64),
    Text(String),
}

impl Numeric {
    /// Parse to a finite f64. Returns `None` for unparsable text or
    /// non-finite numbers so callers can apply their own default.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Num(n) => Some(*n).filter(|n| n.is_finite()),
            Numeric::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

/// Playing position as reported by the feed. Unknown labels are kept
/// rather than rejected so new upstream positions never fail parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Attacker,
    Midfielder,
    Defender,
    Goalkeeper,
    #[serde(other)]
    Unknown,
}

impl Position {
    /// Positional prior for the pace attribute. Pace is not directly
    /// observable from season counts, so the position sets the base.
    pub fn pace_base(&self) -> f64 {
        match self {
            Position::Attacker => 78.0,
            Position::Midfielder => 72.0,
            Position::Defender => 65.0,
            Position::Goalkeeper => 45.0,
            Position::Unknown => 65.0,
        }
    }
}

/// Per-match aggregates: average rating, matches played, position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub rating: Option<Numeric>,
    /// The upstream feed spells this key "appearences".
    #[serde(alias = "appearences")]
    pub appearances: Option<u32>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalStats {
    pub total: Option<u32>,
    pub assists: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassStats {
    /// Completion percentage (0-100), number or integer-like string.
    pub accuracy: Option<Numeric>,
    /// Key passes: passes leading directly to a shot.
    pub key: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DribbleStats {
    pub attempts: Option<u32>,
    pub success: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TackleStats {
    pub total: Option<u32>,
    pub interceptions: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelStats {
    pub total: Option<u32>,
    pub won: Option<u32>,
}

/// One player's raw season statistics. Every sub-object is optional;
/// an entirely absent record is a valid "unknown player" input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSeasonStats {
    pub games: Option<GameStats>,
    pub goals: Option<GoalStats>,
    pub passes: Option<PassStats>,
    pub dribbles: Option<DribbleStats>,
    pub tackles: Option<TackleStats>,
    pub duels: Option<DuelStats>,
}

impl RawSeasonStats {
    /// Deserialize a raw statistics record from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_parses_numbers_and_strings() {
        assert_eq!(Numeric::Num(7.25).as_f64(), Some(7.25));
        assert_eq!(Numeric::Text("7.25".to_string()).as_f64(), Some(7.25));
        assert_eq!(Numeric::Text(" 85 ".to_string()).as_f64(), Some(85.0));
        assert_eq!(Numeric::Text("n/a".to_string()).as_f64(), None);
        assert_eq!(Numeric::Num(f64::NAN).as_f64(), None);
    }

    #[test]
    fn test_deserialize_full_payload() {
        let payload = json!({
            "games": { "rating": "7.1", "appearances": 30, "position": "Midfielder" },
            "goals": { "total": 4, "assists": 6 },
            "passes": { "accuracy": "84", "key": 41 },
            "dribbles": { "attempts": 60, "success": 38 },
            "tackles": { "total": 52, "interceptions": 28 },
            "duels": { "total": 310, "won": 170 }
        });

        let stats: RawSeasonStats = serde_json::from_value(payload).unwrap();
        let games = stats.games.unwrap();
        assert_eq!(games.appearances, Some(30));
        assert_eq!(games.position, Some(Position::Midfielder));
        assert_eq!(stats.passes.unwrap().key, Some(41));
    }

    #[test]
    fn test_deserialize_feed_spelling_and_extra_fields() {
        // The live feed misspells appearances and carries fields we ignore.
        let payload = json!({
            "games": { "appearences": 12, "minutes": 900, "lineups": 10 },
            "goals": { "total": 2, "conceded": 0 }
        });

        let stats: RawSeasonStats = serde_json::from_value(payload).unwrap();
        assert_eq!(stats.games.unwrap().appearances, Some(12));
        assert_eq!(stats.goals.unwrap().total, Some(2));
    }

    #[test]
    fn test_unknown_position_label_is_kept() {
        let payload = json!({ "games": { "position": "Wing-Back" } });
        let stats: RawSeasonStats = serde_json::from_value(payload).unwrap();
        assert_eq!(stats.games.unwrap().position, Some(Position::Unknown));
    }

    #[test]
    fn test_empty_object_is_valid() {
        let stats = RawSeasonStats::from_json("{}").unwrap();
        assert_eq!(stats, RawSeasonStats::default());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(RawSeasonStats::from_json("not json").is_err());
    }
}
