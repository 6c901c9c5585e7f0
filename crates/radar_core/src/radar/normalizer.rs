//! Stat normalization
//!
//! Converts one player's raw season statistics into the eight bounded radar
//! attributes. The formula coefficients are display-tuned, not derived from
//! a football model; they are reproduced exactly for compatibility with the
//! values already shown to users.

use crate::models::stats::{Numeric, Position, RawSeasonStats};
use crate::radar::attributes::RadarAttributes;

/// Match rating an average player earns; the delta against it nudges
/// every attribute.
const BASELINE_RATING: f64 = 6.5;

/// Pass completion percentage assumed when the feed omits it.
const DEFAULT_PASS_ACCURACY: f64 = 70.0;

/// Success percentage assumed for ratios with no recorded attempts.
/// Distinct from the appearance floor of 1: "no attempts" is neutral,
/// "no minutes" still divides by one.
const NEUTRAL_RATE: f64 = 50.0;

/// Calculator turning raw season statistics into radar attributes
///
/// Total function: any input, including `None` and records with every leaf
/// missing, produces a fully populated block with each value in [30, 99].
pub struct StatNormalizer;

impl StatNormalizer {
    /// Normalize a player's season statistics.
    ///
    /// `None` means the player is unknown and yields the all-50 baseline.
    pub fn normalize(stats: Option<&RawSeasonStats>) -> RadarAttributes {
        let Some(stats) = stats else {
            return RadarAttributes::baseline();
        };

        let d = Derived::from_stats(stats);

        RadarAttributes {
            pace: clamp(d.position.pace_base() + d.per_game(d.dribble_success) * 5.0 + d.rating_delta * 5.0),
            shooting: clamp(55.0 + d.per_game(d.goals_total) * 0.40 + d.rating_delta * 10.0),
            passing: clamp(d.pass_accuracy * 0.7 + d.per_game(d.key_passes) * 15.0 + d.rating_delta * 5.0),
            dribbling: clamp(
                40.0 + d.dribble_rate() * 0.3
                    + d.per_game(d.dribble_success) * 15.0
                    + d.rating_delta * 8.0,
            ),
            defending: clamp(
                35.0 + d.per_game(d.tackles_total + d.interceptions) * 8.0 + d.rating_delta * 5.0,
            ),
            physical: clamp(40.0 + d.duel_rate() * 0.4 + d.rating_delta * 8.0),
            vision: clamp(
                50.0 + d.per_game(d.assists) * 50.0
                    + d.per_game(d.key_passes) * 10.0
                    + d.rating_delta * 8.0,
            ),
            positioning: clamp(d.rating * 12.0 - 5.0),
        }
    }
}

/// Round to the nearest integer, then bound to [30, 99]. Applied only as
/// the final step of each attribute, never mid-formula.
fn clamp(value: f64) -> u8 {
    value.round().max(RadarAttributes::MIN as f64).min(RadarAttributes::MAX as f64) as u8
}

/// Quantities read once per call and shared across the attribute formulas.
struct Derived {
    rating: f64,
    rating_delta: f64,
    /// Floored to 1 so per-game ratios never divide by zero.
    appearances: f64,
    position: Position,
    goals_total: f64,
    assists: f64,
    pass_accuracy: f64,
    key_passes: f64,
    dribble_attempts: f64,
    dribble_success: f64,
    tackles_total: f64,
    interceptions: f64,
    duels_total: f64,
    duels_won: f64,
}

impl Derived {
    fn from_stats(stats: &RawSeasonStats) -> Self {
        let games = stats.games.as_ref();
        let goals = stats.goals.as_ref();
        let passes = stats.passes.as_ref();
        let dribbles = stats.dribbles.as_ref();
        let tackles = stats.tackles.as_ref();
        let duels = stats.duels.as_ref();

        // A rating of exactly zero is a feed placeholder, treated the same
        // as missing.
        let rating = games
            .and_then(|g| g.rating.as_ref())
            .and_then(Numeric::as_f64)
            .filter(|r| *r != 0.0)
            .unwrap_or(BASELINE_RATING);

        let appearances = games.and_then(|g| g.appearances).unwrap_or(1).max(1) as f64;

        let pass_accuracy = passes
            .and_then(|p| p.accuracy.as_ref())
            .and_then(Numeric::as_f64)
            .unwrap_or(DEFAULT_PASS_ACCURACY);

        Self {
            rating,
            rating_delta: rating - BASELINE_RATING,
            appearances,
            position: games.and_then(|g| g.position).unwrap_or(Position::Unknown),
            goals_total: count(goals.and_then(|g| g.total)),
            assists: count(goals.and_then(|g| g.assists)),
            pass_accuracy,
            key_passes: count(passes.and_then(|p| p.key)),
            dribble_attempts: count(dribbles.and_then(|d| d.attempts)),
            dribble_success: count(dribbles.and_then(|d| d.success)),
            tackles_total: count(tackles.and_then(|t| t.total)),
            interceptions: count(tackles.and_then(|t| t.interceptions)),
            duels_total: count(duels.and_then(|d| d.total)),
            duels_won: count(duels.and_then(|d| d.won)),
        }
    }

    /// Season count scaled to a per-appearance percentage.
    fn per_game(&self, total: f64) -> f64 {
        total / self.appearances * 100.0
    }

    fn dribble_rate(&self) -> f64 {
        success_rate(self.dribble_success, self.dribble_attempts)
    }

    fn duel_rate(&self) -> f64 {
        success_rate(self.duels_won, self.duels_total)
    }
}

fn count(value: Option<u32>) -> f64 {
    value.unwrap_or(0) as f64
}

fn success_rate(succeeded: f64, attempted: f64) -> f64 {
    if attempted > 0.0 {
        succeeded / attempted * 100.0
    } else {
        NEUTRAL_RATE
    }
}
