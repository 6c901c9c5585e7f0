//! Attribute comparison between two players
//!
//! Backs the head-to-head comparison view: per-attribute differences plus
//! the headline strength/weakness picks.

use serde::{Deserialize, Serialize};

use crate::radar::attributes::RadarAttributes;

/// Signed per-attribute difference between two radar attribute blocks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RadarDiff {
    pub pace_diff: i16,
    pub shooting_diff: i16,
    pub passing_diff: i16,
    pub dribbling_diff: i16,
    pub defending_diff: i16,
    pub physical_diff: i16,
    pub vision_diff: i16,
    pub positioning_diff: i16,
}

impl RadarDiff {
    /// Difference `first - second` per attribute.
    pub fn between(first: &RadarAttributes, second: &RadarAttributes) -> Self {
        Self {
            pace_diff: first.pace as i16 - second.pace as i16,
            shooting_diff: first.shooting as i16 - second.shooting as i16,
            passing_diff: first.passing as i16 - second.passing as i16,
            dribbling_diff: first.dribbling as i16 - second.dribbling as i16,
            defending_diff: first.defending as i16 - second.defending as i16,
            physical_diff: first.physical as i16 - second.physical as i16,
            vision_diff: first.vision as i16 - second.vision as i16,
            positioning_diff: first.positioning as i16 - second.positioning as i16,
        }
    }

    /// Total absolute difference across all eight attributes.
    pub fn total_diff(&self) -> u16 {
        self.entries().iter().map(|(_, diff)| diff.unsigned_abs()).sum()
    }

    /// Largest positive difference (the first player's biggest edge).
    /// Returns `("none", 0)` when the first player leads nowhere.
    pub fn biggest_strength(&self) -> (&'static str, i16) {
        self.entries()
            .iter()
            .filter(|(_, diff)| *diff > 0)
            .max_by_key(|(_, diff)| *diff)
            .map(|(name, diff)| (*name, *diff))
            .unwrap_or(("none", 0))
    }

    /// Most negative difference (the first player's biggest deficit).
    /// Returns `("none", 0)` when the first player trails nowhere.
    pub fn biggest_weakness(&self) -> (&'static str, i16) {
        self.entries()
            .iter()
            .filter(|(_, diff)| *diff < 0)
            .min_by_key(|(_, diff)| *diff)
            .map(|(name, diff)| (*name, *diff))
            .unwrap_or(("none", 0))
    }

    fn entries(&self) -> [(&'static str, i16); 8] {
        [
            ("pace", self.pace_diff),
            ("shooting", self.shooting_diff),
            ("passing", self.passing_diff),
            ("dribbling", self.dribbling_diff),
            ("defending", self.defending_diff),
            ("physical", self.physical_diff),
            ("vision", self.vision_diff),
            ("positioning", self.positioning_diff),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(values: [u8; 8]) -> RadarAttributes {
        RadarAttributes {
            pace: values[0],
            shooting: values[1],
            passing: values[2],
            dribbling: values[3],
            defending: values[4],
            physical: values[5],
            vision: values[6],
            positioning: values[7],
        }
    }

    #[test]
    fn test_diff_between_two_players() {
        let striker = attrs([85, 92, 70, 80, 35, 75, 68, 88]);
        let defender = attrs([70, 45, 72, 55, 90, 85, 60, 82]);

        let diff = RadarDiff::between(&striker, &defender);
        assert_eq!(diff.pace_diff, 15);
        assert_eq!(diff.shooting_diff, 47);
        assert_eq!(diff.passing_diff, -2);
        assert_eq!(diff.defending_diff, -55);

        let (strength, value) = diff.biggest_strength();
        assert_eq!((strength, value), ("shooting", 47));

        let (weakness, value) = diff.biggest_weakness();
        assert_eq!((weakness, value), ("defending", -55));
    }

    #[test]
    fn test_total_diff_sums_absolute_values() {
        let first = attrs([60, 60, 60, 60, 60, 60, 60, 60]);
        let second = attrs([50, 70, 60, 60, 60, 60, 60, 60]);

        let diff = RadarDiff::between(&first, &second);
        assert_eq!(diff.total_diff(), 20);
    }

    #[test]
    fn test_identical_players_have_no_highlights() {
        let same = RadarAttributes::baseline();
        let diff = RadarDiff::between(&same, &same.clone());

        assert_eq!(diff.total_diff(), 0);
        assert_eq!(diff.biggest_strength(), ("none", 0));
        assert_eq!(diff.biggest_weakness(), ("none", 0));
    }
}
