//! Radar attribute value object

use serde::{Deserialize, Serialize};

/// Eight-sided radar attributes for visual representation and comparison
///
/// Every field is an integer in the closed range [`RadarAttributes::MIN`],
/// [`RadarAttributes::MAX`]. Computed fresh per normalization call; never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RadarAttributes {
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub defending: u8,
    pub physical: u8,
    pub vision: u8,
    pub positioning: u8,
}

impl RadarAttributes {
    /// Lower bound of every attribute.
    pub const MIN: u8 = 30;
    /// Upper bound of every attribute.
    pub const MAX: u8 = 99;
    /// Value assigned across the board when nothing is known about a player.
    pub const BASELINE: u8 = 50;

    /// The fixed all-50 block returned for an unknown player.
    pub fn baseline() -> Self {
        Self {
            pace: Self::BASELINE,
            shooting: Self::BASELINE,
            passing: Self::BASELINE,
            dribbling: Self::BASELINE,
            defending: Self::BASELINE,
            physical: Self::BASELINE,
            vision: Self::BASELINE,
            positioning: Self::BASELINE,
        }
    }

    /// Sum of all eight attributes.
    pub fn total(&self) -> u16 {
        self.as_array().iter().map(|&v| v as u16).sum()
    }

    /// All values as an array for easy iteration.
    pub fn as_array(&self) -> [u8; 8] {
        [
            self.pace,
            self.shooting,
            self.passing,
            self.dribbling,
            self.defending,
            self.physical,
            self.vision,
            self.positioning,
        ]
    }

    /// Serialize to the wire shape: exactly the eight integer keys.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for RadarAttributes {
    fn default() -> Self {
        Self::baseline()
    }
}
