//! Data model for the normalization core

pub mod stats;

pub use stats::{
    DribbleStats, DuelStats, GameStats, GoalStats, Numeric, PassStats, Position, RawSeasonStats,
    TackleStats,
};
