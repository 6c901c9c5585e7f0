//! # radar_core - Player Radar Attribute Normalization
//!
//! Converts raw football season statistics, as delivered by an external
//! football-data feed, into eight bounded attributes (30-99) for radar
//! charts and head-to-head comparison.
//!
//! ## Guarantees
//! - Normalization is a total function: any input, including a missing
//!   record, yields a fully populated attribute block in range
//! - Pure and stateless: safe to call concurrently, one call per player
//! - Lenient parsing: malformed numeric values fall back to documented
//!   defaults, never to an error

pub mod api;
pub mod error;
pub mod models;
pub mod radar;

// Re-export the JSON API surface
pub use api::stats_json::{compare_stats_json, normalize_stats_json, ApiError, ApiResponse};
pub use error::{RadarError, Result};

// Re-export the data model
pub use models::stats::{
    DribbleStats, DuelStats, GameStats, GoalStats, Numeric, PassStats, Position, RawSeasonStats,
    TackleStats,
};

// Re-export the radar system
pub use radar::{RadarAttributes, RadarDiff, StatNormalizer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
