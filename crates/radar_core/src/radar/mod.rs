//! Radar attribute system
//!
//! - `RadarAttributes`: eight-sided bounded attribute block for display
//! - `StatNormalizer`: raw season statistics → attributes
//! - `RadarDiff`: attribute differences for two-player comparison

pub mod attributes;
pub mod comparison;
pub mod normalizer;

pub use attributes::RadarAttributes;
pub use comparison::RadarDiff;
pub use normalizer::StatNormalizer;
