//! Shared thresholds, sentinels and session limits.
//!
//! Kept in one place so the display heuristics can be tuned without touching
//! the derivation logic.

/// Highest atomic number with a record in the periodic table.
pub const MAX_KNOWN_ATOMIC_NUMBER: u32 = 118;
/// Nuclear charge past which no stable electron structure is expected.
pub const THEORETICAL_ATOMIC_NUMBER_LIMIT: u32 = 173;

/// Computed configurations with more terms than this collapse to
/// [`CUSTOM_CONFIGURATION_TEXT`]. The value is a legibility heuristic only.
pub const CUSTOM_CONFIGURATION_TERM_LIMIT: usize = 4;
pub const CUSTOM_CONFIGURATION_TEXT: &str = "Custom";
pub const NO_ELECTRONS_TEXT: &str = "No electrons";

pub const PLACEHOLDER_NAME: &str = "Unknown";
pub const PLACEHOLDER_SYMBOL: &str = "X";
pub const PLACEHOLDER_TITLE: &str = "Custom Particle";
pub const NOT_APPLICABLE_COORDINATE: i32 = -1;

/// Upper bound for every particle counter in a session.
pub const PARTICLE_LIMIT: u32 = 300;

pub const SPEED_SLIDER_MIN: u32 = 1;
pub const SPEED_SLIDER_MAX: u32 = 100;
pub const SPEED_SLIDER_DEFAULT: u32 = 30;
pub const SPEED_SLIDER_MIDPOINT: u32 = 50;

pub const DEFAULT_ELEMENT_NAME: &str = "Titanium";
