//! Encounter difficulty arithmetic.
//!
//! Implements the 5e XP-budget rules: per-party difficulty thresholds from
//! a fixed per-level table, a monster-count multiplier with party-size
//! adjustment, and classification of an adjusted XP value into one of five
//! difficulty bands. Everything here is deterministic.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Per-character XP thresholds by level: easy, medium, hard, deadly.
/// Row 0 is level 1, row 19 is level 20.
const XP_THRESHOLDS: [[u32; 4]; 20] = [
    [25, 50, 75, 100],
    [50, 100, 150, 200],
    [75, 150, 225, 400],
    [125, 250, 375, 500],
    [250, 500, 750, 1100],
    [300, 600, 900, 1400],
    [350, 750, 1100, 1700],
    [450, 900, 1400, 2100],
    [550, 1100, 1600, 2400],
    [600, 1200, 1900, 2800],
    [800, 1600, 2400, 3600],
    [1000, 2000, 3000, 4500],
    [1100, 2200, 3400, 5100],
    [1250, 2500, 3800, 5700],
    [1400, 2800, 4300, 6400],
    [1600, 3200, 4800, 7200],
    [2000, 3900, 5900, 8800],
    [2100, 4200, 6300, 9500],
    [2400, 4900, 7300, 10900],
    [2800, 5700, 8500, 12700],
];

/// XP multiplier ladder. Breakpoints by monster count:
/// 1 / 2 / 3-6 / 7-10 / 11-14 / 15+.
const XP_MULTIPLIERS: [f64; 6] = [1.0, 1.5, 2.0, 2.5, 3.0, 4.0];

/// XP budget thresholds for a whole party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyThresholds {
    /// Budget below which an encounter is trivial.
    pub easy: u32,
    /// Budget at which an encounter becomes medium.
    pub medium: u32,
    /// Budget at which an encounter becomes hard.
    pub hard: u32,
    /// Budget at which an encounter becomes deadly.
    pub deadly: u32,
}

/// Difficulty band for an encounter's adjusted XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// Below the easy threshold; not worth the party's time.
    Trivial,
    /// Meets the easy threshold.
    Easy,
    /// Meets the medium threshold.
    Medium,
    /// Meets the hard threshold.
    Hard,
    /// Meets or exceeds the deadly threshold.
    Deadly,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trivial => write!(f, "Trivial"),
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
            Self::Deadly => write!(f, "Deadly"),
        }
    }
}

/// XP budget thresholds for a party: per-character table value × party size.
///
/// Fails with [`MechError::InvalidArgument`] when the level is outside
/// 1..=20 or the party is empty.
pub fn thresholds(party_level: u32, party_size: u32) -> MechResult<DifficultyThresholds> {
    if !(1..=20).contains(&party_level) {
        return Err(MechError::InvalidArgument(format!(
            "party level must be 1-20, got {party_level}"
        )));
    }
    if party_size == 0 {
        return Err(MechError::InvalidArgument(
            "party size must be at least 1".to_string(),
        ));
    }
    let [easy, medium, hard, deadly] = XP_THRESHOLDS[(party_level - 1) as usize];
    Ok(DifficultyThresholds {
        easy: easy * party_size,
        medium: medium * party_size,
        hard: hard * party_size,
        deadly: deadly * party_size,
    })
}

/// XP multiplier for a monster count, adjusted for party size.
///
/// Small parties (fewer than 3) move one step up the ladder, large parties
/// (more than 5) one step down; the adjustment clamps at the ladder ends.
pub fn multiplier(monster_count: u32, party_size: u32) -> MechResult<f64> {
    if monster_count == 0 {
        return Err(MechError::InvalidArgument(
            "monster count must be at least 1".to_string(),
        ));
    }
    if party_size == 0 {
        return Err(MechError::InvalidArgument(
            "party size must be at least 1".to_string(),
        ));
    }
    let base = match monster_count {
        1 => 0,
        2 => 1,
        3..=6 => 2,
        7..=10 => 3,
        11..=14 => 4,
        _ => 5,
    };
    let step = if party_size < 3 {
        (base + 1).min(XP_MULTIPLIERS.len() - 1)
    } else if party_size > 5 {
        base.saturating_sub(1)
    } else {
        base
    };
    Ok(XP_MULTIPLIERS[step])
}

/// Total monster XP scaled by the encounter multiplier.
pub fn adjusted_xp(base_xp: u32, monster_count: u32, party_size: u32) -> MechResult<f64> {
    Ok(f64::from(base_xp) * multiplier(monster_count, party_size)?)
}

/// Classify an adjusted XP value against a party's thresholds.
///
/// Returns the highest band whose threshold the value meets or exceeds;
/// values below the easy threshold are trivial.
pub fn classify(adjusted_xp: f64, thresholds: &DifficultyThresholds) -> Difficulty {
    if adjusted_xp >= f64::from(thresholds.deadly) {
        Difficulty::Deadly
    } else if adjusted_xp >= f64::from(thresholds.hard) {
        Difficulty::Hard
    } else if adjusted_xp >= f64::from(thresholds.medium) {
        Difficulty::Medium
    } else if adjusted_xp >= f64::from(thresholds.easy) {
        Difficulty::Easy
    } else {
        Difficulty::Trivial
    }
}
