//! Dice engine and encounter mathematics for Spielleiter.
//!
//! Provides dice-notation parsing and rolling (with advantage and
//! disadvantage) and the 5e-style XP-budget arithmetic used to rate
//! encounter difficulty. Everything here is a pure function of its
//! arguments plus a caller-owned RNG; no state is retained between calls.

pub mod dice;
pub mod encounter;
pub mod error;

pub use dice::{DiceFormula, DiceRoll, roll, roll_advantage, roll_disadvantage, roll_many};
pub use encounter::{
    Difficulty, DifficultyThresholds, adjusted_xp, classify, multiplier, thresholds,
};
pub use error::{MechError, MechResult};
