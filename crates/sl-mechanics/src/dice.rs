//! Dice-notation parsing and rolling.
//!
//! Formulas use the compact `<count>d<sides>[+/-modifier]` notation
//! ("3d6", "1d20+5", "2d8-1"). The separator letter is case-insensitive;
//! anything else about the string is strict — no whitespace, no extra
//! characters before or after.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A parsed dice formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceFormula {
    /// Number of dice to roll.
    pub count: u32,
    /// Sides per die (at least 1).
    pub sides: u32,
    /// Flat bonus or penalty applied to the sum.
    pub modifier: i32,
}

impl DiceFormula {
    /// Parse a formula like "3d6", "1d20+5", or "2d8-1".
    ///
    /// Fails with [`MechError::InvalidFormula`] when the string does not
    /// match `<count>d<sides>[+/-modifier]`, or when the die has zero
    /// sides (no value in `1..=0` exists to roll).
    pub fn parse(input: &str) -> MechResult<Self> {
        let invalid = || MechError::InvalidFormula(input.to_string());

        let (count, rest) = input.split_once(['d', 'D']).ok_or_else(invalid)?;
        let (sides, modifier) = match rest.find(['+', '-']) {
            Some(at) => (&rest[..at], &rest[at..]),
            None => (rest, ""),
        };

        if !is_digits(count) || !is_digits(sides) {
            return Err(invalid());
        }
        let count: u32 = count.parse().map_err(|_| invalid())?;
        let sides: u32 = sides.parse().map_err(|_| invalid())?;
        if sides == 0 {
            return Err(invalid());
        }

        let modifier: i32 = if modifier.is_empty() {
            0
        } else {
            if !is_digits(&modifier[1..]) {
                return Err(invalid());
            }
            modifier.parse().map_err(|_| invalid())?
        };

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Roll this formula: `count` independent uniform draws in `1..=sides`.
    pub fn roll(&self, rng: &mut StdRng) -> DiceRoll {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect();
        let total = rolls.iter().map(|&r| i64::from(r)).sum::<i64>() + i64::from(self.modifier);
        DiceRoll {
            formula: self.to_string(),
            rolls,
            modifier: self.modifier,
            total,
        }
    }
}

impl std::fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier.cmp(&0) {
            std::cmp::Ordering::Greater => write!(f, "+{}", self.modifier),
            std::cmp::Ordering::Less => write!(f, "{}", self.modifier),
            std::cmp::Ordering::Equal => Ok(()),
        }
    }
}

/// True if the string is non-empty and all ASCII digits.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// The result of rolling a dice formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceRoll {
    /// The formula that was rolled, in canonical lowercase form.
    pub formula: String,
    /// Individual die values in roll order, each in `1..=sides`.
    pub rolls: Vec<u32>,
    /// Flat modifier applied to the sum.
    pub modifier: i32,
    /// Sum of all die values plus the modifier.
    pub total: i64,
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(u32::to_string).collect();
        write!(f, "{} [{}]", self.formula, values.join(", "))?;
        match self.modifier.cmp(&0) {
            std::cmp::Ordering::Greater => write!(f, " + {}", self.modifier)?,
            std::cmp::Ordering::Less => write!(f, " - {}", -i64::from(self.modifier))?,
            std::cmp::Ordering::Equal => {}
        }
        write!(f, " = {}", self.total)
    }
}

/// Parse and roll a single formula.
pub fn roll(rng: &mut StdRng, formula: &str) -> MechResult<DiceRoll> {
    Ok(DiceFormula::parse(formula)?.roll(rng))
}

/// Parse and roll a batch of formulas, failing on the first invalid one.
pub fn roll_many<S: AsRef<str>>(rng: &mut StdRng, formulas: &[S]) -> MechResult<Vec<DiceRoll>> {
    formulas.iter().map(|f| roll(rng, f.as_ref())).collect()
}

/// Roll the formula twice and keep the higher total.
///
/// On a tie the first roll is kept, so the tie-break is stable rather
/// than random.
pub fn roll_advantage(rng: &mut StdRng, formula: &str) -> MechResult<DiceRoll> {
    let parsed = DiceFormula::parse(formula)?;
    let first = parsed.roll(rng);
    let second = parsed.roll(rng);
    Ok(if second.total > first.total {
        second
    } else {
        first
    })
}

/// Roll the formula twice and keep the lower total.
///
/// On a tie the first roll is kept.
pub fn roll_disadvantage(rng: &mut StdRng, formula: &str) -> MechResult<DiceRoll> {
    let parsed = DiceFormula::parse(formula)?;
    let first = parsed.roll(rng);
    let second = parsed.roll(rng);
    Ok(if second.total < first.total {
        second
    } else {
        first
    })
}
