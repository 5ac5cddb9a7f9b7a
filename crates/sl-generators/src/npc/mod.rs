//! Random NPC generation.
//!
//! Composes a complete character sheet from the fixed tables: name, race,
//! occupation, alignment, 2-4 distinct personality traits, ability scores,
//! and derived stats scaled by level on a d8 hit die.

pub mod archetype;
pub mod tables;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use self::archetype::{Alignment, Occupation, Race};
use crate::error::{GenError, GenResult};

/// Which first-name pool to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Masculine name pool.
    Male,
    /// Feminine name pool.
    Female,
}

impl Gender {
    /// Parse a gender from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }

    /// Coin-flip a gender.
    pub fn random(rng: &mut StdRng) -> Self {
        if rng.random_bool(0.5) {
            Self::Male
        } else {
            Self::Female
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// The six classic ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Physical power.
    pub strength: u32,
    /// Agility and reflexes.
    pub dexterity: u32,
    /// Endurance and health.
    pub constitution: u32,
    /// Reasoning and memory.
    pub intelligence: u32,
    /// Perception and insight.
    pub wisdom: u32,
    /// Force of personality.
    pub charisma: u32,
}

impl AbilityScores {
    /// Roll a full set of scores, each uniform in 10..=17.
    fn random(rng: &mut StdRng) -> Self {
        let mut score = || rng.random_range(10..=17);
        Self {
            strength: score(),
            dexterity: score(),
            constitution: score(),
            intelligence: score(),
            wisdom: score(),
            charisma: score(),
        }
    }

    /// Standard ability modifier: (score - 10) / 2, rounded down.
    pub fn modifier(score: u32) -> i32 {
        (score as i32 - 10).div_euclid(2)
    }
}

/// A complete generated NPC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    /// Full name, first plus last.
    pub name: String,
    /// Race drawn from the fixed table.
    pub race: Race,
    /// Occupation drawn from the fixed table.
    pub occupation: Occupation,
    /// Character level, 1-20.
    pub level: u32,
    /// Alignment drawn from the nine-point grid.
    pub alignment: Alignment,
    /// 2-4 distinct personality traits.
    pub traits: Vec<String>,
    /// The six ability scores.
    pub abilities: AbilityScores,
    /// Hit points on a d8 hit die, scaled by level and Constitution.
    pub hit_points: u32,
    /// Unarmored AC: 10 plus the Dexterity modifier.
    pub armor_class: u32,
    /// Walking speed in feet.
    pub speed: u32,
    /// Proficiency bonus derived from level.
    pub proficiency_bonus: u32,
    /// One-line flavor text.
    pub description: String,
}

/// Walking speed shared by every generated NPC.
const SPEED: u32 = 30;

/// Sides on the NPC hit die.
const HIT_DIE: i32 = 8;

/// Generate an NPC at the given level.
///
/// When `gender` is `None` the name pool is chosen by coin flip. Fails
/// with [`GenError::InvalidArgument`] when the level is outside 1..=20.
pub fn generate(rng: &mut StdRng, level: u32, gender: Option<Gender>) -> GenResult<Npc> {
    if !(1..=20).contains(&level) {
        return Err(GenError::InvalidArgument(format!(
            "npc level must be 1-20, got {level}"
        )));
    }

    let gender = gender.unwrap_or_else(|| Gender::random(rng));
    let name = tables::random_name(rng, gender);
    let race = Race::random(rng);
    let occupation = Occupation::random(rng);
    let alignment = Alignment::random(rng);
    let traits = random_traits(rng);
    let abilities = AbilityScores::random(rng);

    let con_mod = AbilityScores::modifier(abilities.constitution);
    let dex_mod = AbilityScores::modifier(abilities.dexterity);

    let qualifier = if level <= 1 { "young" } else { "seasoned" };
    let description = format!(
        "A {qualifier} {} {}",
        race.to_string().to_lowercase(),
        occupation.to_string().to_lowercase()
    );

    Ok(Npc {
        name,
        race,
        occupation,
        level,
        alignment,
        traits,
        abilities,
        hit_points: hit_points(level, con_mod),
        armor_class: (10 + dex_mod).max(0) as u32,
        speed: SPEED,
        proficiency_bonus: level.div_ceil(4) + 1,
        description,
    })
}

/// Draw 2-4 distinct traits without replacement.
fn random_traits(rng: &mut StdRng) -> Vec<String> {
    let count = rng.random_range(2..=4);
    let mut pool: Vec<&str> = tables::TRAITS.to_vec();
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let at = rng.random_range(0..pool.len());
        picked.push(pool.swap_remove(at).to_string());
    }
    picked
}

/// Hit points on a d8 hit die: a full die at level 1, then the average
/// (rounded up) plus the Constitution modifier per further level. Never
/// below 1.
fn hit_points(level: u32, con_mod: i32) -> u32 {
    let per_level = HIT_DIE / 2 + 1 + con_mod;
    let total = HIT_DIE + con_mod + (level as i32 - 1) * per_level;
    total.max(1) as u32
}
