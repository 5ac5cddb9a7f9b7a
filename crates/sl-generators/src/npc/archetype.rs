//! Closed category tables for generated NPCs.
//!
//! Race, occupation, and alignment are fixed enumerations rather than free
//! strings, so an invalid category cannot be constructed. Each carries an
//! `ALL` table for uniform random selection.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Playable-world races an NPC can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    /// Baseline humans.
    Human,
    /// Long-lived forest folk.
    Elf,
    /// Mountain-dwelling smiths and miners.
    Dwarf,
    /// Small, home-loving folk.
    Halfling,
    /// Draconic humanoids.
    Dragonborn,
    /// Small, inventive tinkerers.
    Gnome,
    /// Human-elf descent.
    HalfElf,
    /// Human-orc descent.
    HalfOrc,
    /// Infernal-touched humanoids.
    Tiefling,
    /// Celestial-touched humanoids.
    Aasimar,
    /// Reclusive giant-kin of the forests.
    Firbolg,
    /// Mountain-born giant-kin.
    Goliath,
    /// Flightless raven folk.
    Kenku,
    /// Feline wanderers.
    Tabaxi,
}

impl Race {
    /// Every race, in table order.
    pub const ALL: [Self; 14] = [
        Self::Human,
        Self::Elf,
        Self::Dwarf,
        Self::Halfling,
        Self::Dragonborn,
        Self::Gnome,
        Self::HalfElf,
        Self::HalfOrc,
        Self::Tiefling,
        Self::Aasimar,
        Self::Firbolg,
        Self::Goliath,
        Self::Kenku,
        Self::Tabaxi,
    ];

    /// Pick a race uniformly at random.
    pub fn random(rng: &mut StdRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "Human"),
            Self::Elf => write!(f, "Elf"),
            Self::Dwarf => write!(f, "Dwarf"),
            Self::Halfling => write!(f, "Halfling"),
            Self::Dragonborn => write!(f, "Dragonborn"),
            Self::Gnome => write!(f, "Gnome"),
            Self::HalfElf => write!(f, "Half-Elf"),
            Self::HalfOrc => write!(f, "Half-Orc"),
            Self::Tiefling => write!(f, "Tiefling"),
            Self::Aasimar => write!(f, "Aasimar"),
            Self::Firbolg => write!(f, "Firbolg"),
            Self::Goliath => write!(f, "Goliath"),
            Self::Kenku => write!(f, "Kenku"),
            Self::Tabaxi => write!(f, "Tabaxi"),
        }
    }
}

/// Day jobs and callings an NPC can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupation {
    /// Buys low, sells high.
    Merchant,
    /// Keeps the peace, or at least the gate.
    Guard,
    /// Runs the tavern everyone meets in.
    Innkeeper,
    /// Works the forge.
    Blacksmith,
    /// Studies old books.
    Scholar,
    /// Tends a shrine or temple.
    Priest,
    /// Takes what isn't nailed down.
    Thief,
    /// Born into land and title.
    Noble,
    /// Works the fields.
    Farmer,
    /// Crews ships and docks.
    Sailor,
    /// Digs for ore.
    Miner,
    /// Tracks game in the wilds.
    Hunter,
    /// Mixes potions and worse.
    Alchemist,
    /// Sings for supper and gossip.
    Bard,
    /// Fights for pay.
    Soldier,
    /// Patches wounds.
    Healer,
    /// Copies documents for a fee.
    Scribe,
    /// Feeds the household.
    Cook,
    /// Builds in wood.
    Carpenter,
    /// Carries letters between towns.
    Messenger,
}

impl Occupation {
    /// Every occupation, in table order.
    pub const ALL: [Self; 20] = [
        Self::Merchant,
        Self::Guard,
        Self::Innkeeper,
        Self::Blacksmith,
        Self::Scholar,
        Self::Priest,
        Self::Thief,
        Self::Noble,
        Self::Farmer,
        Self::Sailor,
        Self::Miner,
        Self::Hunter,
        Self::Alchemist,
        Self::Bard,
        Self::Soldier,
        Self::Healer,
        Self::Scribe,
        Self::Cook,
        Self::Carpenter,
        Self::Messenger,
    ];

    /// Pick an occupation uniformly at random.
    pub fn random(rng: &mut StdRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl std::fmt::Display for Occupation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merchant => write!(f, "Merchant"),
            Self::Guard => write!(f, "Guard"),
            Self::Innkeeper => write!(f, "Innkeeper"),
            Self::Blacksmith => write!(f, "Blacksmith"),
            Self::Scholar => write!(f, "Scholar"),
            Self::Priest => write!(f, "Priest"),
            Self::Thief => write!(f, "Thief"),
            Self::Noble => write!(f, "Noble"),
            Self::Farmer => write!(f, "Farmer"),
            Self::Sailor => write!(f, "Sailor"),
            Self::Miner => write!(f, "Miner"),
            Self::Hunter => write!(f, "Hunter"),
            Self::Alchemist => write!(f, "Alchemist"),
            Self::Bard => write!(f, "Bard"),
            Self::Soldier => write!(f, "Soldier"),
            Self::Healer => write!(f, "Healer"),
            Self::Scribe => write!(f, "Scribe"),
            Self::Cook => write!(f, "Cook"),
            Self::Carpenter => write!(f, "Carpenter"),
            Self::Messenger => write!(f, "Messenger"),
        }
    }
}

/// The classic nine-point alignment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// Honor and compassion.
    LawfulGood,
    /// Good without dogma.
    NeutralGood,
    /// Conscience over rules.
    ChaoticGood,
    /// Order above all.
    LawfulNeutral,
    /// The balance.
    TrueNeutral,
    /// Whim and freedom.
    ChaoticNeutral,
    /// Tyranny by the book.
    LawfulEvil,
    /// Evil without loyalty.
    NeutralEvil,
    /// Cruelty and caprice.
    ChaoticEvil,
}

impl Alignment {
    /// Every alignment, in grid order.
    pub const ALL: [Self; 9] = [
        Self::LawfulGood,
        Self::NeutralGood,
        Self::ChaoticGood,
        Self::LawfulNeutral,
        Self::TrueNeutral,
        Self::ChaoticNeutral,
        Self::LawfulEvil,
        Self::NeutralEvil,
        Self::ChaoticEvil,
    ];

    /// Pick an alignment uniformly at random.
    pub fn random(rng: &mut StdRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LawfulGood => write!(f, "Lawful Good"),
            Self::NeutralGood => write!(f, "Neutral Good"),
            Self::ChaoticGood => write!(f, "Chaotic Good"),
            Self::LawfulNeutral => write!(f, "Lawful Neutral"),
            Self::TrueNeutral => write!(f, "True Neutral"),
            Self::ChaoticNeutral => write!(f, "Chaotic Neutral"),
            Self::LawfulEvil => write!(f, "Lawful Evil"),
            Self::NeutralEvil => write!(f, "Neutral Evil"),
            Self::ChaoticEvil => write!(f, "Chaotic Evil"),
        }
    }
}
