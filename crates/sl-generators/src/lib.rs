//! Table-driven NPC and loot generators for Spielleiter.
//!
//! Provides random NPC creation (names, races, occupations, traits, ability
//! scores, and level-scaled derived stats) and loot generation from
//! rarity-tiered weighted item tables, keyed by explicit rarity, challenge
//! rating, or party level. All randomness comes from a caller-owned RNG.

pub mod choice;
pub mod error;
pub mod loot;
pub mod npc;

pub use error::{GenError, GenResult};
pub use loot::{
    ItemKind, LootItem, Rarity, by_challenge_rating, by_rarity, total_value, treasure_hoard,
};
pub use npc::archetype::{Alignment, Occupation, Race};
pub use npc::{AbilityScores, Gender, Npc, generate};
