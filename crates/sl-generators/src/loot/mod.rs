//! Random loot generation.
//!
//! Items are drawn from rarity-tiered weighted tables. The tier mix can be
//! set directly, derived from the challenge rating of a defeated
//! encounter, or rolled as a full treasure hoard keyed on party level.

pub mod tables;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::choice;
use crate::error::{GenError, GenResult};

/// Item power tiers, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    /// Mundane gear and small coinage.
    Common,
    /// Entry-level magic.
    Uncommon,
    /// Serious magic.
    Rare,
    /// Campaign-defining magic.
    VeryRare,
    /// The stuff of songs.
    Legendary,
    /// Unique; never generated randomly.
    Artifact,
}

impl Rarity {
    /// Every tier, ascending.
    pub const ALL: [Self; 6] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::VeryRare,
        Self::Legendary,
        Self::Artifact,
    ];

    /// Parse a rarity from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "common" => Some(Self::Common),
            "uncommon" => Some(Self::Uncommon),
            "rare" => Some(Self::Rare),
            "very rare" | "veryrare" => Some(Self::VeryRare),
            "legendary" => Some(Self::Legendary),
            "artifact" => Some(Self::Artifact),
            _ => None,
        }
    }

    /// The weighted item table for this tier.
    pub fn table(self) -> &'static [tables::LootTableEntry] {
        tables::table_for(self)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Common => write!(f, "Common"),
            Self::Uncommon => write!(f, "Uncommon"),
            Self::Rare => write!(f, "Rare"),
            Self::VeryRare => write!(f, "Very Rare"),
            Self::Legendary => write!(f, "Legendary"),
            Self::Artifact => write!(f, "Artifact"),
        }
    }
}

/// Categories of loot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Swords, bows, clubs.
    Weapon,
    /// Worn protection.
    Armor,
    /// Single-use liquids.
    Potion,
    /// Single-use spells.
    Scroll,
    /// Everything wondrous and miscellaneous.
    WondrousItem,
    /// Worn on a finger.
    Ring,
    /// Short arcane implements.
    Rod,
    /// Long arcane implements.
    Staff,
    /// Slim arcane implements.
    Wand,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "Weapon"),
            Self::Armor => write!(f, "Armor"),
            Self::Potion => write!(f, "Potion"),
            Self::Scroll => write!(f, "Scroll"),
            Self::WondrousItem => write!(f, "Wondrous Item"),
            Self::Ring => write!(f, "Ring"),
            Self::Rod => write!(f, "Rod"),
            Self::Staff => write!(f, "Staff"),
            Self::Wand => write!(f, "Wand"),
        }
    }
}

/// A generated piece of loot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootItem {
    /// Item name.
    pub name: String,
    /// Item category.
    pub kind: ItemKind,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Sale value in gold pieces, if the item has one.
    pub value: Option<u32>,
    /// Flavor text.
    pub description: Option<String>,
}

/// Draw `count` items independently from one tier's weighted table.
///
/// The Artifact tier has no table, so drawing from it yields an empty
/// sequence rather than an error.
pub fn by_rarity(rng: &mut StdRng, rarity: Rarity, count: u32) -> Vec<LootItem> {
    let table = rarity.table();
    (0..count)
        .filter_map(|_| choice::weighted(rng, table, |e| e.weight))
        .map(|e| e.to_item())
        .collect()
}

/// Roll loot for a defeated encounter of the given challenge rating.
///
/// CR buckets into four bands, each mixing a couple of base tiers with a
/// chance of one bonus item from the next tier up.
pub fn by_challenge_rating(rng: &mut StdRng, challenge_rating: u32) -> Vec<LootItem> {
    let mut items = Vec::new();
    match challenge_rating {
        0..=4 => {
            let commons = rng.random_range(1..=3);
            items.extend(by_rarity(rng, Rarity::Common, commons));
            if rng.random_bool(0.3) {
                items.extend(by_rarity(rng, Rarity::Uncommon, 1));
            }
        }
        5..=10 => {
            let commons = rng.random_range(1..=2);
            items.extend(by_rarity(rng, Rarity::Common, commons));
            let uncommons = rng.random_range(1..=2);
            items.extend(by_rarity(rng, Rarity::Uncommon, uncommons));
            if rng.random_bool(0.4) {
                items.extend(by_rarity(rng, Rarity::Rare, 1));
            }
        }
        11..=16 => {
            let uncommons = rng.random_range(1..=2);
            items.extend(by_rarity(rng, Rarity::Uncommon, uncommons));
            let rares = rng.random_range(1..=2);
            items.extend(by_rarity(rng, Rarity::Rare, rares));
            if rng.random_bool(0.3) {
                items.extend(by_rarity(rng, Rarity::VeryRare, 1));
            }
        }
        _ => {
            let rares = rng.random_range(1..=2);
            items.extend(by_rarity(rng, Rarity::Rare, rares));
            let very_rares = rng.random_range(1..=2);
            items.extend(by_rarity(rng, Rarity::VeryRare, very_rares));
            if rng.random_bool(0.2) {
                items.extend(by_rarity(rng, Rarity::Legendary, 1));
            }
        }
    }
    items
}

/// Roll a full treasure hoard for a party.
///
/// Always leads with a coin pile worth `d6 x 100` gold, scaled up every
/// four party levels, followed by magic items bucketed on party level.
/// Fails with [`GenError::InvalidArgument`] when the level is outside
/// 1..=20.
pub fn treasure_hoard(rng: &mut StdRng, party_level: u32) -> GenResult<Vec<LootItem>> {
    if !(1..=20).contains(&party_level) {
        return Err(GenError::InvalidArgument(format!(
            "party level must be 1-20, got {party_level}"
        )));
    }

    let mut items = Vec::new();

    let scale = (party_level / 4).max(1);
    let coins = rng.random_range(1..=6) * 100 * scale;
    items.push(LootItem {
        name: "Treasure Coins".to_string(),
        kind: ItemKind::WondrousItem,
        rarity: Rarity::Common,
        value: Some(coins),
        description: Some(format!("Mixed coins worth {coins} gp")),
    });

    match party_level {
        0..=4 => {
            let commons = rng.random_range(1..=3);
            items.extend(by_rarity(rng, Rarity::Common, commons));
            if rng.random_bool(0.5) {
                items.extend(by_rarity(rng, Rarity::Uncommon, 1));
            }
        }
        5..=10 => {
            let uncommons = rng.random_range(1..=3);
            items.extend(by_rarity(rng, Rarity::Uncommon, uncommons));
            if rng.random_bool(0.6) {
                items.extend(by_rarity(rng, Rarity::Rare, 1));
            }
        }
        11..=16 => {
            let rares = rng.random_range(1..=2);
            items.extend(by_rarity(rng, Rarity::Rare, rares));
            if rng.random_bool(0.4) {
                items.extend(by_rarity(rng, Rarity::VeryRare, 1));
            }
        }
        _ => {
            let very_rares = rng.random_range(1..=2);
            items.extend(by_rarity(rng, Rarity::VeryRare, very_rares));
            if rng.random_bool(0.2) {
                items.extend(by_rarity(rng, Rarity::Legendary, 1));
            }
        }
    }

    Ok(items)
}

/// Sum of item values; items without a value contribute nothing.
pub fn total_value(items: &[LootItem]) -> u64 {
    items
        .iter()
        .map(|item| u64::from(item.value.unwrap_or(0)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn item(name: &str, value: Option<u32>) -> LootItem {
        LootItem {
            name: name.to_string(),
            kind: ItemKind::WondrousItem,
            rarity: Rarity::Common,
            value,
            description: None,
        }
    }

    #[test]
    fn by_rarity_draws_the_requested_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = by_rarity(&mut rng, Rarity::Rare, 5);
        assert_eq!(items.len(), 5);
        for i in &items {
            assert_eq!(i.rarity, Rarity::Rare);
        }
    }

    #[test]
    fn by_rarity_artifact_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(by_rarity(&mut rng, Rarity::Artifact, 3).is_empty());
    }

    #[test]
    fn by_rarity_zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(by_rarity(&mut rng, Rarity::Common, 0).is_empty());
    }

    #[test]
    fn by_rarity_covers_the_table_over_many_draws() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut names = std::collections::HashSet::new();
        for item in by_rarity(&mut rng, Rarity::Common, 500) {
            names.insert(item.name);
        }
        assert_eq!(names.len(), tables::COMMON_ITEMS.len());
    }

    #[test]
    fn low_cr_loot_stays_at_low_tiers() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            for item in by_challenge_rating(&mut rng, 2) {
                assert!(item.rarity <= Rarity::Uncommon);
            }
        }
    }

    #[test]
    fn low_cr_loot_always_has_at_least_one_item() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(!by_challenge_rating(&mut rng, 0).is_empty());
        }
    }

    #[test]
    fn mid_cr_loot_mixes_common_and_uncommon() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = by_challenge_rating(&mut rng, 7);
        assert!(items.iter().any(|i| i.rarity == Rarity::Common));
        assert!(items.iter().any(|i| i.rarity == Rarity::Uncommon));
    }

    #[test]
    fn high_cr_loot_eventually_contains_a_legendary() {
        let mut rng = StdRng::seed_from_u64(42);
        let saw_legendary = (0..200).any(|_| {
            by_challenge_rating(&mut rng, 25)
                .iter()
                .any(|i| i.rarity == Rarity::Legendary)
        });
        assert!(saw_legendary);
    }

    #[test]
    fn hoard_rejects_out_of_range_levels() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(treasure_hoard(&mut rng, 0).is_err());
        assert!(treasure_hoard(&mut rng, 21).is_err());
    }

    #[test]
    fn hoard_leads_with_scaled_coins() {
        let mut rng = StdRng::seed_from_u64(42);
        let hoard = treasure_hoard(&mut rng, 9).unwrap();
        let coins = &hoard[0];
        assert_eq!(coins.name, "Treasure Coins");
        let value = coins.value.unwrap();
        // Level 9 scales the d6 x 100 pile by 2.
        assert_eq!(value % 200, 0);
        assert!((200..=1200).contains(&value));
    }

    #[test]
    fn low_level_hoard_coins_are_unscaled() {
        let mut rng = StdRng::seed_from_u64(42);
        let hoard = treasure_hoard(&mut rng, 1).unwrap();
        let value = hoard[0].value.unwrap();
        assert_eq!(value % 100, 0);
        assert!((100..=600).contains(&value));
    }

    #[test]
    fn high_level_hoard_skips_low_tiers() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let hoard = treasure_hoard(&mut rng, 20).unwrap();
            for item in &hoard[1..] {
                assert!(item.rarity >= Rarity::VeryRare);
            }
        }
    }

    #[test]
    fn total_value_of_empty_is_zero() {
        assert_eq!(total_value(&[]), 0);
    }

    #[test]
    fn total_value_sums_and_skips_missing() {
        let items = [
            item("a", Some(100)),
            item("b", Some(250)),
            item("c", Some(500)),
        ];
        assert_eq!(total_value(&items), 850);

        let items = [item("a", Some(100)), item("b", None)];
        assert_eq!(total_value(&items), 100);
    }

    #[test]
    fn rarity_parse() {
        assert_eq!(Rarity::parse("common"), Some(Rarity::Common));
        assert_eq!(Rarity::parse("Very Rare"), Some(Rarity::VeryRare));
        assert_eq!(Rarity::parse("very-rare"), Some(Rarity::VeryRare));
        assert_eq!(Rarity::parse("VERYRARE"), Some(Rarity::VeryRare));
        assert_eq!(Rarity::parse("mythic"), None);
    }

    #[test]
    fn rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Legendary < Rarity::Artifact);
    }

    #[test]
    fn item_serde_roundtrip() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = by_rarity(&mut rng, Rarity::Uncommon, 3);
        let json = serde_json::to_string(&items).unwrap();
        let back: Vec<LootItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 3);
        assert_eq!(back[0].name, items[0].name);
    }
}
