//! Weighted item tables by rarity tier.
//!
//! Each tier has its own fixed table; an entry's weight is its relative
//! selection probability within the tier. The Artifact tier is empty on
//! purpose: artifacts are unique and never generated randomly.

use super::{ItemKind, LootItem, Rarity};

/// A single row in a rarity-tier loot table.
#[derive(Debug, Clone, Copy)]
pub struct LootTableEntry {
    /// Item name.
    pub name: &'static str,
    /// Item category.
    pub kind: ItemKind,
    /// Tier the entry belongs to.
    pub rarity: Rarity,
    /// Sale value in gold pieces, if the item has one.
    pub value: Option<u32>,
    /// Relative selection weight within the tier.
    pub weight: u32,
    /// Flavor text.
    pub description: Option<&'static str>,
}

impl LootTableEntry {
    /// Convert a table row into an owned loot item.
    pub fn to_item(self) -> LootItem {
        LootItem {
            name: self.name.to_string(),
            kind: self.kind,
            rarity: self.rarity,
            value: self.value,
            description: self.description.map(str::to_string),
        }
    }
}

/// Shorthand for building table rows.
const fn entry(
    name: &'static str,
    kind: ItemKind,
    rarity: Rarity,
    value: u32,
    weight: u32,
    description: &'static str,
) -> LootTableEntry {
    LootTableEntry {
        name,
        kind,
        rarity,
        value: Some(value),
        weight,
        description: Some(description),
    }
}

/// Common-tier items: coinage and mundane gear.
pub const COMMON_ITEMS: &[LootTableEntry] = &[
    entry(
        "Copper Pieces",
        ItemKind::WondrousItem,
        Rarity::Common,
        1,
        50,
        "2d6 x 100 copper pieces",
    ),
    entry(
        "Silver Pieces",
        ItemKind::WondrousItem,
        Rarity::Common,
        10,
        30,
        "2d4 x 10 silver pieces",
    ),
    entry(
        "Simple Weapon",
        ItemKind::Weapon,
        Rarity::Common,
        2,
        20,
        "A basic weapon like a dagger or club",
    ),
    entry(
        "Rations",
        ItemKind::WondrousItem,
        Rarity::Common,
        2,
        15,
        "Travel rations (1d4 days)",
    ),
    entry(
        "Rope (50 feet)",
        ItemKind::WondrousItem,
        Rarity::Common,
        2,
        10,
        "Hempen rope",
    ),
    entry(
        "Torch",
        ItemKind::WondrousItem,
        Rarity::Common,
        1,
        15,
        "1d6 torches",
    ),
    entry(
        "Healing Potion",
        ItemKind::Potion,
        Rarity::Common,
        50,
        10,
        "Potion of Healing (2d4+2 hp)",
    ),
];

/// Uncommon-tier items: gold and entry-level magic.
pub const UNCOMMON_ITEMS: &[LootTableEntry] = &[
    entry(
        "Gold Pieces",
        ItemKind::WondrousItem,
        Rarity::Uncommon,
        100,
        40,
        "2d6 x 10 gold pieces",
    ),
    entry(
        "Bag of Holding",
        ItemKind::WondrousItem,
        Rarity::Uncommon,
        4000,
        5,
        "A magical bag that can hold 500 pounds",
    ),
    entry(
        "Cloak of Elvenkind",
        ItemKind::WondrousItem,
        Rarity::Uncommon,
        1000,
        3,
        "Advantage on Stealth checks",
    ),
    entry(
        "Boots of Speed",
        ItemKind::WondrousItem,
        Rarity::Uncommon,
        800,
        4,
        "Double movement speed for 10 minutes",
    ),
    entry(
        "+1 Weapon",
        ItemKind::Weapon,
        Rarity::Uncommon,
        1000,
        8,
        "A weapon with +1 enhancement bonus",
    ),
    entry(
        "Scroll of Fireball",
        ItemKind::Scroll,
        Rarity::Uncommon,
        150,
        10,
        "Spell scroll (3rd level)",
    ),
    entry(
        "Potion of Greater Healing",
        ItemKind::Potion,
        Rarity::Uncommon,
        150,
        15,
        "Restores 4d4+4 hit points",
    ),
];

/// Rare-tier items.
pub const RARE_ITEMS: &[LootTableEntry] = &[
    entry(
        "Platinum Pieces",
        ItemKind::WondrousItem,
        Rarity::Rare,
        1000,
        30,
        "1d4 x 10 platinum pieces",
    ),
    entry(
        "Ring of Protection",
        ItemKind::Ring,
        Rarity::Rare,
        3500,
        8,
        "+1 bonus to AC and saving throws",
    ),
    entry(
        "Wand of Magic Missiles",
        ItemKind::Wand,
        Rarity::Rare,
        3000,
        6,
        "7 charges, regains 1d6+1 daily",
    ),
    entry(
        "Amulet of Health",
        ItemKind::WondrousItem,
        Rarity::Rare,
        8000,
        4,
        "Constitution becomes 19",
    ),
    entry(
        "+2 Weapon",
        ItemKind::Weapon,
        Rarity::Rare,
        4000,
        5,
        "A weapon with +2 enhancement bonus",
    ),
    entry(
        "Gem",
        ItemKind::WondrousItem,
        Rarity::Rare,
        1000,
        10,
        "A valuable gemstone worth 1000 gp",
    ),
    entry(
        "Spell Scroll (5th level)",
        ItemKind::Scroll,
        Rarity::Rare,
        1000,
        7,
        "Contains a 5th level spell",
    ),
];

/// Very-rare-tier items.
pub const VERY_RARE_ITEMS: &[LootTableEntry] = &[
    entry(
        "Rod of Lordly Might",
        ItemKind::Rod,
        Rarity::VeryRare,
        28000,
        3,
        "A versatile magical rod with multiple functions",
    ),
    entry(
        "Staff of Power",
        ItemKind::Staff,
        Rarity::VeryRare,
        95500,
        2,
        "Powerful staff with spell storage",
    ),
    entry(
        "+3 Weapon",
        ItemKind::Weapon,
        Rarity::VeryRare,
        12000,
        4,
        "A weapon with +3 enhancement bonus",
    ),
    entry(
        "Cloak of Invisibility",
        ItemKind::WondrousItem,
        Rarity::VeryRare,
        80000,
        2,
        "Grants invisibility at will",
    ),
    entry(
        "Manual of Bodily Health",
        ItemKind::WondrousItem,
        Rarity::VeryRare,
        137500,
        1,
        "Increases Constitution by 2",
    ),
    entry(
        "Art Object",
        ItemKind::WondrousItem,
        Rarity::VeryRare,
        7500,
        5,
        "Valuable art piece worth 7500 gp",
    ),
];

/// Legendary-tier items.
pub const LEGENDARY_ITEMS: &[LootTableEntry] = &[
    entry(
        "Holy Avenger",
        ItemKind::Weapon,
        Rarity::Legendary,
        165000,
        2,
        "Legendary paladin sword",
    ),
    entry(
        "Ring of Wishes",
        ItemKind::Ring,
        Rarity::Legendary,
        250000,
        1,
        "Grants 3 wishes",
    ),
    entry(
        "Deck of Many Things",
        ItemKind::WondrousItem,
        Rarity::Legendary,
        50000,
        1,
        "Dangerous magical deck of cards",
    ),
    entry(
        "Sphere of Annihilation",
        ItemKind::WondrousItem,
        Rarity::Legendary,
        200000,
        1,
        "A 2-foot-diameter sphere of nothingness",
    ),
];

/// The table for a rarity tier. Artifact has no table by design.
pub fn table_for(rarity: Rarity) -> &'static [LootTableEntry] {
    match rarity {
        Rarity::Common => COMMON_ITEMS,
        Rarity::Uncommon => UNCOMMON_ITEMS,
        Rarity::Rare => RARE_ITEMS,
        Rarity::VeryRare => VERY_RARE_ITEMS,
        Rarity::Legendary => LEGENDARY_ITEMS,
        Rarity::Artifact => &[],
    }
}
