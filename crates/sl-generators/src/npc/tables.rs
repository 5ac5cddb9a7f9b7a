//! Name and personality-trait pools for the NPC generator.
//!
//! First names are split by gender; last names and traits are shared.
//! Selection goes through [`crate::choice`] so the tables stay plain data.

use rand::rngs::StdRng;

use super::Gender;
use crate::choice;

/// Masculine first names (24 entries).
pub const MALE_FIRST_NAMES: &[&str] = &[
    "Aldric", "Bran", "Cedric", "Darius", "Edmund", "Felix", "Gareth", "Hugo", "Ivan", "Jasper",
    "Klaus", "Leon", "Magnus", "Nikolai", "Oscar", "Percival", "Quentin", "Roland", "Sebastian",
    "Thaddeus", "Ulrich", "Victor", "Wilhelm", "Xavier",
];

/// Feminine first names (24 entries).
pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Aria", "Beatrice", "Celeste", "Diana", "Elena", "Freya", "Gwendolyn", "Helena", "Iris",
    "Josephine", "Katarina", "Luna", "Morgana", "Nadine", "Ophelia", "Penelope", "Quinn",
    "Rosalind", "Seraphina", "Thea", "Ursula", "Vivienne", "Willow", "Yvette",
];

/// Family names shared by both pools (24 entries).
pub const LAST_NAMES: &[&str] = &[
    "Blackwood",
    "Stormwind",
    "Ironforge",
    "Goldleaf",
    "Silverstone",
    "Redmane",
    "Whitehawk",
    "Greybeard",
    "Strongarm",
    "Swiftblade",
    "Brightshield",
    "Darkwater",
    "Flameheart",
    "Frostborn",
    "Earthshaker",
    "Windwalker",
    "Moonwhisper",
    "Sunblade",
    "Shadowmere",
    "Lightbringer",
    "Thornhill",
    "Ravenclaw",
    "Wolfsbane",
    "Dragonborn",
];

/// Personality traits (24 entries). NPCs draw 2-4 distinct entries.
pub const TRAITS: &[&str] = &[
    "Ambitious",
    "Brave",
    "Cautious",
    "Diplomatic",
    "Energetic",
    "Friendly",
    "Grumpy",
    "Honest",
    "Impulsive",
    "Jovial",
    "Kind",
    "Lazy",
    "Mysterious",
    "Nervous",
    "Optimistic",
    "Pessimistic",
    "Quiet",
    "Reckless",
    "Stubborn",
    "Thoughtful",
    "Unfriendly",
    "Vengeful",
    "Wise",
    "Zealous",
];

/// Compose a full name: uniform first name from the gender pool plus a
/// uniform last name from the shared pool.
pub fn random_name(rng: &mut StdRng, gender: Gender) -> String {
    let pool = match gender {
        Gender::Male => MALE_FIRST_NAMES,
        Gender::Female => FEMALE_FIRST_NAMES,
    };
    let first = choice::uniform(rng, pool).copied().unwrap_or_default();
    let last = choice::uniform(rng, LAST_NAMES).copied().unwrap_or_default();
    format!("{first} {last}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn pools_have_expected_sizes() {
        assert_eq!(MALE_FIRST_NAMES.len(), 24);
        assert_eq!(FEMALE_FIRST_NAMES.len(), 24);
        assert_eq!(LAST_NAMES.len(), 24);
        assert_eq!(TRAITS.len(), 24);
    }

    #[test]
    fn names_are_first_plus_last() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let name = random_name(&mut rng, Gender::Female);
            let parts: Vec<&str> = name.split(' ').collect();
            assert_eq!(parts.len(), 2);
            assert!(FEMALE_FIRST_NAMES.contains(&parts[0]));
            assert!(LAST_NAMES.contains(&parts[1]));
        }
    }

    #[test]
    fn gender_selects_the_first_name_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let name = random_name(&mut rng, Gender::Male);
            let first = name.split(' ').next().unwrap();
            assert!(MALE_FIRST_NAMES.contains(&first));
            assert!(!FEMALE_FIRST_NAMES.contains(&first));
        }
    }
}
