//! Property tests for dice formula parsing and rolling.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sl_mechanics::DiceFormula;

proptest! {
    #[test]
    fn valid_formulas_roll_within_bounds(
        count in 1u32..=40,
        sides in 1u32..=100,
        modifier in -20i32..=20,
        seed in any::<u64>(),
    ) {
        let formula = if modifier < 0 {
            format!("{count}d{sides}{modifier}")
        } else {
            format!("{count}d{sides}+{modifier}")
        };
        let parsed = DiceFormula::parse(&formula).unwrap();
        prop_assert_eq!(parsed.count, count);
        prop_assert_eq!(parsed.sides, sides);
        prop_assert_eq!(parsed.modifier, modifier);

        let mut rng = StdRng::seed_from_u64(seed);
        let result = parsed.roll(&mut rng);
        prop_assert_eq!(result.rolls.len(), count as usize);
        for &value in &result.rolls {
            prop_assert!((1..=sides).contains(&value));
        }
        let sum: i64 = result.rolls.iter().map(|&r| i64::from(r)).sum();
        prop_assert_eq!(result.total, sum + i64::from(modifier));
    }

    #[test]
    fn parse_never_panics(input in "\\PC*") {
        let _ = DiceFormula::parse(&input);
    }

    #[test]
    fn canonical_display_reparses(
        count in 0u32..=40,
        sides in 1u32..=100,
        modifier in -20i32..=20,
    ) {
        let formula = DiceFormula { count, sides, modifier };
        let reparsed = DiceFormula::parse(&formula.to_string()).unwrap();
        prop_assert_eq!(formula, reparsed);
    }
}
