use colored::Colorize;

use sl_mechanics::{DiceRoll, MechResult, roll_advantage, roll_disadvantage, roll_many};

pub fn run(
    formulas: &[String],
    advantage: bool,
    disadvantage: bool,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let mut rng = super::make_rng(seed);

    let rolled: MechResult<Vec<DiceRoll>> = if advantage {
        formulas
            .iter()
            .map(|f| roll_advantage(&mut rng, f))
            .collect()
    } else if disadvantage {
        formulas
            .iter()
            .map(|f| roll_disadvantage(&mut rng, f))
            .collect()
    } else {
        roll_many(&mut rng, formulas)
    };
    let results = rolled.map_err(|e| e.to_string())?;

    if json {
        return super::print_json(&results);
    }

    let mode = if advantage {
        " (advantage)"
    } else if disadvantage {
        " (disadvantage)"
    } else {
        ""
    };
    for result in &results {
        println!("  {result}{}", mode.dimmed());
    }
    Ok(())
}
