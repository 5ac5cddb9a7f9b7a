use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use sl_mechanics::{
    Difficulty, DifficultyThresholds, adjusted_xp, classify, multiplier, thresholds,
};

/// JSON shape for `sl encounter --json`.
#[derive(Serialize)]
struct Report {
    thresholds: DifficultyThresholds,
    #[serde(skip_serializing_if = "Option::is_none")]
    multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    adjusted_xp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    difficulty: Option<Difficulty>,
}

pub fn run(
    level: u32,
    size: u32,
    monsters: Option<u32>,
    xp: Option<u32>,
    json: bool,
) -> Result<(), String> {
    let budget = thresholds(level, size).map_err(|e| e.to_string())?;

    let assessment = match (monsters, xp) {
        (Some(monsters), Some(xp)) => {
            let mult = multiplier(monsters, size).map_err(|e| e.to_string())?;
            let adjusted = adjusted_xp(xp, monsters, size).map_err(|e| e.to_string())?;
            Some((mult, adjusted, classify(adjusted, &budget)))
        }
        _ => None,
    };

    if json {
        let report = Report {
            thresholds: budget,
            multiplier: assessment.map(|(m, _, _)| m),
            adjusted_xp: assessment.map(|(_, a, _)| a),
            difficulty: assessment.map(|(_, _, d)| d),
        };
        return super::print_json(&report);
    }

    println!(
        "  {} {}",
        "XP budget".bold(),
        format!("(level {level}, {size} characters)").dimmed()
    );
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Easy", "Medium", "Hard", "Deadly"]);
    table.add_row(vec![
        budget.easy.to_string(),
        budget.medium.to_string(),
        budget.hard.to_string(),
        budget.deadly.to_string(),
    ]);
    println!("{table}");

    if let Some((mult, adjusted, difficulty)) = assessment {
        println!();
        println!("  Adjusted XP: {} (x{mult})", format_xp(adjusted));
        println!("  Difficulty:  {}", colorize_difficulty(difficulty));
    }
    Ok(())
}

/// Render an adjusted XP value without a trailing ".0" on whole numbers.
fn format_xp(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u64)
    } else {
        format!("{value:.1}")
    }
}

fn colorize_difficulty(difficulty: Difficulty) -> ColoredString {
    let label = difficulty.to_string();
    match difficulty {
        Difficulty::Trivial => label.dimmed(),
        Difficulty::Easy => label.green(),
        Difficulty::Medium => label.yellow(),
        Difficulty::Hard => label.red(),
        Difficulty::Deadly => label.red().bold(),
    }
}
