use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use sl_generators::{LootItem, Rarity, by_challenge_rating, by_rarity, total_value};

/// JSON shape for loot and hoard output.
#[derive(Serialize)]
struct Report<'a> {
    items: &'a [LootItem],
    total_value: u64,
}

pub fn run(
    rarity: Option<&str>,
    cr: Option<u32>,
    count: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let mut rng = super::make_rng(seed);

    let items = match (rarity, cr) {
        (Some(rarity), None) => {
            let tier =
                Rarity::parse(rarity).ok_or_else(|| format!("unknown rarity: \"{rarity}\""))?;
            by_rarity(&mut rng, tier, count)
        }
        (None, Some(cr)) => by_challenge_rating(&mut rng, cr),
        _ => return Err("either --rarity or --cr is required".to_string()),
    };

    render(&items, json)
}

/// Render a generated item list; shared with the hoard command.
pub fn render(items: &[LootItem], json: bool) -> Result<(), String> {
    if json {
        let report = Report {
            items,
            total_value: total_value(items),
        };
        return super::print_json(&report);
    }

    if items.is_empty() {
        println!("  No items.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Item", "Type", "Rarity", "Value (gp)"]);
    for item in items {
        let value = item.value.map_or_else(|| "—".to_string(), |v| v.to_string());
        table.add_row(vec![
            item.name.clone(),
            item.kind.to_string(),
            item.rarity.to_string(),
            value,
        ]);
    }
    println!("{table}");
    println!();
    println!("  Total value: {} gp", total_value(items));
    Ok(())
}
