use colored::Colorize;

use sl_generators::{Gender, Npc, generate};

pub fn run(
    level: u32,
    gender: Option<&str>,
    count: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let gender = gender
        .map(|s| Gender::parse(s).ok_or_else(|| format!("unknown gender: \"{s}\"")))
        .transpose()?;

    let mut rng = super::make_rng(seed);
    let npcs: Vec<Npc> = (0..count)
        .map(|_| generate(&mut rng, level, gender))
        .collect::<Result<_, _>>()
        .map_err(|e| e.to_string())?;

    if json {
        return super::print_json(&npcs);
    }

    for (at, npc) in npcs.iter().enumerate() {
        if at > 0 {
            println!();
        }
        print_npc(npc);
    }
    Ok(())
}

/// Print a character sheet as aligned key/value lines.
fn print_npc(npc: &Npc) {
    println!(
        "  {} {}",
        npc.name.bold(),
        format!("[{} {}]", npc.race, npc.occupation).dimmed()
    );
    println!("  {}", npc.description);
    println!();
    println!("  level:       {}", npc.level);
    println!("  alignment:   {}", npc.alignment);
    println!("  traits:      {}", npc.traits.join(", "));
    println!(
        "  STR {:>2}  DEX {:>2}  CON {:>2}  INT {:>2}  WIS {:>2}  CHA {:>2}",
        npc.abilities.strength,
        npc.abilities.dexterity,
        npc.abilities.constitution,
        npc.abilities.intelligence,
        npc.abilities.wisdom,
        npc.abilities.charisma,
    );
    println!(
        "  hp {}  ac {}  speed {} ft  proficiency +{}",
        npc.hit_points, npc.armor_class, npc.speed, npc.proficiency_bonus
    );
}
