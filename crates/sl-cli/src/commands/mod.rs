pub mod encounter;
pub mod hoard;
pub mod loot;
pub mod npc;
pub mod roll;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Build the RNG for a command: seeded when requested, OS entropy otherwise.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Print a value as pretty JSON on stdout.
fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(())
}
