use sl_generators::treasure_hoard;

pub fn run(level: u32, seed: Option<u64>, json: bool) -> Result<(), String> {
    let mut rng = super::make_rng(seed);
    let items = treasure_hoard(&mut rng, level).map_err(|e| e.to_string())?;
    super::loot::render(&items, json)
}
