//! CLI frontend for the Spielleiter mechanics toolkit.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sl",
    about = "Spielleiter — dice, encounters, NPCs, and loot for game masters",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll one or more dice formulas (e.g. 2d6+1)
    Roll {
        /// Formulas in <count>d<sides>[+/-modifier] notation
        #[arg(required = true)]
        formulas: Vec<String>,

        /// Roll each formula twice and keep the higher total
        #[arg(short, long, conflicts_with = "disadvantage")]
        advantage: bool,

        /// Roll each formula twice and keep the lower total
        #[arg(short, long)]
        disadvantage: bool,

        /// RNG seed for deterministic rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// XP budget thresholds and difficulty for an encounter
    Encounter {
        /// Average party level (1-20)
        #[arg(short, long)]
        level: u32,

        /// Number of characters in the party
        #[arg(short, long, default_value = "4")]
        size: u32,

        /// Number of monsters in the encounter
        #[arg(short, long, requires = "xp")]
        monsters: Option<u32>,

        /// Total monster XP before the encounter multiplier
        #[arg(short, long, requires = "monsters")]
        xp: Option<u32>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate one or more random NPCs
    Npc {
        /// NPC level (1-20)
        #[arg(short, long, default_value = "1")]
        level: u32,

        /// Name pool to draw from: male or female (default: coin flip)
        #[arg(short, long)]
        gender: Option<String>,

        /// How many NPCs to generate
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// RNG seed for deterministic generation
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate loot by rarity tier or challenge rating
    Loot {
        /// Rarity tier: common, uncommon, rare, very-rare, legendary, artifact
        #[arg(short, long, conflicts_with = "cr")]
        rarity: Option<String>,

        /// Challenge rating of the defeated encounter
        #[arg(long)]
        cr: Option<u32>,

        /// How many items to draw (rarity mode only)
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// RNG seed for deterministic generation
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll a full treasure hoard for a party
    Hoard {
        /// Average party level (1-20)
        #[arg(short, long)]
        level: u32,

        /// RNG seed for deterministic generation
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            formulas,
            advantage,
            disadvantage,
            seed,
            json,
        } => commands::roll::run(&formulas, advantage, disadvantage, seed, json),
        Commands::Encounter {
            level,
            size,
            monsters,
            xp,
            json,
        } => commands::encounter::run(level, size, monsters, xp, json),
        Commands::Npc {
            level,
            gender,
            count,
            seed,
            json,
        } => commands::npc::run(level, gender.as_deref(), count, seed, json),
        Commands::Loot {
            rarity,
            cr,
            count,
            seed,
            json,
        } => commands::loot::run(rarity.as_deref(), cr, count, seed, json),
        Commands::Hoard { level, seed, json } => commands::hoard::run(level, seed, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
