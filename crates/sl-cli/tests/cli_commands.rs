#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate; workspace denies missing_docs

use assert_cmd::Command;
use predicates::prelude::*;

fn sl() -> Command {
    Command::cargo_bin("sl").unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_prints_each_formula() {
    sl().args(["roll", "2d6+1", "1d20", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2d6+1").and(predicate::str::contains("1d20")));
}

#[test]
fn roll_rejects_invalid_formula() {
    sl().args(["roll", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice formula"));
}

#[test]
fn roll_advantage_is_labelled() {
    sl().args(["roll", "1d20", "--advantage", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(advantage)"));
}

#[test]
fn roll_advantage_conflicts_with_disadvantage() {
    sl().args(["roll", "1d20", "--advantage", "--disadvantage"])
        .assert()
        .failure();
}

#[test]
fn roll_is_deterministic_with_a_seed() {
    let first = sl().args(["roll", "4d6", "--seed", "7"]).output().unwrap();
    let second = sl().args(["roll", "4d6", "--seed", "7"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_json_exposes_the_record() {
    sl().args(["roll", "2d6", "--seed", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rolls\"").and(predicate::str::contains("\"total\"")));
}

// ---------------------------------------------------------------------------
// encounter
// ---------------------------------------------------------------------------

#[test]
fn encounter_prints_the_threshold_table() {
    sl().args(["encounter", "--level", "5", "--size", "4"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1000")
                .and(predicate::str::contains("2000"))
                .and(predicate::str::contains("3000"))
                .and(predicate::str::contains("4400")),
        );
}

#[test]
fn encounter_rates_a_monster_group() {
    sl().args([
        "encounter", "--level", "5", "--size", "4", "--monsters", "2", "--xp", "1000",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("1500").and(predicate::str::contains("Difficulty")));
}

#[test]
fn encounter_monsters_requires_xp() {
    sl().args(["encounter", "--level", "5", "--monsters", "2"])
        .assert()
        .failure();
}

#[test]
fn encounter_rejects_out_of_range_level() {
    sl().args(["encounter", "--level", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn encounter_json_has_thresholds() {
    sl().args(["encounter", "--level", "3", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"easy\"").and(predicate::str::contains("\"deadly\"")));
}

// ---------------------------------------------------------------------------
// npc
// ---------------------------------------------------------------------------

#[test]
fn npc_prints_a_character_sheet() {
    sl().args(["npc", "--level", "5", "--seed", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("level:")
                .and(predicate::str::contains("alignment:"))
                .and(predicate::str::contains("traits:")),
        );
}

#[test]
fn npc_is_deterministic_with_a_seed() {
    let first = sl()
        .args(["npc", "--level", "3", "--seed", "9"])
        .output()
        .unwrap();
    let second = sl()
        .args(["npc", "--level", "3", "--seed", "9"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn npc_rejects_unknown_gender() {
    sl().args(["npc", "--gender", "unknown"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown gender"));
}

#[test]
fn npc_rejects_out_of_range_level() {
    sl().args(["npc", "--level", "21"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn npc_json_exposes_derived_stats() {
    sl().args(["npc", "--seed", "1", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"hit_points\"")
                .and(predicate::str::contains("\"proficiency_bonus\"")),
        );
}

// ---------------------------------------------------------------------------
// loot
// ---------------------------------------------------------------------------

#[test]
fn loot_by_rarity_totals_the_value() {
    sl().args(["loot", "--rarity", "rare", "--count", "3", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total value"));
}

#[test]
fn loot_artifact_tier_is_empty() {
    sl().args(["loot", "--rarity", "artifact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items."));
}

#[test]
fn loot_by_challenge_rating() {
    sl().args(["loot", "--cr", "3", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total value"));
}

#[test]
fn loot_requires_a_mode() {
    sl().args(["loot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("either --rarity or --cr"));
}

#[test]
fn loot_rejects_unknown_rarity() {
    sl().args(["loot", "--rarity", "mythic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown rarity"));
}

#[test]
fn loot_json_has_items_and_total() {
    sl().args(["loot", "--rarity", "common", "--seed", "3", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"items\"").and(predicate::str::contains("\"total_value\"")),
        );
}

// ---------------------------------------------------------------------------
// hoard
// ---------------------------------------------------------------------------

#[test]
fn hoard_leads_with_treasure_coins() {
    sl().args(["hoard", "--level", "9", "--seed", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Treasure Coins").and(predicate::str::contains("Total value")),
        );
}

#[test]
fn hoard_rejects_out_of_range_level() {
    sl().args(["hoard", "--level", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
