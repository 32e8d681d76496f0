//! Named head-to-head scenarios and the batch runner that aggregates many
//! seeded battles per scenario.

use crate::sim::battle::{simulate_battle, BattleOutcome, Combatant, Winner};
use crate::sim::stats::{Evs, Ivs, Nature};
use crate::sim::status::StatusCondition;
use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One side's build sheet for a scenario.
#[derive(Clone, Copy, Debug)]
pub struct CombatantSpec {
    pub species: &'static str,
    pub level: u8,
    pub evs: Evs,
    pub ivs: Ivs,
    pub nature: Nature,
    /// Entering the battle already burned, for handicap scenarios.
    pub burned: bool,
}

impl CombatantSpec {
    const fn fresh(species: &'static str, level: u8, evs: Evs, nature: Nature) -> Self {
        Self {
            species,
            level,
            evs,
            ivs: [31; 6],
            nature,
            burned: false,
        }
    }

    fn build(&self) -> Result<Combatant> {
        let mut combatant =
            Combatant::new(self.species, self.level, self.evs, self.ivs, self.nature)?;
        if self.burned {
            combatant.status = Some(StatusCondition::Burn);
        }
        Ok(combatant)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub side_a: CombatantSpec,
    pub side_b: CombatantSpec,
}

const NO_EVS: Evs = [0; 6];
const SWEEPER_EVS: Evs = [4, 252, 0, 0, 0, 252];

pub static SCENARIOS: Lazy<Vec<Scenario>> = Lazy::new(|| {
    vec![
        Scenario {
            name: "speed_equal",
            description: "Mirror Pikachu at level 50; only the damage rolls differ",
            side_a: CombatantSpec::fresh("pikachu", 50, NO_EVS, Nature::Hardy),
            side_b: CombatantSpec::fresh("pikachu", 50, NO_EVS, Nature::Hardy),
        },
        Scenario {
            name: "ev_investment",
            description: "252 Atk / 252 Spe sweeper spread against an uninvested mirror",
            side_a: CombatantSpec::fresh("pikachu", 50, SWEEPER_EVS, Nature::Hardy),
            side_b: CombatantSpec::fresh("pikachu", 50, NO_EVS, Nature::Hardy),
        },
        Scenario {
            name: "nature_gap",
            description: "Adamant attacker against a Modest mirror; natures are the only edge",
            side_a: CombatantSpec::fresh("machamp", 50, NO_EVS, Nature::Adamant),
            side_b: CombatantSpec::fresh("machamp", 50, NO_EVS, Nature::Modest),
        },
        Scenario {
            name: "level_gap",
            description: "Five-level head start in an otherwise identical matchup",
            side_a: CombatantSpec::fresh("charizard", 55, NO_EVS, Nature::Hardy),
            side_b: CombatantSpec::fresh("charizard", 50, NO_EVS, Nature::Hardy),
        },
        Scenario {
            name: "burn_handicap",
            description: "Physical attacker entering already burned against a healthy mirror",
            side_a: CombatantSpec {
                burned: true,
                ..CombatantSpec::fresh("machamp", 50, NO_EVS, Nature::Hardy)
            },
            side_b: CombatantSpec::fresh("machamp", 50, NO_EVS, Nature::Hardy),
        },
        Scenario {
            name: "tank_stall",
            description: "High-HP wall against a fast sweeper; probes the turn cap",
            side_a: CombatantSpec::fresh("chansey", 50, NO_EVS, Nature::Bold),
            side_b: CombatantSpec::fresh("jolteon", 50, SWEEPER_EVS, Nature::Jolly),
        },
    ]
});

/// Win/loss/tie tally for one scenario across many seeded battles.
#[derive(Clone, Debug, Serialize)]
pub struct AggregateResult {
    pub scenario: &'static str,
    pub iterations: u32,
    pub wins_a: u32,
    pub wins_b: u32,
    pub ties: u32,
    pub mean_turns: f64,
    pub per_battle: Vec<BattleOutcome>,
}

impl AggregateResult {
    pub fn win_rate_a(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.wins_a as f64 / self.iterations as f64
        }
    }
}

fn scenario_by_name(name: &str) -> Result<&'static Scenario> {
    match SCENARIOS.iter().find(|scenario| scenario.name == name) {
        Some(scenario) => Ok(scenario),
        None => bail!(
            "Unknown scenario '{}' (known: {})",
            name,
            SCENARIOS
                .iter()
                .map(|s| s.name)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Run one named scenario `iterations` times in parallel. Battle i uses seed
/// `base_seed + i`, so a fixed base seed reproduces the whole batch.
pub fn run_scenario(name: &str, iterations: u32, base_seed: u64) -> Result<AggregateResult> {
    let scenario = scenario_by_name(name)?;
    let per_battle: Vec<BattleOutcome> = (0..iterations)
        .into_par_iter()
        .map(|i| -> Result<BattleOutcome> {
            let a = scenario.side_a.build()?;
            let b = scenario.side_b.build()?;
            Ok(simulate_battle(a, b, base_seed.wrapping_add(i as u64)))
        })
        .collect::<Result<_>>()?;

    let mut wins_a = 0;
    let mut wins_b = 0;
    let mut ties = 0;
    let mut total_turns: u64 = 0;
    for outcome in &per_battle {
        match outcome.winner {
            Winner::CombatantA => wins_a += 1,
            Winner::CombatantB => wins_b += 1,
            Winner::Tie => ties += 1,
        }
        total_turns += outcome.turns_elapsed as u64;
    }
    let mean_turns = if iterations == 0 {
        0.0
    } else {
        total_turns as f64 / iterations as f64
    };
    Ok(AggregateResult {
        scenario: scenario.name,
        iterations,
        wins_a,
        wins_b,
        ties,
        mean_turns,
        per_battle,
    })
}

/// Run every catalogued scenario with the same iteration count and base seed.
pub fn run_all(iterations: u32, base_seed: u64) -> Result<Vec<AggregateResult>> {
    SCENARIOS
        .iter()
        .map(|scenario| run_scenario(scenario.name, iterations, base_seed))
        .collect()
}

/// Write aggregate results as CSV, one row per scenario.
pub fn write_csv(results: &[AggregateResult], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writeln!(
        writer,
        "scenario,iterations,wins_a,wins_b,ties,win_rate_a,mean_turns"
    )?;
    for result in results {
        writeln!(
            writer,
            "{},{},{},{},{},{:.4},{:.2}",
            result.scenario,
            result.iterations,
            result.wins_a,
            result.wins_b,
            result.ties,
            result.win_rate_a(),
            result.mean_turns
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<_> = SCENARIOS.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SCENARIOS.len());
    }

    #[test]
    fn every_catalogued_build_sheet_is_valid() {
        for scenario in SCENARIOS.iter() {
            assert!(scenario.side_a.build().is_ok(), "{}", scenario.name);
            assert!(scenario.side_b.build().is_ok(), "{}", scenario.name);
        }
    }

    #[test]
    fn unknown_scenario_is_an_error() {
        let err = run_scenario("coin_flip", 1, 0).unwrap_err();
        assert!(err.to_string().contains("Unknown scenario"));
    }

    #[test]
    fn ev_investment_is_a_sweep() {
        let result = run_scenario("ev_investment", 30, 42).expect("catalogued scenario");
        assert_eq!(result.wins_a, 30);
        assert_eq!(result.win_rate_a(), 1.0);
    }

    #[test]
    fn batches_are_reproducible() {
        let first = run_scenario("speed_equal", 20, 7).expect("catalogued scenario");
        let second = run_scenario("speed_equal", 20, 7).expect("catalogued scenario");
        assert_eq!(first.wins_a, second.wins_a);
        assert_eq!(first.wins_b, second.wins_b);
        assert_eq!(first.ties, second.ties);
        for (x, y) in first.per_battle.iter().zip(second.per_battle.iter()) {
            assert_eq!(x.winner, y.winner);
            assert_eq!(x.final_hps, y.final_hps);
        }
    }

    #[test]
    fn tallies_sum_to_iterations() {
        for result in run_all(10, 99).expect("catalog runs") {
            assert_eq!(result.wins_a + result.wins_b + result.ties, result.iterations);
            assert_eq!(result.per_battle.len() as u32, result.iterations);
        }
    }
}
