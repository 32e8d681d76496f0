use pokemon_battle_lab::scenarios::{run_all, run_scenario, write_csv, SCENARIOS};
use pokemon_battle_lab::sim::battle::TURN_CAP;

#[test]
fn the_catalog_covers_the_reference_matchups() {
    let names: Vec<_> = SCENARIOS.iter().map(|s| s.name).collect();
    assert!(names.contains(&"speed_equal"));
    assert!(names.contains(&"ev_investment"));
    assert!(names.contains(&"nature_gap"));
    assert!(names.contains(&"level_gap"));
}

#[test]
fn ev_investment_sweeps_at_every_seed() {
    let result = run_scenario("ev_investment", 50, 1234).expect("catalogued scenario");
    assert_eq!(result.wins_a, 50);
    assert_eq!(result.wins_b, 0);
    assert_eq!(result.ties, 0);
}

#[test]
fn level_gap_favors_the_higher_level() {
    let result = run_scenario("level_gap", 50, 7).expect("catalogued scenario");
    assert!(result.win_rate_a() > 0.9, "win rate A {}", result.win_rate_a());
}

#[test]
fn speed_equal_batches_are_seed_deterministic() {
    let first = run_scenario("speed_equal", 40, 2024).expect("catalogued scenario");
    let second = run_scenario("speed_equal", 40, 2024).expect("catalogued scenario");
    assert_eq!(first.wins_a, second.wins_a);
    assert_eq!(first.wins_b, second.wins_b);
    assert_eq!(first.ties, second.ties);
}

#[test]
fn unknown_scenario_lists_the_known_names() {
    let err = run_scenario("does_not_exist", 5, 0).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("Unknown scenario"));
    assert!(text.contains("speed_equal"));
}

#[test]
fn every_batch_battle_respects_the_turn_cap() {
    for result in run_all(10, 55).expect("catalog runs") {
        for outcome in &result.per_battle {
            assert!(outcome.turns_elapsed <= TURN_CAP, "{}", result.scenario);
        }
    }
}

#[test]
fn csv_export_has_one_row_per_scenario() {
    let results = run_all(5, 1).expect("catalog runs");
    let dir = std::env::temp_dir().join("battle-lab-scenario-tests");
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("results.csv");
    write_csv(&results, &path).expect("csv written");
    let contents = std::fs::read_to_string(&path).expect("csv readable");
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), results.len() + 1);
    assert!(lines[0].starts_with("scenario,iterations"));
}
