use gto_agent::action::*;
use gto_agent::cards::*;
use gto_agent::engine::*;
use gto_agent::profile::builtin;
use gto_agent::simulate::*;

fn flop_state(hole: &str, board: &str, to_call: u32) -> GameState {
    GameState {
        players: vec![
            PlayerState::new(parse_board(hole).unwrap(), 1000, 0, 50),
            PlayerState::opponent(1000, to_call, 50 + to_call),
        ],
        acting: 0,
        community: parse_board(board).unwrap(),
        current_min_bet: to_call,
    }
}

#[test]
fn test_counts_sum_to_runs() {
    let engine = DecisionEngine::default();
    let s = flop_state("AhKh", "Qh7h2c", 30);
    let summary = sample_decisions(&engine, &s, builtin().get(0).unwrap(), 500, 1).unwrap();
    assert_eq!(summary.runs, 500);
    assert_eq!(summary.counts.iter().sum::<usize>(), 500);
    let total: f64 = ALL_ACTIONS.iter().map(|&a| summary.frequency(a)).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_same_seed_same_summary() {
    let engine = DecisionEngine::default();
    let s = flop_state("AhKh", "Qh7h2c", 30);
    let profile = builtin().by_name("BluffHeavy").unwrap();
    let a = sample_decisions(&engine, &s, profile, 300, 99).unwrap();
    let b = sample_decisions(&engine, &s, profile, 300, 99).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_monster_summary() {
    let engine = DecisionEngine::default();
    let s = flop_state("Ks7h", "Kd7c7s", 0);
    let summary = sample_decisions(&engine, &s, builtin().get(0).unwrap(), 1000, 7).unwrap();
    assert!(summary.frequency(Action::Raise) > 0.5);
    assert_eq!(summary.count(Action::Fold), 0);
    assert_eq!(summary.count(Action::Call), 0);
    assert!((summary.mean_raise - 75.0).abs() < 1e-9);
}

#[test]
fn test_zero_runs() {
    let engine = DecisionEngine::default();
    let s = flop_state("AhKh", "Qh7h2c", 30);
    let summary = sample_decisions(&engine, &s, builtin().get(0).unwrap(), 0, 0).unwrap();
    assert_eq!(summary.runs, 0);
    assert_eq!(summary.mean_raise, 0.0);
    assert_eq!(summary.frequency(Action::Check), 0.0);
}

#[test]
fn test_invalid_state_is_error() {
    let engine = DecisionEngine::default();
    let s = flop_state("AhKh", "AhQd2c", 30);
    assert!(sample_decisions(&engine, &s, builtin().get(0).unwrap(), 10, 0).is_err());
}
