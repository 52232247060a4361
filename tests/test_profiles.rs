use std::fs;

use gto_agent::error::AgentError;
use gto_agent::profile::*;

#[test]
fn test_builtin_has_ten_profiles() {
    let registry = builtin();
    assert_eq!(registry.len(), PROFILE_COUNT);
    let names: Vec<&str> = registry.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Balanced",
            "Aggressive",
            "Polarized",
            "Linear",
            "Trapping",
            "Defensive",
            "BluffHeavy",
            "CBetHeavy",
            "Tight",
            "MaximumPressure"
        ]
    );
}

#[test]
fn test_builtin_profiles_valid() {
    for p in builtin().iter() {
        assert!(p.validate().is_ok(), "{}", p.name);
        assert!(p.aggression_factor > 0.0);
    }
}

#[test]
fn test_resolve_by_index_and_name() {
    let registry = builtin();
    assert_eq!(registry.resolve("4").unwrap().name, "Trapping");
    assert_eq!(registry.resolve("trapping").unwrap().index, 4);
    assert_eq!(registry.resolve(" MaximumPressure ").unwrap().index, 9);
}

#[test]
fn test_unknown_profile() {
    assert!(matches!(builtin().get(10), Err(AgentError::UnknownProfile(_))));
    assert!(matches!(builtin().resolve("nit"), Err(AgentError::UnknownProfile(_))));
}

#[test]
fn test_archetypes() {
    assert_eq!(Archetype::from_index(6).unwrap(), Archetype::BluffHeavy);
    assert!(Archetype::from_index(10).is_err());
    let polarized: Vec<Archetype> = ALL_ARCHETYPES.into_iter().filter(|a| a.is_polarized()).collect();
    assert_eq!(
        polarized,
        vec![Archetype::Polarized, Archetype::BluffHeavy, Archetype::MaximumPressure]
    );
}

#[test]
fn test_default_is_balanced() {
    let p = StrategyProfileConfig::default();
    assert_eq!(p.index, 0);
    assert_eq!(p.name, "Balanced");
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

fn profile_json(index: u8, bluff: f64, aggression: f64) -> String {
    format!(
        r#"{{"name": "Custom{index}", "index": {index}, "hand_strength_weight": 1.0,
            "potential_weight": 0.5, "board_advantage_weight": 0.3, "position_weight": 0.2,
            "spr_weight": 0.2, "danger_penalty_weight": 0.4, "bluff_frequency": {bluff},
            "aggression_factor": {aggression}, "search_depth": 2}}"#
    )
}

#[test]
fn test_from_json() {
    let json = format!(
        r#"{{"profiles": [{}, {}]}}"#,
        profile_json(3, 0.1, 1.0),
        profile_json(1, 0.2, 1.5)
    );
    let registry = ProfileRegistry::from_json(&json).unwrap();
    assert_eq!(registry.len(), 2);
    // sorted by index
    assert_eq!(registry.iter().next().unwrap().index, 1);
    assert_eq!(registry.get(3).unwrap().name, "Custom3");
}

#[test]
fn test_from_json_rejects_negative_weight() {
    let json = format!(r#"{{"profiles": [{}]}}"#, profile_json(0, 0.1, -0.5));
    assert!(matches!(
        ProfileRegistry::from_json(&json),
        Err(AgentError::InvalidProfileWeight { field: "aggression_factor", .. })
    ));
}

#[test]
fn test_from_json_rejects_bluff_above_one() {
    let json = format!(r#"{{"profiles": [{}]}}"#, profile_json(0, 1.5, 1.0));
    assert!(ProfileRegistry::from_json(&json).is_err());
}

#[test]
fn test_from_json_rejects_bad_index() {
    let json = format!(r#"{{"profiles": [{}]}}"#, profile_json(12, 0.1, 1.0));
    assert!(ProfileRegistry::from_json(&json).is_err());
}

#[test]
fn test_from_json_malformed() {
    assert!(matches!(
        ProfileRegistry::from_json("{\"profiles\": ["),
        Err(AgentError::JsonError(_))
    ));
}

#[test]
fn test_from_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("gto_agent_profiles_{}.json", std::process::id()));
    let json = format!(r#"{{"profiles": [{}]}}"#, profile_json(5, 0.05, 0.7));
    fs::write(&path, json).unwrap();
    let registry = ProfileRegistry::from_file(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(registry.get(5).unwrap().aggression_factor, 0.7);
}

#[test]
fn test_from_file_missing() {
    let path = std::env::temp_dir().join("gto_agent_no_such_profiles.json");
    assert!(matches!(ProfileRegistry::from_file(&path), Err(AgentError::IoError(_))));
}
