use approx::assert_abs_diff_eq;

use gto_agent::action::*;
use gto_agent::phase::*;

#[test]
fn test_action_names() {
    for a in ALL_ACTIONS {
        assert_eq!(Action::from_name(a.as_str()).unwrap(), a);
    }
    assert_eq!(Action::from_name("BET").unwrap(), Action::Raise);
    assert!(Action::from_name("shove").is_err());
}

#[test]
fn test_distribution_negative_weights_clamped() {
    let d = ActionDistribution::new(-1.0, 0.5, f64::NAN, 0.5);
    assert_eq!(d.get(Action::Check), 0.0);
    assert_eq!(d.get(Action::Raise), 0.0);
    assert_abs_diff_eq!(d.total(), 1.0);
}

#[test]
fn test_normalized() {
    let d = ActionDistribution::new(2.0, 1.0, 1.0, 0.0).normalized();
    assert_abs_diff_eq!(d.get(Action::Check), 0.5);
    assert_abs_diff_eq!(d.total(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_normalized_zero_mass_checks() {
    let d = ActionDistribution::default().normalized();
    assert_eq!(d.get(Action::Check), 1.0);
    assert_eq!(d.dominant(), Action::Check);
}

#[test]
fn test_top_orders_by_weight_then_canonical() {
    let d = ActionDistribution::new(0.2, 0.2, 0.5, 0.1);
    let top = d.top(3);
    assert_eq!(
        top.iter().map(|(a, _)| *a).collect::<Vec<_>>(),
        vec![Action::Raise, Action::Check, Action::Call]
    );
}

#[test]
fn test_decision_amount_only_for_raise() {
    assert_eq!(Decision::new(Action::Call, 50).amount, 0);
    assert_eq!(Decision::new(Action::Raise, 50).amount, 50);
    assert_eq!(Decision::raise(120).to_string(), "Raise 120");
    assert_eq!(Decision::fold().to_string(), "Fold");
}

#[test]
fn test_decision_serializes() {
    let json = serde_json::to_string(&Decision::raise(80)).unwrap();
    assert_eq!(json, r#"{"action":"Raise","amount":80}"#);
}

#[test]
fn test_street_from_board_size() {
    assert_eq!(classify_street(0), Street::Preflop);
    assert_eq!(classify_street(3), Street::Flop);
    assert_eq!(classify_street(4), Street::Turn);
    assert_eq!(classify_street(5), Street::River);
}
