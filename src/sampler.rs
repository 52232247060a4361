use rand::Rng;

use crate::action::Action;

/// Pick one action by inverse-CDF sampling over the candidate weights, in
/// the order given. A Fold with nothing to call comes back as Check.
pub fn sample_action<R: Rng>(candidates: &[(Action, f64)], call_cost: f64, rng: &mut R) -> Action {
    let chosen = draw(candidates, rng.gen::<f64>());
    if chosen == Action::Fold && call_cost <= 0.0 {
        Action::Check
    } else {
        chosen
    }
}

/// Inverse-CDF lookup for a uniform draw `u` in [0, 1).
pub fn draw(candidates: &[(Action, f64)], u: f64) -> Action {
    let Some(&(first, _)) = candidates.first() else {
        return Action::Check;
    };

    let total: f64 = candidates.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 || !total.is_finite() {
        return first;
    }

    let mut cumulative = 0.0;
    for &(action, weight) in candidates {
        if weight <= 0.0 {
            continue;
        }
        cumulative += weight / total;
        if cumulative >= u {
            return action;
        }
    }

    // Rounding left the last cumulative just under u.
    candidates
        .iter()
        .rev()
        .find(|(_, w)| *w > 0.0)
        .map(|(a, _)| *a)
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_boundaries() {
        let c = vec![(Action::Raise, 0.5), (Action::Call, 0.5)];
        assert_eq!(draw(&c, 0.0), Action::Raise);
        assert_eq!(draw(&c, 0.5), Action::Raise);
        assert_eq!(draw(&c, 0.51), Action::Call);
        assert_eq!(draw(&c, 0.999_999), Action::Call);
    }

    #[test]
    fn test_draw_zero_weights_returns_first() {
        let c = vec![(Action::Call, 0.0), (Action::Fold, 0.0)];
        assert_eq!(draw(&c, 0.7), Action::Call);
    }

    #[test]
    fn test_draw_skips_zero_weight_head() {
        let c = vec![(Action::Fold, 0.0), (Action::Call, 1.0)];
        assert_eq!(draw(&c, 0.0), Action::Call);
        assert_eq!(draw(&c, 0.3), Action::Call);
    }
}
