//! Local EV pruning over the blueprint's top candidates.

use crate::action::Action;
use crate::bucket::HandBucket;

/// Notional extra chips a raise is assumed to put in when estimating its EV.
pub const NOTIONAL_RAISE: f64 = 100.0;
/// Candidates at or below `-PRUNE_FACTOR * call_cost` are discarded.
pub const PRUNE_FACTOR: f64 = 1.2;
/// How many blueprint actions reach the pruner.
pub const CANDIDATE_COUNT: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct EvContext {
    pub bucket: HandBucket,
    pub pot: f64,
    pub call_cost: f64,
    /// Chips the acting player already has in the pot.
    pub committed: f64,
}

/// Rough EV in chips, using `bucket.win_probability()` as equity.
pub fn estimate_ev(action: Action, ctx: &EvContext) -> f64 {
    let p = ctx.bucket.win_probability();
    match action {
        Action::Fold => -ctx.committed,
        Action::Check => p * ctx.pot,
        Action::Call => p * (ctx.pot + ctx.call_cost) - (1.0 - p) * ctx.call_cost,
        Action::Raise => {
            let risk = ctx.call_cost + NOTIONAL_RAISE;
            p * (ctx.pot + risk) - (1.0 - p) * risk
        }
    }
}

/// Drop candidates whose EV is unacceptably below the call cost. Never
/// returns an empty set: if everything is dropped, the heaviest candidate
/// comes back alone with weight 1.
pub fn prune(candidates: &[(Action, f64)], ctx: &EvContext) -> Vec<(Action, f64)> {
    let floor = -PRUNE_FACTOR * ctx.call_cost;

    let survivors: Vec<(Action, f64)> = candidates
        .iter()
        .copied()
        .filter(|&(action, _)| {
            let ev = estimate_ev(action, ctx);
            log::debug!("candidate {} ev={:.2} floor={:.2}", action, ev, floor);
            ev > floor
        })
        .collect();

    if !survivors.is_empty() {
        return survivors;
    }

    let best = candidates
        .iter()
        .copied()
        .fold(None, |best: Option<(Action, f64)>, c| match best {
            Some(b) if b.1 >= c.1 => Some(b),
            _ => Some(c),
        });

    match best {
        Some((action, _)) => {
            log::debug!("all candidates pruned, reinstating {}", action);
            vec![(action, 1.0)]
        }
        None => vec![(Action::Check, 1.0)],
    }
}
