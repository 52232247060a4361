use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::action::{Action, Decision, ALL_ACTIONS};
use crate::engine::{DecisionEngine, GameState};
use crate::error::AgentResult;
use crate::hand_evaluator::HandEvaluator;
use crate::profile::StrategyProfileConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub runs: usize,
    /// Indexed in `ALL_ACTIONS` order.
    pub counts: [usize; 4],
    /// Mean chips over the runs that raised; 0 when none did.
    pub mean_raise: f64,
}

impl SampleSummary {
    pub fn count(&self, action: Action) -> usize {
        self.counts[action.index()]
    }

    pub fn frequency(&self, action: Action) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.count(action) as f64 / self.runs as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, usize)> + '_ {
        ALL_ACTIONS.iter().map(move |&a| (a, self.count(a)))
    }
}

/// Repeat one decision `runs` times. Run `i` draws from a generator seeded
/// with `seed + i`, so the summary is reproducible for a given seed.
pub fn sample_decisions<E: HandEvaluator>(
    engine: &DecisionEngine<E>,
    state: &GameState,
    profile: &StrategyProfileConfig,
    runs: usize,
    seed: u64,
) -> AgentResult<SampleSummary> {
    state.validate()?;
    profile.validate()?;

    let decisions: Vec<Decision> = (0..runs)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            engine.decide(state, profile, &mut rng)
        })
        .collect::<AgentResult<Vec<_>>>()?;

    let (counts, raise_total, raises) = decisions.iter().fold(
        ([0usize; 4], 0u64, 0usize),
        |(mut counts, total, n), d| {
            counts[d.action.index()] += 1;
            if d.action == Action::Raise {
                (counts, total + d.amount as u64, n + 1)
            } else {
                (counts, total, n)
            }
        },
    );

    Ok(SampleSummary {
        runs,
        counts,
        mean_raise: if raises > 0 {
            raise_total as f64 / raises as f64
        } else {
            0.0
        },
    })
}
