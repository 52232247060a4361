//! Actions, weighted action distributions and the engine's decision record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AgentError, AgentResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Check,
    Call,
    Raise,
    Fold,
}

/// Canonical iteration order for every distribution.
pub const ALL_ACTIONS: [Action; 4] = [Action::Check, Action::Call, Action::Raise, Action::Fold];

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Check => "Check",
            Action::Call => "Call",
            Action::Raise => "Raise",
            Action::Fold => "Fold",
        }
    }

    pub fn from_name(name: &str) -> AgentResult<Action> {
        match name.trim().to_ascii_lowercase().as_str() {
            "check" => Ok(Action::Check),
            "call" => Ok(Action::Call),
            "raise" | "bet" => Ok(Action::Raise),
            "fold" => Ok(Action::Fold),
            _ => Err(AgentError::InvalidValue(format!("unknown action: {}", name))),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Non-negative weights over the four canonical actions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionDistribution {
    weights: [f64; 4],
}

impl ActionDistribution {
    pub fn new(check: f64, call: f64, raise: f64, fold: f64) -> Self {
        let mut dist = ActionDistribution::default();
        dist.set(Action::Check, check);
        dist.set(Action::Call, call);
        dist.set(Action::Raise, raise);
        dist.set(Action::Fold, fold);
        dist
    }

    pub fn get(&self, action: Action) -> f64 {
        self.weights[action.index()]
    }

    /// Negative or non-finite weights are stored as zero.
    pub fn set(&mut self, action: Action, weight: f64) {
        self.weights[action.index()] = if weight.is_finite() { weight.max(0.0) } else { 0.0 };
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Rescale so the weights sum to 1. A zero-mass distribution becomes a
    /// pure Check.
    pub fn normalized(&self) -> ActionDistribution {
        let total = self.total();
        if total <= 0.0 {
            return ActionDistribution::new(1.0, 0.0, 0.0, 0.0);
        }
        let mut out = *self;
        for w in out.weights.iter_mut() {
            *w /= total;
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        ALL_ACTIONS.iter().map(move |&a| (a, self.get(a)))
    }

    /// The `n` heaviest actions, heaviest first. Ties keep canonical order.
    pub fn top(&self, n: usize) -> Vec<(Action, f64)> {
        let mut ranked: Vec<(Action, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(n);
        ranked
    }

    pub fn dominant(&self) -> Action {
        self.top(1).first().map(|(a, _)| *a).unwrap_or(Action::Check)
    }
}

impl fmt::Display for ActionDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(a, w)| format!("{} {:.1}%", a, w * 100.0))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// The engine's sole output: one action and, for raises, the chip amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    pub amount: u32,
}

impl Decision {
    pub fn new(action: Action, amount: u32) -> Self {
        let amount = if action == Action::Raise { amount } else { 0 };
        Decision { action, amount }
    }

    pub fn check() -> Self {
        Decision::new(Action::Check, 0)
    }

    pub fn call() -> Self {
        Decision::new(Action::Call, 0)
    }

    pub fn fold() -> Self {
        Decision::new(Action::Fold, 0)
    }

    pub fn raise(amount: u32) -> Self {
        Decision::new(Action::Raise, amount)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::Raise => write!(f, "Raise {}", self.amount),
            other => write!(f, "{}", other),
        }
    }
}
