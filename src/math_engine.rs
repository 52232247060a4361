use std::fmt;

use crate::error::{AgentError, AgentResult};

/// Share of the final pot the caller contributes: call / (pot + call).
/// Zero when nothing is owed.
pub fn pot_odds(pot: f64, call: f64) -> f64 {
    if call <= 0.0 || pot + call <= 0.0 {
        return 0.0;
    }
    call / (pot + call)
}

/// EV of putting `bet` in to win `pot + bet` with the given equity.
pub fn ev(equity: f64, pot: f64, bet: f64) -> f64 {
    let win_amount = pot + bet;
    equity * win_amount - (1.0 - equity) * bet
}

/// Minimum defense frequency against `bet_size` into `pot_size`.
pub fn mdf(bet_size: f64, pot_size: f64) -> f64 {
    if pot_size + bet_size <= 0.0 {
        return 1.0;
    }
    pot_size / (pot_size + bet_size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprZone {
    Low,
    Medium,
    High,
}

impl fmt::Display for SprZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SprZone::Low => write!(f, "low"),
            SprZone::Medium => write!(f, "medium"),
            SprZone::High => write!(f, "high"),
        }
    }
}

pub struct SprResult {
    pub ratio: f64,
    pub zone: SprZone,
}

impl fmt::Display for SprResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SPR {:.1} ({})", self.ratio, self.zone)
    }
}

pub fn spr(stack: f64, pot: f64) -> AgentResult<SprResult> {
    if pot <= 0.0 {
        return Err(AgentError::InvalidValue("Pot must be positive".to_string()));
    }
    let ratio = stack / pot;
    let zone = if ratio <= 4.0 {
        SprZone::Low
    } else if ratio <= 10.0 {
        SprZone::Medium
    } else {
        SprZone::High
    };
    Ok(SprResult { ratio, zone })
}
