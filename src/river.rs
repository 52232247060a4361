//! River play without the blueprint: closed-form call EV and minimum defense
//! frequency over a category-ordinal equity proxy.

use rand::Rng;

use crate::action::Decision;
use crate::hand_evaluator::{HandCategory, HandResult};
use crate::math_engine::{ev, mdf};
use crate::sizing::clamp_to_stack;

/// Bet size assumed for the MDF when nothing has been bet.
pub const NO_BET_MDF_FALLBACK: f64 = 20.0;

pub const VALUE_BET_EQUITY: f64 = 0.7;
pub const THIN_VALUE_EQUITY: f64 = 0.4;
pub const VALUE_BET_POT_FRACTION: f64 = 0.6;
pub const THIN_BET_POT_FRACTION: f64 = 0.3;
/// Chance of firing a thin-value bet or bluff in the middle equity band.
pub const THIN_BET_FREQUENCY: f64 = 0.2;

/// Category ordinal over the best possible category. Not true equity.
pub fn river_equity(category: HandCategory) -> f64 {
    category.ordinal() as f64 / HandCategory::MAX.ordinal() as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiverAnalysis {
    pub equity: f64,
    pub call_ev: f64,
    pub mdf: f64,
}

pub fn analyze_river(hand: &HandResult, pot: u32, call_cost: u32) -> RiverAnalysis {
    let equity = river_equity(hand.category);
    let pot = pot as f64;
    let call = call_cost as f64;
    let bet_for_mdf = if call_cost > 0 { call } else { NO_BET_MDF_FALLBACK };
    RiverAnalysis {
        equity,
        call_ev: ev(equity, pot, call),
        mdf: mdf(bet_for_mdf, pot),
    }
}

pub fn river_decision<R: Rng>(
    hand: &HandResult,
    pot: u32,
    call_cost: u32,
    stack: u32,
    rng: &mut R,
) -> Decision {
    let a = analyze_river(hand, pot, call_cost);
    log::debug!(
        "river {} equity={:.3} call_ev={:.2} mdf={:.3}",
        hand.category,
        a.equity,
        a.call_ev,
        a.mdf
    );

    if call_cost > 0 {
        return if a.call_ev > 0.0 || a.equity > 1.0 - a.mdf {
            Decision::call()
        } else {
            Decision::fold()
        };
    }

    if a.equity > VALUE_BET_EQUITY {
        return Decision::raise(clamp_to_stack(pot as f64 * VALUE_BET_POT_FRACTION, stack));
    }
    if a.equity > THIN_VALUE_EQUITY && rng.gen::<f64>() < THIN_BET_FREQUENCY {
        return Decision::raise(clamp_to_stack(pot as f64 * THIN_BET_POT_FRACTION, stack));
    }
    Decision::check()
}
