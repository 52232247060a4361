//! Blueprint profile table: hand-authored action weights per
//! (profile, bucket, texture, pot odds).
//!
//! Every branch leaves at least one strictly positive weight, so the
//! normalized output always sums to 1.

use rand::Rng;

use crate::action::{Action, ActionDistribution};
use crate::bucket::HandBucket;
use crate::profile::{Archetype, StrategyProfileConfig};
use crate::texture::BoardTexture;

// ---------------------------------------------------------------------------
// Table constants
// ---------------------------------------------------------------------------

const BASE_CHECK: f64 = 0.4;
const BASE_CALL: f64 = 0.2;
const BASE_RAISE: f64 = 0.1;
const BASE_FOLD: f64 = 0.3;

/// Pot odds below this make a marginal made hand an easy call.
pub const GOOD_POT_ODDS: f64 = 0.25;

/// Chance that a polarized profile turns a trash hand into a bluff.
pub const TRASH_BLUFF_GATE: f64 = 0.15;
const MIN_BLUFF_WEIGHT: f64 = 0.05;
const MAX_BLUFF_WEIGHT: f64 = 0.3;

const BLUFF_HEAVY_DRAW_BOOST: f64 = 1.5;
const WET_DRAW_RAISE_SCALE: f64 = 1.2;
const WET_MONSTER_RAISE_SCALE: f64 = 1.1;

/// Remaining mass on draws never drops below this after the raise share.
const MIN_DRAW_REMAINDER: f64 = 0.1;

// ---------------------------------------------------------------------------
// Profile scalars
// ---------------------------------------------------------------------------

/// The two scalars a profile contributes to the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileScalars {
    pub archetype: Archetype,
    pub aggression: f64,
    pub polarized: bool,
    pub bluff_frequency: f64,
}

impl ProfileScalars {
    pub fn from_profile(profile: &StrategyProfileConfig) -> Self {
        let archetype = profile.archetype().unwrap_or(Archetype::Balanced);
        let aggression = if profile.aggression_factor.is_finite() {
            profile.aggression_factor.max(0.0)
        } else {
            1.0
        };
        ProfileScalars {
            archetype,
            aggression,
            polarized: archetype.is_polarized(),
            bluff_frequency: profile.bluff_frequency,
        }
    }
}

fn texture_raise_scale(texture: BoardTexture, bucket: HandBucket) -> f64 {
    let wet = matches!(texture, BoardTexture::Wet | BoardTexture::Monotone);
    match bucket {
        HandBucket::StrongDraw | HandBucket::WeakDraw if wet => WET_DRAW_RAISE_SCALE,
        HandBucket::Monster if wet => WET_MONSTER_RAISE_SCALE,
        _ => 1.0,
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Unnormalized blueprint weights. The only randomness is the trash-hand
/// bluff gate for polarized profiles.
pub fn raw_distribution<R: Rng>(
    profile: &StrategyProfileConfig,
    bucket: HandBucket,
    texture: BoardTexture,
    pot_odds: f64,
    rng: &mut R,
) -> ActionDistribution {
    let s = ProfileScalars::from_profile(profile);
    let tex = texture_raise_scale(texture, bucket);

    let mut dist = ActionDistribution::new(BASE_CHECK, BASE_CALL, BASE_RAISE * s.aggression, BASE_FOLD);

    match bucket {
        HandBucket::Monster => {
            if s.archetype == Archetype::Trapping {
                // Slow-play: let the opponent keep betting.
                dist.set(Action::Check, 0.35);
                dist.set(Action::Call, 0.5);
                dist.set(Action::Raise, 0.15 * s.aggression);
            } else {
                dist.set(Action::Check, 0.05);
                dist.set(Action::Call, 0.15);
                dist.set(Action::Raise, 0.8 * s.aggression * tex);
            }
            dist.set(Action::Fold, 0.0);
        }
        HandBucket::StrongMade => {
            dist.set(Action::Check, 0.1);
            dist.set(Action::Call, 0.4);
            dist.set(Action::Raise, 0.5 * s.aggression);
            dist.set(Action::Fold, 0.0);
        }
        HandBucket::MarginalMade => {
            if pot_odds < GOOD_POT_ODDS {
                dist.set(Action::Check, 0.3);
                dist.set(Action::Call, 0.55);
                dist.set(Action::Raise, 0.05 * s.aggression);
                dist.set(Action::Fold, 0.1);
            } else if s.polarized {
                dist.set(Action::Check, 0.15);
                dist.set(Action::Call, 0.15);
                dist.set(Action::Raise, 0.15 * s.aggression);
                dist.set(Action::Fold, 0.55);
            } else {
                dist.set(Action::Check, 0.15);
                dist.set(Action::Call, 0.45);
                dist.set(Action::Raise, 0.0);
                dist.set(Action::Fold, 0.4);
            }
        }
        HandBucket::StrongDraw | HandBucket::WeakDraw => {
            let (raise_base, call, check, fold) = if bucket == HandBucket::StrongDraw {
                (0.35, 0.45, 0.4, 0.15)
            } else {
                (0.15, 0.3, 0.45, 0.25)
            };
            let boost = if s.archetype == Archetype::BluffHeavy {
                BLUFF_HEAVY_DRAW_BOOST
            } else {
                1.0
            };
            let raise = raise_base * s.aggression * tex * boost;
            let rest = (1.0 - raise).max(MIN_DRAW_REMAINDER);
            dist.set(Action::Raise, raise);
            dist.set(Action::Call, call * rest);
            dist.set(Action::Check, check * rest);
            dist.set(Action::Fold, fold * rest);
        }
        HandBucket::Trash => {
            dist.set(Action::Check, BASE_CHECK);
            dist.set(Action::Call, 0.0);
            dist.set(Action::Raise, 0.0);
            dist.set(Action::Fold, 0.6);
            if s.polarized && rng.gen::<f64>() < TRASH_BLUFF_GATE {
                let bluff = s.bluff_frequency.clamp(MIN_BLUFF_WEIGHT, MAX_BLUFF_WEIGHT);
                dist.set(Action::Raise, bluff);
            }
        }
    }

    dist
}

/// Blueprint weights normalized to sum to 1.
pub fn blueprint_distribution<R: Rng>(
    profile: &StrategyProfileConfig,
    bucket: HandBucket,
    texture: BoardTexture,
    pot_odds: f64,
    rng: &mut R,
) -> ActionDistribution {
    let dist = raw_distribution(profile, bucket, texture, pot_odds, rng).normalized();
    log::debug!(
        "blueprint {} {} {} odds={:.3}: {}",
        profile.name,
        bucket,
        texture,
        pot_odds,
        dist
    );
    dist
}
