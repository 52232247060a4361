use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gto_agent::action::*;
use gto_agent::blueprint::*;
use gto_agent::bucket::*;
use gto_agent::profile::*;
use gto_agent::texture::*;

fn profile(name: &str) -> &'static StrategyProfileConfig {
    builtin().by_name(name).unwrap()
}

fn raw(name: &str, bucket: HandBucket, texture: BoardTexture, pot_odds: f64) -> ActionDistribution {
    let mut rng = StdRng::seed_from_u64(7);
    raw_distribution(profile(name), bucket, texture, pot_odds, &mut rng)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn test_every_cell_sums_to_one() {
    let mut rng = StdRng::seed_from_u64(42);
    for p in builtin().iter() {
        for bucket in ALL_BUCKETS {
            for texture in ALL_TEXTURES {
                for pot_odds in [0.0, 0.2, 0.25, 0.4, 0.6] {
                    for _ in 0..20 {
                        let dist = blueprint_distribution(p, bucket, texture, pot_odds, &mut rng);
                        for (_, w) in dist.iter() {
                            assert!(w >= 0.0, "{} {} {}: negative weight", p.name, bucket, texture);
                        }
                        assert_abs_diff_eq!(dist.total(), 1.0, epsilon = 1e-6);
                    }
                }
            }
        }
    }
}

#[test]
fn test_non_trash_is_deterministic() {
    let p = profile("Polarized");
    for bucket in ALL_BUCKETS.into_iter().filter(|b| *b != HandBucket::Trash) {
        let a = blueprint_distribution(p, bucket, BoardTexture::Wet, 0.3, &mut StdRng::seed_from_u64(1));
        let b = blueprint_distribution(p, bucket, BoardTexture::Wet, 0.3, &mut StdRng::seed_from_u64(999));
        assert_eq!(a, b);
    }
}

// ---------------------------------------------------------------------------
// Monster / StrongMade
// ---------------------------------------------------------------------------

#[test]
fn test_monster_dry_balanced_raise_weight() {
    let dist = raw("Balanced", HandBucket::Monster, BoardTexture::Dry, 0.0);
    assert_abs_diff_eq!(dist.get(Action::Raise), 0.8, epsilon = 1e-9);
    assert_eq!(dist.get(Action::Fold), 0.0);
    assert_eq!(dist.normalized().dominant(), Action::Raise);
}

#[test]
fn test_monster_scales_with_aggression() {
    let dist = raw("Aggressive", HandBucket::Monster, BoardTexture::Dry, 0.0);
    assert_abs_diff_eq!(dist.get(Action::Raise), 0.8 * 1.4, epsilon = 1e-9);
}

#[test]
fn test_monster_wet_board_raises_more() {
    let dry = raw("Balanced", HandBucket::Monster, BoardTexture::Dry, 0.0);
    let wet = raw("Balanced", HandBucket::Monster, BoardTexture::Wet, 0.0);
    assert!(wet.get(Action::Raise) > dry.get(Action::Raise));
    assert_abs_diff_eq!(wet.get(Action::Raise), 0.88, epsilon = 1e-9);
}

#[test]
fn test_trapping_monster_slow_plays() {
    let dist = raw("Trapping", HandBucket::Monster, BoardTexture::Dry, 0.0).normalized();
    assert_eq!(dist.dominant(), Action::Call);
    assert!(dist.get(Action::Raise) < 0.2);
}

#[test]
fn test_strong_made_split() {
    let dist = raw("Balanced", HandBucket::StrongMade, BoardTexture::Dry, 0.3);
    assert_abs_diff_eq!(dist.get(Action::Raise), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(dist.get(Action::Call), 0.4, epsilon = 1e-9);
    assert_eq!(dist.get(Action::Fold), 0.0);
}

// ---------------------------------------------------------------------------
// MarginalMade
// ---------------------------------------------------------------------------

#[test]
fn test_marginal_good_odds_calls() {
    let dist = raw("Balanced", HandBucket::MarginalMade, BoardTexture::Dry, 0.2).normalized();
    assert_eq!(dist.dominant(), Action::Call);
}

#[test]
fn test_marginal_bad_odds_polarized_folds() {
    for name in ["Polarized", "BluffHeavy", "MaximumPressure"] {
        let dist = raw(name, HandBucket::MarginalMade, BoardTexture::Dry, 0.4).normalized();
        assert_eq!(dist.dominant(), Action::Fold, "{}", name);
        assert!(dist.get(Action::Raise) > 0.0);
    }
}

#[test]
fn test_marginal_bad_odds_linear_call_fold() {
    let dist = raw("Linear", HandBucket::MarginalMade, BoardTexture::Dry, 0.4);
    assert_eq!(dist.get(Action::Raise), 0.0);
    assert!(dist.get(Action::Call) > dist.get(Action::Fold));
    assert!(dist.get(Action::Fold) > 0.3);
}

// ---------------------------------------------------------------------------
// Draws
// ---------------------------------------------------------------------------

#[test]
fn test_strong_draw_balanced() {
    let dist = raw("Balanced", HandBucket::StrongDraw, BoardTexture::Dry, 0.3);
    assert_abs_diff_eq!(dist.get(Action::Raise), 0.35, epsilon = 1e-9);
    assert_abs_diff_eq!(dist.get(Action::Call), 0.45 * 0.65, epsilon = 1e-9);
    assert_eq!(dist.normalized().dominant(), Action::Raise);
}

#[test]
fn test_bluff_heavy_boosts_draws() {
    let balanced = raw("Balanced", HandBucket::StrongDraw, BoardTexture::Dry, 0.3);
    let bluffy = raw("BluffHeavy", HandBucket::StrongDraw, BoardTexture::Dry, 0.3);
    assert!(bluffy.get(Action::Raise) > balanced.get(Action::Raise));
}

#[test]
fn test_draw_keeps_passive_mass() {
    let dist = raw("MaximumPressure", HandBucket::StrongDraw, BoardTexture::Wet, 0.3);
    assert!(dist.get(Action::Raise) > 0.6);
    assert!(dist.get(Action::Call) > 0.0);
    assert!(dist.get(Action::Fold) > 0.0);
}

#[test]
fn test_weak_draw_less_aggressive() {
    let strong = raw("Balanced", HandBucket::StrongDraw, BoardTexture::Dry, 0.3).normalized();
    let weak = raw("Balanced", HandBucket::WeakDraw, BoardTexture::Dry, 0.3).normalized();
    assert!(weak.get(Action::Raise) < strong.get(Action::Raise));
    assert!(weak.get(Action::Fold) > strong.get(Action::Fold));
}

// ---------------------------------------------------------------------------
// Trash
// ---------------------------------------------------------------------------

#[test]
fn test_trash_never_bluffs_for_linear_profiles() {
    let p = profile("Balanced");
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let dist = raw_distribution(p, HandBucket::Trash, BoardTexture::Dry, 0.3, &mut rng);
        assert_eq!(dist.get(Action::Raise), 0.0);
        assert_eq!(dist.get(Action::Fold), 0.6);
    }
}

#[test]
fn test_trash_bluff_gate_for_polarized() {
    let p = profile("Polarized");
    let mut rng = StdRng::seed_from_u64(12);
    let runs = 4000;
    let mut bluffs = 0;
    for _ in 0..runs {
        let dist = raw_distribution(p, HandBucket::Trash, BoardTexture::Dry, 0.3, &mut rng);
        let raise = dist.get(Action::Raise);
        if raise > 0.0 {
            bluffs += 1;
            assert!((0.05..=0.3).contains(&raise));
        }
    }
    let freq = bluffs as f64 / runs as f64;
    assert!(freq > 0.1 && freq < 0.2, "bluff gate fired {:.3}", freq);
}

// ---------------------------------------------------------------------------
// Profile scalars
// ---------------------------------------------------------------------------

#[test]
fn test_profile_scalars() {
    let s = ProfileScalars::from_profile(profile("MaximumPressure"));
    assert!(s.polarized);
    assert_abs_diff_eq!(s.aggression, 1.6, epsilon = 1e-9);

    let s = ProfileScalars::from_profile(profile("Tight"));
    assert!(!s.polarized);
    assert_eq!(s.archetype, Archetype::Tight);
}
