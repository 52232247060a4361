use crate::bucket::HandBucket;

pub const STRONG_SCALE: f64 = 0.75;
pub const WEAK_SCALE: f64 = 0.4;

/// Pot fraction used for a raise with this bucket.
pub fn raise_scale(bucket: HandBucket) -> f64 {
    if bucket >= HandBucket::StrongMade {
        STRONG_SCALE
    } else {
        WEAK_SCALE
    }
}

/// Chips a raise puts in: pot * scale * aggression + call cost, capped at the stack.
pub fn size_raise(pot: u32, call_cost: u32, bucket: HandBucket, aggression: f64, stack: u32) -> u32 {
    let aggression = if aggression.is_finite() { aggression.max(0.0) } else { 1.0 };
    let raw = pot as f64 * raise_scale(bucket) * aggression + call_cost as f64;
    clamp_to_stack(raw, stack)
}

/// Round a chip amount and cap it at the stack.
pub fn clamp_to_stack(amount: f64, stack: u32) -> u32 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }
    amount.round().min(stack as f64) as u32
}
