/// Stochastic mechanics: bounded integers and weighted picks.
/// Helpers take any `rand_core::RngCore`; `seeded` builds the house
/// `bevy_prng::WyRand` from a `u64` so runs can be replayed.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use tracing::trace;

use crate::error::{IdleError, IdleResult};

/// WyRand seeded from `seed`.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform in [0, 1) from the top 53 bits of a `u64`.
#[inline]
pub fn unit01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Uniform integer in [1, max].
#[inline]
pub fn random_number<R: RngCore + ?Sized>(rng: &mut R, max: u32) -> IdleResult<u32> {
    if max == 0 {
        return Err(IdleError::EmptyRange);
    }
    let k = (unit01(rng) * f64::from(max)).floor() as u32;
    Ok(k.min(max - 1) + 1)
}

/// Validates a candidate count against its weights and returns their sum.
pub(crate) fn check_weights(candidates: usize, weights: &[f64]) -> IdleResult<f64> {
    if candidates == 0 {
        return Err(IdleError::NoCandidates);
    }
    if candidates != weights.len() {
        return Err(IdleError::LengthMismatch { candidates, weights: weights.len() });
    }
    if let Some(index) = weights.iter().position(|w| !w.is_finite() || *w < 0.0) {
        return Err(IdleError::InvalidWeight { index });
    }
    let total: f64 = weights.iter().sum();
    if !total.is_finite() {
        return Err(IdleError::WeightOverflow);
    }
    if total <= 0.0 {
        return Err(IdleError::ZeroTotalWeight);
    }
    Ok(total)
}

/// Picks one candidate with probability proportional to its weight.
///
/// Draws `u * Σw` and walks the candidates in order, subtracting each weight;
/// the first positive-weight candidate that brings the draw to `<= 0` wins.
pub fn weighted_random_choice<'a, T, R: RngCore + ?Sized>(
    rng: &mut R,
    candidates: &'a [T],
    weights: &[f64],
) -> IdleResult<&'a T> {
    let total = check_weights(candidates.len(), weights)?;

    let mut choice = unit01(rng) * total;
    let mut last_live = 0;
    for (i, w) in weights.iter().enumerate() {
        if *w <= 0.0 {
            continue;
        }
        last_live = i;
        choice -= w;
        if choice <= 0.0 {
            return Ok(&candidates[i]);
        }
    }
    // float residue after the last subtraction
    trace!(target: "idle_craft::stoch", residue = choice, "weighted choice fell through");
    Ok(&candidates[last_live])
}
