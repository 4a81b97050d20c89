//! quantity: how much a source yields per emission.
//! Fixed(n) | Random(max) | Weighted(values, weights), all sampled through one call.

use rand_core::RngCore;

use crate::error::{IdleError, IdleResult};
use crate::inventory::Quantity;
use crate::mechanics::stoch;

/// Returns `amount` unchanged; the fixed member of the provider family.
#[inline]
pub fn fixed_number<T>(amount: T) -> T {
    amount
}

/// A source of quantities.
#[derive(Clone, Debug, PartialEq)]
pub enum QuantityProvider {
    /// Always the same amount.
    Fixed(Quantity),
    /// Uniform in `[1, max]`.
    Random(u32),
    /// One of `values`, picked with probability proportional to `weights`.
    Weighted { values: Vec<Quantity>, weights: Vec<f64> },
}

impl QuantityProvider {
    /// Checks the provider can be sampled without error.
    pub fn validate(&self) -> IdleResult<()> {
        match self {
            Self::Fixed(_) => Ok(()),
            Self::Random(0) => Err(IdleError::EmptyRange),
            Self::Random(_) => Ok(()),
            Self::Weighted { values, weights } => {
                stoch::check_weights(values.len(), weights).map(|_| ())
            }
        }
    }

    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> IdleResult<Quantity> {
        match self {
            Self::Fixed(n) => Ok(fixed_number(*n)),
            Self::Random(max) => stoch::random_number(rng, *max).map(Quantity::from),
            Self::Weighted { values, weights } => {
                stoch::weighted_random_choice(rng, values.as_slice(), weights).copied()
            }
        }
    }
}
