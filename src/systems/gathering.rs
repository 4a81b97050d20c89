//! Gathering from sources (tree, well, mine, ...): sample a quantity and add
//! it to an inventory.

use std::fmt::Debug;

use rand_core::RngCore;
use tracing::trace;

use crate::error::{IdleError, IdleResult};
use crate::inventory::{Inventory, Item, Quantity};
use crate::mechanics::QuantityProvider;
use crate::symbol::Symbol;

#[derive(Clone, Debug, PartialEq)]
pub struct SourceRecipe<K = Symbol> {
    pub output: K,
    pub quantity: QuantityProvider,
    pub source: Symbol,
    pub time: f64,
}

impl<K: Copy + Eq + Debug> SourceRecipe<K> {
    pub fn new(output: K, quantity: QuantityProvider, source: Symbol, time: f64) -> IdleResult<Self> {
        quantity.validate()?;
        if !time.is_finite() || time < 0.0 {
            return Err(IdleError::InvalidRecipe(format!("time {time} is not a valid duration")));
        }
        Ok(Self { output, quantity, source, time })
    }

    pub fn for_source(recipes: &[SourceRecipe<K>], source: Symbol) -> impl Iterator<Item = &SourceRecipe<K>> {
        recipes.iter().filter(move |r| r.source == source)
    }

    /// One emission: samples the provider and adds the result.
    ///
    /// Returns the sampled amount. A non-positive sample adds nothing.
    pub fn harvest<R: RngCore + ?Sized>(&self, rng: &mut R, inventory: &mut Inventory<K>) -> IdleResult<Quantity> {
        let amount = self.quantity.sample(rng)?;
        inventory.add_one(Item::new(self.output, amount));
        trace!(
            target: "idle_craft::gathering",
            output = ?self.output,
            source = %self.source,
            amount,
            "harvested"
        );
        Ok(amount)
    }
}
