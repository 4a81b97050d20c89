//! Crafting against an [`Inventory`]: check every input, then commit.
//!
//! A recipe is craftable iff every input passes `has_quantity`. `craft` never
//! consumes partially; either all inputs go and the output arrives, or the
//! inventory is left as it was.

use std::fmt::Debug;

use tracing::debug;

use crate::error::{IdleError, IdleResult};
use crate::inventory::{Inventory, Item};
use crate::symbol::Symbol;

#[derive(Clone, Debug, PartialEq)]
pub struct Recipe<K = Symbol> {
    pub inputs: Vec<Item<K>>,
    pub output: Item<K>,
    pub converter: Symbol,
    pub time: f64, // seconds, carried as data
}

impl<K: Copy + Eq + Debug> Recipe<K> {
    /// Builds a recipe, rejecting empty inputs, non-positive quantities and
    /// negative or non-finite times.
    pub fn new(inputs: Vec<Item<K>>, output: Item<K>, converter: Symbol, time: f64) -> IdleResult<Self> {
        if inputs.is_empty() {
            return Err(IdleError::InvalidRecipe("recipe needs at least one input".to_owned()));
        }
        if let Some(bad) = inputs.iter().chain(std::iter::once(&output)).find(|it| it.quantity <= 0) {
            return Err(IdleError::InvalidRecipe(format!(
                "quantity {} for {:?} must be positive",
                bad.quantity, bad.kind
            )));
        }
        if !time.is_finite() || time < 0.0 {
            return Err(IdleError::InvalidRecipe(format!("time {time} is not a valid duration")));
        }
        Ok(Self { inputs, output, converter, time })
    }

    /// Recipes run at `converter`, in table order.
    pub fn for_converter(recipes: &[Recipe<K>], converter: Symbol) -> impl Iterator<Item = &Recipe<K>> {
        recipes.iter().filter(move |r| r.converter == converter)
    }

    /// Inputs with repeated kinds folded together.
    fn requirements(&self) -> Inventory<K> {
        Inventory::from_items(self.inputs.iter().copied())
    }
}

pub fn can_craft<K: Copy + Eq + Debug>(recipe: &Recipe<K>, inventory: &Inventory<K>) -> bool {
    recipe.requirements().iter().all(|need| inventory.has_quantity(need))
}

/// Per input kind, how much more the inventory would need.
pub fn missing_inputs<K: Copy + Eq + Debug>(recipe: &Recipe<K>, inventory: &Inventory<K>) -> Vec<Item<K>> {
    recipe
        .requirements()
        .iter()
        .filter_map(|need| {
            let short = need.quantity - inventory.quantity(need.kind);
            (short > 0).then(|| Item::new(need.kind, short))
        })
        .collect()
}

/// Consumes the inputs and adds the output. Returns `false`, untouched, when
/// any input is short.
pub fn craft<K: Copy + Eq + Debug>(recipe: &Recipe<K>, inventory: &mut Inventory<K>) -> bool {
    let needs = recipe.requirements();
    if !needs.iter().all(|need| inventory.has_quantity(need)) {
        debug!(
            target: "idle_craft::crafting",
            output = ?recipe.output.kind,
            converter = %recipe.converter,
            "recipe not craftable"
        );
        return false;
    }
    for need in &needs {
        inventory.consume(*need);
    }
    inventory.add_one(recipe.output);
    debug!(
        target: "idle_craft::crafting",
        output = ?recipe.output.kind,
        quantity = recipe.output.quantity,
        "crafted"
    );
    true
}
