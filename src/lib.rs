/*!
`idle_craft` — inventory and number helpers for incremental/idle games.

What it does
- Keeps an [`Inventory`] of typed item quantities: add, consume, get, filter,
  has, clear. Entries are unique per kind and always strictly positive; an
  entry that reaches zero disappears.
- Prices and yields: `production_rate = base × owned × multiplier`,
  `next_cost = base × growth^owned` rounded to the cent.
- Rolls: `random_number` in `[1, max]`, `weighted_random_choice` by linear
  scan, and a `QuantityProvider` (fixed / random / weighted) over them.
- Interns item, converter and source names into identity [`Symbol`]s.

Systems (feature-gated)
- `system-crafting`: `Recipe`, `can_craft`, `craft` (check every input, then
  commit), `missing_inputs`.
- `system-gathering`: `SourceRecipe::harvest` samples a provider into an
  inventory.
- `genre-idle` enables both (default).

How to use (call surface only)
- Intern kinds once: `let lumber = symbols.intern("Lumber");`.
- Build an inventory: `Inventory::from_items([Item::new(lumber, 5)])`.
- Pass your own RNG (`rand_core::RngCore`) to the roll helpers, or
  `mechanics::seeded(seed)` for a replayable WyRand.

What it does NOT do
- No scheduler, timers, persistence, networking or threads. Recipe and source
  `time` values are carried as data for the caller's own loop.
*/

pub mod error;
pub mod inventory;
pub mod mechanics;
pub mod symbol;
pub mod systems;

pub use error::{IdleError, IdleResult};
pub use inventory::{Inventory, Item, Quantity};
pub use symbol::{Symbol, SymbolTable};
