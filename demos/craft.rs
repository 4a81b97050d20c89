// demos/craft.rs
// Run with:
//   RUST_LOG=idle_craft=debug cargo run --example craft

use idle_craft::mechanics::{seeded, CostCurve, Generator, QuantityProvider};
use idle_craft::systems::crafting::{craft, missing_inputs, Recipe};
use idle_craft::systems::gathering::SourceRecipe;
use idle_craft::{IdleResult, Inventory, Item, SymbolTable};
use tracing_subscriber::EnvFilter;

fn main() -> IdleResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init();

    // Kinds, converters and sources for this little world
    let mut sym = SymbolTable::new();
    let water = sym.intern("Water");
    let berry = sym.intern("Berry");
    let potion = sym.intern("Health Potion");
    let lumber = sym.intern("Lumber");
    let planks = sym.intern("Planks");
    let (alchemist, carpenter) = (sym.intern("Alchemist"), sym.intern("Carpenter"));
    let (tree, well, shrub) = (sym.intern("Tree"), sym.intern("Well"), sym.intern("Shrub"));

    let sources = vec![
        SourceRecipe::new(lumber, QuantityProvider::Random(3), tree, 2.0)?,
        SourceRecipe::new(water, QuantityProvider::Fixed(1), well, 1.5)?,
        SourceRecipe::new(
            berry,
            QuantityProvider::Weighted { values: vec![5, 4, 3, 2, 1], weights: vec![1.0, 4.0, 10.0, 10.0, 75.0] },
            shrub,
            1.0,
        )?,
    ];
    let recipes = vec![
        Recipe::new(vec![Item::new(water, 1), Item::new(berry, 2)], Item::new(potion, 1), alchemist, 4.0)?,
        Recipe::new(vec![Item::new(lumber, 1)], Item::new(planks, 4), carpenter, 2.0)?,
    ];

    let mut rng = seeded(42);
    let mut inv = Inventory::new();

    for tick in 1..=5 {
        for src in &sources {
            src.harvest(&mut rng, &mut inv)?;
        }
        for recipe in &recipes {
            if !craft(recipe, &mut inv) {
                let short: Vec<String> = missing_inputs(recipe, &inv)
                    .iter()
                    .map(|it| format!("{} x{}", sym.name(it.kind).unwrap_or("?"), it.quantity))
                    .collect();
                println!("tick {tick}: cannot craft {}, short {short:?}", sym.name(recipe.output.kind).unwrap_or("?"));
            }
        }
    }

    println!("== Inventory ==");
    for it in &inv {
        println!("{:>14} x{}", sym.name(it.kind).unwrap_or("?"), it.quantity);
    }

    let curve = CostCurve::default();
    let generator = Generator::default();
    println!("== Generators ==");
    for owned in [0, 1, 10, 25] {
        println!("owned {owned:>2}: next costs {:>8.2}, yields {:>6.2}/tick", curve.cost_at(owned), generator.rate(owned));
    }
    Ok(())
}
