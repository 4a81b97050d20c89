#[cfg(feature="system-crafting")]  pub mod crafting;
#[cfg(feature="system-gathering")] pub mod gathering;
