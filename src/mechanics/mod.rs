pub mod econ;
pub mod quantity;
pub mod stoch;

pub use econ::*;
pub use quantity::*;
pub use stoch::*;
